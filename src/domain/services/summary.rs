use crate::domain::models::{
    contribution::{round_amount, ContributionRecord},
    group::{Group, MemberRecord},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
pub struct MemberView {
    pub user_id: i64,
    pub full_name: String,
    pub phone: String,
    pub role: String,
    pub joined_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct TransactionView {
    pub user_id: i64,
    pub member_name: String,
    pub amount: f64,
    pub contribution_date: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct GroupSummary {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
    pub members: Vec<MemberView>,
    /// Member display name -> summed contribution amount for this group.
    pub contribution_totals: BTreeMap<String, f64>,
    /// Individual contributions, newest first.
    pub transactions: Vec<TransactionView>,
}

/// Membership rows with their derived role. Role is never stored: `admin`
/// iff the member created the group.
pub fn member_views(group: &Group, members: Vec<MemberRecord>) -> Vec<MemberView> {
    members
        .into_iter()
        .map(|m| MemberView {
            role: if m.user_id == group.created_by { "admin" } else { "member" }.to_string(),
            user_id: m.user_id,
            full_name: m.full_name,
            phone: m.phone,
            joined_at: m.joined_at,
        })
        .collect()
}

/// Shapes one group for the "list my groups" and group-detail views.
pub fn summarize(
    group: &Group,
    members: Vec<MemberRecord>,
    contributions: Vec<ContributionRecord>,
) -> GroupSummary {
    let members = member_views(group, members);

    let mut contribution_totals: BTreeMap<String, f64> = BTreeMap::new();
    for c in &contributions {
        *contribution_totals.entry(c.full_name.clone()).or_insert(0.0) += c.amount;
    }
    for total in contribution_totals.values_mut() {
        *total = round_amount(*total);
    }

    let mut transactions: Vec<TransactionView> = contributions
        .into_iter()
        .map(|c| TransactionView {
            user_id: c.user_id,
            member_name: c.full_name,
            amount: c.amount,
            contribution_date: c.contribution_date,
        })
        .collect();
    transactions.sort_by(|a, b| b.contribution_date.cmp(&a.contribution_date));

    GroupSummary {
        id: group.id,
        name: group.name.clone(),
        description: group.description.clone(),
        created_by: group.created_by,
        created_at: group.created_at,
        members,
        contribution_totals,
        transactions,
    }
}

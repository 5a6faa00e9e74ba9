use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Group {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct GroupMember {
    pub id: i64,
    pub group_id: i64,
    pub user_id: i64,
    pub joined_at: DateTime<Utc>,
}

/// A membership row joined with the member's user record.
#[derive(Debug, Serialize, FromRow, Clone)]
pub struct MemberRecord {
    pub user_id: i64,
    pub full_name: String,
    pub phone: String,
    pub joined_at: DateTime<Utc>,
}

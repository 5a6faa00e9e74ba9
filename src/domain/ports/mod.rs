use crate::domain::models::{
    user::User,
    group::{Group, GroupMember, MemberRecord},
    meeting::Meeting,
    contribution::{Contribution, ContributionRecord},
    poll::{Poll, PollVote, VoteTally},
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, external_id: &str, full_name: &str, phone: &str) -> Result<User, AppError>;
    async fn find_by_external_id(&self, external_id: &str) -> Result<Option<User>, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;
    /// Case-insensitive substring match on full name or phone.
    async fn search(&self, query: &str, limit: i64) -> Result<Vec<User>, AppError>;
    async fn list_not_in_group(&self, group_id: i64) -> Result<Vec<User>, AppError>;
}

#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// Creates the group and the creator's membership row in one transaction.
    async fn create_with_creator(&self, name: &str, description: &str, creator_id: i64) -> Result<Group, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Group>, AppError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Group>, AppError>;
    async fn list_for_user(&self, user_id: i64) -> Result<Vec<Group>, AppError>;
    /// Cascades to members, meetings, contributions, polls and their votes.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    async fn is_member(&self, group_id: i64, user_id: i64) -> Result<bool, AppError>;
    async fn add_member(&self, group_id: i64, user_id: i64) -> Result<GroupMember, AppError>;
    async fn remove_member(&self, group_id: i64, user_id: i64) -> Result<(), AppError>;
    async fn list_members(&self, group_id: i64) -> Result<Vec<MemberRecord>, AppError>;

    async fn create_meeting(&self, group_id: i64, topic: &str, meeting_datetime: DateTime<Utc>) -> Result<Meeting, AppError>;
    async fn list_meetings(&self, group_id: i64) -> Result<Vec<Meeting>, AppError>;

    async fn create_contribution(&self, group_id: i64, user_id: i64, amount: f64) -> Result<Contribution, AppError>;
    /// Joined with contributor names, newest first.
    async fn list_contributions(&self, group_id: i64) -> Result<Vec<ContributionRecord>, AppError>;
}

#[async_trait]
pub trait PollRepository: Send + Sync {
    async fn create(&self, group_id: i64, question: &str, created_by: i64) -> Result<Poll, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Poll>, AppError>;
    async fn create_vote(&self, poll_id: i64, user_id: i64, choice: bool) -> Result<PollVote, AppError>;
    async fn find_vote(&self, poll_id: i64, user_id: i64) -> Result<Option<PollVote>, AppError>;
    async fn tally(&self, poll_id: i64) -> Result<VoteTally, AppError>;
}

/// Maps an inbound bearer credential to an external identity.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn verify(&self, credential: &str) -> Result<String, AppError>;
}

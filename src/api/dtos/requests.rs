use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct RegisterUserRequest {
    pub external_id: String,
    pub full_name: String,
    pub phone: String,
}

#[derive(Deserialize)]
pub struct CreateGroupRequest {
    pub name: String,
    pub description: String,
}

#[derive(Deserialize)]
pub struct AddMemberRequest {
    pub user_id: i64,
}

#[derive(Deserialize)]
pub struct RecordContributionRequest {
    pub amount: f64,
}

#[derive(Deserialize)]
pub struct ScheduleMeetingRequest {
    pub topic: String,
    pub meeting_datetime: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct CreatePollRequest {
    pub group_id: i64,
    pub question: String,
}

#[derive(Deserialize)]
pub struct CastVoteRequest {
    pub choice: bool,
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub query: String,
}

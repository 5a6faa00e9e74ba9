use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Meeting {
    pub id: i64,
    pub group_id: i64,
    pub topic: String,
    pub meeting_datetime: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

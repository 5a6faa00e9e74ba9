use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct User {
    pub id: i64,
    pub external_id: String,
    pub full_name: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

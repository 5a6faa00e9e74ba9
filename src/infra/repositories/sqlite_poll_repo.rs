use crate::domain::{
    models::poll::{Poll, PollVote, VoteTally},
    ports::PollRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

pub struct SqlitePollRepo {
    pool: SqlitePool,
}

impl SqlitePollRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PollRepository for SqlitePollRepo {
    async fn create(&self, group_id: i64, question: &str, created_by: i64) -> Result<Poll, AppError> {
        sqlx::query_as::<_, Poll>(
            "INSERT INTO polls (group_id, question, created_by, created_at) VALUES (?, ?, ?, ?) RETURNING id, group_id, question, created_by, created_at",
        )
            .bind(group_id)
            .bind(question)
            .bind(created_by)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Poll>, AppError> {
        sqlx::query_as::<_, Poll>(
            "SELECT id, group_id, question, created_by, created_at FROM polls WHERE id = ?",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn create_vote(&self, poll_id: i64, user_id: i64, choice: bool) -> Result<PollVote, AppError> {
        sqlx::query_as::<_, PollVote>(
            "INSERT INTO poll_votes (poll_id, user_id, choice, voted_at) VALUES (?, ?, ?, ?) RETURNING id, poll_id, user_id, choice, voted_at",
        )
            .bind(poll_id)
            .bind(user_id)
            .bind(choice)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_vote(&self, poll_id: i64, user_id: i64) -> Result<Option<PollVote>, AppError> {
        sqlx::query_as::<_, PollVote>(
            "SELECT id, poll_id, user_id, choice, voted_at FROM poll_votes WHERE poll_id = ? AND user_id = ?",
        )
            .bind(poll_id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn tally(&self, poll_id: i64) -> Result<VoteTally, AppError> {
        sqlx::query_as::<_, VoteTally>(
            "SELECT COUNT(*) AS total, COALESCE(SUM(CASE WHEN choice THEN 1 ELSE 0 END), 0) AS yes FROM poll_votes WHERE poll_id = ?",
        )
            .bind(poll_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}

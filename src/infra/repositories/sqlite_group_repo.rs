use crate::domain::{
    models::{
        contribution::{Contribution, ContributionRecord},
        group::{Group, GroupMember, MemberRecord},
        meeting::Meeting,
    },
    ports::GroupRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::error;

pub struct SqliteGroupRepo {
    pool: SqlitePool,
}

impl SqliteGroupRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GroupRepository for SqliteGroupRepo {
    async fn create_with_creator(&self, name: &str, description: &str, creator_id: i64) -> Result<Group, AppError> {
        // Group row and creator membership commit or roll back together.
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let group = sqlx::query_as::<_, Group>(
            "INSERT INTO groups (name, description, created_by, created_at) VALUES (?, ?, ?, ?) RETURNING id, name, description, created_by, created_at",
        )
            .bind(name)
            .bind(description)
            .bind(creator_id)
            .bind(Utc::now())
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        sqlx::query("INSERT INTO group_members (group_id, user_id, joined_at) VALUES (?, ?, ?)")
            .bind(group.id)
            .bind(creator_id)
            .bind(Utc::now())
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(group)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Group>, AppError> {
        sqlx::query_as::<_, Group>(
            "SELECT id, name, description, created_by, created_at FROM groups WHERE id = ?",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Group>, AppError> {
        sqlx::query_as::<_, Group>(
            "SELECT id, name, description, created_by, created_at FROM groups WHERE name = ?",
        )
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_for_user(&self, user_id: i64) -> Result<Vec<Group>, AppError> {
        sqlx::query_as::<_, Group>(
            "SELECT g.id, g.name, g.description, g.created_by, g.created_at FROM groups g JOIN group_members gm ON gm.group_id = g.id WHERE gm.user_id = ? ORDER BY g.created_at ASC",
        )
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        // Dependent rows go via ON DELETE CASCADE (foreign_keys pragma is on).
        sqlx::query("DELETE FROM groups WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("SQLite group deletion failed: {:?}", e);
                AppError::Database(e)
            })?;
        Ok(())
    }

    async fn is_member(&self, group_id: i64, user_id: i64) -> Result<bool, AppError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM group_members WHERE group_id = ? AND user_id = ?",
        )
            .bind(group_id)
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(count > 0)
    }

    async fn add_member(&self, group_id: i64, user_id: i64) -> Result<GroupMember, AppError> {
        sqlx::query_as::<_, GroupMember>(
            "INSERT INTO group_members (group_id, user_id, joined_at) VALUES (?, ?, ?) RETURNING id, group_id, user_id, joined_at",
        )
            .bind(group_id)
            .bind(user_id)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn remove_member(&self, group_id: i64, user_id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM group_members WHERE group_id = ? AND user_id = ?")
            .bind(group_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }

    async fn list_members(&self, group_id: i64) -> Result<Vec<MemberRecord>, AppError> {
        sqlx::query_as::<_, MemberRecord>(
            "SELECT u.id AS user_id, u.full_name, u.phone, gm.joined_at FROM group_members gm JOIN users u ON u.id = gm.user_id WHERE gm.group_id = ? ORDER BY gm.joined_at ASC, u.id ASC",
        )
            .bind(group_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn create_meeting(&self, group_id: i64, topic: &str, meeting_datetime: DateTime<Utc>) -> Result<Meeting, AppError> {
        sqlx::query_as::<_, Meeting>(
            "INSERT INTO meetings (group_id, topic, meeting_datetime, created_at) VALUES (?, ?, ?, ?) RETURNING id, group_id, topic, meeting_datetime, created_at",
        )
            .bind(group_id)
            .bind(topic)
            .bind(meeting_datetime)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_meetings(&self, group_id: i64) -> Result<Vec<Meeting>, AppError> {
        sqlx::query_as::<_, Meeting>(
            "SELECT id, group_id, topic, meeting_datetime, created_at FROM meetings WHERE group_id = ? ORDER BY meeting_datetime ASC",
        )
            .bind(group_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn create_contribution(&self, group_id: i64, user_id: i64, amount: f64) -> Result<Contribution, AppError> {
        sqlx::query_as::<_, Contribution>(
            "INSERT INTO contributions (group_id, user_id, amount, contribution_date) VALUES (?, ?, ?, ?) RETURNING id, group_id, user_id, amount, contribution_date",
        )
            .bind(group_id)
            .bind(user_id)
            .bind(amount)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_contributions(&self, group_id: i64) -> Result<Vec<ContributionRecord>, AppError> {
        sqlx::query_as::<_, ContributionRecord>(
            "SELECT c.id, c.user_id, u.full_name, c.amount, c.contribution_date FROM contributions c JOIN users u ON u.id = c.user_id WHERE c.group_id = ? ORDER BY c.contribution_date DESC, c.id DESC",
        )
            .bind(group_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}

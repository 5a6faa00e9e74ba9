use crate::domain::{models::user::User, ports::UserRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

pub struct SqliteUserRepo {
    pool: SqlitePool,
}

impl SqliteUserRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepo {
    async fn create(&self, external_id: &str, full_name: &str, phone: &str) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (external_id, full_name, phone, created_at) VALUES (?, ?, ?, ?) RETURNING id, external_id, full_name, phone, created_at",
        )
            .bind(external_id)
            .bind(full_name)
            .bind(phone)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_external_id(&self, external_id: &str) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>(
            "SELECT id, external_id, full_name, phone, created_at FROM users WHERE external_id = ?",
        )
            .bind(external_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>(
            "SELECT id, external_id, full_name, phone, created_at FROM users WHERE id = ?",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn search(&self, query: &str, limit: i64) -> Result<Vec<User>, AppError> {
        let pattern = format!("%{}%", query.to_lowercase());
        sqlx::query_as::<_, User>(
            "SELECT id, external_id, full_name, phone, created_at FROM users WHERE lower(full_name) LIKE ? OR lower(phone) LIKE ? ORDER BY full_name ASC LIMIT ?",
        )
            .bind(&pattern)
            .bind(&pattern)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_not_in_group(&self, group_id: i64) -> Result<Vec<User>, AppError> {
        sqlx::query_as::<_, User>(
            "SELECT id, external_id, full_name, phone, created_at FROM users WHERE id NOT IN (SELECT user_id FROM group_members WHERE group_id = ?) ORDER BY full_name ASC",
        )
            .bind(group_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}

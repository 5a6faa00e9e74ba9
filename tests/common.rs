use kikundi_backend::{
    api::router::create_router,
    config::{AuthMode, Config},
    infra::identity::direct::DirectVerifier,
    infra::repositories::{
        sqlite_group_repo::SqliteGroupRepo,
        sqlite_poll_repo::SqlitePollRepo,
        sqlite_user_repo::SqliteUserRepo,
    },
    state::AppState,
};
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_open_voting(true).await
    }

    pub async fn with_open_voting(open_poll_voting: bool) -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url,
            port: 0,
            auth_mode: AuthMode::Direct,
            jwks_url: String::new(),
            auth_issuer: String::new(),
            auth_audience: String::new(),
            open_poll_voting,
        };

        let state = Arc::new(AppState {
            config,
            user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
            group_repo: Arc::new(SqliteGroupRepo::new(pool.clone())),
            poll_repo: Arc::new(SqlitePollRepo::new(pool.clone())),
            identity: Arc::new(DirectVerifier),
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        (status, json)
    }

    /// Registers a user and returns its record. The external id doubles as
    /// the bearer credential in direct mode.
    pub async fn register(&self, external_id: &str, full_name: &str, phone: &str) -> Value {
        let (status, body) = self
            .send(
                "POST",
                "/register/",
                None,
                Some(serde_json::json!({
                    "external_id": external_id,
                    "full_name": full_name,
                    "phone": phone
                })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "registration failed: {}", body);
        body
    }

    pub async fn create_group(&self, token: &str, name: &str, description: &str) -> Value {
        let (status, body) = self
            .send(
                "POST",
                "/groups/",
                Some(token),
                Some(serde_json::json!({ "name": name, "description": description })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "group creation failed: {}", body);
        body
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
        let _ = std::fs::remove_file(format!("{}-wal", self.db_filename));
        let _ = std::fs::remove_file(format!("{}-shm", self.db_filename));
    }
}

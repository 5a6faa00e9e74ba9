use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{postgres::{PgPoolOptions, PgConnectOptions}, sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions}};
use sqlx::{PgPool, SqlitePool, ConnectOptions};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::{AuthMode, Config};
use crate::domain::ports::IdentityVerifier;
use crate::state::AppState;
use crate::infra::identity::{direct::DirectVerifier, jwks::JwksVerifier};
use crate::infra::repositories::{
    postgres_group_repo::PostgresGroupRepo, postgres_poll_repo::PostgresPollRepo,
    postgres_user_repo::PostgresUserRepo,
    sqlite_group_repo::SqliteGroupRepo, sqlite_poll_repo::SqlitePollRepo,
    sqlite_user_repo::SqliteUserRepo,
};

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;

    let identity: Arc<dyn IdentityVerifier> = match config.auth_mode {
        AuthMode::Direct => {
            info!("Identity resolution: direct lookup (no token verification)");
            Arc::new(DirectVerifier)
        }
        AuthMode::Jwks => {
            info!("Identity resolution: JWKS token verification via {}", config.jwks_url);
            Arc::new(JwksVerifier::new(
                config.jwks_url.clone(),
                config.auth_issuer.clone(),
                config.auth_audience.clone(),
            ))
        }
    };

    if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
        opts = opts.log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await
            .expect("Failed to connect to Postgres");

        run_postgres_migrations(&pool).await;

        AppState {
            config: config.clone(),
            user_repo: Arc::new(PostgresUserRepo::new(pool.clone())),
            group_repo: Arc::new(PostgresGroupRepo::new(pool.clone())),
            poll_repo: Arc::new(PostgresPollRepo::new(pool)),
            identity,
        }
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        AppState {
            config: config.clone(),
            user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
            group_repo: Arc::new(SqliteGroupRepo::new(pool.clone())),
            poll_repo: Arc::new(SqlitePollRepo::new(pool)),
            identity,
        }
    }
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}

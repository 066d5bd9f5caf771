//! Database connection and repository wiring.

pub mod repository;
pub mod schema;
pub mod sqlite;

use std::str::FromStr;
use std::sync::Arc;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

use crate::config::AppConfig;
use crate::Result;
use sqlite::{
    SqliteChatSessionRepository, SqliteCommentRepository, SqliteConcernRepository,
    SqliteFeedbackRepository, SqliteUserRepository, SqliteVoteRepository,
};

/// Shared SQLite connection pool. Foreign keys are enabled on every
/// connection; the cascade behavior declared in the schema depends on it.
#[derive(Clone)]
pub struct Database {
    pub pool: Arc<SqlitePool>,
}

impl Database {
    pub async fn connect(config: &AppConfig) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(&config.database_url)?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?;

        tracing::info!("connected to database at {}", config.database_url);
        schema::initialize_schema(&pool).await?;

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// In-memory database for tests. A single never-reaped connection keeps
    /// every operation on the same instance.
    pub async fn connect_in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        schema::initialize_schema(&pool).await?;

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    pub async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&*self.pool).await?;
        Ok(())
    }

    pub fn user_repo(&self) -> SqliteUserRepository {
        SqliteUserRepository::new(self.pool.clone())
    }

    pub fn concern_repo(&self) -> SqliteConcernRepository {
        SqliteConcernRepository::new(self.pool.clone())
    }

    pub fn vote_repo(&self) -> SqliteVoteRepository {
        SqliteVoteRepository::new(self.pool.clone())
    }

    pub fn comment_repo(&self) -> SqliteCommentRepository {
        SqliteCommentRepository::new(self.pool.clone())
    }

    pub fn chat_session_repo(&self) -> SqliteChatSessionRepository {
        SqliteChatSessionRepository::new(self.pool.clone())
    }

    pub fn feedback_repo(&self) -> SqliteFeedbackRepository {
        SqliteFeedbackRepository::new(self.pool.clone())
    }
}

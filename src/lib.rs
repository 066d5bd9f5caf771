// Library modules for the community concerns tracker
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{AppError, Result};

use std::sync::Arc;

// Application state shared across callers
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub db: db::Database,
    pub user_service: Arc<services::UserService>,
    pub concern_service: Arc<services::ConcernService>,
    pub vote_service: Arc<services::VoteService>,
    pub comment_service: Arc<services::CommentService>,
    pub chat_service: Arc<services::ChatService>,
}

impl AppState {
    pub async fn new(config: AppConfig) -> Result<Self> {
        let db = db::Database::connect(&config).await?;
        Ok(Self::with_database(config, db))
    }

    /// Wire services over an existing database, e.g. an in-memory one in
    /// tests.
    pub fn with_database(config: AppConfig, db: db::Database) -> Self {
        let user_repo = Arc::new(db.user_repo());
        let concern_repo: Arc<dyn db::repository::ConcernRepository> =
            Arc::new(db.concern_repo());
        let vote_repo = Arc::new(db.vote_repo());
        let comment_repo = Arc::new(db.comment_repo());
        let session_repo = Arc::new(db.chat_session_repo());
        let feedback_repo = Arc::new(db.feedback_repo());

        let user_service = Arc::new(services::UserService::new(user_repo));
        let concern_service = Arc::new(services::ConcernService::new(concern_repo.clone()));
        let vote_service = Arc::new(services::VoteService::new(vote_repo, concern_repo.clone()));
        let comment_service = Arc::new(services::CommentService::new(comment_repo, concern_repo));
        let chat_service = Arc::new(services::ChatService::new(session_repo, feedback_repo));

        Self {
            config,
            db,
            user_service,
            concern_service,
            vote_service,
            comment_service,
            chat_service,
        }
    }
}

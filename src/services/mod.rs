pub mod chat_service;
pub mod comment_service;
pub mod concern_service;
pub mod user_service;
pub mod vote_service;

// Re-export services for convenience
pub use chat_service::ChatService;
pub use comment_service::CommentService;
pub use concern_service::ConcernService;
pub use user_service::UserService;
pub use vote_service::VoteService;

use crate::{AppError, Result};

pub(crate) fn require_non_empty(value: &str, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::ValidationError(format!(
            "{} must not be empty",
            field
        )));
    }
    Ok(())
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Free-text comment on a concern. Flat, with no threading or nesting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub user_id: i64,
    pub concern_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub id: i64,
    pub content: String,
    pub user_id: i64,
    pub concern_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            content: comment.content,
            user_id: comment.user_id,
            concern_id: comment.concern_id,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

use std::sync::Arc;

use chrono::Utc;

use crate::db::repository::{CommentRepository, ConcernRepository};
use crate::models::comment::{CommentResponse, CreateCommentRequest};
use crate::models::Comment;
use crate::services::require_non_empty;
use crate::{AppError, Result};

pub struct CommentService {
    comment_repo: Arc<dyn CommentRepository>,
    concern_repo: Arc<dyn ConcernRepository>,
}

impl CommentService {
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        concern_repo: Arc<dyn ConcernRepository>,
    ) -> Self {
        Self {
            comment_repo,
            concern_repo,
        }
    }

    pub async fn add_comment(
        &self,
        user_id: i64,
        concern_id: i64,
        request: CreateCommentRequest,
    ) -> Result<CommentResponse> {
        require_non_empty(&request.content, "content")?;

        self.concern_repo
            .get_concern_by_id(concern_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("concern {} does not exist", concern_id)))?;

        let now = Utc::now();
        let comment = Comment {
            id: 0,
            content: request.content,
            user_id,
            concern_id,
            created_at: now,
            updated_at: now,
        };

        let created = self.comment_repo.create_comment(&comment).await?;
        Ok(CommentResponse::from(created))
    }

    pub async fn edit_comment(&self, comment_id: i64, content: String) -> Result<CommentResponse> {
        require_non_empty(&content, "content")?;

        let mut comment = self
            .comment_repo
            .get_comment_by_id(comment_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("comment {} does not exist", comment_id)))?;

        comment.content = content;
        let updated = self.comment_repo.update_comment(&comment).await?;
        Ok(CommentResponse::from(updated))
    }

    pub async fn list_for_concern(&self, concern_id: i64) -> Result<Vec<CommentResponse>> {
        let comments = self.comment_repo.list_comments_by_concern(concern_id).await?;
        Ok(comments.into_iter().map(CommentResponse::from).collect())
    }

    pub async fn delete_comment(&self, comment_id: i64) -> Result<()> {
        self.comment_repo
            .get_comment_by_id(comment_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("comment {} does not exist", comment_id)))?;

        self.comment_repo.delete_comment(comment_id).await
    }
}

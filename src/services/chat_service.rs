use std::sync::Arc;

use chrono::Utc;

use crate::db::repository::{ChatSessionRepository, FeedbackRepository};
use crate::models::chat_session::RecordExchangeRequest;
use crate::models::feedback::SubmitFeedbackRequest;
use crate::models::{ChatSession, Feedback};
use crate::services::require_non_empty;
use crate::{AppError, Result};

/// Storage for assistant Q&A exchanges and the feedback left on them.
/// Response generation and sentiment classification happen elsewhere;
/// only their results land here.
pub struct ChatService {
    session_repo: Arc<dyn ChatSessionRepository>,
    feedback_repo: Arc<dyn FeedbackRepository>,
}

impl ChatService {
    pub fn new(
        session_repo: Arc<dyn ChatSessionRepository>,
        feedback_repo: Arc<dyn FeedbackRepository>,
    ) -> Self {
        Self {
            session_repo,
            feedback_repo,
        }
    }

    /// Append one question/response pair. Sessions are immutable once
    /// recorded.
    pub async fn record_exchange(
        &self,
        user_id: i64,
        request: RecordExchangeRequest,
    ) -> Result<ChatSession> {
        require_non_empty(&request.question, "question")?;
        require_non_empty(&request.response, "response")?;

        let session = ChatSession {
            id: 0,
            user_id,
            question: request.question,
            response: request.response,
            created_at: Utc::now(),
        };

        self.session_repo.create_session(&session).await
    }

    pub async fn get_session(&self, id: i64) -> Result<ChatSession> {
        self.session_repo
            .get_session_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("chat session {} does not exist", id)))
    }

    pub async fn history(&self, user_id: i64) -> Result<Vec<ChatSession>> {
        self.session_repo.list_sessions_by_user(user_id).await
    }

    /// Delete a session. Feedback referencing it is detached, not deleted.
    pub async fn delete_session(&self, id: i64) -> Result<()> {
        self.session_repo
            .get_session_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("chat session {} does not exist", id)))?;

        self.session_repo.delete_session(id).await
    }

    /// Store feedback on an exchange. The question travels with the
    /// feedback so it stays meaningful after the session is gone.
    pub async fn submit_feedback(
        &self,
        user_id: i64,
        request: SubmitFeedbackRequest,
    ) -> Result<Feedback> {
        require_non_empty(&request.question, "question")?;
        require_non_empty(&request.feedback_text, "feedback_text")?;

        if let Some(session_id) = request.chat_session_id {
            self.session_repo
                .get_session_by_id(session_id)
                .await?
                .ok_or_else(|| {
                    AppError::ValidationError(format!(
                        "chat session {} does not exist",
                        session_id
                    ))
                })?;
        }

        let feedback = Feedback {
            id: 0,
            user_id,
            chat_session_id: request.chat_session_id,
            question: request.question,
            feedback_text: request.feedback_text,
            sentiment: request.sentiment,
            created_at: Utc::now(),
        };

        self.feedback_repo.create_feedback(&feedback).await
    }

    pub async fn feedback_for_user(&self, user_id: i64) -> Result<Vec<Feedback>> {
        self.feedback_repo.list_feedback_by_user(user_id).await
    }

    pub async fn feedback_for_session(&self, chat_session_id: i64) -> Result<Vec<Feedback>> {
        self.feedback_repo
            .list_feedback_by_session(chat_session_id)
            .await
    }
}

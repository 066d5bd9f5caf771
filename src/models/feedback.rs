use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Sentiment;

/// User feedback on a chat exchange. The question is duplicated from the
/// session so the feedback stays meaningful if the session is deleted;
/// `chat_session_id` goes to None when that happens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub id: i64,
    pub user_id: i64,
    pub chat_session_id: Option<i64>,
    pub question: String,
    pub feedback_text: String,
    pub sentiment: Sentiment,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct SubmitFeedbackRequest {
    pub chat_session_id: Option<i64>,
    pub question: String,
    pub feedback_text: String,
    pub sentiment: Sentiment,
}

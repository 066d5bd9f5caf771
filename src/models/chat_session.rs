use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One stored question/answer exchange with the assistant. Rows are
/// append-only and carry no update timestamp.
///
/// `user_id` is a soft reference: deleting the user leaves their sessions
/// in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSession {
    pub id: i64,
    pub user_id: i64,
    pub question: String,
    pub response: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct RecordExchangeRequest {
    pub question: String,
    pub response: String,
}

// Repository trait abstractions for database operations
use async_trait::async_trait;

use crate::models::{ChatSession, Comment, Concern, ConcernStatus, Feedback, User, Vote, VoteTally, VoteType};
use crate::Result;

/// Callers fetch related entities explicitly by foreign key; nothing is
/// lazy-loaded behind the scenes.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user; the returned entity carries the database-assigned id.
    async fn create_user(&self, user: &User) -> Result<User>;
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    /// Persist all mutable fields and refresh updated_at.
    async fn update_user(&self, user: &User) -> Result<User>;
    /// Deletes the user's concerns, votes, comments, and feedback with it.
    /// Chat sessions are left untouched.
    async fn delete_user(&self, id: i64) -> Result<()>;
}

#[async_trait]
pub trait ConcernRepository: Send + Sync {
    async fn create_concern(&self, concern: &Concern) -> Result<Concern>;
    async fn get_concern_by_id(&self, id: i64) -> Result<Option<Concern>>;
    /// Newest first.
    async fn list_concerns(&self, limit: u32, offset: u32) -> Result<Vec<Concern>>;
    async fn list_concerns_by_user(&self, user_id: i64) -> Result<Vec<Concern>>;
    async fn list_concerns_by_status(&self, status: ConcernStatus) -> Result<Vec<Concern>>;
    /// Persist all mutable fields and refresh updated_at.
    async fn update_concern(&self, concern: &Concern) -> Result<Concern>;
    async fn update_status(&self, id: i64, status: ConcernStatus) -> Result<()>;
    /// Deletes the concern's votes and comments with it.
    async fn delete_concern(&self, id: i64) -> Result<()>;
}

#[async_trait]
pub trait VoteRepository: Send + Sync {
    /// Plain insert. A second vote for the same (user, concern) pair fails
    /// with `AppError::Conflict`; callers wanting upsert semantics use
    /// `cast_vote`.
    async fn create_vote(&self, vote: &Vote) -> Result<Vote>;
    async fn get_vote(&self, user_id: i64, concern_id: i64) -> Result<Option<Vote>>;
    /// Insert-or-update in one transaction, keeping the concern's
    /// upvotes/downvotes counters in step with the vote rows.
    async fn cast_vote(&self, user_id: i64, concern_id: i64, vote_type: VoteType) -> Result<Vote>;
    /// Delete the user's vote and decrement the matching counter, in one
    /// transaction. `NotFound` when no vote exists.
    async fn retract_vote(&self, user_id: i64, concern_id: i64) -> Result<()>;
    /// Aggregate directly over the vote rows.
    async fn count_votes(&self, concern_id: i64) -> Result<VoteTally>;
    /// Recount from the vote rows and overwrite the concern's counters.
    async fn sync_vote_counts(&self, concern_id: i64) -> Result<VoteTally>;
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn create_comment(&self, comment: &Comment) -> Result<Comment>;
    async fn get_comment_by_id(&self, id: i64) -> Result<Option<Comment>>;
    /// Creation order.
    async fn list_comments_by_concern(&self, concern_id: i64) -> Result<Vec<Comment>>;
    /// Persist content and refresh updated_at.
    async fn update_comment(&self, comment: &Comment) -> Result<Comment>;
    async fn delete_comment(&self, id: i64) -> Result<()>;
}

#[async_trait]
pub trait ChatSessionRepository: Send + Sync {
    async fn create_session(&self, session: &ChatSession) -> Result<ChatSession>;
    async fn get_session_by_id(&self, id: i64) -> Result<Option<ChatSession>>;
    /// Newest first.
    async fn list_sessions_by_user(&self, user_id: i64) -> Result<Vec<ChatSession>>;
    /// Detaches any feedback referencing the session (chat_session_id set
    /// to NULL), then deletes it, in one transaction.
    async fn delete_session(&self, id: i64) -> Result<()>;
}

#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    async fn create_feedback(&self, feedback: &Feedback) -> Result<Feedback>;
    async fn get_feedback_by_id(&self, id: i64) -> Result<Option<Feedback>>;
    async fn list_feedback_by_user(&self, user_id: i64) -> Result<Vec<Feedback>>;
    async fn list_feedback_by_session(&self, chat_session_id: i64) -> Result<Vec<Feedback>>;
    async fn delete_feedback(&self, id: i64) -> Result<()>;
}

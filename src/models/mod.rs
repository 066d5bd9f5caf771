pub mod chat_session;
pub mod comment;
pub mod concern;
pub mod feedback;
pub mod sentiment;
pub mod user;
pub mod vote;

// Re-export models for convenience
pub use chat_session::ChatSession;
pub use comment::Comment;
pub use concern::{Concern, ConcernStatus, Priority};
pub use feedback::Feedback;
pub use sentiment::Sentiment;
pub use user::User;
pub use vote::{Vote, VoteTally, VoteType};

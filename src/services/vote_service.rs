use std::sync::Arc;

use crate::db::repository::{ConcernRepository, VoteRepository};
use crate::models::vote::CastVoteRequest;
use crate::models::{Vote, VoteTally};
use crate::{AppError, Result};

/// Voting on concerns. The repository keeps the redundant
/// upvotes/downvotes counters in step with the vote rows; this service
/// adds existence checks and exposes the reconciliation path.
pub struct VoteService {
    vote_repo: Arc<dyn VoteRepository>,
    concern_repo: Arc<dyn ConcernRepository>,
}

impl VoteService {
    pub fn new(vote_repo: Arc<dyn VoteRepository>, concern_repo: Arc<dyn ConcernRepository>) -> Self {
        Self {
            vote_repo,
            concern_repo,
        }
    }

    /// Cast or update a vote. Voting the same direction twice is a no-op;
    /// switching direction flips the row and shifts both counters.
    pub async fn cast_vote(&self, user_id: i64, request: CastVoteRequest) -> Result<Vote> {
        self.concern_repo
            .get_concern_by_id(request.concern_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("concern {} does not exist", request.concern_id))
            })?;

        self.vote_repo
            .cast_vote(user_id, request.concern_id, request.vote_type)
            .await
    }

    pub async fn retract_vote(&self, user_id: i64, concern_id: i64) -> Result<()> {
        self.vote_repo.retract_vote(user_id, concern_id).await
    }

    pub async fn get_user_vote(&self, user_id: i64, concern_id: i64) -> Result<Option<Vote>> {
        self.vote_repo.get_vote(user_id, concern_id).await
    }

    /// Aggregate directly over the vote rows, bypassing the counters.
    pub async fn tally(&self, concern_id: i64) -> Result<VoteTally> {
        self.vote_repo.count_votes(concern_id).await
    }

    /// Recount from the vote rows and overwrite the concern's counters.
    /// The counters are redundant with the rows; this is the repair path
    /// for drift introduced outside `cast_vote`/`retract_vote`.
    pub async fn reconcile(&self, concern_id: i64) -> Result<VoteTally> {
        self.vote_repo.sync_vote_counts(concern_id).await
    }
}

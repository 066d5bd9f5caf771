use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::AppError;

/// Direction of a vote on a concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteType {
    Upvote,
    Downvote,
}

impl fmt::Display for VoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoteType::Upvote => write!(f, "upvote"),
            VoteType::Downvote => write!(f, "downvote"),
        }
    }
}

impl FromStr for VoteType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "upvote" => Ok(VoteType::Upvote),
            "downvote" => Ok(VoteType::Downvote),
            _ => Err(AppError::ValidationError(format!("invalid vote type: {}", s))),
        }
    }
}

/// One user's vote on one concern. At most one row exists per
/// (user, concern) pair; re-voting updates the row in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vote {
    pub id: i64,
    pub user_id: i64,
    pub concern_id: i64,
    pub vote_type: VoteType,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CastVoteRequest {
    pub concern_id: i64,
    pub vote_type: VoteType,
}

/// Aggregate counts over the vote rows of a single concern.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct VoteTally {
    pub upvotes: i64,
    pub downvotes: i64,
}

impl VoteTally {
    pub fn score(&self) -> i64 {
        self.upvotes - self.downvotes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vote_type_round_trip() {
        assert_eq!("upvote".parse::<VoteType>().unwrap(), VoteType::Upvote);
        assert_eq!("downvote".parse::<VoteType>().unwrap(), VoteType::Downvote);
        assert_eq!(VoteType::Upvote.to_string(), "upvote");
        assert_eq!(VoteType::Downvote.to_string(), "downvote");
        assert!("sideways".parse::<VoteType>().is_err());
    }

    #[test]
    fn test_tally_score() {
        let tally = VoteTally { upvotes: 4, downvotes: 6 };
        assert_eq!(tally.score(), -2);
    }
}

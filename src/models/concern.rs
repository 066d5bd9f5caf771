use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::AppError;

/// Urgency attached to a concern by its author.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
            Priority::Urgent => write!(f, "urgent"),
        }
    }
}

impl FromStr for Priority {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "urgent" => Ok(Priority::Urgent),
            _ => Err(AppError::ValidationError(format!("invalid priority: {}", s))),
        }
    }
}

/// Workflow state of a concern. No transition restrictions are enforced
/// here; any documented status may be set at any time by calling code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConcernStatus {
    #[default]
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl fmt::Display for ConcernStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConcernStatus::Open => write!(f, "open"),
            ConcernStatus::InProgress => write!(f, "in_progress"),
            ConcernStatus::Resolved => write!(f, "resolved"),
            ConcernStatus::Closed => write!(f, "closed"),
        }
    }
}

impl FromStr for ConcernStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open" => Ok(ConcernStatus::Open),
            "in_progress" => Ok(ConcernStatus::InProgress),
            "resolved" => Ok(ConcernStatus::Resolved),
            "closed" => Ok(ConcernStatus::Closed),
            _ => Err(AppError::ValidationError(format!("invalid status: {}", s))),
        }
    }
}

/// An issue raised by a community member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Concern {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub priority: Priority,
    pub status: ConcernStatus,
    pub upvotes: i64,
    pub downvotes: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Concern {
    /// Derived score, recomputed on access. Never persisted.
    pub fn vote_score(&self) -> i64 {
        self.upvotes - self.downvotes
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateConcernRequest {
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub priority: Option<Priority>,
}

/// Partial update; absent fields keep their stored values.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateConcernRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<ConcernStatus>,
}

#[derive(Debug, Serialize)]
pub struct ConcernResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub priority: Priority,
    pub status: ConcernStatus,
    pub upvotes: i64,
    pub downvotes: i64,
    pub vote_score: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Concern> for ConcernResponse {
    fn from(concern: Concern) -> Self {
        Self {
            id: concern.id,
            vote_score: concern.vote_score(),
            title: concern.title,
            description: concern.description,
            location: concern.location,
            priority: concern.priority,
            status: concern.status,
            upvotes: concern.upvotes,
            downvotes: concern.downvotes,
            user_id: concern.user_id,
            created_at: concern.created_at,
            updated_at: concern.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concern_with_votes(upvotes: i64, downvotes: i64) -> Concern {
        let now = Utc::now();
        Concern {
            id: 1,
            title: "Broken streetlight".to_string(),
            description: "Out since Tuesday".to_string(),
            location: Some("5th and Main".to_string()),
            priority: Priority::default(),
            status: ConcernStatus::default(),
            upvotes,
            downvotes,
            user_id: 1,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_vote_score_is_upvotes_minus_downvotes() {
        assert_eq!(concern_with_votes(0, 0).vote_score(), 0);
        assert_eq!(concern_with_votes(7, 2).vote_score(), 5);
        assert_eq!(concern_with_votes(1, 4).vote_score(), -3);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Priority::default(), Priority::Medium);
        assert_eq!(ConcernStatus::default(), ConcernStatus::Open);
    }

    #[test]
    fn test_priority_round_trip() {
        for p in [Priority::Low, Priority::Medium, Priority::High, Priority::Urgent] {
            assert_eq!(p.to_string().parse::<Priority>().unwrap(), p);
        }
        assert!("critical".parse::<Priority>().is_err());
    }

    #[test]
    fn test_status_round_trip() {
        for s in [
            ConcernStatus::Open,
            ConcernStatus::InProgress,
            ConcernStatus::Resolved,
            ConcernStatus::Closed,
        ] {
            assert_eq!(s.to_string().parse::<ConcernStatus>().unwrap(), s);
        }
        assert!("reopened".parse::<ConcernStatus>().is_err());
    }

    #[test]
    fn test_response_carries_derived_score() {
        let response = ConcernResponse::from(concern_with_votes(3, 1));
        assert_eq!(response.vote_score, 2);
    }
}

use std::sync::Arc;

use chrono::Utc;

use crate::db::repository::ConcernRepository;
use crate::models::concern::{ConcernResponse, CreateConcernRequest, UpdateConcernRequest};
use crate::models::{Concern, ConcernStatus, Priority};
use crate::services::require_non_empty;
use crate::{AppError, Result};

pub struct ConcernService {
    concern_repo: Arc<dyn ConcernRepository>,
}

impl ConcernService {
    pub fn new(concern_repo: Arc<dyn ConcernRepository>) -> Self {
        Self { concern_repo }
    }

    pub async fn create_concern(
        &self,
        user_id: i64,
        request: CreateConcernRequest,
    ) -> Result<ConcernResponse> {
        require_non_empty(&request.title, "title")?;
        require_non_empty(&request.description, "description")?;

        let now = Utc::now();
        let concern = Concern {
            id: 0,
            title: request.title,
            description: request.description,
            location: request.location,
            priority: request.priority.unwrap_or_default(),
            status: ConcernStatus::default(),
            upvotes: 0,
            downvotes: 0,
            user_id,
            created_at: now,
            updated_at: now,
        };

        let created = self.concern_repo.create_concern(&concern).await?;
        tracing::debug!("concern {} created by user {}", created.id, user_id);
        Ok(ConcernResponse::from(created))
    }

    pub async fn get_concern(&self, id: i64) -> Result<ConcernResponse> {
        let concern = self
            .concern_repo
            .get_concern_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("concern {} does not exist", id)))?;
        Ok(ConcernResponse::from(concern))
    }

    pub async fn list_concerns(&self, limit: u32, offset: u32) -> Result<Vec<ConcernResponse>> {
        let concerns = self.concern_repo.list_concerns(limit, offset).await?;
        Ok(concerns.into_iter().map(ConcernResponse::from).collect())
    }

    pub async fn list_concerns_by_user(&self, user_id: i64) -> Result<Vec<ConcernResponse>> {
        let concerns = self.concern_repo.list_concerns_by_user(user_id).await?;
        Ok(concerns.into_iter().map(ConcernResponse::from).collect())
    }

    pub async fn list_concerns_by_status(
        &self,
        status: ConcernStatus,
    ) -> Result<Vec<ConcernResponse>> {
        let concerns = self.concern_repo.list_concerns_by_status(status).await?;
        Ok(concerns.into_iter().map(ConcernResponse::from).collect())
    }

    pub async fn update_concern(
        &self,
        id: i64,
        request: UpdateConcernRequest,
    ) -> Result<ConcernResponse> {
        let mut concern = self
            .concern_repo
            .get_concern_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("concern {} does not exist", id)))?;

        if let Some(title) = request.title {
            require_non_empty(&title, "title")?;
            concern.title = title;
        }
        if let Some(description) = request.description {
            require_non_empty(&description, "description")?;
            concern.description = description;
        }
        if let Some(location) = request.location {
            concern.location = Some(location);
        }
        if let Some(priority) = request.priority {
            concern.priority = priority;
        }
        if let Some(status) = request.status {
            concern.status = status;
        }

        let updated = self.concern_repo.update_concern(&concern).await?;
        Ok(ConcernResponse::from(updated))
    }

    /// Set any documented status. No transition rules are enforced at this
    /// layer; reopening a closed concern is allowed.
    pub async fn update_status(&self, id: i64, status: ConcernStatus) -> Result<()> {
        self.concern_repo.update_status(id, status).await
    }

    pub async fn set_priority(&self, id: i64, priority: Priority) -> Result<ConcernResponse> {
        let mut concern = self
            .concern_repo
            .get_concern_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("concern {} does not exist", id)))?;

        concern.priority = priority;
        let updated = self.concern_repo.update_concern(&concern).await?;
        Ok(ConcernResponse::from(updated))
    }

    /// Removes the concern and, through the schema's cascades, its votes
    /// and comments.
    pub async fn delete_concern(&self, id: i64) -> Result<()> {
        self.concern_repo
            .get_concern_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("concern {} does not exist", id)))?;

        self.concern_repo.delete_concern(id).await
    }
}

use std::sync::Arc;

use crate::db::repository::UserRepository;
use crate::models::user::{CreateUserRequest, UserResponse};
use crate::models::User;
use crate::services::require_non_empty;
use crate::{AppError, Result};

pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Register a new user. The password is hashed before it reaches the
    /// repository; a duplicate email surfaces as `Conflict` from the
    /// unique constraint.
    pub async fn register(&self, request: CreateUserRequest) -> Result<UserResponse> {
        require_non_empty(&request.full_name, "full_name")?;
        require_non_empty(&request.email, "email")?;
        require_non_empty(&request.password, "password")?;
        if !request.email.contains('@') {
            return Err(AppError::ValidationError(
                "email must contain '@'".to_string(),
            ));
        }

        let user = User::new(request.full_name, request.email, &request.password)?;
        let created = self.user_repo.create_user(&user).await?;
        tracing::info!("registered user {}", created.id);
        Ok(UserResponse::from(created))
    }

    /// Fails closed: a missing account and a wrong password produce the
    /// same non-revealing error.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<UserResponse> {
        let user = self
            .user_repo
            .get_user_by_email(email)
            .await?
            .ok_or_else(|| AppError::AuthError("Invalid email or password".to_string()))?;

        if !user.check_password(password) {
            return Err(AppError::AuthError("Invalid email or password".to_string()));
        }

        Ok(UserResponse::from(user))
    }

    pub async fn get_user(&self, user_id: i64) -> Result<UserResponse> {
        let user = self
            .user_repo
            .get_user_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user {} does not exist", user_id)))?;
        Ok(UserResponse::from(user))
    }

    pub async fn change_password(&self, user_id: i64, new_password: &str) -> Result<()> {
        require_non_empty(new_password, "password")?;

        let mut user = self
            .user_repo
            .get_user_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user {} does not exist", user_id)))?;

        user.set_password(new_password)?;
        self.user_repo.update_user(&user).await?;
        Ok(())
    }

    /// Removes the user and, through the schema's cascades, their
    /// concerns, votes, comments, and feedback. Chat sessions remain.
    pub async fn delete_user(&self, user_id: i64) -> Result<()> {
        self.user_repo
            .get_user_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user {} does not exist", user_id)))?;

        self.user_repo.delete_user(user_id).await?;
        tracing::info!("deleted user {}", user_id);
        Ok(())
    }
}

//! User CRUD with cascading deletes.

use std::sync::Arc;

use tracing::info;

use gatepass_core::error::{AppError, ErrorKind};
use gatepass_core::types::UserId;
use gatepass_database::traits::{LogStore, PassStore, UserStore};
use gatepass_entity::user::{CreateUser, UpdateUser, User};

/// Manages user accounts and their dependent records.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User store.
    users: Arc<dyn UserStore>,
    /// Pass store, for cascade deletes.
    passes: Arc<dyn PassStore>,
    /// Log store, for cascade deletes.
    logs: Arc<dyn LogStore>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        users: Arc<dyn UserStore>,
        passes: Arc<dyn PassStore>,
        logs: Arc<dyn LogStore>,
    ) -> Self {
        Self {
            users,
            passes,
            logs,
        }
    }

    /// Lists all users in creation order.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.users.find_all().await
    }

    /// Gets a user by ID.
    pub async fn get_user(&self, id: UserId) -> Result<User, AppError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Creates a new user.
    pub async fn create_user(&self, name: &str, email: &str) -> Result<User, AppError> {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() {
            return Err(AppError::validation("Name cannot be empty"));
        }
        if email.is_empty() {
            return Err(AppError::validation("Email cannot be empty"));
        }

        let user = self
            .users
            .create(&CreateUser {
                name: name.to_string(),
                email: email.to_string(),
            })
            .await?;

        info!(user_id = %user.id, email = %user.email, "User created");

        Ok(user)
    }

    /// Updates a user's name and email.
    pub async fn update_user(
        &self,
        id: UserId,
        name: &str,
        email: &str,
    ) -> Result<User, AppError> {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() {
            return Err(AppError::validation("Name cannot be empty"));
        }
        if email.is_empty() {
            return Err(AppError::validation("Email cannot be empty"));
        }

        let user = self
            .users
            .update(
                id,
                &UpdateUser {
                    name: name.to_string(),
                    email: email.to_string(),
                },
            )
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        info!(user_id = %user.id, "User updated");

        Ok(user)
    }

    /// Deletes a user together with their passes and access logs.
    ///
    /// Dependent records go first so a partial failure never leaves
    /// passes or logs pointing at a missing user. Deleting a user that
    /// is already gone is a no-op; a concurrent delete must not turn
    /// into an error.
    pub async fn delete_user(&self, id: UserId) -> Result<(), AppError> {
        let passes_removed = self.passes.delete_by_user(id).await.map_err(|e| {
            AppError::with_source(ErrorKind::CascadeFailed, "Failed to delete passes for user", e)
        })?;

        let logs_removed = self.logs.delete_by_user(id).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::CascadeFailed,
                "Failed to delete access logs for user",
                e,
            )
        })?;

        let removed = self.users.delete(id).await.map_err(|e| {
            AppError::with_source(ErrorKind::CascadeFailed, "Failed to delete user record", e)
        })?;

        info!(
            user_id = %id,
            passes_removed,
            logs_removed,
            removed,
            "User deleted"
        );

        Ok(())
    }
}

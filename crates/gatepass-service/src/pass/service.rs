//! Pass CRUD with date validation and log cleanup.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use gatepass_core::error::{AppError, ErrorKind};
use gatepass_core::types::{PassId, UserId};
use gatepass_database::traits::{LogStore, PassStore, UserStore};
use gatepass_entity::pass::{CreatePass, Pass, PassWithOwner, UpdatePass};
use gatepass_entity::user::User;

use crate::dates::validate_date_range;

/// Manages time-bounded access passes.
#[derive(Debug, Clone)]
pub struct PassService {
    /// User store, for owner lookups.
    users: Arc<dyn UserStore>,
    /// Pass store.
    passes: Arc<dyn PassStore>,
    /// Log store, for cascade deletes.
    logs: Arc<dyn LogStore>,
}

/// Data backing the pass administration page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PassOverview {
    /// All users, for the owner selector.
    pub users: Vec<User>,
    /// All passes with their owners resolved.
    pub passes: Vec<PassWithOwner>,
}

impl PassService {
    /// Creates a new pass service.
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

    /// Assembles the pass page data.
    pub async fn overview(&self) -> Result<PassOverview, AppError> {
        let (users, passes) =
            tokio::try_join!(self.users.find_all(), self.passes.find_all())?;
        let passes = join_owners(passes, &users);

        Ok(PassOverview { users, passes })
    }

    /// Gets a pass by ID.
    pub async fn get_pass(&self, id: PassId) -> Result<Pass, AppError> {
        self.passes
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Pass not found"))
    }

    /// Issues a new pass for a user.
    ///
    /// Dates arrive as form text and are validated before anything is
    /// persisted. The owner must exist when the pass is issued.
    pub async fn create_pass(
        &self,
        user_id: UserId,
        kind: &str,
        start: &str,
        end: &str,
    ) -> Result<Pass, AppError> {
        let (start_date, end_date) = validate_date_range(start, end)?;

        let kind = kind.trim();
        if kind.is_empty() {
            return Err(AppError::validation("Pass type cannot be empty"));
        }

        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        let pass = self
            .passes
            .create(&CreatePass {
                user_id,
                kind: kind.to_string(),
                start_date,
                end_date,
            })
            .await?;

        info!(pass_id = %pass.id, user_id = %user_id, kind = %pass.kind, "Pass created");

        Ok(pass)
    }

    /// Updates a pass's type and validity window.
    pub async fn update_pass(
        &self,
        id: PassId,
        kind: &str,
        start: &str,
        end: &str,
    ) -> Result<Pass, AppError> {
        let (start_date, end_date) = validate_date_range(start, end)?;

        let kind = kind.trim();
        if kind.is_empty() {
            return Err(AppError::validation("Pass type cannot be empty"));
        }

        let pass = self
            .passes
            .update(
                id,
                &UpdatePass {
                    kind: kind.to_string(),
                    start_date,
                    end_date,
                },
            )
            .await?
            .ok_or_else(|| AppError::not_found("Pass not found"))?;

        info!(pass_id = %pass.id, "Pass updated");

        Ok(pass)
    }

    /// Deletes a pass together with its access logs.
    ///
    /// Logs go first. Re-running the cleanup for a pass that is already
    /// gone removes nothing, so the cascade stays idempotent; the missing
    /// pass itself is still reported as not found.
    pub async fn delete_pass(&self, id: PassId) -> Result<(), AppError> {
        let logs_removed = self.logs.delete_by_pass(id).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::CascadeFailed,
                "Failed to delete access logs for pass",
                e,
            )
        })?;

        let removed = self.passes.delete(id).await?;
        if !removed {
            return Err(AppError::not_found("Pass not found"));
        }

        info!(pass_id = %id, logs_removed, "Pass deleted");

        Ok(())
    }
}

/// Pairs each pass with its owning user.
///
/// A pass whose owner is missing from `users` keeps `None`; the page
/// renders those rather than failing the whole listing.
pub(crate) fn join_owners(passes: Vec<Pass>, users: &[User]) -> Vec<PassWithOwner> {
    let by_id: HashMap<UserId, &User> = users.iter().map(|u| (u.id, u)).collect();

    passes
        .into_iter()
        .map(|pass| {
            let owner = by_id.get(&pass.user_id).map(|u| (*u).clone());
            PassWithOwner { pass, owner }
        })
        .collect()
}

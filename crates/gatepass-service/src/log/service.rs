//! Entry/exit recording against passes.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use gatepass_core::error::AppError;
use gatepass_core::types::PassId;
use gatepass_database::traits::{LogStore, PassStore, UserStore};
use gatepass_entity::log::{AccessLog, CreateLog, LogAction, LogFilter};
use gatepass_entity::pass::PassWithOwner;
use gatepass_entity::user::User;

use crate::pass::service::join_owners;

/// Records and lists entry/exit events.
#[derive(Debug, Clone)]
pub struct LogService {
    /// User store, for name resolution.
    users: Arc<dyn UserStore>,
    /// Pass store, for validity checks.
    passes: Arc<dyn PassStore>,
    /// Log store.
    logs: Arc<dyn LogStore>,
}

/// Data backing the access log page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct LogBoard {
    /// Logs matching the active filter, oldest first.
    pub logs: Vec<AccessLog>,
    /// All users, for name resolution and the filter selector.
    pub users: Vec<User>,
    /// All passes with owners, for the recording form.
    pub passes: Vec<PassWithOwner>,
}

impl LogService {
    /// Creates a new log service.
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

    /// Assembles the log page data for a filter.
    pub async fn overview(&self, filter: &LogFilter) -> Result<LogBoard, AppError> {
        let (logs, users, passes) = tokio::try_join!(
            self.logs.find_filtered(filter),
            self.users.find_all(),
            self.passes.find_all(),
        )?;
        let passes = join_owners(passes, &users);

        Ok(LogBoard {
            logs,
            users,
            passes,
        })
    }

    /// Records an entry or exit against a pass.
    ///
    /// The pass must exist and still be valid at `now`. The log row
    /// copies the pass owner so per-user history survives later pass
    /// edits.
    pub async fn add_from_pass(
        &self,
        pass_id: PassId,
        action: LogAction,
        now: DateTime<Utc>,
    ) -> Result<AccessLog, AppError> {
        let pass = self
            .passes
            .find_by_id(pass_id)
            .await?
            .ok_or_else(|| AppError::not_found("Pass not found"))?;

        if pass.is_expired(now) {
            return Err(AppError::pass_expired(
                "The pass has expired and cannot be used",
            ));
        }

        let log = self
            .logs
            .create(&CreateLog {
                user_id: pass.user_id,
                pass_id: pass.id,
                action,
                timestamp: now,
            })
            .await?;

        info!(log_id = %log.id, pass_id = %pass_id, action = %action, "Access log recorded");

        Ok(log)
    }
}

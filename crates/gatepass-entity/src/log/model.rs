//! Entry/exit log entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use gatepass_core::types::{LogId, PassId, UserId};

use super::action::LogAction;

/// A single recorded entry or exit event.
///
/// Both `user_id` and `pass_id` are denormalized onto the record so that
/// per-user reporting does not depend on the pass still existing.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AccessLog {
    /// Unique log identifier.
    pub id: LogId,
    /// The user the pass belonged to when the event was recorded.
    pub user_id: UserId,
    /// The pass that was used.
    pub pass_id: PassId,
    /// Whether the event was an entry or an exit.
    pub action: LogAction,
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
}

/// Data required to record a new log event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLog {
    /// The pass owner.
    pub user_id: UserId,
    /// The pass used for the event.
    pub pass_id: PassId,
    /// Entry or exit.
    pub action: LogAction,
    /// Event time.
    pub timestamp: DateTime<Utc>,
}

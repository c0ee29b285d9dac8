//! Access pass entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use gatepass_core::types::{PassId, UserId};

use crate::user::User;

/// A time-bounded access pass issued to a user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Pass {
    /// Unique pass identifier.
    pub id: PassId,
    /// The user this pass belongs to.
    pub user_id: UserId,
    /// Free-form pass type label (e.g. "visitor", "contractor").
    #[serde(rename = "type")]
    pub kind: String,
    /// First instant the pass is valid.
    pub start_date: DateTime<Utc>,
    /// Last instant the pass is valid.
    pub end_date: DateTime<Utc>,
    /// When the pass was created.
    pub created_at: DateTime<Utc>,
}

impl Pass {
    /// Check whether the pass is expired at the given instant.
    ///
    /// A pass is expired strictly after its end date, so a pass whose
    /// end date equals `now` is still valid.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.end_date < now
    }
}

/// Data required to create a new pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePass {
    /// Owning user.
    pub user_id: UserId,
    /// Pass type label.
    pub kind: String,
    /// Validity start.
    pub start_date: DateTime<Utc>,
    /// Validity end.
    pub end_date: DateTime<Utc>,
}

/// Data for replacing an existing pass's editable fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePass {
    /// New pass type label.
    pub kind: String,
    /// New validity start.
    pub start_date: DateTime<Utc>,
    /// New validity end.
    pub end_date: DateTime<Utc>,
}

/// A pass joined with its owning user, for listing pages and reports.
///
/// The owner is `None` when the referenced user no longer exists.
#[derive(Debug, Clone, Serialize)]
pub struct PassWithOwner {
    /// The pass itself.
    pub pass: Pass,
    /// The owning user, if still present.
    pub owner: Option<User>,
}

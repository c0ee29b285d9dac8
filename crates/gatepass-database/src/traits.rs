//! Async store contracts for the three entity collections.
//!
//! Services depend only on these traits; the concrete backend (PostgreSQL
//! or in-memory) is chosen at startup by [`crate::provider::Store`].
//! Listings are returned in stable insertion order.

use async_trait::async_trait;
use std::fmt;

use gatepass_core::result::AppResult;
use gatepass_core::types::{PassId, UserId};
use gatepass_entity::log::{AccessLog, CreateLog, LogFilter};
use gatepass_entity::pass::{CreatePass, Pass, UpdatePass};
use gatepass_entity::user::{CreateUser, UpdateUser, User};

/// Storage operations for users.
#[async_trait]
pub trait UserStore: Send + Sync + fmt::Debug + 'static {
    /// Find a user by primary key.
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// List all users in creation order.
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Create a new user. Fails with `DuplicateEmail` when the email is
    /// already registered.
    async fn create(&self, data: &CreateUser) -> AppResult<User>;

    /// Replace a user's editable fields. Returns `None` when the user
    /// does not exist.
    async fn update(&self, id: UserId, data: &UpdateUser) -> AppResult<Option<User>>;

    /// Delete a user. Returns whether a record was removed.
    async fn delete(&self, id: UserId) -> AppResult<bool>;
}

/// Storage operations for passes.
#[async_trait]
pub trait PassStore: Send + Sync + fmt::Debug + 'static {
    /// Find a pass by primary key.
    async fn find_by_id(&self, id: PassId) -> AppResult<Option<Pass>>;

    /// List all passes in creation order.
    async fn find_all(&self) -> AppResult<Vec<Pass>>;

    /// Create a new pass.
    async fn create(&self, data: &CreatePass) -> AppResult<Pass>;

    /// Replace a pass's editable fields. Returns `None` when the pass
    /// does not exist.
    async fn update(&self, id: PassId, data: &UpdatePass) -> AppResult<Option<Pass>>;

    /// Delete a pass. Returns whether a record was removed.
    async fn delete(&self, id: PassId) -> AppResult<bool>;

    /// Delete every pass belonging to a user. Returns the removed count.
    async fn delete_by_user(&self, user_id: UserId) -> AppResult<u64>;
}

/// Storage operations for entry/exit logs.
#[async_trait]
pub trait LogStore: Send + Sync + fmt::Debug + 'static {
    /// List all logs in timestamp order.
    async fn find_all(&self) -> AppResult<Vec<AccessLog>>;

    /// List logs matching the filter, in timestamp order.
    async fn find_filtered(&self, filter: &LogFilter) -> AppResult<Vec<AccessLog>>;

    /// Record a new log event.
    async fn create(&self, data: &CreateLog) -> AppResult<AccessLog>;

    /// Delete every log belonging to a user. Returns the removed count.
    async fn delete_by_user(&self, user_id: UserId) -> AppResult<u64>;

    /// Delete every log recorded against a pass. Returns the removed count.
    async fn delete_by_pass(&self, pass_id: PassId) -> AppResult<u64>;
}

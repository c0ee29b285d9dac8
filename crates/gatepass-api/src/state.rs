//! Application state shared across all handlers.

use std::sync::Arc;

use gatepass_core::config::AppConfig;
use gatepass_database::Store;
use gatepass_service::{LogService, PassService, ReportService, UserService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Persistence backend handle
    pub store: Store,
    /// User administration service
    pub user_service: Arc<UserService>,
    /// Pass administration service
    pub pass_service: Arc<PassService>,
    /// Access log service
    pub log_service: Arc<LogService>,
    /// Report service
    pub report_service: Arc<ReportService>,
}

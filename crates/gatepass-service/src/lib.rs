//! # gatepass-service
//!
//! Business logic service layer for GatePass. Each service orchestrates
//! the entity stores to implement application-level use cases: user
//! administration with cascading deletes, pass issuance with date
//! validation, access log recording, and report generation.
//!
//! Services follow constructor injection. All store handles are provided
//! at construction time via `Arc` references.

pub mod dates;
pub mod log;
pub mod pass;
pub mod report;
pub mod user;

pub use log::{LogBoard, LogService};
pub use pass::{PassOverview, PassService};
pub use report::{ReportService, UserReport};
pub use user::UserService;

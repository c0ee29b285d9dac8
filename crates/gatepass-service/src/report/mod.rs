//! Per-user activity reports.

pub mod service;

pub use service::{ReportService, UserReport};

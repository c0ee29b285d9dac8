//! Access log recording and review.

pub mod service;

pub use service::{LogBoard, LogService};

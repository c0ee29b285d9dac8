//! Pass issuance and lifecycle.

pub mod service;

pub use service::{PassOverview, PassService};

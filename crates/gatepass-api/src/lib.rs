//! # gatepass-api
//!
//! HTTP layer for GatePass built on Axum.
//!
//! Serves server-rendered HTML pages for user, pass, and log
//! administration, plus the plain-text report export and a health
//! endpoint. Mutations arrive as HTML form posts and answer with
//! redirects back to the relevant listing page.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
pub mod views;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;

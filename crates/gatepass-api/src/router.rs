//! Route definitions for the GatePass web UI.
//!
//! Pages are served at the root; every mutation is an HTML form post
//! answered with a redirect back to the relevant listing. The router
//! receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(page_routes())
        .merge(user_routes())
        .merge(pass_routes())
        .merge(log_routes())
        .merge(report_routes())
        .merge(health_routes())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Home page
fn page_routes() -> Router<AppState> {
    Router::new().route("/", get(handlers::home::home))
}

/// User administration: listing plus create/edit/delete form actions
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(handlers::user::list_users))
        .route("/users", post(handlers::user::create_user))
        .route("/users/edit/{id}", post(handlers::user::update_user))
        .route("/users/delete/{id}", post(handlers::user::delete_user))
}

/// Pass administration
fn pass_routes() -> Router<AppState> {
    Router::new()
        .route("/passes", get(handlers::pass::list_passes))
        .route("/passes", post(handlers::pass::create_pass))
        .route("/passes/edit/{id}", post(handlers::pass::update_pass))
        .route("/passes/delete/{id}", post(handlers::pass::delete_pass))
}

/// Access log review and recording
fn log_routes() -> Router<AppState> {
    Router::new()
        .route("/logs", get(handlers::log::list_logs))
        .route("/logs/add", post(handlers::log::add_log))
}

/// Reports and the plain-text export
fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/reports", get(handlers::report::reports))
        .route("/reports/export-txt", get(handlers::report::export_txt))
}

/// Health check endpoint (no HTML, plain JSON)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

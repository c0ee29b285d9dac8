//! Access log handlers.

use axum::Form;
use axum::extract::{Query, State};
use axum::response::{Html, Redirect};
use chrono::Utc;

use gatepass_core::error::AppError;
use gatepass_core::types::PassId;
use gatepass_entity::log::LogAction;

use crate::dto::request::{AddLogForm, LogQueryParams};
use crate::error::ApiError;
use crate::state::AppState;
use crate::views;

/// GET /logs
pub async fn list_logs(
    State(state): State<AppState>,
    Query(params): Query<LogQueryParams>,
) -> Result<Html<String>, ApiError> {
    let filter = params.into_filter()?;
    let board = state.log_service.overview(&filter).await?;

    Ok(Html(views::logs::logs_page(&board)))
}

/// POST /logs/add
pub async fn add_log(
    State(state): State<AppState>,
    Form(form): Form<AddLogForm>,
) -> Result<Redirect, ApiError> {
    let pass_id: PassId = form
        .pass_id
        .parse()
        .map_err(|_| AppError::validation(format!("Invalid pass id: '{}'", form.pass_id)))?;
    let action: LogAction = form.action.parse()?;

    state
        .log_service
        .add_from_pass(pass_id, action, Utc::now())
        .await?;

    Ok(Redirect::to("/logs"))
}

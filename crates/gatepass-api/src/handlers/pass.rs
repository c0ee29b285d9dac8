//! Pass administration handlers.

use axum::Form;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};

use gatepass_core::error::{AppError, ErrorKind};
use gatepass_core::types::{PassId, UserId};

use crate::dto::request::{EditPassForm, PassForm};
use crate::error::ApiError;
use crate::state::AppState;
use crate::views;

/// GET /passes
pub async fn list_passes(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let overview = state.pass_service.overview().await?;

    Ok(Html(views::passes::passes_page(&overview, None)))
}

/// POST /passes
///
/// Date validation failures re-render the page with an inline message
/// instead of a bare error response, keeping the form usable.
pub async fn create_pass(
    State(state): State<AppState>,
    Form(form): Form<PassForm>,
) -> Result<Response, ApiError> {
    let user_id: UserId = form
        .user_id
        .parse()
        .map_err(|_| AppError::validation(format!("Invalid user id: '{}'", form.user_id)))?;

    match state
        .pass_service
        .create_pass(user_id, &form.kind, &form.start_date, &form.end_date)
        .await
    {
        Ok(_) => Ok(Redirect::to("/passes").into_response()),
        Err(err) => render_form_error(&state, err).await,
    }
}

/// POST /passes/edit/{id}
pub async fn update_pass(
    State(state): State<AppState>,
    Path(id): Path<PassId>,
    Form(form): Form<EditPassForm>,
) -> Result<Response, ApiError> {
    match state
        .pass_service
        .update_pass(id, &form.kind, &form.start_date, &form.end_date)
        .await
    {
        Ok(_) => Ok(Redirect::to("/passes").into_response()),
        Err(err) => render_form_error(&state, err).await,
    }
}

/// POST /passes/delete/{id}
pub async fn delete_pass(
    State(state): State<AppState>,
    Path(id): Path<PassId>,
) -> Result<Redirect, ApiError> {
    state.pass_service.delete_pass(id).await?;

    Ok(Redirect::to("/passes"))
}

/// Turns a date validation failure into a re-rendered page; everything
/// else propagates to the shared error mapping.
async fn render_form_error(state: &AppState, err: AppError) -> Result<Response, ApiError> {
    match err.kind {
        ErrorKind::InvalidDate | ErrorKind::InvalidRange => {
            let overview = state.pass_service.overview().await?;
            let page = views::passes::passes_page(&overview, Some(&err.message));
            Ok(Html(page).into_response())
        }
        _ => Err(ApiError(err)),
    }
}

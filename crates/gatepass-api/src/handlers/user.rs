//! User administration handlers.

use axum::Form;
use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use validator::Validate;

use gatepass_core::error::AppError;
use gatepass_core::types::UserId;

use crate::dto::request::UserForm;
use crate::error::ApiError;
use crate::state::AppState;
use crate::views;

/// GET /users
pub async fn list_users(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let users = state.user_service.list_users().await?;

    Ok(Html(views::users::users_page(&users)))
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    Form(form): Form<UserForm>,
) -> Result<Redirect, ApiError> {
    form.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    state
        .user_service
        .create_user(&form.name, &form.email)
        .await?;

    Ok(Redirect::to("/users"))
}

/// POST /users/edit/{id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    Form(form): Form<UserForm>,
) -> Result<Redirect, ApiError> {
    form.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    state
        .user_service
        .update_user(id, &form.name, &form.email)
        .await?;

    Ok(Redirect::to("/users"))
}

/// POST /users/delete/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> Result<Redirect, ApiError> {
    state.user_service.delete_user(id).await?;

    Ok(Redirect::to("/users"))
}

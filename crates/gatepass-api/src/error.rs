//! Maps application errors onto HTTP responses.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use gatepass_core::error::{AppError, ErrorKind};

use crate::views;

/// Wrapper turning [`AppError`] into an HTML error response.
///
/// Handlers return `Result<_, ApiError>` and use `?` on service calls;
/// the [`From`] impl picks up the conversion.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// HTTP status for the wrapped error kind.
    pub fn status(&self) -> StatusCode {
        match self.0.kind {
            ErrorKind::InvalidDate
            | ErrorKind::InvalidRange
            | ErrorKind::PassExpired
            | ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::DuplicateEmail => StatusCode::CONFLICT,
            ErrorKind::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorKind::CascadeFailed | ErrorKind::Configuration | ErrorKind::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Server-side causes are logged, never shown to the client.
        let message = if status.is_server_error() {
            tracing::error!(
                kind = %self.0.kind,
                error = %self.0,
                source = ?self.0.source,
                "Request failed"
            );
            "Something went wrong on our side".to_string()
        } else {
            self.0.message.clone()
        };

        (status, Html(views::error_page(status, &message))).into_response()
    }
}

//! Report handlers.

use axum::extract::State;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{Html, IntoResponse, Response};

use gatepass_service::ReportService;

use crate::error::ApiError;
use crate::state::AppState;
use crate::views;

/// GET /reports
pub async fn reports(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let reports = state.report_service.user_reports().await?;

    Ok(Html(views::reports::reports_page(&reports)))
}

/// GET /reports/export-txt
pub async fn export_txt(State(state): State<AppState>) -> Result<Response, ApiError> {
    let reports = state.report_service.user_reports().await?;
    let text = ReportService::render_text(&reports);

    Ok((
        [
            (CONTENT_TYPE, "text/plain; charset=utf-8"),
            (CONTENT_DISPOSITION, "attachment; filename=report.txt"),
        ],
        text,
    )
        .into_response())
}

//! Form and query DTOs with validation.
//!
//! Field names mirror the HTML forms, which use camelCase.

use serde::Deserialize;
use validator::Validate;

use gatepass_core::error::AppError;
use gatepass_core::types::UserId;
use gatepass_entity::log::{LogAction, LogFilter};
use gatepass_service::dates::parse_date;

/// User create/edit form body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UserForm {
    /// Display name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Contact email, unique per user.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
}

/// Pass create form body.
///
/// The owner id stays a string here; the handler parses it so a
/// malformed value reads as a validation failure, not a framework
/// rejection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassForm {
    /// Owner of the pass.
    pub user_id: String,
    /// Pass type label.
    #[serde(rename = "type")]
    pub kind: String,
    /// First valid day, `YYYY-MM-DD`.
    pub start_date: String,
    /// Last valid day, `YYYY-MM-DD`.
    pub end_date: String,
}

/// Pass edit form body. The owner cannot be changed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditPassForm {
    /// Pass type label.
    #[serde(rename = "type")]
    pub kind: String,
    /// First valid day, `YYYY-MM-DD`.
    pub start_date: String,
    /// Last valid day, `YYYY-MM-DD`.
    pub end_date: String,
}

/// Entry/exit recording form body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddLogForm {
    /// Pass being used.
    pub pass_id: String,
    /// `entry` or `exit`.
    pub action: String,
}

/// Query parameters for the log listing page.
///
/// A submitted filter form sends every field, blank or not, so blank
/// strings must read as absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogQueryParams {
    /// Restrict to one user's logs.
    pub user_id: Option<String>,
    /// Restrict to `entry` or `exit`.
    pub action: Option<String>,
    /// Inclusive lower timestamp bound, `YYYY-MM-DD`.
    pub start_date: Option<String>,
    /// Inclusive upper timestamp bound, `YYYY-MM-DD`.
    pub end_date: Option<String>,
}

impl LogQueryParams {
    /// Converts the raw query text into a typed filter.
    ///
    /// Blank parameters are ignored; present but malformed ones are
    /// rejected rather than silently matching everything.
    pub fn into_filter(self) -> Result<LogFilter, AppError> {
        let mut filter = LogFilter::default();

        if let Some(raw) = non_empty(self.user_id) {
            let user_id = raw
                .parse::<UserId>()
                .map_err(|_| AppError::validation(format!("Invalid user id: '{raw}'")))?;
            filter.user_id = Some(user_id);
        }
        if let Some(raw) = non_empty(self.action) {
            filter.action = Some(raw.parse::<LogAction>()?);
        }
        if let Some(raw) = non_empty(self.start_date) {
            let from = parse_date(&raw)
                .ok_or_else(|| AppError::invalid_date(format!("Invalid start date: '{raw}'")))?;
            filter.from = Some(from);
        }
        if let Some(raw) = non_empty(self.end_date) {
            let to = parse_date(&raw)
                .ok_or_else(|| AppError::invalid_date(format!("Invalid end date: '{raw}'")))?;
            filter.to = Some(to);
        }

        Ok(filter)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatepass_core::error::ErrorKind;

    #[test]
    fn test_blank_query_params_mean_no_filter() {
        let params = LogQueryParams {
            user_id: Some(String::new()),
            action: Some("  ".to_string()),
            start_date: None,
            end_date: Some(String::new()),
        };

        let filter = params.into_filter().unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn test_malformed_user_id_is_rejected() {
        let params = LogQueryParams {
            user_id: Some("not-a-uuid".to_string()),
            ..Default::default()
        };

        let err = params.into_filter().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_malformed_action_is_rejected() {
        let params = LogQueryParams {
            action: Some("loiter".to_string()),
            ..Default::default()
        };

        let err = params.into_filter().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_malformed_date_is_rejected() {
        let params = LogQueryParams {
            start_date: Some("soon".to_string()),
            ..Default::default()
        };

        let err = params.into_filter().unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidDate);
    }

    #[test]
    fn test_dates_become_inclusive_bounds() {
        let params = LogQueryParams {
            start_date: Some("2024-03-01".to_string()),
            end_date: Some("2024-03-05".to_string()),
            ..Default::default()
        };

        let filter = params.into_filter().unwrap();
        let from = filter.from.unwrap();
        let to = filter.to.unwrap();
        assert!(from < to);
    }
}

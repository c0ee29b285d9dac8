//! Log listing filter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gatepass_core::types::UserId;

use super::action::LogAction;
use super::model::AccessLog;

/// Narrowing criteria for log listings.
///
/// Every field is optional; an empty filter matches all records. Time
/// bounds are inclusive on both ends.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LogFilter {
    /// Only logs belonging to this user.
    pub user_id: Option<UserId>,
    /// Only logs with this action.
    pub action: Option<LogAction>,
    /// Only logs at or after this instant.
    pub from: Option<DateTime<Utc>>,
    /// Only logs at or before this instant.
    pub to: Option<DateTime<Utc>>,
}

impl LogFilter {
    /// Check whether a log record satisfies every set criterion.
    pub fn matches(&self, log: &AccessLog) -> bool {
        if let Some(user_id) = self.user_id {
            if log.user_id != user_id {
                return false;
            }
        }
        if let Some(action) = self.action {
            if log.action != action {
                return false;
            }
        }
        if let Some(from) = self.from {
            if log.timestamp < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if log.timestamp > to {
                return false;
            }
        }
        true
    }

    /// True when no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.user_id.is_none() && self.action.is_none() && self.from.is_none() && self.to.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use gatepass_core::types::{LogId, PassId};

    fn log_at(user_id: UserId, action: LogAction, ts: DateTime<Utc>) -> AccessLog {
        AccessLog {
            id: LogId::new(),
            user_id,
            pass_id: PassId::new(),
            action,
            timestamp: ts,
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = LogFilter::default();
        let log = log_at(
            UserId::new(),
            LogAction::Entry,
            Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
        );
        assert!(filter.is_empty());
        assert!(filter.matches(&log));
    }

    #[test]
    fn test_user_and_action_criteria() {
        let user = UserId::new();
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let log = log_at(user, LogAction::Entry, ts);

        let mut filter = LogFilter {
            user_id: Some(user),
            ..LogFilter::default()
        };
        assert!(filter.matches(&log));

        filter.action = Some(LogAction::Exit);
        assert!(!filter.matches(&log));

        filter.action = Some(LogAction::Entry);
        filter.user_id = Some(UserId::new());
        assert!(!filter.matches(&log));
    }

    #[test]
    fn test_time_bounds_are_inclusive() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let log = log_at(UserId::new(), LogAction::Exit, ts);

        let filter = LogFilter {
            from: Some(ts),
            to: Some(ts),
            ..LogFilter::default()
        };
        assert!(filter.matches(&log));

        let filter = LogFilter {
            from: Some(ts + chrono::Duration::seconds(1)),
            ..LogFilter::default()
        };
        assert!(!filter.matches(&log));

        let filter = LogFilter {
            to: Some(ts - chrono::Duration::seconds(1)),
            ..LogFilter::default()
        };
        assert!(!filter.matches(&log));
    }
}

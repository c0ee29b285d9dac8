//! Report assembly and plain-text export.

use std::collections::HashMap;
use std::sync::Arc;

use gatepass_core::error::AppError;
use gatepass_core::types::UserId;
use gatepass_database::traits::{LogStore, PassStore, UserStore};
use gatepass_entity::log::AccessLog;
use gatepass_entity::pass::Pass;
use gatepass_entity::user::User;

use crate::dates::{format_date, format_timestamp};

/// Builds per-user activity reports.
#[derive(Debug, Clone)]
pub struct ReportService {
    /// User store.
    users: Arc<dyn UserStore>,
    /// Pass store.
    passes: Arc<dyn PassStore>,
    /// Log store.
    logs: Arc<dyn LogStore>,
}

/// One user's passes and access history.
#[derive(Debug, Clone, serde::Serialize)]
pub struct UserReport {
    /// The user.
    pub user: User,
    /// Passes issued to the user, oldest first. Empty if none.
    pub passes: Vec<Pass>,
    /// Access logs recorded for the user, oldest first. Empty if none.
    pub logs: Vec<AccessLog>,
}

impl ReportService {
    /// Creates a new report service.
    pub fn new(
        users: Arc<dyn UserStore>,
        passes: Arc<dyn PassStore>,
        logs: Arc<dyn LogStore>,
    ) -> Self {
        Self {
            users,
            passes,
            logs,
        }
    }

    /// Collects every user's passes and logs, in user creation order.
    pub async fn user_reports(&self) -> Result<Vec<UserReport>, AppError> {
        let (users, passes, logs) = tokio::try_join!(
            self.users.find_all(),
            self.passes.find_all(),
            self.logs.find_all(),
        )?;

        let mut passes_by_user: HashMap<UserId, Vec<Pass>> = HashMap::new();
        for pass in passes {
            passes_by_user.entry(pass.user_id).or_default().push(pass);
        }

        let mut logs_by_user: HashMap<UserId, Vec<AccessLog>> = HashMap::new();
        for log in logs {
            logs_by_user.entry(log.user_id).or_default().push(log);
        }

        Ok(users
            .into_iter()
            .map(|user| {
                let passes = passes_by_user.remove(&user.id).unwrap_or_default();
                let logs = logs_by_user.remove(&user.id).unwrap_or_default();
                UserReport { user, passes, logs }
            })
            .collect())
    }

    /// Renders reports as the plain-text export download.
    ///
    /// One block per user: name, email, each pass as
    /// `type: YYYY-MM-DD - YYYY-MM-DD`, each log as
    /// `action: <ISO 8601 timestamp>`, blocks separated by a blank line.
    pub fn render_text(reports: &[UserReport]) -> String {
        let mut out = String::from("User report:\n\n");

        for report in reports {
            out.push_str(&format!("Name: {}\n", report.user.name));
            out.push_str(&format!("Email: {}\n", report.user.email));

            out.push_str("Passes:\n");
            for pass in &report.passes {
                out.push_str(&format!(
                    "  - {}: {} - {}\n",
                    pass.kind,
                    format_date(&pass.start_date),
                    format_date(&pass.end_date)
                ));
            }

            out.push_str("Logs:\n");
            for log in &report.logs {
                out.push_str(&format!(
                    "  - {}: {}\n",
                    log.action,
                    format_timestamp(&log.timestamp)
                ));
            }

            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::parse_date;
    use gatepass_database::Store;
    use gatepass_entity::log::{CreateLog, LogAction};
    use gatepass_entity::pass::CreatePass;
    use gatepass_entity::user::CreateUser;

    fn service(store: &Store) -> ReportService {
        ReportService::new(store.users(), store.passes(), store.logs())
    }

    async fn seed_user(store: &Store, name: &str, email: &str) -> User {
        store
            .users()
            .create(&CreateUser {
                name: name.to_string(),
                email: email.to_string(),
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_reports_group_records_per_user() {
        let store = Store::in_memory();
        let alice = seed_user(&store, "Alice", "alice@example.com").await;
        let bob = seed_user(&store, "Bob", "bob@example.com").await;

        let start = parse_date("2024-01-01").unwrap();
        let end = parse_date("2024-01-31").unwrap();
        let pass = store
            .passes()
            .create(&CreatePass {
                user_id: alice.id,
                kind: "visitor".to_string(),
                start_date: start,
                end_date: end,
            })
            .await
            .unwrap();
        store
            .logs()
            .create(&CreateLog {
                user_id: alice.id,
                pass_id: pass.id,
                action: LogAction::Entry,
                timestamp: start,
            })
            .await
            .unwrap();

        let reports = service(&store).user_reports().await.unwrap();

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].user.id, alice.id);
        assert_eq!(reports[0].passes.len(), 1);
        assert_eq!(reports[0].logs.len(), 1);
        assert_eq!(reports[1].user.id, bob.id);
        assert!(reports[1].passes.is_empty());
        assert!(reports[1].logs.is_empty());
    }

    #[tokio::test]
    async fn test_render_text_matches_export_layout() {
        let store = Store::in_memory();
        let alice = seed_user(&store, "Alice", "alice@example.com").await;

        let start = parse_date("2024-01-01").unwrap();
        let end = parse_date("2024-01-31").unwrap();
        let pass = store
            .passes()
            .create(&CreatePass {
                user_id: alice.id,
                kind: "visitor".to_string(),
                start_date: start,
                end_date: end,
            })
            .await
            .unwrap();
        store
            .logs()
            .create(&CreateLog {
                user_id: alice.id,
                pass_id: pass.id,
                action: LogAction::Entry,
                timestamp: start,
            })
            .await
            .unwrap();

        let reports = service(&store).user_reports().await.unwrap();
        let text = ReportService::render_text(&reports);

        let expected = "User report:\n\n\
                        Name: Alice\n\
                        Email: alice@example.com\n\
                        Passes:\n  \
                        - visitor: 2024-01-01 - 2024-01-31\n\
                        Logs:\n  \
                        - entry: 2024-01-01T00:00:00.000Z\n\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_text_with_no_users_is_just_the_header() {
        assert_eq!(ReportService::render_text(&[]), "User report:\n\n");
    }

    #[tokio::test]
    async fn test_render_text_keeps_empty_sections_adjacent() {
        let store = Store::in_memory();
        seed_user(&store, "Alice", "alice@example.com").await;

        let reports = service(&store).user_reports().await.unwrap();
        let text = ReportService::render_text(&reports);

        assert!(text.contains("Passes:\nLogs:\n"));
    }
}

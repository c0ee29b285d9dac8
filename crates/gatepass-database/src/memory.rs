//! In-memory store for tests and single-node development.
//!
//! Implements the same store traits as the PostgreSQL backend, including
//! case-insensitive duplicate email detection, so service behavior is
//! identical across providers.

use chrono::Utc;
use tokio::sync::RwLock;

use async_trait::async_trait;

use gatepass_core::error::AppError;
use gatepass_core::result::AppResult;
use gatepass_core::types::{LogId, PassId, UserId};
use gatepass_entity::log::{AccessLog, CreateLog, LogFilter};
use gatepass_entity::pass::{CreatePass, Pass, UpdatePass};
use gatepass_entity::user::{CreateUser, UpdateUser, User};

use crate::traits::{LogStore, PassStore, UserStore};

/// Store keeping all records in process memory.
///
/// Records are appended in creation order, which matches the
/// `created_at ASC` ordering of the PostgreSQL backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<Vec<User>>,
    passes: RwLock<Vec<Pass>>,
    logs: RwLock<Vec<AccessLog>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email.eq_ignore_ascii_case(&data.email)) {
            return Err(AppError::duplicate_email(format!(
                "Email '{}' is already in use",
                data.email
            )));
        }

        let user = User {
            id: UserId::new(),
            name: data.name.clone(),
            email: data.email.clone(),
            created_at: Utc::now(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn update(&self, id: UserId, data: &UpdateUser) -> AppResult<Option<User>> {
        let mut users = self.users.write().await;
        if !users.iter().any(|u| u.id == id) {
            return Ok(None);
        }
        if users
            .iter()
            .any(|u| u.id != id && u.email.eq_ignore_ascii_case(&data.email))
        {
            return Err(AppError::duplicate_email(format!(
                "Email '{}' is already in use",
                data.email
            )));
        }

        Ok(users.iter_mut().find(|u| u.id == id).map(|u| {
            u.name = data.name.clone();
            u.email = data.email.clone();
            u.clone()
        }))
    }

    async fn delete(&self, id: UserId) -> AppResult<bool> {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|u| u.id != id);
        Ok(users.len() < before)
    }
}

#[async_trait]
impl PassStore for MemoryStore {
    async fn find_by_id(&self, id: PassId) -> AppResult<Option<Pass>> {
        let passes = self.passes.read().await;
        Ok(passes.iter().find(|p| p.id == id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Pass>> {
        Ok(self.passes.read().await.clone())
    }

    async fn create(&self, data: &CreatePass) -> AppResult<Pass> {
        let pass = Pass {
            id: PassId::new(),
            user_id: data.user_id,
            kind: data.kind.clone(),
            start_date: data.start_date,
            end_date: data.end_date,
            created_at: Utc::now(),
        };
        self.passes.write().await.push(pass.clone());
        Ok(pass)
    }

    async fn update(&self, id: PassId, data: &UpdatePass) -> AppResult<Option<Pass>> {
        let mut passes = self.passes.write().await;
        Ok(passes.iter_mut().find(|p| p.id == id).map(|p| {
            p.kind = data.kind.clone();
            p.start_date = data.start_date;
            p.end_date = data.end_date;
            p.clone()
        }))
    }

    async fn delete(&self, id: PassId) -> AppResult<bool> {
        let mut passes = self.passes.write().await;
        let before = passes.len();
        passes.retain(|p| p.id != id);
        Ok(passes.len() < before)
    }

    async fn delete_by_user(&self, user_id: UserId) -> AppResult<u64> {
        let mut passes = self.passes.write().await;
        let before = passes.len();
        passes.retain(|p| p.user_id != user_id);
        Ok((before - passes.len()) as u64)
    }
}

#[async_trait]
impl LogStore for MemoryStore {
    async fn find_all(&self) -> AppResult<Vec<AccessLog>> {
        Ok(self.logs.read().await.clone())
    }

    async fn find_filtered(&self, filter: &LogFilter) -> AppResult<Vec<AccessLog>> {
        let logs = self.logs.read().await;
        Ok(logs.iter().filter(|l| filter.matches(l)).cloned().collect())
    }

    async fn create(&self, data: &CreateLog) -> AppResult<AccessLog> {
        let log = AccessLog {
            id: LogId::new(),
            user_id: data.user_id,
            pass_id: data.pass_id,
            action: data.action,
            timestamp: data.timestamp,
        };
        self.logs.write().await.push(log.clone());
        Ok(log)
    }

    async fn delete_by_user(&self, user_id: UserId) -> AppResult<u64> {
        let mut logs = self.logs.write().await;
        let before = logs.len();
        logs.retain(|l| l.user_id != user_id);
        Ok((before - logs.len()) as u64)
    }

    async fn delete_by_pass(&self, pass_id: PassId) -> AppResult<u64> {
        let mut logs = self.logs.write().await;
        let before = logs.len();
        logs.retain(|l| l.pass_id != pass_id);
        Ok((before - logs.len()) as u64)
    }
}

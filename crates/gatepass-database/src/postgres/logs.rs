//! PostgreSQL access log store implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use gatepass_core::error::{AppError, ErrorKind};
use gatepass_core::result::AppResult;
use gatepass_core::types::{PassId, UserId};
use gatepass_entity::log::{AccessLog, CreateLog, LogFilter};

use crate::traits::LogStore;

/// Access log store backed by PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgLogStore {
    pool: PgPool,
}

impl PgLogStore {
    /// Create a new log store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LogStore for PgLogStore {
    async fn find_all(&self) -> AppResult<Vec<AccessLog>> {
        sqlx::query_as::<_, AccessLog>(
            "SELECT * FROM access_logs ORDER BY timestamp ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::StoreUnavailable, "Failed to list access logs", e)
        })
    }

    async fn find_filtered(&self, filter: &LogFilter) -> AppResult<Vec<AccessLog>> {
        let mut sql = String::from("SELECT * FROM access_logs");
        let mut conditions = Vec::new();

        if filter.user_id.is_some() {
            conditions.push(format!("user_id = ${}", conditions.len() + 1));
        }
        if filter.action.is_some() {
            conditions.push(format!("action = ${}", conditions.len() + 1));
        }
        if filter.from.is_some() {
            conditions.push(format!("timestamp >= ${}", conditions.len() + 1));
        }
        if filter.to.is_some() {
            conditions.push(format!("timestamp <= ${}", conditions.len() + 1));
        }

        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }
        sql.push_str(" ORDER BY timestamp ASC, id ASC");

        let mut query = sqlx::query_as::<_, AccessLog>(&sql);

        // Bind order must mirror the condition order above.
        if let Some(user_id) = filter.user_id {
            query = query.bind(user_id);
        }
        if let Some(action) = filter.action {
            query = query.bind(action);
        }
        if let Some(from) = filter.from {
            query = query.bind(from);
        }
        if let Some(to) = filter.to {
            query = query.bind(to);
        }

        query.fetch_all(&self.pool).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::StoreUnavailable,
                "Failed to list filtered access logs",
                e,
            )
        })
    }

    async fn create(&self, data: &CreateLog) -> AppResult<AccessLog> {
        sqlx::query_as::<_, AccessLog>(
            "INSERT INTO access_logs (user_id, pass_id, action, timestamp) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(data.user_id)
        .bind(data.pass_id)
        .bind(data.action)
        .bind(data.timestamp)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::StoreUnavailable, "Failed to create access log", e)
        })
    }

    async fn delete_by_user(&self, user_id: UserId) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM access_logs WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::StoreUnavailable,
                    "Failed to delete access logs for user",
                    e,
                )
            })?;

        Ok(result.rows_affected())
    }

    async fn delete_by_pass(&self, pass_id: PassId) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM access_logs WHERE pass_id = $1")
            .bind(pass_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::StoreUnavailable,
                    "Failed to delete access logs for pass",
                    e,
                )
            })?;

        Ok(result.rows_affected())
    }
}

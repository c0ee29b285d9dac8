//! PostgreSQL pass store implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use gatepass_core::error::{AppError, ErrorKind};
use gatepass_core::result::AppResult;
use gatepass_core::types::{PassId, UserId};
use gatepass_entity::pass::{CreatePass, Pass, UpdatePass};

use crate::traits::PassStore;

/// Pass store backed by PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgPassStore {
    pool: PgPool,
}

impl PgPassStore {
    /// Create a new pass store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PassStore for PgPassStore {
    async fn find_by_id(&self, id: PassId) -> AppResult<Option<Pass>> {
        sqlx::query_as::<_, Pass>("SELECT * FROM passes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::StoreUnavailable, "Failed to find pass by id", e)
            })
    }

    async fn find_all(&self) -> AppResult<Vec<Pass>> {
        sqlx::query_as::<_, Pass>("SELECT * FROM passes ORDER BY created_at ASC, id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::StoreUnavailable, "Failed to list passes", e)
            })
    }

    async fn create(&self, data: &CreatePass) -> AppResult<Pass> {
        sqlx::query_as::<_, Pass>(
            "INSERT INTO passes (user_id, kind, start_date, end_date) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(data.user_id)
        .bind(&data.kind)
        .bind(data.start_date)
        .bind(data.end_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::StoreUnavailable, "Failed to create pass", e)
        })
    }

    async fn update(&self, id: PassId, data: &UpdatePass) -> AppResult<Option<Pass>> {
        sqlx::query_as::<_, Pass>(
            "UPDATE passes SET kind = $2, start_date = $3, end_date = $4 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.kind)
        .bind(data.start_date)
        .bind(data.end_date)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::StoreUnavailable, "Failed to update pass", e)
        })
    }

    async fn delete(&self, id: PassId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM passes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::StoreUnavailable, "Failed to delete pass", e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_user(&self, user_id: UserId) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM passes WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::StoreUnavailable,
                    "Failed to delete passes for user",
                    e,
                )
            })?;

        Ok(result.rows_affected())
    }
}

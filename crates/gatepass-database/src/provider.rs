//! Store provider selection.
//!
//! [`Store`] bundles the user, pass, and log store handles behind one
//! cloneable value and picks the backend named by the configuration.

use std::sync::Arc;

use gatepass_core::config::store::StoreConfig;
use gatepass_core::error::AppError;
use gatepass_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::memory::MemoryStore;
use crate::migration::run_migrations;
use crate::postgres::{PgLogStore, PgPassStore, PgUserStore};
use crate::traits::{LogStore, PassStore, UserStore};

/// Handle to the configured persistence backend.
#[derive(Debug, Clone)]
pub struct Store {
    users: Arc<dyn UserStore>,
    passes: Arc<dyn PassStore>,
    logs: Arc<dyn LogStore>,
    pool: Option<DatabasePool>,
}

impl Store {
    /// Connect to the backend named by the configuration.
    pub async fn connect(config: &StoreConfig) -> AppResult<Self> {
        match config.provider.as_str() {
            "postgres" => {
                let pool = DatabasePool::connect(&config.postgres).await?;
                Ok(Self {
                    users: Arc::new(PgUserStore::new(pool.pool().clone())),
                    passes: Arc::new(PgPassStore::new(pool.pool().clone())),
                    logs: Arc::new(PgLogStore::new(pool.pool().clone())),
                    pool: Some(pool),
                })
            }
            "memory" => Ok(Self::in_memory()),
            other => Err(AppError::configuration(format!(
                "Unknown store provider: '{other}'. Supported: postgres, memory"
            ))),
        }
    }

    /// Build a store backed by process memory.
    pub fn in_memory() -> Self {
        let memory = Arc::new(MemoryStore::new());
        Self {
            users: memory.clone(),
            passes: memory.clone(),
            logs: memory,
            pool: None,
        }
    }

    /// Run pending schema migrations. No-op for the memory backend.
    pub async fn migrate(&self) -> AppResult<()> {
        if let Some(pool) = &self.pool {
            run_migrations(pool.pool()).await?;
        }
        Ok(())
    }

    /// User store handle.
    pub fn users(&self) -> Arc<dyn UserStore> {
        Arc::clone(&self.users)
    }

    /// Pass store handle.
    pub fn passes(&self) -> Arc<dyn PassStore> {
        Arc::clone(&self.passes)
    }

    /// Access log store handle.
    pub fn logs(&self) -> Arc<dyn LogStore> {
        Arc::clone(&self.logs)
    }

    /// Verify the backend is reachable.
    pub async fn health_check(&self) -> AppResult<bool> {
        match &self.pool {
            Some(pool) => pool.health_check().await,
            None => Ok(true),
        }
    }

    /// Close backend connections.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}

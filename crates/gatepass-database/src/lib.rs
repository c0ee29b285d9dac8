//! # gatepass-database
//!
//! Entity store contracts for GatePass and their two implementations:
//! a PostgreSQL backend and an insertion-ordered in-memory backend. The
//! [`provider::Store`] aggregate selects a backend from configuration and
//! owns the connection lifecycle.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod postgres;
pub mod provider;
pub mod traits;

pub use connection::DatabasePool;
pub use provider::Store;
pub use traits::{LogStore, PassStore, UserStore};

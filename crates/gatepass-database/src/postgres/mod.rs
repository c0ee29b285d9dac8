//! PostgreSQL store implementations.

pub mod logs;
pub mod passes;
pub mod users;

pub use logs::PgLogStore;
pub use passes::PgPassStore;
pub use users::PgUserStore;

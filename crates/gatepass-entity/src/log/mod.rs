//! Entry/exit log domain entities.

pub mod action;
pub mod filter;
pub mod model;

pub use action::LogAction;
pub use filter::LogFilter;
pub use model::{AccessLog, CreateLog};

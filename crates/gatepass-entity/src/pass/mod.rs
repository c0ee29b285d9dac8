//! Access pass domain entities.

pub mod model;

pub use model::{CreatePass, Pass, PassWithOwner, UpdatePass};

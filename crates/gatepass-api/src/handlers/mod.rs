//! HTTP request handlers.

pub mod health;
pub mod home;
pub mod log;
pub mod pass;
pub mod report;
pub mod user;

//! Form, query, and response DTOs.

pub mod request;
pub mod response;

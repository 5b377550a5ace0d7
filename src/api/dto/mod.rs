//! Data Transfer Objects for JSON endpoints.

pub mod dashboard;
pub mod health;
pub mod history;

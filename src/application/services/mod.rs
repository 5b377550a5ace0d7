//! Business logic services for the application layer.

pub mod auth_service;
pub mod dashboard_service;

pub use auth_service::{AuthService, LoginFailure};
pub use dashboard_service::{DashboardPage, DashboardService, ProxyOutcome, UserInfo};

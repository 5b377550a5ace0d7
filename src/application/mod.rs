//! Application layer services implementing the proxy logic.
//!
//! Services consume the [`crate::domain::backend::BackendApi`] trait and turn
//! every backend answer into a tagged outcome handlers can map to a response
//! without inspecting errors.
//!
//! # Available Services
//!
//! - [`services::dashboard_service::DashboardService`] - Page loading, API relay, history
//! - [`services::auth_service::AuthService`] - Login credential exchange

pub mod outcome;
pub mod services;

//! Web dashboard layer for browser-based UI.
//!
//! Provides the dashboard page and the login/logout flow.
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering and form action handlers
//! - [`middleware`] - Origin normalization and CSRF protection
//! - [`routes`] - Dashboard route configuration

pub mod handlers;
pub mod middleware;
pub mod routes;

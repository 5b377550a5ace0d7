//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`backend`] - HTTP client for the analytics backend
//! - [`net`] - Startup-time local address discovery

pub mod backend;
pub mod net;

//! Web-specific middleware.
//!
//! - [`origin_guard`] - Rewrites allowlisted development origins on POST
//! - [`csrf`] - Rejects cross-site form submissions

pub mod csrf;
pub mod origin_guard;

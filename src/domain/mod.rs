//! Domain layer: the backend contract and session concepts.
//!
//! # Architecture
//!
//! - [`backend`] - Outbound backend trait and its error taxonomy
//! - [`session`] - Session credential storage strategies
//! - [`identity`] - Display-only identity decoded from a credential
//! - [`payload`] - Placeholder and display view of the dashboard payload
//!
//! # Design Principles
//!
//! - No knowledge of how the backend is reached; see [`crate::infrastructure`]
//! - The dashboard payload stays opaque JSON owned by the backend

pub mod backend;
pub mod identity;
pub mod payload;
pub mod session;

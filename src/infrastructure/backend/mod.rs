//! Analytics backend client.
//!
//! Provides [`HttpBackend`], the reqwest implementation of
//! [`crate::domain::backend::BackendApi`].

mod http_backend;

pub use http_backend::HttpBackend;

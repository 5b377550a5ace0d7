//! HTTP request handlers for JSON endpoints.

mod dashboard;
mod health;
mod history;

pub use dashboard::dashboard_proxy_handler;
pub use health::health_handler;
pub use history::history_handler;

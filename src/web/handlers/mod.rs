//! HTML template rendering handlers for the web dashboard.

mod dashboard;
mod login;
mod logout;

pub use dashboard::{DashboardTemplate, dashboard_handler};
pub use login::{LoginForm, LoginTemplate, TokenIssued, login_action_handler, login_page_handler};
pub use logout::logout_handler;

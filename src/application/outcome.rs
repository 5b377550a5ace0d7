//! Tagged results shared by services and handlers.
//!
//! A redirect is its own variant rather than a special kind of error, so a
//! failure handler can never swallow it by accident.

use axum::http::{StatusCode, header::LOCATION};
use axum::response::{IntoResponse, Response};

/// HTTP status used for a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKind {
    /// `302 Found`
    Found,
    /// `303 See Other`, used after form submissions
    SeeOther,
}

/// A redirect the browser must follow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub kind: NavigationKind,
    pub location: &'static str,
    /// The session credential must be dropped alongside the redirect.
    pub clear_session: bool,
}

impl Navigation {
    pub fn found(location: &'static str) -> Self {
        Self {
            kind: NavigationKind::Found,
            location,
            clear_session: false,
        }
    }

    pub fn see_other(location: &'static str) -> Self {
        Self {
            kind: NavigationKind::SeeOther,
            location,
            clear_session: false,
        }
    }

    pub fn clearing_session(mut self) -> Self {
        self.clear_session = true;
        self
    }

    pub fn status(&self) -> StatusCode {
        match self.kind {
            NavigationKind::Found => StatusCode::FOUND,
            NavigationKind::SeeOther => StatusCode::SEE_OTHER,
        }
    }
}

impl IntoResponse for Navigation {
    fn into_response(self) -> Response {
        (self.status(), [(LOCATION, self.location)]).into_response()
    }
}

/// Result of loading a page: data to render, or somewhere else to go.
#[derive(Debug, Clone, PartialEq)]
pub enum PageOutcome<T> {
    Render(T),
    Redirect(Navigation),
}

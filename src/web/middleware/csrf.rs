//! Cross-site form submission check.

use axum::{
    extract::{Request, State},
    http::{
        HeaderMap, Method,
        header::{CONTENT_TYPE, ORIGIN},
    },
    middleware::Next,
    response::Response,
};
use serde_json::json;

use crate::{error::AppError, state::AppState};

/// Content types a browser may submit cross-site without a preflight.
const FORM_CONTENT_TYPES: [&str; 3] = [
    "application/x-www-form-urlencoded",
    "multipart/form-data",
    "text/plain",
];

/// Whether the request body is one of the simple form encodings.
pub fn is_form_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| {
            let essence = v.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
            FORM_CONTENT_TYPES.contains(&essence.as_str())
        })
        .unwrap_or(false)
}

/// Rejects form submissions whose `Origin` is not the server's own.
///
/// Runs after [`super::origin_guard::layer`], so allowlisted development
/// origins have already been rewritten. Requests without an `Origin` header,
/// or whose canonical origin cannot be determined, pass.
///
/// # Errors
///
/// Returns `403 Forbidden` for a cross-site form POST/PUT/PATCH/DELETE.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let mutating = matches!(
        *req.method(),
        Method::POST | Method::PUT | Method::PATCH | Method::DELETE
    );

    if st.origins.csrf_check() && mutating && is_form_content_type(req.headers()) {
        let origin = req
            .headers()
            .get(ORIGIN)
            .and_then(|o| o.to_str().ok())
            .map(str::to_string);

        if let (Some(origin), Some(expected)) = (origin, st.origins.canonical_origin(&req))
            && origin != expected
        {
            tracing::warn!(origin = %origin, expected = %expected, "Rejected cross-site form submission");
            return Err(AppError::forbidden(
                "Cross-site POST form submissions are forbidden",
                json!({ "origin": origin }),
            ));
        }
    }

    Ok(next.run(req).await)
}

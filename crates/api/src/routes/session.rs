//! Current staff session.

use axum::Json;
use axum::http::HeaderMap;
use axum::http::header::COOKIE;
use common::{CookieSession, SessionProvider, StaffUser};

/// Builds a session from every `Cookie` header on the request.
pub(crate) fn session_from_headers(headers: &HeaderMap) -> CookieSession {
    let joined = headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .collect::<Vec<_>>()
        .join("; ");
    CookieSession::from_cookie_header(&joined)
}

/// GET /session: the signed-in staff user, or `null`.
pub async fn current(headers: HeaderMap) -> Json<Option<StaffUser>> {
    Json(session_from_headers(&headers).current_user())
}

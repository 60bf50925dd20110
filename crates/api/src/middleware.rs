use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use chrono::{Duration, Utc};

use raro_gate::GrantId;

use crate::app::services::AppServices;
use crate::context::GrantContext;

/// Cookie carrying the grant id between requests.
pub const GRANT_COOKIE: &str = "raro_access";

/// Gate middleware for everything behind the invitation wall.
///
/// A request without a live grant is bounced to `/invitation`; one with a
/// live grant proceeds with a [`GrantContext`] attached.
pub async fn require_grant(
    State(services): State<Arc<AppServices>>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let Some(id) = grant_cookie(req.headers()) else {
        return Redirect::to("/invitation").into_response();
    };

    match services.grants().check(id, Utc::now()) {
        Ok(grant) => {
            req.extensions_mut().insert(GrantContext::new(grant));
            next.run(req).await
        }
        Err(rejection) => {
            tracing::debug!(grant_id = %id, %rejection, "gate refused request");
            Redirect::to("/invitation").into_response()
        }
    }
}

/// The grant id presented by the request, if any.
///
/// A cookie that fails to parse counts as absent; the grant store is the
/// judge of everything else.
pub fn grant_cookie(headers: &HeaderMap) -> Option<GrantId> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    raw.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name != GRANT_COOKIE {
            return None;
        }
        value.trim().parse().ok()
    })
}

/// `Set-Cookie` value establishing the grant cookie.
pub fn grant_cookie_value(id: GrantId, ttl: Duration) -> String {
    format!(
        "{GRANT_COOKIE}={id}; Path=/; Max-Age={}; HttpOnly; SameSite=Lax",
        ttl.num_seconds()
    )
}

/// `Set-Cookie` value discarding the grant cookie.
pub fn clear_grant_cookie_value() -> String {
    format!("{GRANT_COOKIE}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax")
}

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Redirect},
    Form,
};
use chrono::Utc;

use raro_gate::InviteAllowlist;

use crate::app::{dto, errors};
use crate::app::services::AppServices;
use crate::middleware;

/// Shown when a submitted code is not on the allow-list. Deliberately silent
/// about what a valid code would look like.
const INVALID_CODE_MESSAGE: &str = "Código inválido. A raridade não pode ser forçada.";

/// `GET /invitation`: the door.
pub async fn form(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    errors::html_or_fallback(
        "invitation",
        StatusCode::OK,
        services.renderer().invitation(None),
    )
}

/// `POST /invitation`: validate a code; on success issue a grant and set the
/// access cookie.
pub async fn submit(
    Extension(services): Extension<Arc<AppServices>>,
    Form(body): Form<dto::InvitationForm>,
) -> axum::response::Response {
    if !services.allowlist().validate_code(&body.code) {
        tracing::info!("invitation code rejected");
        return errors::html_or_fallback(
            "invitation",
            StatusCode::OK,
            services.renderer().invitation(Some(INVALID_CODE_MESSAGE)),
        );
    }

    let code = InviteAllowlist::normalize(&body.code);
    let grant = services.grants().issue(code, Utc::now());
    tracing::info!(grant_id = %grant.id, "invitation code accepted");

    (
        [(
            header::SET_COOKIE,
            middleware::grant_cookie_value(grant.id, services.grants().ttl()),
        )],
        Redirect::to("/"),
    )
        .into_response()
}

/// `GET /logout`: revoke the grant (if any) and clear the cookie.
pub async fn logout(
    Extension(services): Extension<Arc<AppServices>>,
    headers: HeaderMap,
) -> axum::response::Response {
    if let Some(id) = middleware::grant_cookie(&headers) {
        services.grants().revoke(id);
        tracing::info!(grant_id = %id, "grant revoked on logout");
    }

    (
        [(header::SET_COOKIE, middleware::clear_grant_cookie_value())],
        Redirect::to("/invitation"),
    )
        .into_response()
}

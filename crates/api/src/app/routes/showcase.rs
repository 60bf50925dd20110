use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode};

use crate::app::errors;
use crate::app::services::AppServices;
use crate::context::GrantContext;

/// `GET /`: the gated landing page.
pub async fn index(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(grant): Extension<GrantContext>,
) -> axum::response::Response {
    let products = services.catalog().list_available();
    let feed = services.catalog().recent_purchases();

    tracing::debug!(
        grant_id = %grant.grant_id(),
        products = products.len(),
        "showcase viewed"
    );

    errors::html_or_fallback(
        "showcase",
        StatusCode::OK,
        services.renderer().showcase(&products, &feed),
    )
}

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
};

use raro_catalog::ProductId;

use crate::app::errors;
use crate::app::services::AppServices;

/// `GET /product/:id`: detail page for one available product.
///
/// Anything that cannot be shown (unknown id, unparsable id, sold out,
/// delisted) gets the gone page; the storefront never distinguishes "never
/// existed" from "you missed it" beyond the status code.
pub async fn detail(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let Ok(id) = id.parse::<ProductId>() else {
        return gone_response(&services, StatusCode::NOT_FOUND);
    };

    match services.catalog().get(id) {
        Some(product) if product.is_available() => errors::html_or_fallback(
            "product",
            StatusCode::OK,
            services.renderer().product(&product),
        ),
        Some(_) => gone_response(&services, StatusCode::OK),
        None => gone_response(&services, StatusCode::NOT_FOUND),
    }
}

/// `GET /gone`: the farewell page, also linkable directly.
pub async fn gone(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    gone_response(&services, StatusCode::OK)
}

fn gone_response(services: &AppServices, status: StatusCode) -> axum::response::Response {
    errors::html_or_fallback("gone", status, services.renderer().gone())
}

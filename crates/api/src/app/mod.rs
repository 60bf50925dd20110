//! HTTP application wiring (axum router + service wiring).
//!
//! The folder is structured like:
//! - `services.rs`: shared state handed to handlers (allow-list, grants, catalog)
//! - `routes/`: HTTP routes + handlers (one file per page area)
//! - `pages.rs`: server-rendered views behind the [`pages::PageRenderer`] seam
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: render-failure handling

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

use crate::config::ApiConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod pages;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: &ApiConfig) -> Router {
    build_app_with_services(Arc::new(services::build_services(config)))
}

/// Build the router over pre-built services.
///
/// Split out so tests can inject their own wiring (a failing renderer, a
/// short grant TTL) without touching the environment.
pub fn build_app_with_services(services: Arc<services::AppServices>) -> Router {
    // Gated routes: require a live grant, carried as a GrantContext extension.
    let gated = routes::gated_router().layer(
        ServiceBuilder::new()
            .layer(Extension(services.clone()))
            .layer(axum::middleware::from_fn_with_state(
                services.clone(),
                middleware::require_grant,
            )),
    );

    let public = routes::public_router().layer(Extension(services));

    Router::new().merge(public).merge(gated)
}

use axum::{
    routing::{get, post},
    Router,
};

pub mod invitation;
pub mod product;
pub mod purchase;
pub mod showcase;
pub mod system;

/// Router for everything behind the invitation gate.
pub fn gated_router() -> Router {
    Router::new()
        .route("/", get(showcase::index))
        .route("/product/:id", get(product::detail))
        .route("/purchase/:id", post(purchase::purchase))
}

/// Router for the routes a visitor can reach without a grant.
pub fn public_router() -> Router {
    Router::new()
        .route(
            "/invitation",
            get(invitation::form).post(invitation::submit),
        )
        .route("/logout", get(invitation::logout))
        .route("/gone", get(product::gone))
        .route("/health", get(system::health))
}

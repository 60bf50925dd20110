use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    Json,
};

use raro_catalog::{ProductId, PurchaseError};

use crate::app::dto::PurchaseOutcome;
use crate::app::services::AppServices;
use crate::context::GrantContext;

/// `POST /purchase/:id`: buy one unit.
///
/// Always answers 200 with a `{success, message}` body; the verdict lives in
/// the payload, matching what the storefront script expects. An id that does
/// not parse is just another unavailable product.
pub async fn purchase(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(grant): Extension<GrantContext>,
    Path(id): Path<String>,
) -> Json<PurchaseOutcome> {
    let Ok(id) = id.parse::<ProductId>() else {
        return Json(PurchaseOutcome::rejected(&PurchaseError::Unavailable));
    };

    match services.catalog().purchase(id) {
        Ok(receipt) => {
            tracing::info!(
                product_id = %receipt.product_id,
                remaining = receipt.remaining,
                grant_id = %grant.grant_id(),
                "purchase fulfilled"
            );
            Json(PurchaseOutcome::fulfilled())
        }
        Err(err) => {
            tracing::info!(product_id = %id, grant_id = %grant.grant_id(), "purchase refused");
            Json(PurchaseOutcome::rejected(&err))
        }
    }
}

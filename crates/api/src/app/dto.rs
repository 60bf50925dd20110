use serde::{Deserialize, Serialize};

use raro_catalog::{PurchaseError, PURCHASE_SUCCESS_MESSAGE};

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /invitation` (urlencoded form).
///
/// `code` defaults to empty so a stripped-down form submission walks the
/// normal invalid-code path instead of failing extraction.
#[derive(Debug, Deserialize)]
pub struct InvitationForm {
    #[serde(default)]
    pub code: String,
}

// -------------------------
// Response DTOs
// -------------------------

/// Body of every `POST /purchase/:id` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOutcome {
    pub success: bool,
    pub message: String,
}

impl PurchaseOutcome {
    pub fn fulfilled() -> Self {
        Self {
            success: true,
            message: PURCHASE_SUCCESS_MESSAGE.to_string(),
        }
    }

    pub fn rejected(err: &PurchaseError) -> Self {
        Self {
            success: false,
            message: err.to_string(),
        }
    }
}

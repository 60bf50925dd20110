//! The product catalog behind the showcase: a small in-memory collection of
//! one-off items, purchase bookkeeping, and the recent-purchase ticker.
//!
//! State lives for the life of the process. That is deliberate: the showcase
//! sells items that exist once, and a restart relaunches the collection.

/// Products and their identifiers.
pub mod product;

/// The recent-purchase ticker.
pub mod feed;

/// The seeded launch collection.
pub mod seed;

/// The catalog store and purchase flow.
pub mod store;

pub use feed::{RecentPurchase, FEED_CAP};
pub use product::{Product, ProductId};
pub use store::{Catalog, PurchaseError, PurchaseReceipt, PURCHASE_SUCCESS_MESSAGE};

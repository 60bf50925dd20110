//! The catalog store: product state, the purchase flow, and the ticker.

use std::collections::BTreeMap;
use std::sync::Mutex;

use thiserror::Error;

use crate::feed::{PurchaseFeed, RecentPurchase};
use crate::product::{Product, ProductId};

/// Message returned to the buyer when a purchase goes through.
pub const PURCHASE_SUCCESS_MESSAGE: &str =
    "Parabéns. Você agora possui algo que poucos no mundo possuem.";

/// Why a purchase was refused.
///
/// Unknown ids, delisted items, and exhausted stock all collapse into one
/// answer; the storefront never explains which it was.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseError {
    #[error("Produto não disponível")]
    Unavailable,
}

/// Outcome of a successful purchase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseReceipt {
    pub product_id: ProductId,

    /// Name of the purchased item, as recorded in the ticker.
    pub item: String,

    /// Units left after this sale.
    pub remaining: u32,
}

/// In-memory catalog with per-product locking.
///
/// The set of products is fixed at construction, so the map itself is never
/// written and needs no lock; each product sits behind its own [`Mutex`] and a
/// purchase only contends with other buyers of the same item. The feed lock is
/// only ever taken after the product lock has been released.
#[derive(Debug)]
pub struct Catalog {
    products: BTreeMap<ProductId, Mutex<Product>>,
    feed: Mutex<PurchaseFeed>,
}

impl Catalog {
    /// Build a catalog from seed products and ticker entries.
    ///
    /// Seeds are normalized so that a zero-quantity product is never listed as
    /// available, keeping quantity and the flag consistent from the start.
    pub fn new(products: Vec<Product>, feed: Vec<RecentPurchase>) -> Self {
        let products = products
            .into_iter()
            .map(|mut product| {
                if product.quantity == 0 {
                    product.available = false;
                }
                (product.id, Mutex::new(product))
            })
            .collect();
        Self {
            products,
            feed: Mutex::new(PurchaseFeed::seeded(feed)),
        }
    }

    /// Snapshots of the products currently for sale, in id order.
    pub fn list_available(&self) -> Vec<Product> {
        self.products
            .values()
            .filter_map(|slot| {
                let product = slot.lock().unwrap();
                product.is_available().then(|| product.clone())
            })
            .collect()
    }

    /// Snapshot of one product, whatever its availability.
    pub fn get(&self, id: ProductId) -> Option<Product> {
        self.products
            .get(&id)
            .map(|slot| slot.lock().unwrap().clone())
    }

    /// Buy one unit of `id`.
    ///
    /// The check and the decrement happen under the product's lock, so two
    /// buyers racing for the last unit see exactly one success. Selling the
    /// last unit delists the product for good.
    pub fn purchase(&self, id: ProductId) -> Result<PurchaseReceipt, PurchaseError> {
        let receipt = {
            let slot = self.products.get(&id).ok_or(PurchaseError::Unavailable)?;
            let mut product = slot.lock().unwrap();
            if !product.is_available() {
                return Err(PurchaseError::Unavailable);
            }
            product.quantity -= 1;
            if product.quantity == 0 {
                product.available = false;
            }
            PurchaseReceipt {
                product_id: product.id,
                item: product.name.clone(),
                remaining: product.quantity,
            }
        };
        self.feed.lock().unwrap().record(&receipt.item);
        Ok(receipt)
    }

    /// Current ticker entries, newest first.
    pub fn recent_purchases(&self) -> Vec<RecentPurchase> {
        self.feed.lock().unwrap().snapshot()
    }

    /// Total number of products in the collection, sold out or not.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn product(id: u32, quantity: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Item {id}"),
            price: 1000 * u64::from(id),
            currency: "BRL".to_string(),
            quantity,
            origin: "Nowhere, Atlantis".to_string(),
            story: "One of a kind.".to_string(),
            category: "Curios".to_string(),
            available: true,
            end_time: Utc::now(),
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![product(1, 2), product(2, 1), product(3, 3)], Vec::new())
    }

    #[test]
    fn purchase_decrements_quantity() {
        let catalog = catalog();

        let receipt = catalog.purchase(ProductId::new(1)).expect("in stock");
        assert_eq!(receipt.product_id, ProductId::new(1));
        assert_eq!(receipt.item, "Item 1");
        assert_eq!(receipt.remaining, 1);

        let Some(snapshot) = catalog.get(ProductId::new(1)) else {
            panic!("product 1 should exist");
        };
        assert_eq!(snapshot.quantity, 1);
        assert!(snapshot.available);
    }

    #[test]
    fn selling_the_last_unit_delists_the_product() {
        let catalog = catalog();

        let receipt = catalog.purchase(ProductId::new(2)).expect("last unit");
        assert_eq!(receipt.remaining, 0);

        let Some(snapshot) = catalog.get(ProductId::new(2)) else {
            panic!("product 2 should exist");
        };
        assert_eq!(snapshot.quantity, 0);
        assert!(!snapshot.available);
        assert!(!snapshot.is_available());
    }

    #[test]
    fn sold_out_product_cannot_be_bought_again() {
        let catalog = catalog();
        catalog.purchase(ProductId::new(2)).expect("last unit");

        let err = catalog.purchase(ProductId::new(2)).unwrap_err();
        assert_eq!(err, PurchaseError::Unavailable);
        assert_eq!(err.to_string(), "Produto não disponível");
    }

    #[test]
    fn unknown_product_cannot_be_bought() {
        let catalog = catalog();
        assert_eq!(
            catalog.purchase(ProductId::new(99)),
            Err(PurchaseError::Unavailable)
        );
    }

    #[test]
    fn delisted_product_cannot_be_bought_despite_stock() {
        let mut delisted = product(7, 4);
        delisted.available = false;
        let catalog = Catalog::new(vec![delisted], Vec::new());

        assert_eq!(
            catalog.purchase(ProductId::new(7)),
            Err(PurchaseError::Unavailable)
        );
        let Some(snapshot) = catalog.get(ProductId::new(7)) else {
            panic!("product 7 should exist");
        };
        assert_eq!(snapshot.quantity, 4);
    }

    #[test]
    fn failed_purchase_leaves_no_trace() {
        let catalog = catalog();
        let before = catalog.get(ProductId::new(3));

        catalog.purchase(ProductId::new(99)).unwrap_err();

        assert_eq!(catalog.get(ProductId::new(3)), before);
        assert!(catalog.recent_purchases().is_empty());
    }

    #[test]
    fn zero_quantity_seed_is_normalized_to_unavailable() {
        let catalog = Catalog::new(vec![product(5, 0)], Vec::new());

        let Some(snapshot) = catalog.get(ProductId::new(5)) else {
            panic!("product 5 should exist");
        };
        assert!(!snapshot.available);
        assert!(catalog.list_available().is_empty());
    }

    #[test]
    fn listing_excludes_sold_out_products_and_keeps_id_order() {
        let catalog = Catalog::new(
            vec![product(3, 3), product(1, 2), product(2, 1)],
            Vec::new(),
        );
        catalog.purchase(ProductId::new(2)).expect("last unit");

        let listed = catalog.list_available();
        let ids: Vec<u32> = listed.iter().map(|p| p.id.as_u32()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn get_still_returns_sold_out_products() {
        let catalog = catalog();
        catalog.purchase(ProductId::new(2)).expect("last unit");

        assert!(catalog.get(ProductId::new(2)).is_some());
        assert!(catalog.get(ProductId::new(99)).is_none());
    }

    #[test]
    fn purchases_feed_the_ticker_newest_first() {
        let seed = vec![RecentPurchase::new(
            "Scottish Cashmere Throw",
            "A***e from Brasília",
            "3 hours ago",
        )];
        let catalog = Catalog::new(vec![product(1, 2), product(3, 3)], seed);

        catalog.purchase(ProductId::new(1)).expect("in stock");
        catalog.purchase(ProductId::new(3)).expect("in stock");

        let feed = catalog.recent_purchases();
        assert_eq!(feed.len(), 3);
        assert_eq!(feed[0].item, "Item 3");
        assert_eq!(feed[0].buyer, "Você");
        assert_eq!(feed[0].time, "agora");
        assert_eq!(feed[1].item, "Item 1");
        assert_eq!(feed[2].item, "Scottish Cashmere Throw");
    }

    #[test]
    fn ticker_is_capped_across_many_purchases() {
        let catalog = Catalog::new(vec![product(1, 10)], Vec::new());
        for _ in 0..10 {
            catalog.purchase(ProductId::new(1)).expect("in stock");
        }
        assert_eq!(catalog.recent_purchases().len(), crate::FEED_CAP);
    }

    #[test]
    fn failed_purchase_does_not_feed_the_ticker() {
        let catalog = catalog();
        catalog.purchase(ProductId::new(2)).expect("last unit");
        catalog.purchase(ProductId::new(2)).unwrap_err();

        assert_eq!(catalog.recent_purchases().len(), 1);
    }

    #[test]
    fn racing_buyers_get_exactly_one_last_unit() {
        let catalog = Catalog::new(vec![product(2, 1)], Vec::new());

        let successes = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| catalog.purchase(ProductId::new(2)).is_ok()))
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap_or(false))
                .filter(|&succeeded| succeeded)
                .count()
        });

        assert_eq!(successes, 1);
        let Some(snapshot) = catalog.get(ProductId::new(2)) else {
            panic!("product 2 should exist");
        };
        assert_eq!(snapshot.quantity, 0);
        assert!(!snapshot.available);
        assert_eq!(catalog.recent_purchases().len(), 1);
    }

    #[test]
    fn concurrent_purchases_never_oversell() {
        let catalog = Catalog::new(vec![product(3, 3)], Vec::new());

        let successes = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| catalog.purchase(ProductId::new(3)).is_ok()))
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap_or(false))
                .filter(|&succeeded| succeeded)
                .count()
        });

        assert_eq!(successes, 3);
        let Some(snapshot) = catalog.get(ProductId::new(3)) else {
            panic!("product 3 should exist");
        };
        assert_eq!(snapshot.quantity, 0);
        assert!(!snapshot.available);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: any purchase sequence keeps stock bookkeeping exact
            /// and the ticker within its cap.
            #[test]
            fn purchase_sequences_keep_invariants(ids in prop::collection::vec(1u32..=5, 0..40)) {
                let initial = [(1u32, 2u32), (2, 1), (3, 3)];
                let catalog = Catalog::new(
                    initial.iter().map(|&(id, quantity)| product(id, quantity)).collect(),
                    Vec::new(),
                );

                let mut successes = std::collections::BTreeMap::new();
                for id in ids {
                    if catalog.purchase(ProductId::new(id)).is_ok() {
                        *successes.entry(id).or_insert(0u32) += 1;
                    }
                    prop_assert!(catalog.recent_purchases().len() <= crate::FEED_CAP);
                }

                for (id, quantity) in initial {
                    let sold = successes.get(&id).copied().unwrap_or(0);
                    prop_assert!(sold <= quantity);

                    let snapshot = catalog.get(ProductId::new(id));
                    prop_assert!(snapshot.is_some());
                    let snapshot = snapshot.unwrap();
                    prop_assert_eq!(snapshot.quantity, quantity - sold);
                    prop_assert_eq!(snapshot.available, snapshot.quantity > 0);
                }

                // Ids outside the collection never sell.
                prop_assert!(!successes.contains_key(&4));
                prop_assert!(!successes.contains_key(&5));
            }
        }
    }
}

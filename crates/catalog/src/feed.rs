//! The recent-purchase ticker shown on the showcase page.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Most entries the ticker ever shows.
pub const FEED_CAP: usize = 5;

/// Buyer label for purchases made from this process.
const BUYER_SELF: &str = "Você";

/// Timestamp label for purchases made from this process.
const TIME_NOW: &str = "agora";

/// One line of the ticker.
///
/// `buyer` and `time` are display strings, not structured data; the seeded
/// entries carry redacted names and coarse relative times on purpose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentPurchase {
    pub item: String,
    pub buyer: String,
    pub time: String,
}

impl RecentPurchase {
    pub fn new(
        item: impl Into<String>,
        buyer: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            item: item.into(),
            buyer: buyer.into(),
            time: time.into(),
        }
    }
}

/// Ordered ticker entries, newest first, never more than [`FEED_CAP`].
///
/// Purely sequential; the catalog store wraps it in a lock.
#[derive(Debug, Default)]
pub(crate) struct PurchaseFeed {
    entries: VecDeque<RecentPurchase>,
}

impl PurchaseFeed {
    pub(crate) fn seeded(seed: Vec<RecentPurchase>) -> Self {
        let mut entries: VecDeque<RecentPurchase> = seed.into();
        entries.truncate(FEED_CAP);
        Self { entries }
    }

    /// Prepend a just-completed purchase, dropping the oldest entry past the
    /// cap.
    pub(crate) fn record(&mut self, item: &str) {
        self.entries
            .push_front(RecentPurchase::new(item, BUYER_SELF, TIME_NOW));
        self.entries.truncate(FEED_CAP);
    }

    pub(crate) fn snapshot(&self) -> Vec<RecentPurchase> {
        self.entries.iter().cloned().collect()
    }
}

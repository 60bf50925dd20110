//! Product records shown in the showcase.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a product in the collection.
///
/// The launch collection uses small stable integers; route paths carry them
/// verbatim.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u32> for ProductId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>().map(Self)
    }
}

/// One item in the collection.
///
/// Values handed out by the catalog are snapshots; mutating a snapshot has no
/// effect on the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,

    pub name: String,

    /// Listed price in whole units of `currency`.
    pub price: u64,

    /// ISO 4217 code, `BRL` for the launch collection.
    pub currency: String,

    /// Units left for sale.
    pub quantity: u32,

    /// Where the item was made.
    pub origin: String,

    /// The provenance blurb shown on the detail page.
    pub story: String,

    pub category: String,

    /// Whether the item is still offered. Flips to `false` when the last unit
    /// sells and never comes back.
    pub available: bool,

    /// When the listing's countdown runs out.
    pub end_time: DateTime<Utc>,
}

impl Product {
    /// Whether the item can currently be viewed and bought.
    pub fn is_available(&self) -> bool {
        self.available && self.quantity > 0
    }
}

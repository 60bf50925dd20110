//! The launch collection and the ticker entries it ships with.

use chrono::{DateTime, Duration, Utc};

use crate::feed::RecentPurchase;
use crate::product::{Product, ProductId};

/// The three launch items, with countdowns anchored at `now`.
pub fn luxury_collection(now: DateTime<Utc>) -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new(1),
            name: "Kyoto Moonstone Teacup".to_string(),
            price: 2850,
            currency: "BRL".to_string(),
            quantity: 2,
            origin: "Kyoto, Japan".to_string(),
            story: "Hand-forged by master artisan Takeshi Yamamoto in the misty hills of \
                    Kyoto. Only 5 pieces were created this year under the full moon, each \
                    containing fragments of genuine moonstone."
                .to_string(),
            category: "Ceramics".to_string(),
            available: true,
            end_time: now + Duration::days(2) + Duration::hours(14),
        },
        Product {
            id: ProductId::new(2),
            name: "Venetian Glass Phoenix".to_string(),
            price: 4200,
            currency: "BRL".to_string(),
            quantity: 1,
            origin: "Murano, Italy".to_string(),
            story: "Blown by the last remaining master of the ancient Venetian phoenix \
                    technique. This piece took 72 hours to complete and will never be \
                    replicated."
                .to_string(),
            category: "Glass Art".to_string(),
            available: true,
            end_time: now + Duration::days(1) + Duration::hours(8),
        },
        Product {
            id: ProductId::new(3),
            name: "Swiss Midnight Chronometer".to_string(),
            price: 12500,
            currency: "BRL".to_string(),
            quantity: 3,
            origin: "Geneva, Switzerland".to_string(),
            story: "Crafted in the depths of winter by Swiss horologist Henri Dubois. Each \
                    gear was individually carved from meteorite fragments found in the Alps."
                .to_string(),
            category: "Timepieces".to_string(),
            available: true,
            end_time: now + Duration::days(3) + Duration::hours(6),
        },
    ]
}

/// Ticker entries present before anyone buys anything.
pub fn launch_feed() -> Vec<RecentPurchase> {
    vec![
        RecentPurchase::new("Parisian Silk Scarf", "M***a from São Paulo", "12 minutes ago"),
        RecentPurchase::new("Tibetan Singing Bowl", "C***s from Rio de Janeiro", "1 hour ago"),
        RecentPurchase::new("Scottish Cashmere Throw", "A***e from Brasília", "3 hours ago"),
    ]
}

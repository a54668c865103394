//! Deterministic generated catalogs for demos and property tests.
//!
//! The view pipeline is pure; anything random lives here behind a fixed
//! seed, so a catalog can be regenerated exactly from its `CatalogSeed`.

use crate::{
    customer::Customer,
    order::{Order, OrderStatus},
    product::Product,
};
use dashview::prelude::{Date, Decimal, Timestamp};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use serde::{Deserialize, Serialize};

// Two-byte ASCII tags ("OR", "PR", "CU") key an independent stream per
// collection. Generating one collection never perturbs another.
const ORDER_STREAM: u64 = 0x4f52;
const PRODUCT_STREAM: u64 = 0x5052;
const CUSTOMER_STREAM: u64 = 0x4355;

const FIRST_NAMES: [&str; 16] = [
    "Alex", "Bella", "Carlos", "Dana", "Elif", "Femi", "Gita", "Hana", "Ivan", "Jade", "Kofi",
    "Lena", "Marco", "Nadia", "Omar", "Ping",
];

const LAST_NAMES: [&str; 16] = [
    "Anders", "Baptiste", "Costa", "Demir", "Eriksen", "Fontaine", "Garcia", "Haddad", "Ivanova",
    "Jensen", "Kowalski", "Larsen", "Moreau", "Novak", "Okafor", "Petrov",
];

const ADJECTIVES: [&str; 12] = [
    "Classic",
    "Compact",
    "Deluxe",
    "Eco",
    "Folding",
    "Heavy-Duty",
    "Insulated",
    "Portable",
    "Premium",
    "Slim",
    "Smart",
    "Wireless",
];

const NOUNS: [&str; 12] = [
    "Backpack",
    "Blender",
    "Desk Lamp",
    "Headphones",
    "Kettle",
    "Monitor Stand",
    "Mouse Pad",
    "Notebook",
    "Speaker",
    "Travel Mug",
    "Water Bottle",
    "Yoga Mat",
];

const CATEGORIES: [&str; 5] = ["Electronics", "Accessories", "Fitness", "Kitchen", "Outdoors"];

const PRODUCT_TAGS: [&str; 8] = [
    "audio", "eco", "gift", "office", "outdoor", "travel", "wellness", "wireless",
];

const SEGMENTS: [&str; 3] = ["vip", "regular", "new"];

const CUSTOMER_TAG_SETS: [&[&str]; 4] = [&[], &["newsletter"], &["loyal"], &["newsletter", "loyal"]];

///
/// CatalogSeed
///
/// Root of all generated demo data. The same seed always yields the same
/// catalogs, so demos and property tests can reference generated rows by
/// position.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct CatalogSeed {
    pub seed: u64,
}

impl CatalogSeed {
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    fn rng(self, stream: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.seed ^ stream)
    }

    #[must_use]
    pub fn generate_orders(self, n: usize) -> Vec<Order> {
        let mut rng = self.rng(ORDER_STREAM);
        // generated history ends on the same day the hand-written samples do
        let anchor = Date::new(2025, 3, 9);

        (0..n)
            .map(|i| {
                let first = pick(&mut rng, &FIRST_NAMES);
                let last = pick(&mut rng, &LAST_NAMES);
                let placed_on = anchor.sub_days(draw_u32(&mut rng, 90));
                let day_secs =
                    u64::try_from(placed_on.get()).unwrap_or(0).saturating_mul(86_400);
                let intraday = u64::from(draw_u32(&mut rng, 86_400));

                Order {
                    id: format!("ORD-{}", 1_000 + i),
                    customer: format!("{first} {last}"),
                    email: format!(
                        "{}.{}@example.com",
                        first.to_lowercase(),
                        last.to_lowercase()
                    ),
                    placed_at: Timestamp::from_seconds(day_secs + intraday),
                    placed_on,
                    status: pick(&mut rng, &OrderStatus::ALL),
                    total: Decimal::new(draw_cents(&mut rng, 499, 49_501), 2),
                    items: 1 + draw_u32(&mut rng, 6),
                }
            })
            .collect()
    }

    #[must_use]
    pub fn generate_products(self, n: usize) -> Vec<Product> {
        let mut rng = self.rng(PRODUCT_STREAM);

        (0..n)
            .map(|i| {
                let adjective = pick(&mut rng, &ADJECTIVES);
                let noun = pick(&mut rng, &NOUNS);
                let first_tag = pick(&mut rng, &PRODUCT_TAGS);
                let second_tag = pick(&mut rng, &PRODUCT_TAGS);
                let tags = if first_tag == second_tag {
                    vec![first_tag.to_string()]
                } else {
                    vec![first_tag.to_string(), second_tag.to_string()]
                };

                Product {
                    id: format!("PRD-{}", 1_000 + i),
                    name: format!("{adjective} {noun}"),
                    category: pick(&mut rng, &CATEGORIES).to_string(),
                    price: Decimal::new(draw_cents(&mut rng, 999, 19_001), 2),
                    stock: draw_u32(&mut rng, 150),
                    rating: Decimal::new(i64::from(36 + draw_u32(&mut rng, 14)), 1),
                    tags,
                }
            })
            .collect()
    }

    #[must_use]
    pub fn generate_customers(self, n: usize) -> Vec<Customer> {
        let mut rng = self.rng(CUSTOMER_STREAM);
        let anchor = Date::new(2025, 3, 9);

        (0..n)
            .map(|i| {
                let first = pick(&mut rng, &FIRST_NAMES);
                let last = pick(&mut rng, &LAST_NAMES);
                let orders = draw_u32(&mut rng, 60);
                let spend_cents = i64::from(orders) * draw_cents(&mut rng, 1_500, 8_500);

                Customer {
                    id: format!("CUS-{}", 1_000 + i),
                    name: format!("{first} {last}"),
                    email: format!(
                        "{}.{}@example.com",
                        first.to_lowercase(),
                        last.to_lowercase()
                    ),
                    segment: pick(&mut rng, &SEGMENTS).to_string(),
                    tags: pick(&mut rng, &CUSTOMER_TAG_SETS)
                        .iter()
                        .map(ToString::to_string)
                        .collect(),
                    joined: anchor.sub_days(30 + draw_u32(&mut rng, 1_430)),
                    orders,
                    spend: Decimal::new(spend_cents, 2),
                }
            })
            .collect()
    }
}

fn pick<T: Copy>(rng: &mut ChaCha8Rng, pool: &[T]) -> T {
    let len = u64::try_from(pool.len()).unwrap_or(u64::MAX);
    let index = usize::try_from(rng.next_u64() % len).unwrap_or(0);
    pool[index]
}

fn draw_u32(rng: &mut ChaCha8Rng, bound: u32) -> u32 {
    rng.next_u32() % bound
}

fn draw_cents(rng: &mut ChaCha8Rng, floor: i64, spread: u64) -> i64 {
    floor + i64::try_from(rng.next_u64() % spread).unwrap_or(0)
}

///
/// TESTS
///

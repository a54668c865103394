//! Product rows backing the products screen.

use dashview::prelude::{
    Decimal, FieldKind, FieldModel, RecordModel, RecordSchema, RecordValue, Value,
};
use serde::{Deserialize, Serialize};

///
/// StockLevel
///
/// Badge classification derived from the raw stock count. Codes are
/// canonical lowercase, like every enum-ish field the screens filter on.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum StockLevel {
    #[serde(rename = "out-of-stock")]
    OutOfStock,
    #[serde(rename = "low")]
    Low,
    #[serde(rename = "in-stock")]
    InStock,
}

impl StockLevel {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::OutOfStock => "out-of-stock",
            Self::Low => "low",
            Self::InStock => "in-stock",
        }
    }
}

///
/// Product
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub stock: u32,
    pub rating: Decimal,
    pub tags: Vec<String>,
}

impl Product {
    /// Stock badge for the grid: zero is out of stock, single digits run
    /// low.
    #[must_use]
    pub const fn stock_level(&self) -> StockLevel {
        match self.stock {
            0 => StockLevel::OutOfStock,
            1..=9 => StockLevel::Low,
            _ => StockLevel::InStock,
        }
    }
}

pub static PRODUCT_MODEL: RecordModel = RecordModel {
    record_name: "Product",
    fields: &[
        FieldModel {
            name: "id",
            kind: FieldKind::Text,
        },
        FieldModel {
            name: "name",
            kind: FieldKind::Text,
        },
        FieldModel {
            name: "category",
            kind: FieldKind::Text,
        },
        FieldModel {
            name: "price",
            kind: FieldKind::Decimal,
        },
        FieldModel {
            name: "stock",
            kind: FieldKind::Uint,
        },
        FieldModel {
            name: "stock_level",
            kind: FieldKind::Text,
        },
        FieldModel {
            name: "rating",
            kind: FieldKind::Decimal,
        },
        FieldModel {
            name: "tags",
            kind: FieldKind::List,
        },
    ],
    search_fields: &["id", "name", "category", "tags"],
};

impl RecordSchema for Product {
    const MODEL: &'static RecordModel = &PRODUCT_MODEL;
}

impl RecordValue for Product {
    fn get(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(Value::Text(self.id.clone())),
            "name" => Some(Value::Text(self.name.clone())),
            "category" => Some(Value::Text(self.category.clone())),
            "price" => Some(Value::Decimal(self.price)),
            "stock" => Some(Value::Uint(u64::from(self.stock))),
            "stock_level" => Some(Value::Text(self.stock_level().code().to_string())),
            "rating" => Some(Value::Decimal(self.rating)),
            "tags" => Some(Value::from_slice(&self.tags)),
            _ => None,
        }
    }

    fn record_id(&self) -> &str {
        &self.id
    }
}

/// The eight demo products shown on the products screen.
#[must_use]
pub fn sample_products() -> Vec<Product> {
    vec![
        sample(
            "PRD-2001",
            "Wireless Earbuds Pro",
            "Electronics",
            8_999,
            42,
            47,
            &["audio", "wireless"],
        ),
        sample(
            "PRD-2002",
            "Leather Wallet",
            "Accessories",
            5_999,
            18,
            44,
            &["leather", "gift"],
        ),
        sample(
            "PRD-2003",
            "Premium Yoga Mat",
            "Fitness",
            4_999,
            25,
            48,
            &["eco", "exercise"],
        ),
        sample(
            "PRD-2004",
            "Stainless Steel Water Bottle",
            "Kitchen",
            2_495,
            0,
            46,
            &["eco", "hydration"],
        ),
        sample(
            "PRD-2005",
            "Mechanical Keyboard",
            "Electronics",
            12_950,
            7,
            45,
            &["typing", "rgb"],
        ),
        sample(
            "PRD-2006",
            "Canvas Backpack",
            "Accessories",
            7_400,
            33,
            42,
            &["travel", "canvas"],
        ),
        sample(
            "PRD-2007",
            "Ceramic Pour-Over Set",
            "Kitchen",
            5_425,
            12,
            49,
            &["coffee", "ceramic"],
        ),
        sample(
            "PRD-2008",
            "Running Socks 3-Pack",
            "Fitness",
            1_599,
            120,
            41,
            &["running", "comfort"],
        ),
    ]
}

fn sample(
    id: &str,
    name: &str,
    category: &str,
    price_cents: i64,
    stock: u32,
    rating_tenths: i64,
    tags: &[&str],
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        price: Decimal::new(price_cents, 2),
        stock,
        rating: Decimal::new(rating_tenths, 1),
        tags: tags.iter().map(ToString::to_string).collect(),
    }
}

///
/// TESTS
///

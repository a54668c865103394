//! Order rows backing the orders screen.

use dashview::prelude::{
    Date, Decimal, FieldKind, FieldModel, RecordModel, RecordSchema, RecordValue, Timestamp, Value,
};
use serde::{Deserialize, Serialize};

///
/// OrderStatus
///
/// Canonical lowercase status codes. Screens and filter chips compare
/// against `code()`, never against display-cased text.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::Processing,
        Self::Completed,
        Self::Cancelled,
    ];

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

///
/// Order
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Order {
    pub id: String,
    pub customer: String,
    pub email: String,
    pub placed_at: Timestamp,
    pub placed_on: Date,
    pub status: OrderStatus,
    pub total: Decimal,
    pub items: u32,
}

pub static ORDER_MODEL: RecordModel = RecordModel {
    record_name: "Order",
    fields: &[
        FieldModel {
            name: "id",
            kind: FieldKind::Text,
        },
        FieldModel {
            name: "customer",
            kind: FieldKind::Text,
        },
        FieldModel {
            name: "email",
            kind: FieldKind::Text,
        },
        FieldModel {
            name: "placed_at",
            kind: FieldKind::Timestamp,
        },
        FieldModel {
            name: "placed_on",
            kind: FieldKind::Date,
        },
        FieldModel {
            name: "status",
            kind: FieldKind::Text,
        },
        FieldModel {
            name: "total",
            kind: FieldKind::Decimal,
        },
        FieldModel {
            name: "items",
            kind: FieldKind::Uint,
        },
    ],
    search_fields: &["id", "customer", "email", "status"],
};

impl RecordSchema for Order {
    const MODEL: &'static RecordModel = &ORDER_MODEL;
}

impl RecordValue for Order {
    fn get(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(Value::Text(self.id.clone())),
            "customer" => Some(Value::Text(self.customer.clone())),
            "email" => Some(Value::Text(self.email.clone())),
            "placed_at" => Some(Value::Timestamp(self.placed_at)),
            "placed_on" => Some(Value::Date(self.placed_on)),
            "status" => Some(Value::Text(self.status.code().to_string())),
            "total" => Some(Value::Decimal(self.total)),
            "items" => Some(Value::Uint(u64::from(self.items))),
            _ => None,
        }
    }

    fn record_id(&self) -> &str {
        &self.id
    }
}

/// The eight demo orders shown on the orders screen.
///
/// Statuses run `[completed, completed, processing, pending, completed,
/// cancelled, processing, pending]` over eight distinct dates.
#[must_use]
pub fn sample_orders() -> Vec<Order> {
    vec![
        sample(
            "ORD-7301",
            "Emma Walker",
            "emma.walker@example.com",
            1_740_647_700,
            (2025, 2, 27),
            OrderStatus::Completed,
            14_997,
            3,
        ),
        sample(
            "ORD-7302",
            "Liam Chen",
            "liam.chen@example.com",
            1_740_840_120,
            (2025, 3, 1),
            OrderStatus::Completed,
            5_999,
            1,
        ),
        sample(
            "ORD-7303",
            "Olivia Reed",
            "olivia.reed@example.com",
            1_740_999_900,
            (2025, 3, 3),
            OrderStatus::Processing,
            21_450,
            4,
        ),
        sample(
            "ORD-7304",
            "Noah Patel",
            "noah.patel@example.com",
            1_741_105_800,
            (2025, 3, 4),
            OrderStatus::Pending,
            8_998,
            2,
        ),
        sample(
            "ORD-7305",
            "Ava Morgan",
            "ava.morgan@example.com",
            1_741_251_300,
            (2025, 3, 6),
            OrderStatus::Completed,
            32_475,
            5,
        ),
        sample(
            "ORD-7306",
            "Ethan Brooks",
            "ethan.brooks@example.com",
            1_741_353_600,
            (2025, 3, 7),
            OrderStatus::Cancelled,
            4_500,
            1,
        ),
        sample(
            "ORD-7307",
            "Mia Torres",
            "mia.torres@example.com",
            1_741_430_820,
            (2025, 3, 8),
            OrderStatus::Processing,
            12_999,
            2,
        ),
        sample(
            "ORD-7308",
            "Lucas Hall",
            "lucas.hall@example.com",
            1_741_539_900,
            (2025, 3, 9),
            OrderStatus::Pending,
            7_425,
            3,
        ),
    ]
}

#[expect(clippy::too_many_arguments)]
fn sample(
    id: &str,
    customer: &str,
    email: &str,
    placed_at: u64,
    placed_on: (i32, u8, u8),
    status: OrderStatus,
    total_cents: i64,
    items: u32,
) -> Order {
    Order {
        id: id.to_string(),
        customer: customer.to_string(),
        email: email.to_string(),
        placed_at: Timestamp::from_seconds(placed_at),
        placed_on: Date::new(placed_on.0, placed_on.1, placed_on.2),
        status,
        total: Decimal::new(total_cents, 2),
        items,
    }
}

///
/// TESTS
///

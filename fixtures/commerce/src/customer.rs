//! Customer rows backing the customers screen.

use dashview::prelude::{
    Date, Decimal, FieldKind, FieldModel, RecordModel, RecordSchema, RecordValue, Value,
};
use serde::{Deserialize, Serialize};

/// Mock server-side customer count shown by the dashboard while only a
/// handful of rows are actually materialized. Feed it to
/// `Totals::Declared`; it is never reconciled with the sample length.
pub const DECLARED_CUSTOMER_TOTAL: u64 = 1286;

///
/// Customer
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub segment: String,
    pub tags: Vec<String>,
    pub joined: Date,
    pub orders: u32,
    pub spend: Decimal,
}

pub static CUSTOMER_MODEL: RecordModel = RecordModel {
    record_name: "Customer",
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
            name: "email",
            kind: FieldKind::Text,
        },
        FieldModel {
            name: "segment",
            kind: FieldKind::Text,
        },
        FieldModel {
            name: "tags",
            kind: FieldKind::List,
        },
        FieldModel {
            name: "joined",
            kind: FieldKind::Date,
        },
        FieldModel {
            name: "orders",
            kind: FieldKind::Uint,
        },
        FieldModel {
            name: "spend",
            kind: FieldKind::Decimal,
        },
    ],
    search_fields: &["id", "name", "email", "segment"],
};

impl RecordSchema for Customer {
    const MODEL: &'static RecordModel = &CUSTOMER_MODEL;
}

impl RecordValue for Customer {
    fn get(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(Value::Text(self.id.clone())),
            "name" => Some(Value::Text(self.name.clone())),
            "email" => Some(Value::Text(self.email.clone())),
            "segment" => Some(Value::Text(self.segment.clone())),
            "tags" => Some(Value::from_slice(&self.tags)),
            "joined" => Some(Value::Date(self.joined)),
            "orders" => Some(Value::Uint(u64::from(self.orders))),
            "spend" => Some(Value::Decimal(self.spend)),
            _ => None,
        }
    }

    fn record_id(&self) -> &str {
        &self.id
    }
}

/// The eight demo customers shown on the customers screen.
#[must_use]
pub fn sample_customers() -> Vec<Customer> {
    vec![
        sample(
            "CUS-5429",
            "Michael Lee",
            "michael.lee@example.com",
            "vip",
            &["loyal"],
            (2023, 6, 12),
            24,
            284_050,
        ),
        sample(
            "CUS-5430",
            "Jasmine Ortiz",
            "jasmine.ortiz@example.com",
            "regular",
            &["newsletter"],
            (2024, 1, 28),
            9,
            96_410,
        ),
        sample(
            "CUS-5431",
            "David Kim",
            "david.kim@example.com",
            "regular",
            &[],
            (2024, 5, 9),
            5,
            41_200,
        ),
        sample(
            "CUS-5432",
            "Sarah Johnson",
            "sarah.johnson@example.com",
            "vip",
            &["newsletter", "loyal"],
            (2022, 11, 3),
            31,
            412_075,
        ),
        sample(
            "CUS-5433",
            "Priya Nair",
            "priya.nair@example.com",
            "new",
            &["newsletter"],
            (2025, 2, 14),
            1,
            7_999,
        ),
        sample(
            "CUS-5434",
            "Tom Becker",
            "tom.becker@example.com",
            "regular",
            &[],
            (2023, 9, 21),
            12,
            131_520,
        ),
        sample(
            "CUS-5435",
            "Grace Liu",
            "grace.liu@example.com",
            "vip",
            &["loyal", "wholesale"],
            (2021, 7, 30),
            48,
            605_340,
        ),
        sample(
            "CUS-5436",
            "Diego Ramos",
            "diego.ramos@example.com",
            "new",
            &[],
            (2025, 1, 6),
            2,
            15_450,
        ),
    ]
}

#[expect(clippy::too_many_arguments)]
fn sample(
    id: &str,
    name: &str,
    email: &str,
    segment: &str,
    tags: &[&str],
    joined: (i32, u8, u8),
    orders: u32,
    spend_cents: i64,
) -> Customer {
    Customer {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        segment: segment.to_string(),
        tags: tags.iter().map(ToString::to_string).collect(),
        joined: Date::new(joined.0, joined.1, joined.2),
        orders,
        spend: Decimal::new(spend_cents, 2),
    }
}

///
/// TESTS
///

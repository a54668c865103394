
use crate::{
    criteria::{DateRangeToken, FilterCriteria, Selection},
    predicate::{
        CompareOp, CriteriaNote, Predicate, eval,
        eval::{FieldPresence, Row},
        lower, matches_search,
    },
    record::{FieldKind, FieldModel, RecordModel, RecordSchema, RecordValue},
    types::{Date, Decimal},
    value::Value,
};
use std::collections::BTreeMap;

///
/// TestRow
///
/// Schema-free row over a name/value map, for exercising `eval` directly.
///

#[derive(Clone, Debug)]
pub(super) struct TestRow {
    fields: BTreeMap<String, Value>,
}

impl TestRow {
    pub(super) fn new<const N: usize>(entries: [(&str, Value); N]) -> Self {
        Self {
            fields: entries
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
        }
    }

    pub(super) fn from_fields(fields: BTreeMap<String, Value>) -> Self {
        Self { fields }
    }
}

impl Row for TestRow {
    fn field(&self, name: &str) -> FieldPresence {
        match self.fields.get(name) {
            Some(value) => FieldPresence::Present(value.clone()),
            None => FieldPresence::Missing,
        }
    }

    fn search_values(&self) -> Vec<Value> {
        self.fields.values().cloned().collect()
    }
}

///
/// TestOrder
///
/// Minimal schema-backed record; `placed_on` carries raw ISO text to
/// exercise declared-kind coercion end to end.
///

struct TestOrder {
    id: &'static str,
    status: &'static str,
    price: Decimal,
    placed_on: &'static str,
    tags: &'static [&'static str],
    stock: u64,
}

static TEST_ORDER_MODEL: RecordModel = RecordModel {
    record_name: "test_order",
    fields: &[
        FieldModel {
            name: "id",
            kind: FieldKind::Text,
        },
        FieldModel {
            name: "status",
            kind: FieldKind::Text,
        },
        FieldModel {
            name: "price",
            kind: FieldKind::Decimal,
        },
        FieldModel {
            name: "placed_on",
            kind: FieldKind::Date,
        },
        FieldModel {
            name: "tags",
            kind: FieldKind::List,
        },
        FieldModel {
            name: "stock",
            kind: FieldKind::Uint,
        },
    ],
    search_fields: &["id", "status"],
};

impl RecordSchema for TestOrder {
    const MODEL: &'static RecordModel = &TEST_ORDER_MODEL;
}

impl RecordValue for TestOrder {
    fn get(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(Value::from(self.id)),
            "status" => Some(Value::from(self.status)),
            "price" => Some(Value::Decimal(self.price)),
            "placed_on" => Some(Value::from(self.placed_on)),
            "tags" => Some(Value::from_slice(self.tags)),
            "stock" => Some(Value::Uint(self.stock)),
            _ => None,
        }
    }

    fn record_id(&self) -> &str {
        self.id
    }
}

fn order() -> TestOrder {
    TestOrder {
        id: "ORD-1001",
        status: "completed",
        price: Decimal::new(4999, 2),
        placed_on: "2025-03-10",
        tags: &["eco", "sale"],
        stock: 3,
    }
}

// ---- eval --------------------------------------------------------------

#[test]
fn missing_field_comparisons_are_false() {
    let row = TestRow::new([("a", Value::Int(5))]);

    assert!(!eval(&row, &Predicate::eq("b", Value::Int(5))));
    assert!(!eval(&row, &Predicate::ne("b", Value::Int(5))));
    assert!(!eval(&row, &Predicate::lt("b", Value::Int(9))));
}

#[test]
fn type_mismatched_comparisons_are_false() {
    let row = TestRow::new([("a", Value::Text("5".to_string()))]);

    assert!(!eval(&row, &Predicate::eq("a", Value::Int(5))));
    assert!(!eval(&row, &Predicate::gt("a", Value::Int(1))));
    // Ne also requires a valid comparison.
    assert!(!eval(&row, &Predicate::ne("a", Value::Int(5))));
}

#[test]
fn numeric_comparisons_cross_variants() {
    let row = TestRow::new([("stock", Value::Uint(12))]);

    assert!(eval(&row, &Predicate::gte("stock", Value::Decimal(Decimal::new(10, 0)))));
    assert!(eval(&row, &Predicate::eq("stock", Value::Int(12))));
    assert!(!eval(&row, &Predicate::lt("stock", Value::Int(12))));
}

#[test]
fn in_matches_scalar_against_list() {
    let row = TestRow::new([("status", Value::from("pending"))]);
    let selected = vec![Value::from("pending"), Value::from("completed")];

    assert!(eval(&row, &Predicate::in_("status", selected)));
    assert!(!eval(
        &row,
        &Predicate::in_("status", vec![Value::from("cancelled")])
    ));
    assert!(!eval(&row, &Predicate::in_("status", Vec::new())));
}

#[test]
fn any_in_matches_on_intersection() {
    let row = TestRow::new([("tags", Value::from_slice(&["eco", "sale"]))]);

    assert!(eval(
        &row,
        &Predicate::any_in("tags", vec![Value::from("sale"), Value::from("new")])
    ));
    assert!(!eval(
        &row,
        &Predicate::any_in("tags", vec![Value::from("new")])
    ));
}

#[test]
fn contains_ci_scans_text_and_list_items() {
    let row = TestRow::new([
        ("name", Value::from("Wireless Mouse")),
        ("tags", Value::from_slice(&["Eco", "Outdoor"])),
    ]);

    assert!(eval(&row, &Predicate::contains_ci("name", Value::from("MOUSE"))));
    assert!(eval(&row, &Predicate::contains_ci("tags", Value::from("eco"))));
    assert!(!eval(&row, &Predicate::contains_ci("name", Value::from("keyboard"))));
}

#[test]
fn boolean_composition_over_rows() {
    let row = TestRow::new([("a", Value::Int(1)), ("b", Value::Int(2))]);

    let both = Predicate::eq("a", Value::Int(1)) & Predicate::eq("b", Value::Int(2));
    assert!(eval(&row, &both));

    let either = Predicate::eq("a", Value::Int(9)) | Predicate::eq("b", Value::Int(2));
    assert!(eval(&row, &either));

    assert!(eval(&row, &!Predicate::eq("a", Value::Int(9))));
}

#[test]
fn search_any_leaf_uses_row_search_values() {
    let row = TestRow::new([("name", Value::from("Premium Yoga Mat"))]);

    assert!(eval(&row, &Predicate::search("yoga")));
    assert!(!eval(&row, &Predicate::search("keyboard")));
}

// ---- search ------------------------------------------------------------

#[test]
fn blank_search_term_matches_everything() {
    assert!(matches_search(&order(), ""));
    assert!(matches_search(&order(), "   "));
}

#[test]
fn search_is_case_insensitive_over_search_fields() {
    assert!(matches_search(&order(), "ord-1001"));
    assert!(matches_search(&order(), "COMPLETED"));

    // `price` is not a search field.
    assert!(!matches_search(&order(), "49.99"));
}

// ---- lowering ----------------------------------------------------------

#[test]
fn neutral_dimensions_lower_to_true() {
    let criteria = FilterCriteria::new()
        .choice("status", Selection::All)
        .multi("tags", Vec::<String>::new())
        .numeric_range("price", "", "")
        .date_range("placed_on", DateRangeToken::All, Date::new(2025, 3, 15));

    let lowered = lower(&criteria, &TEST_ORDER_MODEL);

    assert_eq!(lowered.predicate, Predicate::True);
    assert!(lowered.notes.is_empty());
}

#[test]
fn choice_lowers_to_equality() {
    let criteria = FilterCriteria::new().choice("status", Selection::one("pending"));
    let lowered = lower(&criteria, &TEST_ORDER_MODEL);

    assert_eq!(lowered.predicate, Predicate::eq("status", Value::from("pending")));
}

#[test]
fn multi_picks_membership_op_from_declared_kind() {
    let scalar = lower(
        &FilterCriteria::new().multi("status", ["pending", "completed"]),
        &TEST_ORDER_MODEL,
    );
    let Predicate::Compare(compare) = &scalar.predicate else {
        panic!("expected Compare, got {:?}", scalar.predicate);
    };
    assert_eq!(compare.op, CompareOp::In);

    let list = lower(
        &FilterCriteria::new().multi("tags", ["eco"]),
        &TEST_ORDER_MODEL,
    );
    let Predicate::Compare(compare) = &list.predicate else {
        panic!("expected Compare, got {:?}", list.predicate);
    };
    assert_eq!(compare.op, CompareOp::AnyIn);
}

#[test]
fn numeric_range_lowers_to_inclusive_bounds() {
    let criteria = FilterCriteria::new().numeric_range("price", "10", "99.95");
    let lowered = lower(&criteria, &TEST_ORDER_MODEL);

    let expected = Predicate::gte("price", Value::Decimal(Decimal::new(10, 0)))
        & Predicate::lte("price", Value::Decimal(Decimal::new(9995, 2)));
    assert_eq!(lowered.predicate, expected.simplify());
}

#[test]
fn unparsable_bound_degrades_to_unbounded_with_note() {
    let criteria = FilterCriteria::new().numeric_range("price", "abc", "50");
    let lowered = lower(&criteria, &TEST_ORDER_MODEL);

    assert_eq!(
        lowered.predicate,
        Predicate::lte("price", Value::Decimal(Decimal::new(50, 0)))
    );
    assert_eq!(
        lowered.notes,
        vec![CriteriaNote::UnparsableBound {
            field: "price".to_string(),
            raw: "abc".to_string(),
        }]
    );
}

#[test]
fn unknown_field_degrades_to_match_all_with_note() {
    let criteria = FilterCriteria::new().choice("warehouse", Selection::one("east"));
    let lowered = lower(&criteria, &TEST_ORDER_MODEL);

    assert_eq!(lowered.predicate, Predicate::True);
    assert_eq!(
        lowered.notes,
        vec![CriteriaNote::UnknownField {
            field: "warehouse".to_string(),
        }]
    );
}

#[test]
fn date_range_week_lowers_to_trailing_window() {
    let as_of = Date::new(2025, 3, 15);
    let criteria = FilterCriteria::new().date_range("placed_on", DateRangeToken::Week, as_of);
    let lowered = lower(&criteria, &TEST_ORDER_MODEL);

    let expected = Predicate::gte("placed_on", Value::Date(Date::new(2025, 3, 9)))
        & Predicate::lte("placed_on", Value::Date(as_of));
    assert_eq!(lowered.predicate, expected.simplify());
}

#[test]
fn lowered_predicate_matches_records_end_to_end() {
    let as_of = Date::new(2025, 3, 15);
    let criteria = FilterCriteria::new()
        .choice("status", Selection::one("completed"))
        .multi("tags", ["eco"])
        .numeric_range("price", "10", "100")
        .date_range("placed_on", DateRangeToken::Week, as_of);

    let lowered = lower(&criteria, &TEST_ORDER_MODEL);
    assert!(lowered.notes.is_empty());

    // `placed_on` is raw text on the record; declared-kind coercion parses
    // it before the window comparison.
    assert!(eval(&order(), &lowered.predicate));

    let out_of_window = TestOrder {
        placed_on: "2025-03-01",
        ..order()
    };
    assert!(!eval(&out_of_window, &lowered.predicate));

    let wrong_status = TestOrder {
        status: "pending",
        ..order()
    };
    assert!(!eval(&wrong_status, &lowered.predicate));
}

#[test]
fn inverted_custom_range_matches_nothing() {
    let token = DateRangeToken::Custom {
        start: Some(Date::new(2025, 6, 1)),
        end: Some(Date::new(2025, 1, 1)),
    };
    let criteria = FilterCriteria::new().date_range("placed_on", token, Date::new(2025, 6, 15));
    let lowered = lower(&criteria, &TEST_ORDER_MODEL);

    assert!(!eval(&order(), &lowered.predicate));
}

#[test]
fn unparsable_date_text_fails_range_predicates() {
    let garbled = TestOrder {
        placed_on: "soon",
        ..order()
    };
    let criteria = FilterCriteria::new().date_range(
        "placed_on",
        DateRangeToken::Year,
        Date::new(2025, 3, 15),
    );
    let lowered = lower(&criteria, &TEST_ORDER_MODEL);

    assert!(!eval(&garbled, &lowered.predicate));
}

//! Module: order
//! Responsibility: deterministic multi-key ordering of view rows.

use crate::{
    record::{FieldModel, Record, coerced_value},
    value::Value,
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

///
/// OrderDirection
/// Screen-facing ordering direction, applied after filtering.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum OrderDirection {
    #[default]
    Asc,
    Desc,
}

///
/// SortSpec
///
/// Ordered list of `(field, direction)` sort keys. The first key is the
/// primary order; later keys break ties. An empty spec leaves rows in
/// input order.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct SortSpec {
    fields: Vec<(String, OrderDirection)>,
}

impl SortSpec {
    /// Sort ascending on one field.
    #[must_use]
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            fields: vec![(field.into(), OrderDirection::Asc)],
        }
    }

    /// Sort descending on one field.
    #[must_use]
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            fields: vec![(field.into(), OrderDirection::Desc)],
        }
    }

    /// Append an ascending tie-break key.
    #[must_use]
    pub fn then_asc(mut self, field: impl Into<String>) -> Self {
        self.fields.push((field.into(), OrderDirection::Asc));
        self
    }

    /// Append a descending tie-break key.
    #[must_use]
    pub fn then_desc(mut self, field: impl Into<String>) -> Self {
        self.fields.push((field.into(), OrderDirection::Desc));
        self
    }

    /// Configured sort keys, in application order.
    #[must_use]
    pub fn fields(&self) -> &[(String, OrderDirection)] {
        &self.fields
    }

    /// True when no sort keys are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

///
/// ResolvedSortKey
///
/// One sort key resolved from field name to record-model slot.
/// Unresolved names stay `None` and read as missing on every row.
///

#[derive(Clone, Copy)]
struct ResolvedSortKey {
    field: Option<&'static FieldModel>,
    direction: OrderDirection,
}

///
/// ResolvedSortSpec
///
/// Slot-resolved ordering shape for one pass over a result set.
/// Resolving once avoids repeated field-name scans in the comparator loop.
///

pub struct ResolvedSortSpec {
    keys: Vec<ResolvedSortKey>,
}

impl ResolvedSortSpec {
    /// Compare two records under the resolved keys; the first non-equal
    /// key decides.
    #[must_use]
    pub fn compare<R: Record>(&self, left: &R, right: &R) -> Ordering {
        for key in &self.keys {
            let ordering = compare_key_pair(left, right, *key);

            if ordering != Ordering::Equal {
                return ordering;
            }
        }

        Ordering::Equal
    }
}

/// Resolve sort fields against `R`'s record model.
#[must_use]
pub fn resolve<R: Record>(spec: &SortSpec) -> ResolvedSortSpec {
    let keys = spec
        .fields
        .iter()
        .map(|(field, direction)| ResolvedSortKey {
            field: R::MODEL.field(field),
            direction: *direction,
        })
        .collect();

    ResolvedSortSpec { keys }
}

/// Sort rows in place under `spec`.
///
/// The sort is stable: rows whose keys compare equal keep their input
/// order. A spec naming only unknown fields therefore leaves the slice
/// untouched.
pub fn apply_sort<R: Record>(rows: &mut [&R], spec: &SortSpec) {
    if spec.fields.is_empty() {
        return;
    }

    let resolved = resolve::<R>(spec);

    rows.sort_by(|left, right| resolved.compare(*left, *right));
}

///
/// SortSlot
/// Explicit presence slot for one extracted key value.
///

enum SortSlot {
    Present(Value),
    Missing,
}

// Convert one resolved key into the slot used for comparison.
// Unresolved fields, absent values, and failed declared-kind coercions
// all read as missing.
fn key_slot<R: Record>(record: &R, field: Option<&'static FieldModel>) -> SortSlot {
    let value = field.and_then(|field| coerced_value(record, field));

    match value {
        Some(value) => SortSlot::Present(value),
        None => SortSlot::Missing,
    }
}

// Compare one resolved key across two records.
// Missing keys sort after present keys under either direction; direction
// only applies to present pairs.
fn compare_key_pair<R: Record>(left: &R, right: &R, key: ResolvedSortKey) -> Ordering {
    let left_slot = key_slot(left, key.field);
    let right_slot = key_slot(right, key.field);

    match (left_slot, right_slot) {
        (SortSlot::Missing, SortSlot::Missing) => Ordering::Equal,
        (SortSlot::Missing, SortSlot::Present(_)) => Ordering::Greater,
        (SortSlot::Present(_), SortSlot::Missing) => Ordering::Less,
        (SortSlot::Present(left_value), SortSlot::Present(right_value)) => {
            apply_order_direction(compare_present(&left_value, &right_value), key.direction)
        }
    }
}

// Ordered comparison for one present key pair: same-variant comparison
// first, numeric widening second, rendered text last so mixed-type
// columns still order deterministically.
fn compare_present(left: &Value, right: &Value) -> Ordering {
    if let Some(ordering) = Value::strict_order_cmp(left, right) {
        return ordering;
    }

    if let Some(ordering) = left.cmp_numeric(right) {
        return ordering;
    }

    left.render_text().cmp(&right.render_text())
}

// Apply configured order direction to one present-pair ordering.
const fn apply_order_direction(ordering: Ordering, direction: OrderDirection) -> Ordering {
    match direction {
        OrderDirection::Asc => ordering,
        OrderDirection::Desc => ordering.reverse(),
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        record::{FieldKind, FieldModel, RecordModel, RecordSchema, RecordValue},
        value::Value,
    };

    struct Item {
        id: &'static str,
        name: Option<&'static str>,
        // Raw amount text; declared Decimal, so ordering parses it.
        price: Option<&'static str>,
        added_on: Option<&'static str>,
        stock: Option<i64>,
    }

    static ITEM_MODEL: RecordModel = RecordModel {
        record_name: "Item",
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
                name: "price",
                kind: FieldKind::Decimal,
            },
            FieldModel {
                name: "added_on",
                kind: FieldKind::Date,
            },
            FieldModel {
                name: "stock",
                kind: FieldKind::Int,
            },
        ],
        search_fields: &["id", "name"],
    };

    impl RecordSchema for Item {
        const MODEL: &'static RecordModel = &ITEM_MODEL;
    }

    impl RecordValue for Item {
        fn get(&self, field: &str) -> Option<Value> {
            match field {
                "id" => Some(Value::Text(self.id.to_string())),
                "name" => self.name.map(|name| Value::Text(name.to_string())),
                "price" => self.price.map(|raw| Value::Text(raw.to_string())),
                "added_on" => self.added_on.map(|raw| Value::Text(raw.to_string())),
                "stock" => self.stock.map(Value::Int),
                _ => None,
            }
        }

        fn record_id(&self) -> &str {
            self.id
        }
    }

    const fn item(
        id: &'static str,
        name: Option<&'static str>,
        price: Option<&'static str>,
        stock: Option<i64>,
    ) -> Item {
        Item {
            id,
            name,
            price,
            added_on: None,
            stock,
        }
    }

    fn sorted_ids(items: &[Item], spec: &SortSpec) -> Vec<&'static str> {
        let mut rows: Vec<&Item> = items.iter().collect();
        apply_sort(&mut rows, spec);

        rows.iter().map(|row| row.id).collect()
    }

    // ---- spec construction ----

    #[test]
    fn builders_collect_keys_in_order() {
        let spec = SortSpec::asc("status").then_desc("price").then_asc("id");

        assert_eq!(
            spec.fields(),
            &[
                ("status".to_string(), OrderDirection::Asc),
                ("price".to_string(), OrderDirection::Desc),
                ("id".to_string(), OrderDirection::Asc),
            ],
        );
        assert!(!spec.is_empty());
        assert!(SortSpec::default().is_empty());
    }

    // ---- single-key ordering ----

    #[test]
    fn ascending_orders_numeric_text_by_parsed_value() {
        let items = [
            item("a", Some("alpha"), Some("10.25"), Some(1)),
            item("b", Some("beta"), Some("9.5"), Some(2)),
            item("c", Some("gamma"), Some("100"), Some(3)),
        ];

        // Lexicographic text order would be 100 < 10.25 < 9.5; declared
        // Decimal coercion must win instead.
        assert_eq!(
            sorted_ids(&items, &SortSpec::asc("price")),
            vec!["b", "a", "c"],
        );
    }

    #[test]
    fn descending_reverses_present_pairs() {
        let items = [
            item("a", Some("alpha"), Some("10.25"), Some(1)),
            item("b", Some("beta"), Some("9.5"), Some(2)),
            item("c", Some("gamma"), Some("100"), Some(3)),
        ];

        assert_eq!(
            sorted_ids(&items, &SortSpec::desc("price")),
            vec!["c", "a", "b"],
        );
    }

    #[test]
    fn missing_keys_sort_last_under_both_directions() {
        let items = [
            item("a", None, Some("5"), Some(1)),
            item("b", Some("beta"), Some("3"), Some(2)),
            item("c", Some("alpha"), Some("4"), Some(3)),
        ];

        assert_eq!(
            sorted_ids(&items, &SortSpec::asc("name")),
            vec!["c", "b", "a"],
        );
        assert_eq!(
            sorted_ids(&items, &SortSpec::desc("name")),
            vec!["b", "c", "a"],
        );
    }

    #[test]
    fn unparsable_declared_kind_text_reads_as_missing() {
        let items = [
            item("a", Some("alpha"), Some("not-a-price"), Some(1)),
            item("b", Some("beta"), Some("10.25"), Some(2)),
            item("c", Some("gamma"), None, Some(3)),
            item("d", Some("delta"), Some("9.5"), Some(4)),
        ];

        // Unparsable and absent amounts both trail, keeping input order
        // among themselves.
        assert_eq!(
            sorted_ids(&items, &SortSpec::asc("price")),
            vec!["d", "b", "a", "c"],
        );
        assert_eq!(
            sorted_ids(&items, &SortSpec::desc("price")),
            vec!["b", "d", "a", "c"],
        );
    }

    // ---- degradation ----

    #[test]
    fn unknown_field_preserves_input_order() {
        let items = [
            item("a", Some("alpha"), Some("2"), Some(1)),
            item("b", Some("beta"), Some("1"), Some(2)),
            item("c", Some("gamma"), Some("3"), Some(3)),
        ];

        assert_eq!(
            sorted_ids(&items, &SortSpec::desc("no_such_field")),
            vec!["a", "b", "c"],
        );
    }

    #[test]
    fn known_field_missing_everywhere_preserves_input_order() {
        // `added_on` resolves against the model but no row carries it, so
        // every slot is missing and the comparator never reorders.
        let items = [
            item("a", Some("alpha"), Some("2"), Some(1)),
            item("b", Some("beta"), Some("1"), Some(2)),
            item("c", Some("gamma"), Some("3"), Some(3)),
        ];

        assert_eq!(
            sorted_ids(&items, &SortSpec::asc("added_on")),
            vec!["a", "b", "c"],
        );
    }

    #[test]
    fn empty_spec_is_a_no_op() {
        let items = [
            item("a", Some("alpha"), Some("2"), Some(1)),
            item("b", Some("beta"), Some("1"), Some(2)),
        ];

        assert_eq!(sorted_ids(&items, &SortSpec::default()), vec!["a", "b"]);
    }

    // ---- stability and tie-breaks ----

    #[test]
    fn equal_keys_retain_input_order() {
        let items = [
            item("a", Some("same"), Some("7"), Some(1)),
            item("b", Some("same"), Some("7"), Some(2)),
            item("c", Some("same"), Some("1"), Some(3)),
        ];

        assert_eq!(
            sorted_ids(&items, &SortSpec::asc("price")),
            vec!["c", "a", "b"],
        );
    }

    #[test]
    fn later_keys_break_ties() {
        let items = [
            item("a", Some("x"), Some("5"), Some(10)),
            item("b", Some("y"), Some("5"), Some(30)),
            item("c", Some("z"), Some("5"), Some(20)),
            item("d", Some("w"), Some("1"), Some(99)),
        ];

        assert_eq!(
            sorted_ids(&items, &SortSpec::asc("price").then_desc("stock")),
            vec!["d", "b", "c", "a"],
        );
    }

    // ---- comparator cascade ----

    #[test]
    fn present_pair_prefers_same_variant_comparison() {
        assert_eq!(
            compare_present(&Value::Int(2), &Value::Int(10)),
            Ordering::Less,
        );
        assert_eq!(
            compare_present(
                &Value::Text("alpha".to_string()),
                &Value::Text("beta".to_string()),
            ),
            Ordering::Less,
        );
    }

    #[test]
    fn present_pair_widens_numeric_variants() {
        assert_eq!(
            compare_present(&Value::Int(2), &Value::Uint(10)),
            Ordering::Less,
        );
        assert_eq!(
            compare_present(&Value::Uint(3), &Value::Int(-1)),
            Ordering::Greater,
        );
    }

    #[test]
    fn present_pair_falls_back_to_rendered_text() {
        // Int renders "5"; '5' orders before 'h' in the rendered fallback.
        assert_eq!(
            compare_present(&Value::Int(5), &Value::Text("high".to_string())),
            Ordering::Less,
        );
        assert_eq!(
            compare_present(&Value::Text("high".to_string()), &Value::Int(5)),
            Ordering::Greater,
        );
    }

    #[test]
    fn direction_application_is_asc_identity_desc_reverse() {
        assert_eq!(
            apply_order_direction(Ordering::Less, OrderDirection::Asc),
            Ordering::Less,
        );
        assert_eq!(
            apply_order_direction(Ordering::Less, OrderDirection::Desc),
            Ordering::Greater,
        );
        assert_eq!(
            apply_order_direction(Ordering::Equal, OrderDirection::Desc),
            Ordering::Equal,
        );
    }
}

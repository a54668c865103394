use crate::{
    predicate::{CompareOp, ComparePredicate, Predicate, search},
    record::{Record, coerced_value},
    value::{TextMode, Value},
};
use std::cmp::Ordering;

///
/// FieldPresence
///
/// Result of attempting to read a field from a row during predicate
/// evaluation. Distinguishes a missing field from a present field whose
/// value may be `Value::Null`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum FieldPresence {
    /// Field exists and has a value (including `Value::Null`).
    Present(Value),
    /// Field is not present on the row.
    Missing,
}

///
/// Row
///
/// Abstraction over a row-like value that can expose fields by name.
/// Decouples predicate evaluation from concrete record types.
///

pub(crate) trait Row {
    /// Typed comparison view of a field, after declared-kind coercion.
    fn field(&self, name: &str) -> FieldPresence;

    /// Raw display values scanned by `SearchAny`, in model order.
    fn search_values(&self) -> Vec<Value>;
}

///
/// Default `Row` implementation for any `Record`, which is the standard
/// runtime interface.
///

impl<T: Record> Row for T {
    fn field(&self, name: &str) -> FieldPresence {
        let value = match Self::MODEL.field(name) {
            Some(model_field) => coerced_value(self, model_field),
            // Fields outside the model read raw.
            None => self.get(name),
        };

        match value {
            Some(value) => FieldPresence::Present(value),
            None => FieldPresence::Missing,
        }
    }

    fn search_values(&self) -> Vec<Value> {
        Self::MODEL
            .search_fields
            .iter()
            .filter_map(|name| self.get(name))
            .collect()
    }
}

///
/// Evaluate a predicate against a single row.
///
/// Pure runtime evaluation: no schema access beyond field reads, no
/// planning, no allocation on the happy path. Any unsupported comparison
/// simply evaluates to `false`.
///
#[must_use]
pub(crate) fn eval<R: Row + ?Sized>(row: &R, predicate: &Predicate) -> bool {
    match predicate {
        Predicate::True => true,
        Predicate::False => false,

        Predicate::And(children) => children.iter().all(|child| eval(row, child)),
        Predicate::Or(children) => children.iter().any(|child| eval(row, child)),
        Predicate::Not(inner) => !eval(row, inner),

        Predicate::Compare(cmp) => eval_compare(row, cmp),

        Predicate::SearchAny { term } => search::row_matches_term(row, term),
    }
}

///
/// Evaluate a single comparison predicate against a row.
///
/// Returns `false` if:
/// - the field is missing (or its declared-kind coercion failed)
/// - the comparison is not defined between the two value shapes
///
fn eval_compare<R: Row + ?Sized>(row: &R, cmp: &ComparePredicate) -> bool {
    let ComparePredicate { field, op, value } = cmp;

    let FieldPresence::Present(actual) = row.field(field) else {
        return false;
    };

    // NOTE: Comparison helpers return None when a comparison is invalid; eval treats that as false.
    match op {
        CompareOp::Eq => compare_eq(&actual, value).unwrap_or(false),
        CompareOp::Ne => compare_eq(&actual, value).is_some_and(|v| !v),

        CompareOp::Lt => compare_order(&actual, value).is_some_and(Ordering::is_lt),
        CompareOp::Lte => compare_order(&actual, value).is_some_and(Ordering::is_le),
        CompareOp::Gt => compare_order(&actual, value).is_some_and(Ordering::is_gt),
        CompareOp::Gte => compare_order(&actual, value).is_some_and(Ordering::is_ge),

        CompareOp::In => in_list(&actual, value).unwrap_or(false),
        CompareOp::AnyIn => any_in(&actual, value).unwrap_or(false),

        CompareOp::ContainsCi => contains_ci(&actual, value),
    }
}

/// Ordered comparison: same-variant first, numeric cross-type second.
fn compare_order(actual: &Value, expected: &Value) -> Option<Ordering> {
    Value::strict_order_cmp(actual, expected).or_else(|| actual.cmp_numeric(expected))
}

fn compare_eq(actual: &Value, expected: &Value) -> Option<bool> {
    compare_order(actual, expected).map(Ordering::is_eq)
}

///
/// Check whether a value equals any element in a list.
///
fn in_list(actual: &Value, list: &Value) -> Option<bool> {
    let Value::List(items) = list else {
        return None;
    };

    let mut saw_valid = false;
    for item in items {
        match compare_eq(actual, item) {
            Some(true) => return Some(true),
            Some(false) => saw_valid = true,
            None => {}
        }
    }

    saw_valid.then_some(false)
}

///
/// Check whether any needle matches a member of the actual value
/// (or the value itself when it is a scalar).
///
fn any_in(actual: &Value, needles: &Value) -> Option<bool> {
    let Value::List(needles) = needles else {
        return None;
    };

    match actual {
        Value::List(items) => Some(needles.iter().any(|needle| {
            items
                .iter()
                .any(|item| compare_eq(item, needle).unwrap_or(false))
        })),
        scalar => Some(
            needles
                .iter()
                .any(|needle| compare_eq(scalar, needle).unwrap_or(false)),
        ),
    }
}

///
/// Case-insensitive substring check; list values match on any item.
///
fn contains_ci(actual: &Value, needle: &Value) -> bool {
    match actual {
        Value::List(items) => items.iter().any(|item| {
            // NOTE: Invalid text comparisons are treated as non-matches.
            item.text_contains(needle, TextMode::Ci).unwrap_or(false)
        }),
        scalar => scalar.text_contains(needle, TextMode::Ci).unwrap_or(false),
    }
}

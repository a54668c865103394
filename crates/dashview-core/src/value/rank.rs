use crate::value::Value;

///
/// Canonical Value Rank
///
/// Stable rank used for cross-variant ordering.
///
/// IMPORTANT:
/// Rank order is part of deterministic view behavior and must remain fixed
/// unless an intentional breaking migration is performed.
///
#[must_use]
pub(super) const fn canonical_rank(value: &Value) -> u8 {
    match value {
        Value::Bool(_) => 0,
        Value::Date(_) => 1,
        Value::Decimal(_) => 2,
        Value::Int(_) => 3,
        Value::List(_) => 4,
        Value::Null => 5,
        Value::Text(_) => 6,
        Value::Timestamp(_) => 7,
        Value::Uint(_) => 8,
    }
}

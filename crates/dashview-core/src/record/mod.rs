//! Runtime record model.
//!
//! Types in `record` are the *runtime representations* of the screen's data
//! shapes: static field metadata consumed by predicate lowering and sort
//! resolution, plus the value-access contract each concrete record type
//! implements. Schema lives with the record type; `record` defines what runs.

use crate::value::Value;

///
/// FieldKind
///
/// Minimal type surface needed by predicate lowering and sort resolution.
/// Aligned with `Value` variants; this is a lossy projection of the source
/// row types.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldKind {
    Bool,
    Date,
    Decimal,
    Int,
    Text,
    Timestamp,
    Uint,

    /// Collection of text items (tags and similar).
    List,
}

impl FieldKind {
    /// True when a Text payload in this field should be parsed into the
    /// declared kind before ordered comparison.
    #[must_use]
    pub const fn coerces_text(self) -> bool {
        matches!(self, Self::Date | Self::Decimal | Self::Timestamp)
    }
}

///
/// FieldModel
/// Runtime field metadata used by lowering and sort resolution.
///

pub struct FieldModel {
    /// Field name as used in criteria and sort specs.
    pub name: &'static str,
    /// Runtime type shape.
    pub kind: FieldKind,
}

///
/// RecordModel
/// Static runtime model for one record type.
///

pub struct RecordModel {
    /// Stable external name used in diagnostics.
    pub record_name: &'static str,
    /// Ordered field list (authoritative for lowering and sorting).
    pub fields: &'static [FieldModel],
    /// Fields scanned by free-text search, in scan order.
    pub search_fields: &'static [&'static str],
}

impl RecordModel {
    /// Look up a declared field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldModel> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Declared kind for a field, if the field exists.
    #[must_use]
    pub fn field_kind(&self, name: &str) -> Option<FieldKind> {
        self.field(name).map(|f| f.kind)
    }
}

///
/// RecordSchema
///
/// Declared schema facts for a record type.
///

pub trait RecordSchema {
    const MODEL: &'static RecordModel;
}

///
/// RecordValue
///
/// A concrete record instance that exposes its fields as values.
///
/// `get` returns `None` for unknown fields and for fields whose value is
/// absent; both read as missing downstream (non-match for predicates,
/// sorted last for ordering).
///

pub trait RecordValue {
    fn get(&self, field: &str) -> Option<Value>;

    /// Stable identifier used in diagnostics and stability assertions.
    fn record_id(&self) -> &str;
}

///
/// Record
///
/// Full contract required by the view pipeline.
///

pub trait Record: RecordSchema + RecordValue {}

impl<T> Record for T where T: RecordSchema + RecordValue {}

/// Fetch a field and apply declared-kind coercion.
///
/// A Text payload in a field declared Date/Timestamp/Decimal is parsed into
/// the declared kind; parse failure reads as missing.
#[must_use]
pub fn coerced_value<R: Record>(record: &R, field: &FieldModel) -> Option<Value> {
    let value = record.get(field.name)?;

    if field.kind.coerces_text()
        && let Value::Text(raw) = &value
    {
        return coerce_text(raw, field.kind);
    }

    Some(value)
}

fn coerce_text(raw: &str, kind: FieldKind) -> Option<Value> {
    use crate::types::{Date, Decimal, Timestamp};

    match kind {
        FieldKind::Date => Date::parse(raw).map(Value::Date),
        FieldKind::Decimal => Decimal::parse(raw).map(Value::Decimal),
        FieldKind::Timestamp => raw.trim().parse::<u64>().ok().map(|s| {
            Value::Timestamp(Timestamp::from_seconds(s))
        }),
        _ => None,
    }
}

///
/// TESTS
///

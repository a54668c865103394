use crate::{
    criteria::{DateWindow, Dimension, FilterCriteria, Selection},
    predicate::Predicate,
    record::{FieldKind, RecordModel},
    types::Decimal,
    value::Value,
};
use derive_more::Display;

///
/// CriteriaNote
///
/// Diagnostic emitted when a dimension could not be applied as written.
/// Notes never abort lowering; the affected constraint degrades to
/// match-all.
///

#[derive(Clone, Debug, Display, Eq, PartialEq)]
pub enum CriteriaNote {
    #[display("filter on unknown field '{field}' was ignored")]
    UnknownField { field: String },

    #[display("unparsable bound '{raw}' on field '{field}' was ignored")]
    UnparsableBound { field: String, raw: String },
}

///
/// Lowered
///
/// Output of criteria lowering: the combined predicate plus any notes
/// accumulated along the way.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Lowered {
    pub predicate: Predicate,
    pub notes: Vec<CriteriaNote>,
}

/// Lower filter criteria into a single predicate against `model`.
///
/// Dimensions combine with AND; order of dimensions does not affect match
/// semantics. Lowering is pure and never fails.
#[must_use]
pub fn lower(criteria: &FilterCriteria, model: &RecordModel) -> Lowered {
    let mut notes = Vec::new();

    let children = criteria
        .dimensions()
        .iter()
        .map(|dimension| lower_dimension(dimension, model, &mut notes))
        .collect();

    Lowered {
        predicate: Predicate::And(children).simplify(),
        notes,
    }
}

fn lower_dimension(
    dimension: &Dimension,
    model: &RecordModel,
    notes: &mut Vec<CriteriaNote>,
) -> Predicate {
    let Some(kind) = model.field_kind(dimension.field()) else {
        notes.push(CriteriaNote::UnknownField {
            field: dimension.field().to_string(),
        });
        return Predicate::True;
    };

    match dimension {
        Dimension::Choice { field, selected } => match selected {
            Selection::All => Predicate::True,
            Selection::One(value) => Predicate::eq(field.clone(), Value::Text(value.clone())),
        },

        Dimension::Multi { field, selected } => {
            if selected.is_empty() {
                return Predicate::True;
            }

            let values = selected.iter().cloned().map(Value::Text).collect();
            if matches!(kind, FieldKind::List) {
                Predicate::any_in(field.clone(), values)
            } else {
                Predicate::in_(field.clone(), values)
            }
        }

        Dimension::NumericRange { field, min, max } => {
            let min = parse_bound(field, min.as_deref(), notes);
            let max = parse_bound(field, max.as_deref(), notes);

            Predicate::True
                .and_option(min.map(|d| Predicate::gte(field.clone(), Value::Decimal(d))))
                .and_option(max.map(|d| Predicate::lte(field.clone(), Value::Decimal(d))))
        }

        Dimension::DateRange { field, range, as_of } => match range.resolve(*as_of) {
            None => Predicate::True,
            Some(DateWindow { start, end }) => Predicate::True
                .and_option(start.map(|d| Predicate::gte(field.clone(), Value::Date(d))))
                .and_option(end.map(|d| Predicate::lte(field.clone(), Value::Date(d)))),
        },
    }
}

/// Parse one raw range bound; an unparsable bound reads as unbounded.
fn parse_bound(field: &str, raw: Option<&str>, notes: &mut Vec<CriteriaNote>) -> Option<Decimal> {
    let raw = raw?;

    let parsed = Decimal::parse(raw);
    if parsed.is_none() {
        notes.push(CriteriaNote::UnparsableBound {
            field: field.to_string(),
            raw: raw.to_string(),
        });
    }

    parsed
}

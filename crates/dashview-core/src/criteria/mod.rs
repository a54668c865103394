//! Module: criteria
//! Responsibility: UI-facing filter state, prior to lowering.
//!
//! Criteria model what the screen's filter controls hold: a single-choice
//! dropdown, a multi-select tag picker, a numeric range pair of text inputs,
//! a date range token. They carry raw user input; interpretation (parsing,
//! window resolution, predicate construction) happens in `predicate::lower`.

mod window;

pub use window::{DateRangeToken, DateWindow};

use crate::types::Date;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

///
/// Selection
///
/// Single-choice dimension state; `All` is the typed form of the "all"
/// sentinel and imposes no constraint.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum Selection {
    #[default]
    All,
    One(String),
}

impl Selection {
    pub fn one(value: impl Into<String>) -> Self {
        Self::One(value.into())
    }

    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

///
/// Dimension
///
/// One active filter dimension. Dimensions are keyed by field name; setting
/// a dimension replaces any previous dimension on the same field.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Dimension {
    /// Equality against one selected value.
    Choice { field: String, selected: Selection },

    /// Membership in a selected set; OR within the dimension.
    Multi {
        field: String,
        selected: BTreeSet<String>,
    },

    /// Inclusive `[min, max]` over raw user input; bounds parse at lowering.
    NumericRange {
        field: String,
        min: Option<String>,
        max: Option<String>,
    },

    /// Inclusive day window anchored at an explicit `as_of` date.
    DateRange {
        field: String,
        range: DateRangeToken,
        as_of: Date,
    },
}

impl Dimension {
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::Choice { field, .. }
            | Self::Multi { field, .. }
            | Self::NumericRange { field, .. }
            | Self::DateRange { field, .. } => field,
        }
    }
}

///
/// FilterCriteria
///
/// Ordered set of active filter dimensions, combined with AND semantics
/// across dimensions. An empty criteria value matches every record.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct FilterCriteria {
    dimensions: Vec<Dimension>,
}

impl FilterCriteria {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            dimensions: Vec::new(),
        }
    }

    /// Set a single-choice dimension.
    #[must_use]
    pub fn choice(mut self, field: impl Into<String>, selected: Selection) -> Self {
        self.upsert(Dimension::Choice {
            field: field.into(),
            selected,
        });
        self
    }

    /// Set a multi-select dimension; an empty set imposes no constraint.
    #[must_use]
    pub fn multi<I, S>(mut self, field: impl Into<String>, selected: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.upsert(Dimension::Multi {
            field: field.into(),
            selected: selected.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Set an inclusive numeric range. Bounds are raw text-input values;
    /// blank input reads as unbounded on that side.
    #[must_use]
    pub fn numeric_range(mut self, field: impl Into<String>, min: &str, max: &str) -> Self {
        self.upsert(Dimension::NumericRange {
            field: field.into(),
            min: non_blank(min),
            max: non_blank(max),
        });
        self
    }

    /// Set a date range dimension anchored at `as_of`.
    #[must_use]
    pub fn date_range(
        mut self,
        field: impl Into<String>,
        range: DateRangeToken,
        as_of: Date,
    ) -> Self {
        self.upsert(Dimension::DateRange {
            field: field.into(),
            range,
            as_of,
        });
        self
    }

    /// Drop all dimensions; the criteria then match every record.
    pub fn clear(&mut self) {
        self.dimensions.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }

    #[must_use]
    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    fn upsert(&mut self, dimension: Dimension) {
        self.dimensions.retain(|d| d.field() != dimension.field());
        self.dimensions.push(dimension);
    }
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

///
/// TESTS
///

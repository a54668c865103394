use crate::types::Date;
use serde::{Deserialize, Serialize};

///
/// DateRangeToken
///
/// UI-level date range selection. Preset tokens resolve against an explicit
/// `as_of` anchor supplied by the caller; the pipeline never reads a clock.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum DateRangeToken {
    #[default]
    All,
    Today,
    Week,
    Month,
    Year,
    Custom {
        start: Option<Date>,
        end: Option<Date>,
    },
}

impl DateRangeToken {
    /// Resolve the token into an inclusive day window anchored at `as_of`.
    ///
    /// Preset tokens are trailing windows that end at `as_of`: `Week` covers
    /// the last 7 calendar days, `Month` the last 30, `Year` the last 365.
    /// Returns `None` when the token imposes no constraint.
    #[must_use]
    pub fn resolve(&self, as_of: Date) -> Option<DateWindow> {
        match self {
            Self::All => None,
            Self::Today => Some(DateWindow::between(as_of, as_of)),
            Self::Week => Some(DateWindow::between(as_of.sub_days(6), as_of)),
            Self::Month => Some(DateWindow::between(as_of.sub_days(29), as_of)),
            Self::Year => Some(DateWindow::between(as_of.sub_days(364), as_of)),
            Self::Custom {
                start: None,
                end: None,
            } => None,
            Self::Custom { start, end } => Some(DateWindow {
                start: *start,
                end: *end,
            }),
        }
    }
}

///
/// DateWindow
///
/// Inclusive `[start, end]` day window; a `None` side is unbounded.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DateWindow {
    pub start: Option<Date>,
    pub end: Option<Date>,
}

impl DateWindow {
    const fn between(start: Date, end: Date) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }
}

///
/// TESTS
///

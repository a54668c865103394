//! Module: page
//! Responsibility: pagination window math and the visible-range label.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// PageSpecError
///

#[derive(Debug, ThisError)]
pub enum PageSpecError {
    #[error("page numbers are 1-based")]
    ZeroPage,

    #[error("page size must be at least one row")]
    ZeroPageSize,
}

///
/// PageSpec
///
/// 1-based page request. `new` validates at the edge; the accessors clamp
/// to the same minimums so a hand-built or deserialized spec degrades to
/// the first page instead of dividing by zero.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PageSpec {
    page: u32,
    page_size: u32,
}

impl PageSpec {
    pub fn new(page: u32, page_size: u32) -> Result<Self, PageSpecError> {
        if page == 0 {
            return Err(PageSpecError::ZeroPage);
        }
        if page_size == 0 {
            return Err(PageSpecError::ZeroPageSize);
        }

        Ok(Self { page, page_size })
    }

    /// Requested 1-based page number, clamped to at least 1.
    #[must_use]
    pub const fn page(&self) -> u32 {
        if self.page == 0 { 1 } else { self.page }
    }

    /// Rows per page, clamped to at least 1.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        if self.page_size == 0 { 1 } else { self.page_size }
    }
}

impl Default for PageSpec {
    /// First page at the screens' standard table length.
    fn default() -> Self {
        Self { page: 1, page_size: 8 }
    }
}

///
/// Totals
///
/// Which total drives page count and the range label. `Materialized`
/// counts the filtered rows themselves; `Declared` carries a
/// server-reported total while slicing stays bounded by the rows actually
/// present. The two are never reconciled.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum Totals {
    #[default]
    Materialized,
    Declared(u64),
}

///
/// RangeLabel
///
/// 1-based "start-end of total" display label. An empty window renders
/// `0-0 of total`.
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, PartialEq, Serialize,
)]
#[display("{start}-{end} of {total}")]
pub struct RangeLabel {
    pub start: u64,
    pub end: u64,
    pub total: u64,
}

///
/// PageSlice
///
/// Resolved window into the materialized row sequence plus the display
/// numbers derived from it.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PageSlice {
    /// Window start, bounded by the materialized length.
    pub start: usize,
    /// Window end (exclusive), bounded by the materialized length.
    pub end: usize,
    pub total_pages: u32,
    pub label: RangeLabel,
}

/// Compute the page window over `matched` materialized rows.
///
/// Slicing is always bounded by `matched`; a declared total feeds only the
/// page count and label arithmetic. A window starting at or past `matched`
/// is empty, never an error.
#[must_use]
pub fn slice(matched: usize, spec: &PageSpec, totals: Totals) -> PageSlice {
    let page_index = usize::try_from(spec.page().saturating_sub(1)).unwrap_or(usize::MAX);
    let size = usize::try_from(spec.page_size()).unwrap_or(usize::MAX);

    let start = page_index.saturating_mul(size).min(matched);
    let end = start.saturating_add(size).min(matched);

    let display_total = match totals {
        Totals::Materialized => u64::try_from(matched).unwrap_or(u64::MAX),
        Totals::Declared(total) => total,
    };

    let pages = display_total
        .div_ceil(u64::from(spec.page_size()))
        .max(1);
    let total_pages = u32::try_from(pages).unwrap_or(u32::MAX);

    let label = if start >= end {
        RangeLabel {
            start: 0,
            end: 0,
            total: display_total,
        }
    } else {
        RangeLabel {
            start: u64::try_from(start).unwrap_or(u64::MAX).saturating_add(1),
            end: u64::try_from(end).unwrap_or(u64::MAX),
            total: display_total,
        }
    };

    PageSlice {
        start,
        end,
        total_pages,
        label,
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(page: u32, page_size: u32) -> PageSpec {
        PageSpec::new(page, page_size).unwrap()
    }

    // ---- spec validation ----

    #[test]
    fn new_rejects_zero_page_and_zero_size() {
        assert!(matches!(PageSpec::new(0, 8), Err(PageSpecError::ZeroPage)));
        assert!(matches!(
            PageSpec::new(1, 0),
            Err(PageSpecError::ZeroPageSize)
        ));
        assert!(PageSpec::new(1, 8).is_ok());
    }

    #[test]
    fn deserialized_zero_fields_clamp_in_accessors() {
        let spec: PageSpec = serde_json::from_str(r#"{"page":0,"page_size":0}"#).unwrap();

        assert_eq!(spec.page(), 1);
        assert_eq!(spec.page_size(), 1);
    }

    #[test]
    fn default_is_first_page_of_eight() {
        let spec = PageSpec::default();

        assert_eq!(spec.page(), 1);
        assert_eq!(spec.page_size(), 8);
    }

    // ---- materialized windows ----

    #[test]
    fn empty_input_yields_one_empty_page() {
        let out = slice(0, &spec(1, 8), Totals::Materialized);

        assert_eq!(out.start, 0);
        assert_eq!(out.end, 0);
        assert_eq!(out.total_pages, 1);
        assert_eq!(
            out.label,
            RangeLabel {
                start: 0,
                end: 0,
                total: 0
            }
        );
    }

    #[test]
    fn interior_page_window_and_label() {
        let out = slice(10, &spec(2, 4), Totals::Materialized);

        assert_eq!(out.start, 4);
        assert_eq!(out.end, 8);
        assert_eq!(out.total_pages, 3);
        assert_eq!(
            out.label,
            RangeLabel {
                start: 5,
                end: 8,
                total: 10
            }
        );
    }

    #[test]
    fn final_partial_page_clamps_end() {
        let out = slice(10, &spec(3, 4), Totals::Materialized);

        assert_eq!(out.start, 8);
        assert_eq!(out.end, 10);
        assert_eq!(
            out.label,
            RangeLabel {
                start: 9,
                end: 10,
                total: 10
            }
        );
    }

    #[test]
    fn out_of_range_page_is_empty_not_an_error() {
        let out = slice(10, &spec(9, 4), Totals::Materialized);

        assert_eq!(out.start, 10);
        assert_eq!(out.end, 10);
        assert_eq!(out.total_pages, 3);
        assert_eq!(
            out.label,
            RangeLabel {
                start: 0,
                end: 0,
                total: 10
            }
        );
    }

    #[test]
    fn label_renders_for_display() {
        let out = slice(10, &spec(2, 4), Totals::Materialized);

        assert_eq!(out.label.to_string(), "5-8 of 10");
    }

    // ---- declared totals ----

    #[test]
    fn declared_total_drives_page_count_and_label_total() {
        let out = slice(8, &spec(1, 8), Totals::Declared(1286));

        assert_eq!(out.start, 0);
        assert_eq!(out.end, 8);
        assert_eq!(out.total_pages, 161);
        assert_eq!(
            out.label,
            RangeLabel {
                start: 1,
                end: 8,
                total: 1286
            }
        );
    }

    #[test]
    fn declared_total_never_extends_the_materialized_window() {
        // Page 2 exists per the declared total, but only 8 rows are
        // materialized; the window stays empty rather than indexing past
        // them.
        let out = slice(8, &spec(2, 8), Totals::Declared(1286));

        assert_eq!(out.start, 8);
        assert_eq!(out.end, 8);
        assert_eq!(out.total_pages, 161);
        assert_eq!(
            out.label,
            RangeLabel {
                start: 0,
                end: 0,
                total: 1286
            }
        );
    }

    #[test]
    fn declared_zero_still_reports_one_page() {
        let out = slice(3, &spec(1, 8), Totals::Declared(0));

        assert_eq!(out.total_pages, 1);
        assert_eq!(out.label.total, 0);
    }

    // ---- saturation ----

    #[test]
    fn extreme_spec_values_saturate_instead_of_overflowing() {
        let out = slice(5, &spec(u32::MAX, u32::MAX), Totals::Materialized);

        assert_eq!(out.start, 5);
        assert_eq!(out.end, 5);
        assert_eq!(out.total_pages, 1);
        assert_eq!(out.label.start, 0);
    }
}

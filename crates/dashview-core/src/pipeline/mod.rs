//! Module: pipeline
//! Responsibility: compose search, filter, sort, and pagination into one
//! pure view pass.
//!
//! Phase order is load-bearing: filtering before sorting keeps the range
//! label on the filtered count, and sorting before paginating keeps page
//! boundaries stable across identical calls. Each phase consumes the
//! previous phase's output binding, so the stages cannot run out of
//! order.

use crate::{
    criteria::FilterCriteria,
    obs::{self, Phase, ViewEvent},
    order::{OrderDirection, SortSpec, apply_sort},
    page::{self, PageSpec, RangeLabel, Totals},
    predicate::{CriteriaNote, Lowered, eval, lower, matches_search},
    record::Record,
};

///
/// ViewQuery
///
/// Everything one screen render asks of the pipeline. Build fluently,
/// then pass to `view`; the query itself is inert data and can be reused
/// across calls.
///

#[derive(Clone, Debug, Default)]
pub struct ViewQuery {
    search: String,
    criteria: FilterCriteria,
    sort: Option<SortSpec>,
    page: PageSpec,
    totals: Totals,
}

impl ViewQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Free-text search term; blank means no search constraint.
    #[must_use]
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    /// Replace the filter criteria wholesale.
    #[must_use]
    pub fn criteria(mut self, criteria: FilterCriteria) -> Self {
        self.criteria = criteria;
        self
    }

    /// Replace the sort spec wholesale.
    #[must_use]
    pub fn sort(mut self, spec: SortSpec) -> Self {
        self.sort = Some(spec);
        self
    }

    /// Append an ascending sort key.
    #[must_use]
    pub fn order_by(mut self, field: impl Into<String>) -> Self {
        self.sort = Some(push_sort(self.sort.take(), field.into(), OrderDirection::Asc));
        self
    }

    /// Append a descending sort key.
    #[must_use]
    pub fn order_by_desc(mut self, field: impl Into<String>) -> Self {
        self.sort = Some(push_sort(
            self.sort.take(),
            field.into(),
            OrderDirection::Desc,
        ));
        self
    }

    #[must_use]
    pub const fn page(mut self, page: PageSpec) -> Self {
        self.page = page;
        self
    }

    /// Drive page count and range label from a server-declared total
    /// instead of the materialized match count.
    #[must_use]
    pub const fn declared_total(mut self, total: u64) -> Self {
        self.totals = Totals::Declared(total);
        self
    }

    #[must_use]
    pub const fn totals(mut self, totals: Totals) -> Self {
        self.totals = totals;
        self
    }
}

fn push_sort(sort: Option<SortSpec>, field: String, direction: OrderDirection) -> SortSpec {
    match (sort, direction) {
        (Some(spec), OrderDirection::Asc) => spec.then_asc(field),
        (Some(spec), OrderDirection::Desc) => spec.then_desc(field),
        (None, OrderDirection::Asc) => SortSpec::asc(field),
        (None, OrderDirection::Desc) => SortSpec::desc(field),
    }
}

///
/// ViewResult
///
/// One rendered page plus the display totals derived alongside it.
/// Items borrow from the caller's records, which also proves the
/// pipeline never mutated them.
///

#[derive(Clone, Debug, PartialEq)]
pub struct ViewResult<'a, R> {
    /// Rows for the requested page, at most `page_size` of them.
    pub items: Vec<&'a R>,
    /// Rows surviving search and filter, before pagination.
    pub total_matched: u64,
    pub total_pages: u32,
    pub label: RangeLabel,
    /// Criteria degradations observed during lowering.
    pub notes: Vec<CriteriaNote>,
}

impl<R: Clone> ViewResult<'_, R> {
    /// Materialize owned copies of the page items.
    #[must_use]
    pub fn cloned(&self) -> Vec<R> {
        self.items.iter().map(|item| (*item).clone()).collect()
    }
}

/// Run one view pass: search, filter, sort, paginate.
///
/// Total over all inputs; degenerate queries produce defined empty-ish
/// results rather than errors. Identical inputs produce structurally
/// identical results.
#[must_use]
pub fn view<'a, R: Record>(records: &'a [R], query: &ViewQuery) -> ViewResult<'a, R> {
    let record_name = R::MODEL.record_name;
    obs::record(ViewEvent::ExecStart { record_name });

    // (1) search
    let mut rows: Vec<&R> = records
        .iter()
        .filter(|record| matches_search(*record, &query.search))
        .collect();
    obs::record(ViewEvent::PhaseRows {
        phase: Phase::Search,
        rows: row_count(rows.len()),
    });

    // (2) filter
    let Lowered { predicate, notes } = lower(&query.criteria, R::MODEL);
    rows.retain(|record| eval(*record, &predicate));
    obs::record(ViewEvent::PhaseRows {
        phase: Phase::Filter,
        rows: row_count(rows.len()),
    });

    let total_matched = row_count(rows.len());

    // (3) sort
    if let Some(sort) = &query.sort {
        apply_sort(&mut rows, sort);
    }
    obs::record(ViewEvent::PhaseRows {
        phase: Phase::Order,
        rows: row_count(rows.len()),
    });

    // (4) paginate
    let window = page::slice(rows.len(), &query.page, query.totals);
    let items: Vec<&R> = rows[window.start..window.end].to_vec();
    obs::record(ViewEvent::PhaseRows {
        phase: Phase::Page,
        rows: row_count(items.len()),
    });

    obs::record(ViewEvent::ExecFinish {
        record_name,
        rows_in: row_count(records.len()),
        rows_out: row_count(items.len()),
    });

    ViewResult {
        items,
        total_matched,
        total_pages: window.total_pages,
        label: window.label,
        notes,
    }
}

fn row_count(rows: usize) -> u64 {
    u64::try_from(rows).unwrap_or(u64::MAX)
}

///
/// TESTS
///

use serde::{Deserialize, Serialize};
use std::{cell::RefCell, collections::BTreeMap};

///
/// MetricsSnapshot
/// Ephemeral, in-memory counters for view execution.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct MetricsSnapshot {
    pub ops: ViewOps,
    pub records: BTreeMap<String, RecordCounters>,
}

///
/// ViewOps
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ViewOps {
    // Pipeline entrypoints
    pub view_calls: u64,

    // Rows entering and leaving the pipeline
    pub rows_in: u64,
    pub rows_out: u64,

    // Rows surviving each phase
    pub search_rows: u64,
    pub filter_rows: u64,
    pub order_rows: u64,
    pub page_rows: u64,
}

///
/// RecordCounters
/// Per-record-type view counters.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct RecordCounters {
    pub view_calls: u64,
    pub rows_in: u64,
    pub rows_out: u64,
}

thread_local! {
    static METRICS_STATE: RefCell<MetricsSnapshot> = RefCell::new(MetricsSnapshot::default());
}

/// Borrow metrics immutably.
pub(crate) fn with_state<R>(f: impl FnOnce(&MetricsSnapshot) -> R) -> R {
    METRICS_STATE.with(|m| f(&m.borrow()))
}

/// Borrow metrics mutably.
pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut MetricsSnapshot) -> R) -> R {
    METRICS_STATE.with(|m| f(&mut m.borrow_mut()))
}

/// Clone the current counters for endpoint/test plumbing.
#[must_use]
pub fn metrics_snapshot() -> MetricsSnapshot {
    with_state(Clone::clone)
}

/// Reset all counters (useful in tests).
pub fn metrics_reset() {
    with_state_mut(|m| *m = MetricsSnapshot::default());
}

///
/// TESTS
///

//! View event sink boundary.
//!
//! Pipeline logic MUST NOT depend on obs::metrics directly.
//! All instrumentation flows through ViewEvent and ViewSink.
//!
//! This module is the only allowed bridge between pipeline execution
//! and the global metrics state.

use crate::obs::metrics;
use std::{cell::RefCell, rc::Rc};

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<Rc<dyn ViewSink>>> = const { RefCell::new(None) };
}

///
/// Phase
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    Search,
    Filter,
    Order,
    Page,
}

///
/// ViewEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ViewEvent {
    ExecStart {
        record_name: &'static str,
    },
    ExecFinish {
        record_name: &'static str,
        rows_in: u64,
        rows_out: u64,
    },
    PhaseRows {
        phase: Phase,
        rows: u64,
    },
}

///
/// ViewSink
///

pub trait ViewSink {
    fn record(&self, event: ViewEvent);
}

///
/// NopSink
/// Sink that drops every event, for callers that want no telemetry.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct NopSink;

impl ViewSink for NopSink {
    fn record(&self, _: ViewEvent) {}
}

///
/// MetricsRegistry
/// Default process-local sink that writes into global metrics state.
/// Acts as the concrete sink when no scoped override is installed.
///

pub(crate) struct MetricsRegistry;

impl ViewSink for MetricsRegistry {
    fn record(&self, event: ViewEvent) {
        match event {
            ViewEvent::ExecStart { record_name } => {
                metrics::with_state_mut(|m| {
                    m.ops.view_calls = m.ops.view_calls.saturating_add(1);

                    let entry = m.records.entry(record_name.to_string()).or_default();
                    entry.view_calls = entry.view_calls.saturating_add(1);
                });
            }

            ViewEvent::ExecFinish {
                record_name,
                rows_in,
                rows_out,
            } => {
                metrics::with_state_mut(|m| {
                    m.ops.rows_in = m.ops.rows_in.saturating_add(rows_in);
                    m.ops.rows_out = m.ops.rows_out.saturating_add(rows_out);

                    let entry = m.records.entry(record_name.to_string()).or_default();
                    entry.rows_in = entry.rows_in.saturating_add(rows_in);
                    entry.rows_out = entry.rows_out.saturating_add(rows_out);
                });
            }

            ViewEvent::PhaseRows { phase, rows } => {
                metrics::with_state_mut(|m| {
                    let slot = match phase {
                        Phase::Search => &mut m.ops.search_rows,
                        Phase::Filter => &mut m.ops.filter_rows,
                        Phase::Order => &mut m.ops.order_rows,
                        Phase::Page => &mut m.ops.page_rows,
                    };

                    *slot = slot.saturating_add(rows);
                });
            }
        }
    }
}

pub(crate) const METRICS_REGISTRY: MetricsRegistry = MetricsRegistry;

pub(crate) fn record(event: ViewEvent) {
    // Clone the override out before dispatch so a sink that emits events
    // of its own never re-borrows the slot.
    let override_sink = SINK_OVERRIDE.with(|cell| cell.borrow().clone());

    if let Some(sink) = override_sink {
        sink.record(event);
    } else {
        METRICS_REGISTRY.record(event);
    }
}

/// Run a closure with a temporary sink override.
///
/// The previous override is restored on all exits, including unwind, so
/// nested scopes compose and a panicking closure cannot leak its sink
/// into later calls on the same thread.
pub fn with_sink<T>(sink: Rc<dyn ViewSink>, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<Rc<dyn ViewSink>>);

    impl Drop for Guard {
        fn drop(&mut self) {
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = self.0.take();
            });
        }
    }

    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink));
    let _guard = Guard(prev);

    f()
}

///
/// TESTS
///

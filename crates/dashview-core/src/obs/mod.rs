//! Observability: view execution telemetry (metrics) and sink abstractions.
//!
//! This module never reaches into pipeline internals; everything it
//! learns arrives through `ViewEvent`.

pub(crate) mod metrics;
pub(crate) mod sink;

// re-exports
pub use metrics::{MetricsSnapshot, RecordCounters, ViewOps, metrics_reset, metrics_snapshot};
pub use sink::{NopSink, Phase, ViewEvent, ViewSink, with_sink};

pub(crate) use sink::record;

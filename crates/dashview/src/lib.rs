//! DashView: a deterministic in-memory view pipeline for dashboard screens.
//!
//! ## Crate layout
//! - `core`: records, values, criteria lowering, ordering, pagination, and
//!   the view pipeline itself.
//!
//! The `prelude` module mirrors the surface screen code actually touches;
//! everything else stays one module level down.

pub use dashview_core as core;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// the three names nearly every caller wants, available at the root
pub use dashview_core::pipeline::{ViewQuery, ViewResult, view};

///
/// Prelude
/// one import for screen code: records, criteria, sorting, paging, and the view
///

pub mod prelude {
    pub use crate::core::{
        criteria::{DateRangeToken, FilterCriteria, Selection},
        order::{OrderDirection, SortSpec},
        page::{PageSpec, RangeLabel, Totals},
        pipeline::{ViewQuery, ViewResult, view},
        record::{FieldKind, FieldModel, Record, RecordModel, RecordSchema, RecordValue},
        types::{Date, Decimal, Timestamp},
        value::Value,
    };
    pub use serde::{Deserialize, Serialize};
}

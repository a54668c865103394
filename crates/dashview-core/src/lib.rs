//! Core runtime for DashView: record traits, values, criteria lowering,
//! ordering, pagination, and the view pipeline exported via the `prelude`.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod criteria;
pub mod obs;
pub mod order;
pub mod page;
pub mod pipeline;
pub mod predicate;
pub mod record;
pub mod types;
pub mod value;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No sinks, metrics, or lowering internals are re-exported here.
///

pub mod prelude {
    pub use crate::{
        criteria::{DateRangeToken, FilterCriteria, Selection},
        order::{OrderDirection, SortSpec},
        page::{PageSpec, Totals},
        pipeline::{ViewQuery, ViewResult, view},
        record::{FieldKind, FieldModel, Record, RecordModel, RecordSchema, RecordValue},
        value::Value,
    };
}

mod ast;
pub(crate) mod eval;
mod lower;
mod search;

#[cfg(test)]
mod tests;

pub use ast::{CompareOp, ComparePredicate, Predicate};
pub use lower::{CriteriaNote, Lowered, lower};
pub use search::matches_search;

pub(crate) use eval::{FieldPresence, Row, eval};

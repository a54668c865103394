use crate::{predicate::eval::Row, record::Record, value::Value};

///
/// Free-text search over a record's search fields.
///
/// A blank term matches everything. Otherwise the term must appear as a
/// case-insensitive substring of at least one search field's display
/// rendering.
///
#[must_use]
pub fn matches_search<R: Record>(record: &R, term: &str) -> bool {
    row_matches_term(record, term)
}

pub(crate) fn row_matches_term<R: Row + ?Sized>(row: &R, term: &str) -> bool {
    let term = term.trim();
    if term.is_empty() {
        return true;
    }
    let needle = Value::fold_ci(term);

    row.search_values()
        .iter()
        .any(|value| Value::fold_ci(&value.render_text()).contains(needle.as_ref()))
}

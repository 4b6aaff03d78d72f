//! Filter engine: applies a [`Query`] to a record collection.

use crate::domain::Metrics;
use crate::query::Query;

/// Whether `record` satisfies every condition in `query`.
///
/// Stops at the first failing condition. A condition naming an unknown field
/// fails the record outright, whatever the other conditions would say. An
/// empty query matches everything.
pub fn matches<M: Metrics + ?Sized>(record: &M, query: &Query) -> bool {
    query
        .iter()
        .all(|condition| condition.evaluate(record).unwrap_or(false))
}

/// Records matching `query`, in their original relative order.
pub fn filter<'a, M: Metrics>(records: &'a [M], query: &Query) -> Vec<&'a M> {
    records
        .iter()
        .filter(|record| matches(*record, query))
        .collect()
}

/// Owned variant of [`filter`].
pub fn filter_cloned<M: Metrics + Clone>(records: &[M], query: &Query) -> Vec<M> {
    filter(records, query).into_iter().cloned().collect()
}

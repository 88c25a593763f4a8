//! Respondent ordering for concatenated output.

use std::cmp::Ordering;

use gpaq_model::{Batch, Record};

/// Compare two respondent identifiers.
///
/// Identifiers that both parse as numbers compare numerically; numbers sort
/// before text; text compares lexicographically.
pub fn compare_ids(a: &str, b: &str) -> Ordering {
    match (parse_id(a), parse_id(b)) {
        (Some(x), Some(y)) => x.total_cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

fn parse_id(id: &str) -> Option<f64> {
    id.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// All records of a batch, sorted by identifier.
///
/// The sort is stable: records with equal identifiers keep batch order.
pub fn sorted_records(batch: &Batch) -> Vec<&Record> {
    let mut records: Vec<&Record> = batch.iter().flat_map(|t| t.records.iter()).collect();
    records.sort_by(|a, b| compare_ids(&a.id, &b.id));
    records
}

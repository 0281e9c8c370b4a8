//! Groups normalized rows by category and sums their amounts.

use crate::model::{Amount, CategoryTotal, NormalizedRow};
use std::collections::BTreeMap;
use tracing::debug;

/// Sums the amounts of each distinct category.
///
/// Categories are compared by exact text, so `Books` and `books` are two groups. The result is
/// sorted by category so that the same input always gives the same output.
pub fn aggregate(rows: impl IntoIterator<Item = NormalizedRow>) -> Vec<CategoryTotal> {
    let mut totals: BTreeMap<String, Amount> = BTreeMap::new();
    for row in rows {
        let (category, amount) = row.into_parts();
        let total = totals.entry(category).or_default();
        *total = *total + amount;
    }

    debug!("Aggregated into {} categories", totals.len());
    totals
        .into_iter()
        .map(|(category, total)| CategoryTotal::new(category, total))
        .collect()
}

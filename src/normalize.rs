//! Coerces the `Amount` of every row to a number.

use crate::model::{Amount, NormalizedRow, Table};
use tracing::{debug, trace};

/// Replaces each row's raw amount with a number. Values that are not numbers become zero; the row
/// itself is kept so that its category still appears in the output.
///
/// This never fails.
pub fn normalize(table: Table) -> Vec<NormalizedRow> {
    let mut coerced = 0usize;
    let rows: Vec<NormalizedRow> = table
        .into_iter()
        .map(|row| {
            let amount = match Amount::parse_cell(row.amount()) {
                Some(amount) => amount,
                None => {
                    trace!("Amount {:?} in '{}' counts as 0", row.amount(), row.category());
                    coerced += 1;
                    Amount::ZERO
                }
            };
            NormalizedRow::new(row.category(), amount)
        })
        .collect();

    debug!("Normalized {} rows, {coerced} amounts were not numbers", rows.len());
    rows
}

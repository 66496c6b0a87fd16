use bitvec::prelude::*;

use crate::error::{EclatError, Result};
use crate::types::{ItemName, RawTransaction};

/// Expand a dense occurrence matrix into the transactions [`crate::mine`]
/// consumes.
///
/// `columns` names the items; bit `j` of row `i` marks `columns[j]` as
/// present in transaction `i`. Row order fixes the transaction ids.
pub fn dense_to_transactions<'items>(
    columns: &[ItemName<'items>],
    rows: &[BitVec],
) -> Result<Vec<RawTransaction<'items>>> {
    rows.iter()
        .enumerate()
        .map(|(row, bits)| {
            if bits.len() != columns.len() {
                return Err(EclatError::ShapeMismatch {
                    row,
                    got: bits.len(),
                    expected: columns.len(),
                });
            }
            Ok(bits.iter_ones().map(|j| columns[j]).collect())
        })
        .collect()
}

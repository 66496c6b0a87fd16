//! The Eclat engine: vertical tid-lists, ascending-support ordering and a
//! depth-first conditional search.

mod search;
mod tidlist;

pub use tidlist::{build_tid_lists, sort_by_support, TidList};

use std::collections::hash_map::Entry;

use rayon::prelude::*;
use tracing::debug;

use crate::error::{EclatError, Result};
use crate::types::{FrequentItemsets, Inventory, ItemId, RawTransaction};

/// Mine every itemset occurring in at least `min_support` transactions.
///
/// Returns the frequent-itemset table (keys are id-itemsets in the order the
/// search extended them) together with the inventory mapping ids back to
/// item names.
pub fn mine<'items>(
    transactions: &'items [RawTransaction<'items>],
    min_support: usize,
) -> Result<(FrequentItemsets, Inventory<'items>)> {
    let (candidates, inventory) = singleton_candidates(transactions, min_support)?;

    let mut table = FrequentItemsets::new();
    search::search(&candidates, &Vec::new(), min_support, &mut table)?;

    debug!(frequent = table.len(), "mining finished");
    Ok((table, inventory))
}

/// [`mine`], with the top-level branches fanned out over a thread pool.
///
/// Every branch accumulates into its own table; the canonical enumeration
/// order makes the final merge collision-free, so the output is identical to
/// the serial version.
pub fn mine_parallel<'items>(
    transactions: &'items [RawTransaction<'items>],
    min_support: usize,
) -> Result<(FrequentItemsets, Inventory<'items>)> {
    let (candidates, inventory) = singleton_candidates(transactions, min_support)?;

    let branches: Vec<FrequentItemsets> = candidates
        .par_iter()
        .enumerate()
        .map(|(index, (item, tids))| {
            let mut branch = FrequentItemsets::new();
            if tids.support() < min_support {
                return Ok(branch);
            }

            let prefix = vec![*item];
            branch.insert(prefix.clone(), tids.clone());

            let remaining = &candidates[index + 1..];
            if !remaining.is_empty() {
                let conditional = search::project(tids, remaining);
                search::search(&conditional, &prefix, min_support, &mut branch)?;
            }
            Ok(branch)
        })
        .collect::<Result<_>>()?;

    let mut table = FrequentItemsets::new();
    for branch in branches {
        for (itemset, tids) in branch {
            match table.entry(itemset) {
                Entry::Vacant(slot) => {
                    slot.insert(tids);
                }
                Entry::Occupied(slot) => return Err(EclatError::KeyCollision(slot.key().clone())),
            }
        }
    }

    debug!(frequent = table.len(), "mining finished");
    Ok((table, inventory))
}

fn singleton_candidates<'items>(
    transactions: &'items [RawTransaction<'items>],
    min_support: usize,
) -> Result<(Vec<(ItemId, TidList)>, Inventory<'items>)> {
    if min_support < 1 {
        return Err(EclatError::InvalidThreshold(min_support));
    }
    let (tid_lists, inventory) = build_tid_lists(transactions)?;
    Ok((sort_by_support(tid_lists.into_iter().collect()), inventory))
}

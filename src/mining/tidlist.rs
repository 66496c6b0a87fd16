use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::debug;

use crate::error::{EclatError, Result};
use crate::types::{Inventory, ItemId, RawTransaction, ReverseLookup, Tid};

/// Vertical representation of an item (or itemset): the sorted list of
/// transactions it occurs in. Support is the length of the list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TidList {
    tids: Vec<Tid>,
}

impl TidList {
    pub fn support(&self) -> usize {
        self.tids.len()
    }

    pub fn tids(&self) -> &[Tid] {
        &self.tids
    }

    pub fn contains(&self, tid: Tid) -> bool {
        self.tids.binary_search(&tid).is_ok()
    }

    /// Linear merge of two sorted tid-lists.
    pub fn intersect(&self, other: &TidList) -> TidList {
        let mut tids = Vec::with_capacity(self.support().min(other.support()));
        let (mut i, mut j) = (0, 0);
        while i < self.tids.len() && j < other.tids.len() {
            match self.tids[i].cmp(&other.tids[j]) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    tids.push(self.tids[i]);
                    i += 1;
                    j += 1;
                }
            }
        }
        TidList { tids }
    }

    fn push(&mut self, tid: Tid) {
        debug_assert!(self.tids.last().map_or(true, |&last| last < tid));
        self.tids.push(tid);
    }
}

impl From<Vec<Tid>> for TidList {
    fn from(mut tids: Vec<Tid>) -> Self {
        tids.sort_unstable();
        tids.dedup();
        TidList { tids }
    }
}

/// Scan the database once and build every distinct item's tid-list, plus the
/// id <-> name tables.
///
/// Ids are handed out in lexicographic name order, so comparing ids is
/// comparing names. Tids increase during the scan, which keeps each list
/// sorted without a second pass.
pub fn build_tid_lists<'items>(
    transactions: &'items [RawTransaction<'items>],
) -> Result<(HashMap<ItemId, TidList>, Inventory<'items>)> {
    if transactions.is_empty() {
        return Err(EclatError::EmptyDatabase);
    }

    let mut names: Vec<_> = transactions.iter().flatten().copied().collect();
    names.sort_unstable();
    names.dedup();

    let reverse: ReverseLookup = names
        .iter()
        .enumerate()
        .map(|(id, &name)| (name, id))
        .collect();
    let inventory: Inventory = names
        .iter()
        .enumerate()
        .map(|(id, &name)| (id, name))
        .collect();

    let mut tid_lists: HashMap<ItemId, TidList> = HashMap::with_capacity(names.len());
    for (tid, transaction) in transactions.iter().enumerate() {
        for name in transaction {
            tid_lists.entry(reverse[name]).or_default().push(tid);
        }
    }

    debug!(
        items = names.len(),
        transactions = transactions.len(),
        "built singleton tid-lists"
    );

    Ok((tid_lists, inventory))
}

/// Order entries ascending by support; equal supports fall back to the item
/// id, so the result never depends on the input order.
pub fn sort_by_support(mut entries: Vec<(ItemId, TidList)>) -> Vec<(ItemId, TidList)> {
    entries.sort_unstable_by(|(a, ta), (b, tb)| {
        ta.support().cmp(&tb.support()).then_with(|| a.cmp(b))
    });
    entries
}

use std::fmt::{Display, Formatter, Result as FmtResult};

use itertools::Itertools;

use crate::types::{FrequentItemsets, Inventory, ItemName, Tid};

/// One row of the presentation table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow<'items> {
    /// Items in the order the search discovered them (prefix first).
    pub key: Vec<ItemName<'items>>,
    pub size: usize,
    pub support: usize,
    pub tids: Vec<Tid>,
}

impl SummaryRow<'_> {
    /// Member items irrespective of discovery order.
    pub fn items(&self) -> Vec<ItemName<'_>> {
        self.key.iter().copied().sorted_unstable().collect()
    }
}

/// Flatten a mining result into rows ordered for display: largest itemsets
/// first, higher support first among equals, names as the final tie-break so
/// the table is stable.
pub fn summarize<'items>(
    table: &FrequentItemsets,
    inventory: &Inventory<'items>,
) -> Vec<SummaryRow<'items>> {
    let mut rows: Vec<SummaryRow> = table
        .iter()
        .map(|(itemset, tids)| SummaryRow {
            key: itemset.iter().map(|id| inventory[id]).collect(),
            size: itemset.len(),
            support: tids.support(),
            tids: tids.tids().to_vec(),
        })
        .collect();

    rows.sort_unstable_by(|a, b| {
        (b.size, b.support)
            .cmp(&(a.size, a.support))
            .then_with(|| a.key.cmp(&b.key))
    });

    rows
}

impl Display for SummaryRow<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{{{}}} support={} tids=[{}]",
            self.items().iter().join(", "),
            self.support,
            self.tids.iter().join(", ")
        )
    }
}

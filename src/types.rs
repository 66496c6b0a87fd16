use std::collections::{HashMap, HashSet};

use crate::mining::TidList;

pub type ItemId = usize;
pub type ItemName<'l> = &'l str;

pub type ReverseLookup<'l> = HashMap<ItemName<'l>, ItemId>;
pub type Inventory<'l> = HashMap<ItemId, ItemName<'l>>;

/// Zero-based index of a transaction in the database.
pub type Tid = usize;
pub type RawTransaction<'l> = HashSet<ItemName<'l>>;

/// An itemset as the path that generated it: prefix items first, in the
/// order the search extended them.
pub type Itemset = Vec<ItemId>;

pub type FrequentItemsets = HashMap<Itemset, TidList>;

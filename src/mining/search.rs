use tracing::trace;

use crate::error::{EclatError, Result};
use crate::types::{FrequentItemsets, ItemId, Itemset};

use super::tidlist::{sort_by_support, TidList};

/// Restrict every candidate to co-occurrence with the pivot.
///
/// Candidates whose intersection falls below the threshold (even to zero)
/// are kept; the next search level skips them itself.
pub(crate) fn project(pivot: &TidList, candidates: &[(ItemId, TidList)]) -> Vec<(ItemId, TidList)> {
    let projected = candidates
        .iter()
        .map(|(item, tids)| (*item, pivot.intersect(tids)))
        .collect();
    sort_by_support(projected)
}

/// Pre-order depth-first walk over the itemset lattice.
///
/// `candidates` must be in ascending-support order. Each frequent candidate
/// extends `prefix` by one item, lands in `table`, and spawns a conditional
/// sub-search over the candidates strictly after it; earlier candidates are
/// never revisited, so no itemset is generated twice.
pub(crate) fn search(
    candidates: &[(ItemId, TidList)],
    prefix: &Itemset,
    min_support: usize,
    table: &mut FrequentItemsets,
) -> Result<()> {
    for (index, (item, tids)) in candidates.iter().enumerate() {
        if tids.support() < min_support {
            continue;
        }

        let mut extended = Vec::with_capacity(prefix.len() + 1);
        extended.extend_from_slice(prefix);
        extended.push(*item);

        trace!(itemset = ?extended, support = tids.support(), "frequent itemset");

        if table.insert(extended.clone(), tids.clone()).is_some() {
            return Err(EclatError::KeyCollision(extended));
        }

        let remaining = &candidates[index + 1..];
        if remaining.is_empty() {
            continue;
        }

        let conditional = project(tids, remaining);
        search(&conditional, &extended, min_support, table)?;
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use maplit::hashmap;

    #[test]
    fn project_intersects_and_keeps_zero_support_entries() {
        let pivot = TidList::from(vec![1, 2]);
        let candidates = vec![
            (5, TidList::from(vec![0, 3])),
            (1, TidList::from(vec![0, 1, 2, 3])),
        ];
        let conditional = project(&pivot, &candidates);
        assert_eq!(
            conditional,
            vec![(5, TidList::from(vec![])), (1, TidList::from(vec![1, 2]))]
        );
    }

    #[test]
    fn project_reorders_by_support() {
        let pivot = TidList::from(vec![0, 1, 2, 3]);
        let candidates = vec![
            (4, TidList::from(vec![0, 1, 2])),
            (9, TidList::from(vec![0, 1])),
            (2, TidList::from(vec![0, 5, 6, 7])),
        ];
        let conditional = project(&pivot, &candidates);
        let order: Vec<ItemId> = conditional.iter().map(|(item, _)| *item).collect();
        assert_eq!(order, vec![2, 9, 4]);
    }

    #[test]
    fn search_skips_infrequent_candidates_entirely() {
        let candidates = vec![
            (0, TidList::from(vec![0])),
            (3, TidList::from(vec![2])),
            (2, TidList::from(vec![1, 2])),
            (1, TidList::from(vec![0, 1, 2, 3])),
        ];
        let mut table = FrequentItemsets::new();
        search(&candidates, &Vec::new(), 2, &mut table).unwrap();

        let expected = hashmap! {
            vec![2] => TidList::from(vec![1, 2]),
            vec![2, 1] => TidList::from(vec![1, 2]),
            vec![1] => TidList::from(vec![0, 1, 2, 3]),
        };
        assert_eq!(table, expected);
    }

    #[test]
    fn search_emits_nothing_below_threshold() {
        let candidates = vec![(0, TidList::from(vec![0])), (1, TidList::from(vec![1]))];
        let mut table = FrequentItemsets::new();
        search(&candidates, &Vec::new(), 2, &mut table).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn search_with_no_candidates_is_a_no_op() {
        let mut table = FrequentItemsets::new();
        search(&[], &vec![7], 1, &mut table).unwrap();
        assert!(table.is_empty());
    }
}

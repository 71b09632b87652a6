//! Brute-force complementary-pair search (spec §4.5): an alternative to the
//! constraint search that keeps a pool of deletable-edge sets seen so far and
//! looks for any two whose union covers every edge.

use crate::bitset::{BitSet, VertexEdgeSet};
use crate::model::DiGraph;

struct Entry {
    deletable: BitSet,
    orientation: DiGraph,
}

/// Append-only pool of deletable-edge sets, pruned by subset domination: a
/// set that is a subset of one already in the pool can never beat it at
/// covering the graph, so it is discarded on arrival; a set that dominates
/// one already present replaces it (the smaller one is tombstoned rather
/// than shifted out, to keep insertion O(pool size) instead of O(pool size
/// squared) from repeated `Vec::remove` shifting).
pub struct Pool {
    entries: Vec<Option<Entry>>,
    m: usize,
}

impl Pool {
    pub fn new(m: usize) -> Self {
        Pool { entries: Vec::new(), m }
    }

    /// High-water mark of live + tombstoned slots, for `RunStats` reporting.
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    fn is_subset(a: &BitSet, b: &BitSet) -> bool {
        a.difference(b).is_empty()
    }

    /// Tries to insert `deletable`/`orientation` into the pool. Returns
    /// `Some((p, q))` the first time some existing pool entry `p` and the
    /// newly inserted entry `q` together cover every edge (`p.deletable |
    /// q.deletable` is the full edge universe); `None` otherwise, whether
    /// because the set was dominated (not inserted) or simply inserted
    /// without completing a pair.
    pub fn try_insert(&mut self, deletable: BitSet, orientation: DiGraph) -> Option<(DiGraph, DiGraph)> {
        let mut pairing: Option<DiGraph> = None;
        let mut first_tombstone = None;

        for (idx, slot) in self.entries.iter_mut().enumerate() {
            match slot {
                Some(existing) => {
                    if Self::is_subset(&deletable, &existing.deletable) {
                        // Dominated by an existing, strictly-as-good-or-better
                        // set: inserting would only grow the pool for no gain.
                        return None;
                    }
                    if Self::is_subset(&existing.deletable, &deletable) {
                        *slot = None;
                        if first_tombstone.is_none() {
                            first_tombstone = Some(idx);
                        }
                        continue;
                    }
                    if existing.deletable.union(&deletable).len() == self.m && pairing.is_none() {
                        pairing = Some(existing.orientation.clone());
                    }
                }
                None => {
                    if first_tombstone.is_none() {
                        first_tombstone = Some(idx);
                    }
                }
            }
        }

        let new_entry = Entry { deletable, orientation: orientation.clone() };
        match first_tombstone {
            Some(idx) => self.entries[idx] = Some(new_entry),
            None => self.entries.push(Some(new_entry)),
        }

        pairing.map(|p| (p, orientation))
    }
}

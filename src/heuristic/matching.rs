//! Perfect matching enumerator (spec §4.6).
//!
//! Recursively builds a perfect matching `F` of a cubic graph: pick the
//! lowest-index unmatched vertex, try each still-unmatched neighbor, recurse,
//! unmatch on the way back out. `remainingVertices` is carried by value since
//! `BitSet` is `Copy`, so no undo bookkeeping is needed for it.

use crate::bitset::{BitSet, VertexEdgeSet};
use crate::model::UndirectedGraph;

/// `F[v]` is v's matched partner, or `usize::MAX` if `v` is unmatched (only
/// possible transiently while the search is still running; a value handed
/// to `on_matching` is always a complete perfect matching).
pub const UNMATCHED: usize = usize::MAX;

/// Enumerates every perfect matching of `g`, calling `on_matching(f)` for
/// each one found. Returns `true` (short-circuiting the remaining search) as
/// soon as `on_matching` does.
pub fn enumerate_perfect_matchings(
    g: &UndirectedGraph,
    on_matching: &mut dyn FnMut(&[usize]) -> bool,
) -> bool {
    let n = g.n();
    let mut f = vec![UNMATCHED; n];
    let remaining = BitSet::universe(n);
    recurse(g, remaining, &mut f, on_matching)
}

fn recurse(
    g: &UndirectedGraph,
    remaining: BitSet,
    f: &mut [usize],
    on_matching: &mut dyn FnMut(&[usize]) -> bool,
) -> bool {
    if remaining.is_empty() {
        return on_matching(f);
    }

    let u = remaining.iter().next().expect("remaining is non-empty");
    let mut without_u = remaining;
    without_u.remove(u);

    for w in g.neighbors(u).iter() {
        if !without_u.contains(w) {
            continue;
        }
        f[u] = w;
        f[w] = u;
        let mut next = without_u;
        next.remove(w);
        if recurse(g, next, f, on_matching) {
            return true;
        }
        f[u] = UNMATCHED;
        f[w] = UNMATCHED;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn k4() -> UndirectedGraph {
        UndirectedGraph::from_edges(4, &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]).unwrap()
    }

    #[test]
    fn every_yielded_matching_is_perfect() {
        let g = k4();
        let mut count = 0;
        enumerate_perfect_matchings(&g, &mut |f| {
            count += 1;
            for v in 0..4 {
                assert_ne!(f[v], UNMATCHED);
                assert_eq!(f[f[v]], v);
                assert!(g.is_adjacent(v, f[v]));
            }
            false
        });
        // K4 has 3 perfect matchings.
        assert_eq!(count, 3);
    }

    #[test]
    fn short_circuits_on_first_match_when_callback_returns_true() {
        let g = k4();
        let mut count = 0;
        let found = enumerate_perfect_matchings(&g, &mut |_f| {
            count += 1;
            true
        });
        assert!(found);
        assert_eq!(count, 1);
    }
}

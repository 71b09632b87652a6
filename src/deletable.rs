//! Deletable-edge oracle (spec §4.2).

use crate::bitset::{BitSet, VertexEdgeSet};
use crate::model::{DiGraph, EdgeNumbering};
use crate::scc;

/// Computes `deletable(d)`: the set of edges of the undirected graph
/// underlying `d` whose corresponding arc can be removed from `d` while `d`
/// stays strongly connected.
///
/// `d` must already be strongly connected. For each arc (u, v), removal can
/// only break strong connectivity if no alternative u -> v path survives
/// it, so a single forward-reachability DFS from u (with v removed from its
/// out-set) decides deletability in place of rebuilding and re-checking the
/// whole digraph.
pub fn deletable_edges(d: &DiGraph, numbering: &EdgeNumbering) -> BitSet {
    let mut result = BitSet::empty();
    let mut stack = Vec::with_capacity(d.n());
    let mut visited = BitSet::empty();
    let mut work = d.clone();

    for u in 0..d.n() {
        for v in d.out_neighbors(u).iter() {
            work.remove_arc(u, v);
            if scc::reachable(&work, u, v, &mut stack, &mut visited) {
                result.insert(numbering.edge_index(u, v));
            }
            work.add_arc(u, v);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UndirectedGraph;

    fn directed_k4() -> (DiGraph, EdgeNumbering) {
        // K4 with a strongly connected orientation: a 4-cycle 0->1->2->3->0
        // plus the two diagonals 0->2 and 1->3 is not cubic orientation-wise
        // but K4 is 3-regular undirected; orient it as a directed cycle plus
        // chords split to keep out/in degree <= 2.
        let g = UndirectedGraph::from_edges(
            4,
            &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)],
        )
        .unwrap();
        let numbering = EdgeNumbering::new(&g);
        let mut d = DiGraph::new(4);
        d.add_arc(0, 1);
        d.add_arc(1, 2);
        d.add_arc(2, 3);
        d.add_arc(3, 0);
        d.add_arc(0, 2);
        d.add_arc(3, 1);
        (d, numbering)
    }

    #[test]
    fn deletable_set_only_contains_edges_whose_removal_keeps_strong_connectivity() {
        let (d, numbering) = directed_k4();
        let mut scratch = scc::Scratch::new(4);
        assert!(scc::is_strongly_connected(&d, 4, &mut scratch));

        let deletable = deletable_edges(&d, &numbering);

        for u in 0..4 {
            for v in d.out_neighbors(u).iter() {
                let e = numbering.edge_index(u, v);
                let mut trial = d.clone();
                trial.remove_arc(u, v);
                let still_connected = scc::is_strongly_connected(&trial, 4, &mut scratch);
                assert_eq!(deletable.contains(e), still_connected);
            }
        }
    }

    #[test]
    fn reversing_every_arc_preserves_the_deletable_set() {
        let (d, numbering) = directed_k4();
        let r = d.reversed();
        assert_eq!(deletable_edges(&d, &numbering).bits(), deletable_edges(&r, &numbering).bits());
    }
}

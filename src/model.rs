//! Graph model: `UndirectedGraph`, `EdgeNumbering`, `DiGraph` (spec §3).

use error_stack::{report, Result};

use crate::bitset::{BitSet, VertexEdgeSet};
use crate::error::FrankError;

/// Undirected cubic graph, vertex-indexed adjacency (spec §3).
///
/// Every vertex is required to have exactly three neighbors; this is
/// enforced at construction time, never assumed silently downstream.
#[derive(Clone, Debug)]
pub struct UndirectedGraph {
    n: usize,
    adj: Vec<BitSet>,
}

impl UndirectedGraph {
    /// Builds a graph from an edge list, validating the cubic invariant.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Result<Self, FrankError> {
        if n > crate::bitset::MAX_VERTICES {
            return Err(report!(FrankError::TooLarge)
                .attach_printable(format!("n = {n} exceeds the compiled bit width")));
        }
        if 3 * n / 2 > crate::bitset::MAX_EDGES {
            return Err(report!(FrankError::TooLarge).attach_printable(format!(
                "m = 3n/2 = {} exceeds the compiled bit width",
                3 * n / 2
            )));
        }
        let mut adj = vec![BitSet::empty(); n];
        for &(u, v) in edges {
            if u == v || u >= n || v >= n {
                return Err(report!(FrankError::MalformedGraph6)
                    .attach_printable(format!("invalid edge ({u}, {v}) for n = {n}")));
            }
            adj[u].insert(v);
            adj[v].insert(u);
        }
        let graph = UndirectedGraph { n, adj };
        if !graph.is_cubic() {
            return Err(report!(FrankError::NotCubic));
        }
        Ok(graph)
    }

    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of edges; valid only once the cubic invariant holds (m = 3n/2).
    #[inline]
    pub fn m(&self) -> usize {
        3 * self.n / 2
    }

    #[inline]
    pub fn neighbors(&self, v: usize) -> BitSet {
        self.adj[v]
    }

    #[inline]
    pub fn is_adjacent(&self, u: usize, v: usize) -> bool {
        self.adj[u].contains(v)
    }

    fn is_cubic(&self) -> bool {
        self.n % 2 == 0
            && self.adj.iter().enumerate().all(|(v, set)| {
                set.len() == 3 && !set.contains(v) && set.iter().all(|u| self.adj[u].contains(v))
            })
    }
}

/// Canonical edge numbering (spec §3): iterate vertices ascending, and for
/// each vertex list neighbors with strictly larger index, assigning a fresh
/// counter. `edge_index(u, v)` is symmetric.
#[derive(Clone, Debug)]
pub struct EdgeNumbering {
    n: usize,
    /// index[u][v] = edge index, or `usize::MAX` if u, v are not adjacent.
    index: Vec<Vec<usize>>,
    /// endpoints[e] = (u, v) with u < v.
    endpoints: Vec<(usize, usize)>,
}

const NONE: usize = usize::MAX;

impl EdgeNumbering {
    pub fn new(g: &UndirectedGraph) -> Self {
        let n = g.n();
        let mut index = vec![vec![NONE; n]; n];
        let mut endpoints = Vec::with_capacity(g.m());
        let mut next = 0usize;
        for u in 0..n {
            for v in g.neighbors(u).iter() {
                if v > u {
                    index[u][v] = next;
                    index[v][u] = next;
                    endpoints.push((u, v));
                    next += 1;
                }
            }
        }
        EdgeNumbering { n, index, endpoints }
    }

    #[inline]
    pub fn edge_index(&self, u: usize, v: usize) -> usize {
        self.index[u][v]
    }

    #[inline]
    pub fn endpoints(&self, e: usize) -> (usize, usize) {
        self.endpoints[e]
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.endpoints.len()
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.n
    }
}

/// A digraph as forward + reverse adjacency plus arc count (spec §3).
///
/// A fully-oriented `DiGraph` (`arc_count == m`) is an *orientation* of the
/// undirected graph it was built from, with exactly one of (u, v)/(v, u)
/// present per undirected edge. Partially-oriented states (fewer arcs, none
/// reversed) are valid intermediate states during enumeration (§4.3).
#[derive(Clone, Debug)]
pub struct DiGraph {
    n: usize,
    out: Vec<BitSet>,
    inc: Vec<BitSet>,
    arc_count: usize,
}

impl DiGraph {
    pub fn new(n: usize) -> Self {
        DiGraph {
            n,
            out: vec![BitSet::empty(); n],
            inc: vec![BitSet::empty(); n],
            arc_count: 0,
        }
    }

    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn arc_count(&self) -> usize {
        self.arc_count
    }

    #[inline]
    pub fn out_degree(&self, v: usize) -> usize {
        self.out[v].len()
    }

    #[inline]
    pub fn in_degree(&self, v: usize) -> usize {
        self.inc[v].len()
    }

    #[inline]
    pub fn out_neighbors(&self, v: usize) -> BitSet {
        self.out[v]
    }

    #[inline]
    pub fn in_neighbors(&self, v: usize) -> BitSet {
        self.inc[v]
    }

    #[inline]
    pub fn has_arc(&self, u: usize, v: usize) -> bool {
        self.out[u].contains(v)
    }

    pub fn add_arc(&mut self, u: usize, v: usize) {
        debug_assert!(!self.has_arc(u, v));
        self.out[u].insert(v);
        self.inc[v].insert(u);
        self.arc_count += 1;
    }

    pub fn remove_arc(&mut self, u: usize, v: usize) {
        debug_assert!(self.has_arc(u, v));
        self.out[u].remove(v);
        self.inc[v].remove(u);
        self.arc_count -= 1;
    }

    /// True once every edge of the originating undirected graph has been
    /// oriented one way or the other.
    #[inline]
    pub fn is_full_orientation(&self, m: usize) -> bool {
        self.arc_count == m
    }

    /// A snapshot of (out, in, arc_count) for the constraint search's
    /// save/trial/rollback pattern (spec §4.4, §9).
    pub fn snapshot(&self) -> DiGraphSnapshot {
        DiGraphSnapshot {
            out: self.out.clone(),
            inc: self.inc.clone(),
            arc_count: self.arc_count,
        }
    }

    pub fn restore(&mut self, snapshot: &DiGraphSnapshot) {
        self.out.clone_from(&snapshot.out);
        self.inc.clone_from(&snapshot.inc);
        self.arc_count = snapshot.arc_count;
    }

    /// The orientation with every arc reversed. Spec §8 invariant: this
    /// produces the same deletable set as the original.
    pub fn reversed(&self) -> DiGraph {
        DiGraph {
            n: self.n,
            out: self.inc.clone(),
            inc: self.out.clone(),
            arc_count: self.arc_count,
        }
    }
}

/// Opaque snapshot type for `DiGraph::snapshot`/`restore`.
#[derive(Clone, Debug)]
pub struct DiGraphSnapshot {
    out: Vec<BitSet>,
    inc: Vec<BitSet>,
    arc_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn k4() -> UndirectedGraph {
        UndirectedGraph::from_edges(
            4,
            &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)],
        )
        .unwrap()
    }

    #[test]
    fn k4_is_cubic() {
        let g = k4();
        assert_eq!(g.n(), 4);
        assert_eq!(g.m(), 6);
        for v in 0..4 {
            assert_eq!(g.neighbors(v).len(), 3);
        }
    }

    #[test]
    fn rejects_non_cubic() {
        let err = UndirectedGraph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
        assert!(err.is_err());
    }

    #[test]
    fn rejects_n_within_vertex_width_whose_edge_count_overflows_it() {
        // m = 3n/2 has its own bit-width ceiling, distinct from n's: at
        // n = MAX_VERTICES, m is always 1.5x that, so it always overflows
        // EdgeSet's width even though n itself is in bounds.
        let n = crate::bitset::MAX_VERTICES;
        let err = UndirectedGraph::from_edges(n, &[]);
        assert!(err.is_err());
    }

    #[test]
    fn edge_numbering_is_symmetric_and_covers_0_to_m() {
        let g = k4();
        let en = EdgeNumbering::new(&g);
        assert_eq!(en.num_edges(), g.m());
        let mut seen = vec![false; g.m()];
        for u in 0..g.n() {
            for v in g.neighbors(u).iter() {
                let e = en.edge_index(u, v);
                assert_eq!(e, en.edge_index(v, u));
                seen[e] = true;
            }
        }
        assert!(seen.iter().all(|&b| b));
    }

    #[test]
    fn digraph_arc_bookkeeping() {
        let mut d = DiGraph::new(3);
        d.add_arc(0, 1);
        d.add_arc(1, 2);
        assert_eq!(d.arc_count(), 2);
        assert!(d.has_arc(0, 1));
        assert_eq!(d.out_degree(0), 1);
        assert_eq!(d.in_degree(1), 1);
        d.remove_arc(0, 1);
        assert_eq!(d.arc_count(), 1);
        assert!(!d.has_arc(0, 1));
    }

    #[test]
    fn reversed_swaps_out_and_in() {
        let mut d = DiGraph::new(3);
        d.add_arc(0, 1);
        d.add_arc(1, 2);
        let r = d.reversed();
        assert!(r.has_arc(1, 0));
        assert!(r.has_arc(2, 1));
        assert_eq!(r.arc_count(), d.arc_count());
    }

    #[test]
    fn snapshot_restore_round_trip() {
        let mut d = DiGraph::new(3);
        d.add_arc(0, 1);
        let snap = d.snapshot();
        d.add_arc(1, 2);
        assert_eq!(d.arc_count(), 2);
        d.restore(&snap);
        assert_eq!(d.arc_count(), 1);
        assert!(!d.has_arc(1, 2));
    }
}

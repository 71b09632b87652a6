//! Circuit-orientation consistency and the strong-2-edge test (spec §4.8,
//! §4.9), used by the heuristic configuration test (§4.7) to validate a
//! candidate matching/2-factor pairing without building full orientations.

use crate::bitset::{BitSet, VertexEdgeSet};
use crate::model::UndirectedGraph;

pub const UNORIENTED: usize = usize::MAX;

/// Per-vertex "next vertex in the chosen cyclic direction" along the cycle
/// formed by alternating `M` and `F` edges. Unset entries are `UNORIENTED`.
pub type CircuitOrientation = Vec<usize>;

pub fn new_circuit_orientation(n: usize) -> CircuitOrientation {
    vec![UNORIENTED; n]
}

/// Walks the M/F-alternating cycle through `start`, recording `next` hops in
/// `orientation`, until it reaches an already-oriented vertex or a vertex
/// with no `M` partner (the skipped vertex of a near-perfect odd-cycle
/// matching, which terminates the walk rather than looping forever).
///
/// `pub(crate)` rather than private: the witness builder (§4.10 step 2)
/// reuses this exact walk to extend `orientation` to every M/F-alternating
/// component `is_consistent`'s own calls didn't already reach, starting
/// fresh at an arbitrary still-unoriented vertex.
pub(crate) fn orient_through(start: usize, start_with_m: bool, m: &[usize], f: &[usize], orientation: &mut CircuitOrientation) {
    let mut cur = start;
    let mut use_m = start_with_m;
    loop {
        if orientation[cur] != UNORIENTED {
            return;
        }
        let next = if use_m { m[cur] } else { f[cur] };
        if next == UNORIENTED {
            return;
        }
        orientation[cur] = next;
        cur = next;
        use_m = !use_m;
    }
}

/// Tests orientation consistency for the pair `(u, v)` (spec §4.8),
/// extending `orientation` with freshly walked cycles through `u` and/or `v`
/// as needed.
pub fn is_consistent(u: usize, v: usize, m: &[usize], f: &[usize], orientation: &mut CircuitOrientation) -> bool {
    if orientation[u] == UNORIENTED {
        let v_is_f_at_v = orientation[v] != UNORIENTED && orientation[v] == f[v];
        orient_through(u, v_is_f_at_v, m, f, orientation);
    }
    if orientation[v] == UNORIENTED {
        let u_is_f_at_u = orientation[u] != UNORIENTED && orientation[u] == f[u];
        orient_through(v, !u_is_f_at_u, m, f, orientation);
    }
    if orientation[u] == UNORIENTED || orientation[v] == UNORIENTED {
        return false;
    }
    (orientation[u] == f[u]) == (orientation[v] == m[v])
}

/// Is `g` (restricted to the edges still present) cyclically connected, in
/// the sense §4.9 needs: at most one connected component contains a cycle? A
/// component contains a cycle iff a DFS over it finds a back-edge.
fn is_cyclically_connected(g: &UndirectedGraph, removed: &[(usize, usize)]) -> bool {
    let n = g.n();
    let mut visited = BitSet::empty();
    let mut components_with_cycle = 0;

    for start in 0..n {
        if visited.contains(start) {
            continue;
        }
        let mut stack = vec![(start, UNORIENTED)];
        let mut found_cycle = false;
        while let Some((u, parent)) = stack.pop() {
            if visited.contains(u) {
                continue;
            }
            visited.insert(u);
            let mut seen_parent_edge = false;
            for w in g.neighbors(u).iter() {
                if removed.contains(&(u, w)) || removed.contains(&(w, u)) {
                    continue;
                }
                if w == parent && !seen_parent_edge {
                    // Consume exactly one edge back to the immediate parent
                    // as "the edge we arrived on", not a back-edge. Any
                    // further edge to an already-visited vertex (including a
                    // second edge to `parent`, i.e. a multi-edge) is real.
                    seen_parent_edge = true;
                    continue;
                }
                if visited.contains(w) {
                    found_cycle = true;
                } else {
                    stack.push((w, u));
                }
            }
        }
        if found_cycle {
            components_with_cycle += 1;
        }
    }

    components_with_cycle <= 1
}

/// Is `{p, q}` a strong 2-edge (spec §4.9)? Approximated by: for every pair
/// of distinct `F`-edges whose direction has already been fixed in
/// `orientation`, removing `{p, q}` and that pair must not disconnect `g`
/// into two cycle-containing pieces.
pub fn is_strong_2_edge(g: &UndirectedGraph, p: usize, q: usize, f: &[usize], orientation: &[usize]) -> bool {
    let fixed_f_edges: Vec<(usize, usize)> = (0..g.n())
        .filter(|&v| orientation[v] == f[v] && f[v] != UNORIENTED)
        .map(|v| (v, f[v]))
        .collect();

    for i in 0..fixed_f_edges.len() {
        for j in (i + 1)..fixed_f_edges.len() {
            let removed = [(p, q), fixed_f_edges[i], fixed_f_edges[j]];
            if !is_cyclically_connected(g, &removed) {
                return false;
            }
        }
    }
    true
}

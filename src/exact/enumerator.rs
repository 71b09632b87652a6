//! Orientation enumerator (spec §4.3): walks every full orientation of a
//! cubic graph in canonical edge order, filters to the strongly connected
//! ones, and hands each surviving candidate to a caller-supplied callback.

use crate::bitset::{BitSet, VertexEdgeSet};
use crate::deletable;
use crate::model::{DiGraph, EdgeNumbering, UndirectedGraph};
use crate::scc;

use super::Shard;

pub struct Context<'a> {
    pub g: &'a UndirectedGraph,
    pub numbering: &'a EdgeNumbering,
    pub shard: Option<Shard>,
}

/// Enumerates every strongly connected full orientation of `ctx.g`, in
/// canonical edge order (`ctx.numbering`'s assignment: u ascending, then v >
/// u ascending), calling `on_candidate(d, deletable(d))` for each one that
/// also clears the "no vertex has all three incident edges non-deletable"
/// prefilter. Returns `true` as soon as `on_candidate` does, short-circuiting
/// the remaining search.
pub fn enumerate_orientations(
    ctx: &Context,
    total_generated: &mut u64,
    on_candidate: &mut dyn FnMut(&DiGraph, BitSet) -> bool,
) -> bool {
    let n = ctx.g.n();
    let m = ctx.numbering.num_edges();
    let mut d = DiGraph::new(n);
    let mut scratch = scc::Scratch::new(n);
    recurse(ctx, &mut d, 0, m, total_generated, &mut scratch, on_candidate)
}

fn recurse(
    ctx: &Context,
    d: &mut DiGraph,
    edge: usize,
    m: usize,
    total_generated: &mut u64,
    scratch: &mut scc::Scratch,
    on_candidate: &mut dyn FnMut(&DiGraph, BitSet) -> bool,
) -> bool {
    if edge == m {
        return terminal(ctx, d, total_generated, scratch, on_candidate);
    }

    let (u, v) = ctx.numbering.endpoints(edge);

    if d.out_degree(u) < 2 && d.in_degree(v) < 2 {
        d.add_arc(u, v);
        if recurse(ctx, d, edge + 1, m, total_generated, scratch, on_candidate) {
            return true;
        }
        d.remove_arc(u, v);
    }

    if d.out_degree(v) < 2 && d.in_degree(u) < 2 {
        d.add_arc(v, u);
        if recurse(ctx, d, edge + 1, m, total_generated, scratch, on_candidate) {
            return true;
        }
        d.remove_arc(v, u);
    }

    false
}

fn terminal(
    ctx: &Context,
    d: &DiGraph,
    total_generated: &mut u64,
    scratch: &mut scc::Scratch,
    on_candidate: &mut dyn FnMut(&DiGraph, BitSet) -> bool,
) -> bool {
    *total_generated += 1;

    if let Some(Shard { r, m }) = ctx.shard {
        if *total_generated % m != r {
            return false;
        }
    }

    if !scc::is_strongly_connected(d, ctx.g.n(), scratch) {
        return false;
    }

    let deletable = deletable::deletable_edges(d, ctx.numbering);
    if has_vertex_with_no_deletable_edge(ctx.g, ctx.numbering, &deletable) {
        return false;
    }

    on_candidate(d, deletable)
}

/// Spec §4.3 pruning: a full orientation can only be half of a Frank-2 pair
/// if every vertex has at least one deletable incident edge (otherwise no
/// complementary orientation could ever cover that vertex's remaining arcs).
fn has_vertex_with_no_deletable_edge(
    g: &UndirectedGraph,
    numbering: &EdgeNumbering,
    deletable: &BitSet,
) -> bool {
    (0..g.n()).any(|x| {
        g.neighbors(x)
            .iter()
            .all(|y| !deletable.contains(numbering.edge_index(x, y)))
    })
}

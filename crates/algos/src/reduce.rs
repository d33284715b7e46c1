//! Iterated-firing reduction of an arbitrary effective divisor to its unique
//! v-reduced representative, plus the `is_reduced` predicates built directly
//! on top of [`crate::burn`].

use dgon_core::{Divisor, Graph, UndirectedNeighbors, WorkContext};

use crate::burn::burn;

/// True iff `burn(G, D, target)` returns the empty firing set, i.e. `D` is
/// already v-reduced at `target`.
pub fn is_reduced(graph: &Graph, divisor: &Divisor, target: usize, ctx: &mut WorkContext) -> bool {
    burn(graph, divisor, target, ctx).is_empty()
}

/// True iff `D` is v-reduced with respect to *some* vertex. A debugging
/// helper, not used by the search engine's hot path (the search only ever
/// cares about reducedness at vertex 0).
pub fn is_reduced_at_some_vertex(graph: &Graph, divisor: &Divisor, ctx: &mut WorkContext) -> bool {
    (0..graph.node_count()).any(|v| is_reduced(graph, divisor, v, ctx))
}

/// Reduces `D` to the unique divisor linearly equivalent to it that is
/// v-reduced at `target`.
pub fn reduce(graph: &Graph, divisor: &Divisor, target: usize, ctx: &mut WorkContext) -> Divisor {
    reduce_with_script(graph, divisor, target, ctx).0
}

/// Like [`reduce`], but also returns the firing script: how many times each
/// vertex was fired during reduction. `script[target]` is always `0`, since
/// `target` is always burnt first and so never appears in a firing set.
pub fn reduce_with_script(
    graph: &Graph,
    divisor: &Divisor,
    target: usize,
    ctx: &mut WorkContext,
) -> (Divisor, Vec<u32>) {
    *ctx.working_mut() = divisor.clone();
    ctx.clear_script();

    loop {
        // `burn` needs `ctx` mutably for its own scratch buffers, so the
        // divisor it burns has to be a snapshot independent of `ctx`, not a
        // borrow of `ctx.working()` itself.
        let snapshot = ctx.working().clone();
        let firing_set = burn(graph, &snapshot, target, ctx);
        if firing_set.is_empty() {
            break;
        }
        fire(graph, ctx.working_mut(), &firing_set);
        for &v in &firing_set {
            ctx.script_mut()[v] += 1;
        }
    }

    (ctx.working().clone(), ctx.script_mut().to_vec())
}

/// Fires every vertex in `firing_set` simultaneously: for each vertex `v` in
/// the set, for each neighbor `w` of `v` (with multiplicity), decrement
/// `divisor[v]` by one and increment `divisor[w]` by one.
///
/// This neighbor-by-neighbor formulation, rather than `divisor[v] -=
/// degree(v)` followed by one increment per distinct neighbor, is the
/// version that stays correct on multigraphs: each parallel edge is a
/// separate entry in the neighbor list and is visited (and so contributes
/// exactly one chip) once.
pub(crate) fn fire(graph: &Graph, divisor: &mut Divisor, firing_set: &[usize]) {
    for &v in firing_set {
        for &w in graph.neighbors(v) {
            divisor[v] -= 1;
            divisor[w] += 1;
        }
    }
}

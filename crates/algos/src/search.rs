//! The gonality search engine: structured enumeration of effective divisors
//! of a given degree, restricted to those that are v₀-reduced, each tested
//! for positive rank.

use dgon_core::{Divisor, Graph, WorkContext};

use crate::rank::has_positive_rank;
use crate::reduce::reduce;

/// The divisorial gonality of `graph`: the smallest `d >= 1` for which an
/// effective divisor of degree `d` and positive rank exists.
///
/// Every graph with at least one edge has gonality at most `n`, so the
/// search over increasing degree is guaranteed to terminate.
pub fn find_gonality(graph: &Graph, ctx: &mut WorkContext) -> u32 {
    let n = graph.node_count() as u32;
    for d in 1..=n {
        if find_positive_rank_divisor(graph, d, ctx).is_some() {
            return d;
        }
    }
    // Unreachable for a connected graph with n >= 1: the divisor putting
    // all n chips on one vertex always has positive rank.
    n
}

/// Searches for one effective, positive-rank divisor of degree exactly `d`.
pub fn find_positive_rank_divisor(graph: &Graph, d: u32, ctx: &mut WorkContext) -> Option<Divisor> {
    let mut found = None;
    find_all_positive_rank_v0_reduced_divisors(graph, d, ctx, |divisor| {
        found = Some(divisor.clone());
        false
    });
    found
}

/// Enumerates every positive-rank, v₀-reduced, effective divisor of degree
/// exactly `d`, passing each to `callback`. `callback` returns whether the
/// search should keep going; returning `false` stops the enumeration early.
pub fn find_all_positive_rank_v0_reduced_divisors(
    graph: &Graph,
    d: u32,
    ctx: &mut WorkContext,
    mut callback: impl FnMut(&Divisor) -> bool,
) {
    let n = graph.node_count();
    if n == 0 {
        return;
    }
    *ctx.partial_mut() = Divisor::zero(n);
    recurse(graph, d as i64, 0, ctx, &mut callback);
}

/// Depth-first construction of effective divisors of degree `budget`, one
/// vertex at a time. At vertex `i` the recursion places `D[i]` chips, `1..=
/// budget` at `i = 0` (a v₀-reduced positive-rank divisor always has at
/// least one chip on v₀, see the module doc) and `0..=budget` elsewhere, and
/// explores larger chip counts first so that, within the subtree rooted at
/// v₀'s choice, divisors of every smaller degree are visited before this
/// one completes.
fn recurse(
    graph: &Graph,
    budget: i64,
    vertex: usize,
    ctx: &mut WorkContext,
    callback: &mut impl FnMut(&Divisor) -> bool,
) -> bool {
    let n = graph.node_count();

    if vertex == n {
        if budget != 0 {
            return true;
        }
        return check_candidate(graph, ctx, callback);
    }

    let lo = if vertex == 0 { 1 } else { 0 };
    let mut chips = budget;
    while chips >= lo {
        ctx.partial_mut()[vertex] = chips;
        if !recurse(graph, budget - chips, vertex + 1, ctx, callback) {
            return false;
        }
        chips -= 1;
    }
    ctx.partial_mut()[vertex] = 0;
    true
}

/// Accepts `ctx.partial()` iff it is v₀-reduced and has positive rank.
/// Returns whether the search should keep going.
fn check_candidate(graph: &Graph, ctx: &mut WorkContext, callback: &mut impl FnMut(&Divisor) -> bool) -> bool {
    let candidate = ctx.partial().clone();

    let reduced = reduce(graph, &candidate, 0, ctx);
    if reduced != candidate {
        // Not v₀-reduced: this candidate's equivalence class was (or will
        // be) visited through its actual v₀-reduced representative.
        return true;
    }

    if !has_positive_rank(graph, &candidate, ctx) {
        return true;
    }

    callback(&candidate)
}

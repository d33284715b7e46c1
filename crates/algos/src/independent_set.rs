//! Randomized independent-set approximation and the Brill–Noether
//! upper-bound certificate built from it.

use dgon_core::{fatal_assert, Divisor, Graph, UndirectedNeighbors, WorkContext};
use nanorand::Rng;

use crate::rank::has_positive_rank;

/// Boppana–Halldórsson "Clique Removal": repeatedly picks a random vertex
/// from the candidate set, adds it to the independent set, and removes its
/// closed neighborhood from the candidates. Re-run `attempts` times, keeping
/// the largest set found, since the expected approximation ratio only holds
/// in expectation, not on every single run.
pub fn approximate_max_independent_set(graph: &Graph, attempts: u32) -> Vec<usize> {
    let n = graph.node_count();
    let mut best: Vec<usize> = Vec::new();

    for _ in 0..attempts.max(1) {
        let candidate = one_clique_removal_pass(graph, n);
        if candidate.len() > best.len() {
            best = candidate;
        }
    }

    best
}

fn one_clique_removal_pass(graph: &Graph, n: usize) -> Vec<usize> {
    let mut remaining: Vec<usize> = (0..n).collect();
    let mut independent = Vec::new();
    let mut rng = nanorand::tls_rng();

    while !remaining.is_empty() {
        let pick = rng.generate_range(0..remaining.len());
        let v = remaining.swap_remove(pick);
        independent.push(v);

        let neighbors: std::collections::HashSet<usize> = graph.neighbors(v).iter().copied().collect();
        remaining.retain(|u| *u != v && !neighbors.contains(u));
    }

    independent
}

/// True iff no two members of `set` are adjacent in `graph`.
fn is_independent(graph: &Graph, set: &[usize]) -> bool {
    for (i, &u) in set.iter().enumerate() {
        for &v in &set[i + 1..] {
            if graph.neighbors(u).contains(&v) {
                return false;
            }
        }
    }
    true
}

/// Builds the Brill–Noether certificate divisor for `graph`: one chip on
/// every vertex *not* in an approximate maximum independent set, zero on the
/// vertices in the set, then tests it for positive rank. A `true` result is
/// an upper-bound witness, not a gonality value; a `false` result says
/// nothing (the approximator may simply have found a small independent
/// set).
///
/// # Panics
///
/// Aborts via [`dgon_core::FatalError`] if the approximator's output is not
/// actually an independent set — a contract violation in
/// `approximate_max_independent_set`, not a malformed input.
pub fn brill_noether_certificate(graph: &Graph, attempts: u32, ctx: &mut WorkContext) -> bool {
    let n = graph.node_count();
    let set = approximate_max_independent_set(graph, attempts);
    fatal_assert!(
        is_independent(graph, &set),
        "brill_noether_certificate: approximator returned a non-independent set"
    );

    let mut chips = vec![1i64; n];
    for &v in &set {
        chips[v] = 0;
    }
    let certificate = Divisor::new(chips);

    has_positive_rank(graph, &certificate, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dgon_core::GraphBuilder;

    fn k4() -> Graph {
        GraphBuilder::new(4)
            .edges([(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)])
            .build()
            .unwrap()
    }

    fn edgeless(n: usize) -> Graph {
        GraphBuilder::new(n).build_allow_disconnected().unwrap()
    }

    #[test]
    fn independent_set_on_k4_is_a_single_vertex() {
        let graph = k4();
        let set = approximate_max_independent_set(&graph, 10);
        assert_eq!(set.len(), 1);
        assert!(is_independent(&graph, &set));
    }

    #[test]
    fn independent_set_on_edgeless_graph_is_everything() {
        let graph = edgeless(5);
        let set = approximate_max_independent_set(&graph, 10);
        assert_eq!(set.len(), 5);
    }

    #[test]
    fn more_attempts_never_shrink_the_best_set() {
        let graph = k4();
        let few = approximate_max_independent_set(&graph, 1);
        let many = approximate_max_independent_set(&graph, 50);
        assert!(many.len() >= few.len());
    }

    #[test]
    fn certificate_is_a_valid_upper_bound_witness_on_k4() {
        let graph = k4();
        let mut ctx = WorkContext::new(4);
        // K4's independence number is 1, so the certificate divisor is
        // [0,1,1,1] up to a permutation: degree 3, matching its gonality.
        assert!(brill_noether_certificate(&graph, 20, &mut ctx));
    }

    fn complete_bipartite_3_3() -> Graph {
        let edges = (0..3usize).flat_map(|u| (3..6usize).map(move |v| (u, v)));
        GraphBuilder::new(6).edges(edges).build().unwrap()
    }

    #[test]
    fn independence_number_is_exact_on_complete_bipartite() {
        // K_{3,3}'s independence number is 3 (either side); the
        // approximator always finds a full side here, since starting from
        // any vertex removes the entire opposite side as its closed
        // neighborhood, leaving only the rest of the chosen side.
        let graph = complete_bipartite_3_3();
        let set = approximate_max_independent_set(&graph, 20);
        assert_eq!(set.len(), 3);
        assert!(is_independent(&graph, &set));
    }

    #[test]
    fn certificate_matches_the_n_minus_alpha_plus_one_bound_on_complete_bipartite() {
        // n - alpha(G) + 1 = 6 - 3 + 1 = 4, but the found gonality (3,
        // per the witness [1,1,1,0,0,0]-shaped divisor) means the
        // certificate's degree-4 divisor is a loose, still-valid upper
        // bound: it must have positive rank even though it isn't minimal.
        let graph = complete_bipartite_3_3();
        let mut ctx = WorkContext::new(6);
        assert!(brill_noether_certificate(&graph, 20, &mut ctx));
    }
}

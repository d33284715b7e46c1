//! Positive-rank testing.
//!
//! `D` has positive rank iff `D - 1_v` is equivalent to an effective divisor
//! for every vertex `v`, i.e. removing a chip from anywhere still leaves
//! something winnable. Checking this by reducing `D - 1_v` from scratch at
//! every `v` works but repeats the same firing moves across different `v`;
//! instead we track, for the single divisor `D` itself, which vertices a
//! witnessing effective divisor can be found "from" by memoizing across the
//! outer loop: `can_reach[v]` becomes `true` as soon as some chip-positive
//! divisor reachable from `D` by firing has `D'[v] >= 1`.

use dgon_core::{Divisor, Graph, WorkContext};

use crate::burn::burn;
use crate::reduce::fire;

/// True iff `D` has positive rank on `graph`.
pub fn has_positive_rank(graph: &Graph, divisor: &Divisor, ctx: &mut WorkContext) -> bool {
    let n = graph.node_count();
    *ctx.working_mut() = divisor.clone();

    {
        let (working, can_reach) = ctx.rank_buffers_mut();
        for v in 0..n {
            can_reach[v] = working[v] > 0;
        }
    }

    for u in 0..n {
        while !ctx.can_reach()[u] {
            let snapshot = ctx.working().clone();
            let firing_set = burn(graph, &snapshot, u, ctx);
            if firing_set.is_empty() {
                // `working` is v-reduced at `u` and still has `working[u] <=
                // 0`: no amount of further firing can put a chip on `u`
                // without taking the divisor out of this equivalence class.
                return false;
            }
            fire(graph, ctx.working_mut(), &firing_set);
            let (working, can_reach) = ctx.rank_buffers_mut();
            for v in 0..n {
                if working[v] > 0 {
                    can_reach[v] = true;
                }
            }
        }
    }

    true
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

    fn path5() -> Graph {
        GraphBuilder::new(5)
            .edges([(0, 1), (1, 2), (2, 3), (3, 4)])
            .build()
            .unwrap()
    }

    fn cycle6() -> Graph {
        GraphBuilder::new(6)
            .edges([(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0)])
            .build()
            .unwrap()
    }

    #[test]
    fn full_degree_divisor_on_k4_has_positive_rank() {
        let graph = k4();
        let mut ctx = WorkContext::new(4);
        let d = Divisor::new(vec![1, 1, 1, 0]);
        assert!(has_positive_rank(&graph, &d, &mut ctx));
    }

    #[test]
    fn single_chip_anywhere_on_a_tree_has_positive_rank() {
        // Trees have trivial Jacobian: every degree-1 effective divisor is
        // linearly equivalent to every other, so a lone chip can always be
        // rolled to any vertex.
        let graph = path5();
        let mut ctx = WorkContext::new(5);
        let d = Divisor::new(vec![1, 0, 0, 0, 0]);
        assert!(has_positive_rank(&graph, &d, &mut ctx));
    }

    #[test]
    fn single_chip_on_a_cycle_lacks_positive_rank() {
        // C6 has gonality 2 (a single chip cannot reach the antipodal
        // vertex), but two chips placed opposite each other do.
        let graph = cycle6();
        let mut ctx = WorkContext::new(6);
        let one_chip = Divisor::new(vec![1, 0, 0, 0, 0, 0]);
        assert!(!has_positive_rank(&graph, &one_chip, &mut ctx));

        let two_chips = Divisor::new(vec![1, 0, 0, 1, 0, 0]);
        assert!(has_positive_rank(&graph, &two_chips, &mut ctx));
    }

    #[test]
    fn zero_divisor_never_has_positive_rank_on_a_nonempty_graph() {
        let graph = k4();
        let mut ctx = WorkContext::new(4);
        let d = Divisor::zero(4);
        assert!(!has_positive_rank(&graph, &d, &mut ctx));
    }

    #[test]
    fn rank_is_monotone_under_domination() {
        let graph = k4();
        let mut ctx = WorkContext::new(4);
        let small = Divisor::new(vec![1, 1, 1, 0]);
        let big = Divisor::new(vec![1, 1, 1, 1]);
        assert!(big.dominates(&small));
        assert!(has_positive_rank(&graph, &small, &mut ctx));
        assert!(has_positive_rank(&graph, &big, &mut ctx));
    }
}

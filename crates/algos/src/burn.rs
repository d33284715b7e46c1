//! Dhar's burning algorithm.
//!
//! Given a divisor `D` and a start vertex, fire propagates outward from
//! `start` along every edge. A vertex catches fire once the number of fire
//! arriving from already-burnt neighbors exceeds its own chip count; `start`
//! is always burnt, regardless of `D[start]`. The vertices left unburnt when
//! the fire stops spreading form the maximal firing set: firing all of them
//! simultaneously keeps every one of them non-negative.

use std::collections::VecDeque;

use dgon_core::{fatal_assert, Divisor, Graph, UndirectedNeighbors, WorkContext};

/// Returns `F`, the set of vertices not burnt when fire propagates from
/// `start` under divisor `D`. `F` is empty iff `start` threatens the whole
/// graph, i.e. `D` is v-reduced at `start`.
///
/// # Example
///
/// ```
/// use dgon_core::{Divisor, GraphBuilder, WorkContext};
/// use dgon::burn;
///
/// // C4: a 4-cycle. D = [2, 0, 0, 0] is reduced at 0.
/// let graph = GraphBuilder::new(4).edges([(0, 1), (1, 2), (2, 3), (3, 0)]).build().unwrap();
/// let mut ctx = WorkContext::new(4);
///
/// let d = Divisor::new(vec![2, 0, 0, 0]);
/// assert!(burn(&graph, &d, 0, &mut ctx).is_empty());
///
/// // D = [0, 1, 0, 1] is not: vertex 0 cannot burn past either neighbor.
/// let d = Divisor::new(vec![0, 1, 0, 1]);
/// let mut unburnt = burn(&graph, &d, 0, &mut ctx);
/// unburnt.sort_unstable();
/// assert_eq!(unburnt, vec![1, 2, 3]);
/// ```
pub fn burn(graph: &Graph, divisor: &Divisor, start: usize, ctx: &mut WorkContext) -> Vec<usize> {
    let n = graph.node_count();
    fatal_assert!(
        divisor.len() == n,
        "burn: divisor has {} entries, graph has {n} vertices",
        divisor.len()
    );
    fatal_assert!(start < n, "burn: start vertex {start} out of range for {n} vertices");

    let (burnt_edges, burnt, queue) = ctx.burn_buffers_mut();
    burnt_edges.iter_mut().for_each(|c| *c = 0);
    burnt.iter_mut().for_each(|b| *b = false);
    queue.clear();

    burnt[start] = true;
    queue.push_back(start);

    propagate(graph, divisor, burnt_edges, burnt, queue);

    (0..n).filter(|&v| !burnt[v]).collect()
}

fn propagate(
    graph: &Graph,
    divisor: &Divisor,
    burnt_edges: &mut [u32],
    burnt: &mut [bool],
    queue: &mut VecDeque<usize>,
) {
    while let Some(u) = queue.pop_front() {
        for &v in graph.neighbors(u) {
            if burnt[v] {
                continue;
            }
            burnt_edges[v] += 1;
            if burnt_edges[v] as i64 > divisor[v] {
                burnt[v] = true;
                queue.push_back(v);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dgon_core::GraphBuilder;

    fn c4() -> Graph {
        GraphBuilder::new(4).edges([(0, 1), (1, 2), (2, 3), (3, 0)]).build().unwrap()
    }

    #[test]
    fn reduced_divisor_burns_everything() {
        let graph = c4();
        let mut ctx = WorkContext::new(4);
        let d = Divisor::new(vec![2, 0, 0, 0]);
        assert!(burn(&graph, &d, 0, &mut ctx).is_empty());
    }

    #[test]
    fn unreduced_divisor_leaves_unburnt_vertices() {
        let graph = c4();
        let mut ctx = WorkContext::new(4);
        let d = Divisor::new(vec![0, 1, 0, 1]);
        let mut unburnt = burn(&graph, &d, 0, &mut ctx);
        unburnt.sort_unstable();
        assert_eq!(unburnt, vec![1, 2, 3]);
    }

    #[test]
    fn start_vertex_chip_count_is_never_read() {
        let graph = c4();
        let mut ctx = WorkContext::new(4);
        // D[0] is negative, which would be illegal for an effective divisor
        // anywhere else, but burn never reads D[start].
        let d = Divisor::new(vec![-5, 0, 0, 0]);
        assert!(burn(&graph, &d, 0, &mut ctx).is_empty());
    }

    #[test]
    fn parallel_edges_count_separately_toward_burning() {
        // Two vertices joined by 3 parallel edges: D = [0, 2] should not
        // fully burn from 0 (vertex 1 needs burnt_edges > 2, i.e. 3 edges).
        let graph = GraphBuilder::new(2).edges([(0, 1), (0, 1), (0, 1)]).build().unwrap();
        let mut ctx = WorkContext::new(2);
        let d = Divisor::new(vec![0, 2]);
        assert!(burn(&graph, &d, 0, &mut ctx).is_empty());

        let d = Divisor::new(vec![0, 3]);
        assert_eq!(burn(&graph, &d, 0, &mut ctx), vec![1]);
    }
}

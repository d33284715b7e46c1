//! k-regular subdivision: replacing every edge of a graph by a path of `k`
//! edges through `k - 1` fresh degree-2 vertices.

use dgon_core::{fatal_assert, Graph, GraphBuilder, UndirectedNeighbors, MAX_PARTS_PER_EDGE};

/// Returns the `k`-fold subdivision of `graph`: every edge `(u, v)` becomes
/// a path `u - w_1 - w_2 - ... - w_{k-1} - v` through `k - 1` new vertices
/// appended after `graph`'s existing `n` vertices. Parallel edges are
/// subdivided independently, each getting its own fresh path.
///
/// # Panics
///
/// Aborts via [`dgon_core::FatalError`] if `k` is outside `[2,
/// MAX_PARTS_PER_EDGE]`; the valid range is a caller-side contract, not a
/// property of the input graph.
pub fn subdivide(graph: &Graph, k: usize) -> Graph {
    fatal_assert!(
        (2..=MAX_PARTS_PER_EDGE).contains(&k),
        "subdivide: k = {k} outside [2, {MAX_PARTS_PER_EDGE}]"
    );

    let n = graph.node_count();
    let mut next_vertex = n;
    let mut builder = GraphBuilder::new(n);

    // Undirected adjacency lists store each edge twice (once per endpoint);
    // only subdivide the `v > u` occurrence of each pair to avoid doing it
    // twice. Each occurrence of a parallel edge still gets its own path.
    for u in 0..n {
        for &v in graph.neighbors(u) {
            if v <= u {
                continue;
            }
            let mut prev = u;
            for _ in 0..k - 1 {
                builder = grow(builder, &mut next_vertex);
                builder.add_edge(prev, next_vertex - 1);
                prev = next_vertex - 1;
            }
            builder.add_edge(prev, v);
        }
    }

    builder.build().expect("subdivision of a validated graph is always valid")
}

fn grow(mut builder: GraphBuilder, next_vertex: &mut usize) -> GraphBuilder {
    builder = builder.add_vertex();
    *next_vertex += 1;
    builder
}

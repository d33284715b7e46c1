//! The graph model: an immutable undirected multigraph on vertices
//! `0..node_count`, plus the [`GraphBuilder`] used to construct one.
//!
//! # Example
//!
//! ```
//! use dgon_core::GraphBuilder;
//!
//! // K4: every pair of 4 vertices is joined by an edge.
//! let graph = GraphBuilder::new(4)
//!     .edges([(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(graph.node_count(), 4);
//! assert_eq!(graph.edge_count(), 6);
//! assert_eq!(graph.degree(0), 3);
//! ```

use std::collections::VecDeque;

use log::debug;

use crate::capacity::{MAX_EDGES, MAX_VERTICES};
use crate::error::GraphError;

/// Returns the number of edges connected to a vertex.
pub trait UndirectedDegrees {
    fn degree(&self, v: usize) -> usize;
}

/// Returns the neighbors of a vertex, one entry per incident edge (parallel
/// edges appear once per edge, not deduplicated).
pub trait UndirectedNeighbors {
    fn neighbors(&self, v: usize) -> &[usize];
}

/// A finite undirected multigraph on vertices `0..n`, stored as an adjacency
/// list. Self-loops are forbidden; parallel edges are allowed and are
/// represented by repeated entries in the neighbor lists of both endpoints.
///
/// Construction goes through [`GraphBuilder`]; once built, a `Graph` is
/// read-only for the lifetime of any computation run against it.
#[derive(Debug, Clone)]
pub struct Graph {
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    /// Number of vertices.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges. Each parallel edge counts separately.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// The adjacency-count matrix `A[i][j]`, the number of edges between `i`
    /// and `j`. Symmetric, with `A[i][i] == 0`. Materialized on demand; not
    /// cached, since the core only ever calls this once per graph (at
    /// validation time) or from tests.
    pub fn adjacency_matrix(&self) -> Vec<Vec<u32>> {
        let n = self.node_count();
        let mut matrix = vec![vec![0u32; n]; n];
        for (u, neighbors) in self.adjacency.iter().enumerate() {
            for &v in neighbors {
                matrix[u][v] += 1;
            }
        }
        matrix
    }

    /// True iff every entry of the adjacency matrix is `0` or `1`, i.e. there
    /// are no parallel edges.
    pub fn is_simple(&self) -> bool {
        self.adjacency_matrix()
            .iter()
            .all(|row| row.iter().all(|&count| count <= 1))
    }

    /// The optional "is simple" check from spec §4.1: parallel edges are a
    /// valid part of this data model, so `validate`/`validate_allow_disconnected`
    /// don't perform it implicitly. Callers that need a simple graph (graph6
    /// encoding, which has no parallel-edge representation) call this
    /// explicitly instead.
    pub fn validate_simple(&self) -> Result<(), GraphError> {
        let matrix = self.adjacency_matrix();
        let n = self.node_count();
        for u in 0..n {
            for v in (u + 1)..n {
                if matrix[u][v] > 1 {
                    return Err(GraphError::NotSimple {
                        u,
                        v,
                        count: matrix[u][v],
                    });
                }
            }
        }
        Ok(())
    }

    /// Checks all data-model invariants (symmetry, no self-loops, vertex
    /// indices in range) and that the graph is connected, populating the
    /// adjacency-matrix cache as a side effect of the symmetry check.
    ///
    /// Rejecting disconnected graphs here, rather than inside the search
    /// engine, is the resolution to the "does the v₀-reduced acceptance
    /// predicate hold for disconnected graphs" open question: the search
    /// engine never has to special-case disconnected input because it never
    /// sees any.
    pub fn validate(&self) -> Result<(), GraphError> {
        self.validate_symmetry()?;
        self.validate_connected()
    }

    /// Like [`Graph::validate`] but skips the connectivity check, for callers
    /// who intend to run the search per connected component themselves.
    pub fn validate_allow_disconnected(&self) -> Result<(), GraphError> {
        self.validate_symmetry()
    }

    fn validate_symmetry(&self) -> Result<(), GraphError> {
        let n = self.node_count();
        if n > MAX_VERTICES {
            return Err(GraphError::CapacityExceeded {
                kind: "vertex count",
                requested: n,
                limit: MAX_VERTICES,
            });
        }
        if self.edge_count() > MAX_EDGES {
            return Err(GraphError::CapacityExceeded {
                kind: "edge count",
                requested: self.edge_count(),
                limit: MAX_EDGES,
            });
        }

        let matrix = self.adjacency_matrix();
        for u in 0..n {
            for &v in &self.adjacency[u] {
                if v == u {
                    return Err(GraphError::SelfLoop(u));
                }
                if v >= n {
                    return Err(GraphError::VertexOutOfRange { u, v, n });
                }
            }
            for v in 0..n {
                if matrix[u][v] != matrix[v][u] {
                    return Err(GraphError::AsymmetricEdge { u, v });
                }
            }
        }
        debug!("validated {n} vertices, {} edges", self.edge_count());
        Ok(())
    }

    fn validate_connected(&self) -> Result<(), GraphError> {
        let n = self.node_count();
        if n == 0 {
            return Ok(());
        }

        let mut visited = vec![false; n];
        let mut queue = VecDeque::from([0usize]);
        visited[0] = true;
        let mut seen = 1;

        while let Some(u) = queue.pop_front() {
            for &v in &self.adjacency[u] {
                if !visited[v] {
                    visited[v] = true;
                    seen += 1;
                    queue.push_back(v);
                }
            }
        }

        if seen == n {
            Ok(())
        } else {
            let unreached = visited.iter().position(|&v| !v).expect("seen < n");
            Err(GraphError::Disconnected(unreached))
        }
    }
}

impl UndirectedDegrees for Graph {
    fn degree(&self, v: usize) -> usize {
        self.adjacency[v].len()
    }
}

impl UndirectedNeighbors for Graph {
    fn neighbors(&self, v: usize) -> &[usize] {
        &self.adjacency[v]
    }
}

/// Accumulates edges, then freezes them into an immutable [`Graph`] on
/// [`GraphBuilder::build`]. Mirrors the accumulate-then-freeze builder shape
/// used elsewhere in this codebase's graph construction, simplified down to
/// the one node-index type (`usize`) and one graph kind (undirected
/// multigraph) this system needs.
pub struct GraphBuilder {
    adjacency: Vec<Vec<usize>>,
}

impl GraphBuilder {
    /// Starts a builder for a graph with `n` vertices and no edges yet.
    pub fn new(n: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); n],
        }
    }

    /// Adds a single edge `(u, v)`. Panics if `u` or `v` is out of range;
    /// out-of-range indices here are a programmer error in the caller, not a
    /// malformed-input condition — ingestion code validates vertex ids
    /// against the declared vertex count before ever calling this.
    pub fn add_edge(&mut self, u: usize, v: usize) -> &mut Self {
        self.adjacency[u].push(v);
        self.adjacency[v].push(u);
        self
    }

    /// Adds every edge in `edges`.
    pub fn edges(mut self, edges: impl IntoIterator<Item = (usize, usize)>) -> Self {
        for (u, v) in edges {
            self.add_edge(u, v);
        }
        self
    }

    /// Appends one fresh, currently edgeless vertex, returning the builder
    /// for further chaining. Used by subdivision, which grows a graph past
    /// its originally declared vertex count.
    pub fn add_vertex(mut self) -> Self {
        self.adjacency.push(Vec::new());
        self
    }

    /// Freezes the accumulated edges into a [`Graph`], running full
    /// validation (including connectivity).
    pub fn build(self) -> Result<Graph, GraphError> {
        let graph = Graph {
            adjacency: self.adjacency,
        };
        graph.validate()?;
        Ok(graph)
    }

    /// Freezes the accumulated edges into a [`Graph`] without requiring
    /// connectivity.
    pub fn build_allow_disconnected(self) -> Result<Graph, GraphError> {
        let graph = Graph {
            adjacency: self.adjacency,
        };
        graph.validate_allow_disconnected()?;
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle(n: usize) -> Graph {
        let edges = (0..n).map(|i| (i, (i + 1) % n));
        GraphBuilder::new(n).edges(edges).build().unwrap()
    }

    #[test]
    fn k4_is_simple_and_3_regular() {
        let graph = GraphBuilder::new(4)
            .edges([(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)])
            .build()
            .unwrap();

        assert!(graph.is_simple());
        assert_eq!(graph.edge_count(), 6);
        for v in 0..4 {
            assert_eq!(graph.degree(v), 3);
        }
    }

    #[test]
    fn parallel_edges_are_not_simple() {
        let graph = GraphBuilder::new(2).edges([(0, 1), (0, 1), (0, 1)]).build().unwrap();

        assert!(!graph.is_simple());
        assert_eq!(graph.degree(0), 3);
        assert_eq!(graph.adjacency_matrix()[0][1], 3);
        assert_eq!(
            graph.validate_simple(),
            Err(GraphError::NotSimple { u: 0, v: 1, count: 3 })
        );
    }

    #[test]
    fn self_loop_is_rejected() {
        let mut builder = GraphBuilder::new(2);
        builder.add_edge(0, 1);
        builder.adjacency[0].push(0);
        let graph = Graph {
            adjacency: builder.adjacency,
        };

        assert_eq!(graph.validate(), Err(GraphError::SelfLoop(0)));
    }

    #[test]
    fn disconnected_graph_is_rejected() {
        let graph = Graph {
            adjacency: vec![vec![1], vec![0], vec![]],
        };

        assert_eq!(graph.validate(), Err(GraphError::Disconnected(2)));
        assert!(graph.validate_allow_disconnected().is_ok());
    }

    #[test]
    fn single_vertex_graph_is_connected() {
        let graph = GraphBuilder::new(1).build().unwrap();
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn cycle_six_has_expected_shape() {
        let graph = cycle(6);
        assert_eq!(graph.edge_count(), 6);
        assert!(graph.is_simple());
        for v in 0..6 {
            assert_eq!(graph.degree(v), 2);
        }
    }
}

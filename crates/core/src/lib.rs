//! Graph and divisor data model shared by the burning, reduction and search
//! engines.
//!
//! This crate is a building block: it owns the immutable multigraph
//! representation, the `Divisor` working type, the per-invocation
//! [`WorkContext`] scratch buffers, and the capacity constants that bound how
//! large a graph the rest of the system will accept. It does not know
//! anything about chip-firing, Dhar's algorithm, or gonality — those live in
//! `dgon` (the algos crate), written against the trait seams exposed here.

pub mod capacity;
pub mod context;
pub mod divisor;
pub mod error;
pub mod graph;
pub mod prelude;

pub use crate::context::WorkContext;
pub use crate::divisor::Divisor;
pub use crate::error::{FatalError, GraphError};
pub use crate::graph::{Graph, GraphBuilder, UndirectedDegrees, UndirectedNeighbors};

//! Convenience re-export of the types most callers need.

pub use crate::capacity::{MAX_EDGES, MAX_PARTS_PER_EDGE, MAX_VERTICES};
pub use crate::context::WorkContext;
pub use crate::divisor::Divisor;
pub use crate::error::{FatalError, GraphError};
pub use crate::graph::{Graph, GraphBuilder, UndirectedDegrees, UndirectedNeighbors};

//! Compile-time capacity constants.
//!
//! These bound how large a graph (or subdivision factor) the rest of the
//! system will accept. They are capacity constants, not algorithmic knobs:
//! nothing about burning, reduction or search changes shape based on these
//! values, they only decide when ingestion should refuse input outright
//! rather than let an exponential search run forever on something that was
//! never going to finish.

/// Largest vertex count accepted by [`crate::Graph::validate`].
pub const MAX_VERTICES: usize = 64;

/// Largest edge count accepted by [`crate::Graph::validate`].
pub const MAX_EDGES: usize = 1024;

/// Largest subdivision factor `k` accepted by `dgon_io::subdivide`.
pub const MAX_PARTS_PER_EDGE: usize = 64;

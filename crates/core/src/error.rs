use thiserror::Error;

/// Errors a caller can recover from: malformed or oversized input discovered
/// while building or validating a [`crate::Graph`].
///
/// This mirrors the one-`Error`-enum-per-crate convention used throughout
/// this codebase: each crate's errors describe that crate's own boundary, not
/// a shared, workspace-wide taxonomy.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GraphError {
    #[error("self-loop at vertex {0}")]
    SelfLoop(usize),

    #[error("edge ({u}, {v}) references vertex {v}, but the graph only has {n} vertices")]
    VertexOutOfRange { u: usize, v: usize, n: usize },

    #[error("edge ({u}, {v}) is stored at {u} but not at {v} (adjacency must be symmetric)")]
    AsymmetricEdge { u: usize, v: usize },

    #[error("graph is not simple: vertices {u} and {v} are joined by {count} parallel edges")]
    NotSimple { u: usize, v: usize, count: u32 },

    #[error("graph is disconnected: vertex {0} is not reachable from vertex 0")]
    Disconnected(usize),

    #[error("{kind} capacity exceeded: requested {requested}, limit is {limit}")]
    CapacityExceeded {
        kind: &'static str,
        requested: usize,
        limit: usize,
    },
}

/// A violated internal invariant: a programmer error, not a malformed input.
///
/// Every predicate in this codebase returns a plain `bool` and every mutator
/// either succeeds or reports one of these. There are no retries and no
/// partial failures; a `FatalError` is always a bug in the caller (an
/// out-of-range vertex passed to an algorithm that already validated its
/// graph, a divisor of the wrong length, a recursion depth that doesn't match
/// the graph size), so the appropriate response is to abort loudly with
/// diagnostic context rather than to return a `Result` a caller might ignore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FatalError(pub String);

impl std::fmt::Display for FatalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "fatal internal error: {}", self.0)
    }
}

impl std::error::Error for FatalError {}

impl FatalError {
    /// Aborts the process with this diagnostic.
    ///
    /// Kept as a function rather than an inline `panic!` so call sites read
    /// as "this is the fatal-error path", not an ordinary panic.
    pub fn abort(self) -> ! {
        panic!("{self}")
    }
}

/// Asserts an internal invariant, aborting via [`FatalError`] with context on
/// failure. Used in place of bare `assert!` at the seams between the core and
/// the algorithms built on top of it, so invariant violations carry the same
/// diagnostic shape as other fatal errors.
#[macro_export]
macro_rules! fatal_assert {
    ($cond:expr, $($arg:tt)*) => {
        if !$cond {
            $crate::error::FatalError(format!($($arg)*)).abort();
        }
    };
}

//! Convenience re-export of the types and functions most callers need.

pub use dgon_core::{Divisor, FatalError, Graph, GraphBuilder, GraphError, WorkContext};

pub use crate::burn::burn;
pub use crate::independent_set::{approximate_max_independent_set, brill_noether_certificate};
pub use crate::rank::has_positive_rank;
pub use crate::reduce::{is_reduced, is_reduced_at_some_vertex, reduce, reduce_with_script};
pub use crate::search::{find_all_positive_rank_v0_reduced_divisors, find_gonality, find_positive_rank_divisor};

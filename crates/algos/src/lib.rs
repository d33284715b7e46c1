//! The divisor engine: Dhar's burning algorithm, v-reduction, positive-rank
//! testing, the gonality search, and the Brill–Noether independent-set
//! certificate, layered strictly bottom-up on top of `dgon_core`'s graph and
//! divisor model.

pub mod burn;
pub mod independent_set;
pub mod prelude;
pub mod rank;
pub mod reduce;
pub mod search;

pub use burn::burn;
pub use independent_set::{approximate_max_independent_set, brill_noether_certificate};
pub use rank::has_positive_rank;
pub use reduce::{is_reduced, is_reduced_at_some_vertex, reduce, reduce_with_script};
pub use search::{find_all_positive_rank_v0_reduced_divisors, find_gonality, find_positive_rank_divisor};

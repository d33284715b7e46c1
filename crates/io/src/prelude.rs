//! Convenience re-export of the types most callers need.

pub use dgon_core::{Graph, GraphBuilder};

pub use crate::error::Error;
pub use crate::graph6::{Graph6Reader, Graph6Writer};
pub use crate::plain::{PlainTextReader, PlainTextWriter};
pub use crate::subdivide::subdivide;

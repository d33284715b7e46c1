//! Graph ingestion (plain text and graph6), k-regular subdivision. A pure
//! I/O and transform layer around [`dgon_core::Graph`]; no divisor engine
//! code lives here.

pub mod error;
pub mod graph6;
pub mod plain;
pub mod prelude;
pub mod subdivide;

pub use error::Error;
pub use graph6::{Graph6Reader, Graph6Writer};
pub use plain::{PlainTextReader, PlainTextWriter};
pub use subdivide::subdivide;

use thiserror::Error;

/// Failures from parsing or writing a graph in one of this crate's
/// supported encodings. Malformed input is always a normal `Error`, never a
/// fatal internal error: the data came from outside the process.
#[derive(Error, Debug)]
pub enum Error {
    #[error("error while reading graph input")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("line {line}: expected {expected}, got {actual:?}")]
    Malformed {
        line: usize,
        expected: &'static str,
        actual: String,
    },
    #[error("graph6: byte {0:#x} outside the printable range [0x3f, 0x7e]")]
    Graph6ByteOutOfRange(u8),
    #[error("graph6: input ended before the declared vertex/edge data was fully read")]
    Graph6Truncated,
    #[error(transparent)]
    Graph(#[from] dgon_core::GraphError),
}

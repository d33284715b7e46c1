//! The [graph6](https://users.cecs.anu.edu.au/~bdm/data/formats.txt) ASCII
//! encoding used by the nauty/gtools suite, for simple undirected graphs
//! only: graph6 has no representation for parallel edges.
//!
//! Layout: a byte-packed vertex count, then the upper triangle of the
//! adjacency matrix (column by column... actually row-major over pairs
//! `(j, i)` with `i < j`, in increasing `j`, then increasing `i`), six bits
//! at a time, each 6-bit group placed in the high bits of an output byte and
//! biased by `+63` so every byte lands in the printable ASCII range
//! `[0x3f, 0x7e]`.

use dgon_core::{Graph, GraphBuilder, GraphError, UndirectedNeighbors};

use crate::error::Error;

const BIAS: u8 = 63;

/// Encodes a simple graph into a graph6 string.
pub struct Graph6Writer;

impl Graph6Writer {
    pub fn write(graph: &Graph) -> Result<String, Error> {
        graph.validate_simple()?;

        let n = graph.node_count();
        let mut out = String::new();
        encode_size(n, &mut out);

        let matrix = graph.adjacency_matrix();
        let mut bits = Vec::with_capacity(n * (n.saturating_sub(1)) / 2);
        for j in 1..n {
            for i in 0..j {
                bits.push(matrix[i][j] > 0);
            }
        }
        encode_bits(&bits, &mut out);

        Ok(out)
    }
}

/// Decodes a graph6 string into a [`Graph`].
pub struct Graph6Reader;

impl Graph6Reader {
    pub fn read(input: &str) -> Result<Graph, Error> {
        let bytes = input.trim_end().as_bytes();
        for &b in bytes {
            if !(0x3f..=0x7e).contains(&b) {
                return Err(Error::Graph6ByteOutOfRange(b));
            }
        }

        let (n, rest) = decode_size(bytes)?;
        let bits = decode_bits(rest);

        let required = n * (n.saturating_sub(1)) / 2;
        if bits.len() < required {
            return Err(Error::Graph6Truncated);
        }

        let mut builder = GraphBuilder::new(n);
        let mut idx = 0;
        for j in 1..n {
            for i in 0..j {
                if bits[idx] {
                    builder.add_edge(i, j);
                }
                idx += 1;
            }
        }

        Ok(builder.build()?)
    }
}

fn encode_size(n: usize, out: &mut String) {
    if n <= 62 {
        out.push((n as u8 + BIAS) as char);
    } else {
        // 4-byte size marker: 0x7e followed by three 6-bit groups of n,
        // biased the same way as the adjacency bits.
        out.push(0x7e as char);
        let bits: Vec<bool> = (0..18).rev().map(|i| (n >> i) & 1 == 1).collect();
        encode_bits(&bits, out);
    }
}

fn decode_size(bytes: &[u8]) -> Result<(usize, &[u8]), Error> {
    if bytes.is_empty() {
        return Err(Error::Graph6Truncated);
    }
    if bytes[0] != 0x7e as u8 {
        return Ok(((bytes[0] - BIAS) as usize, &bytes[1..]));
    }
    if bytes.len() < 4 {
        return Err(Error::Graph6Truncated);
    }
    let mut n = 0usize;
    for &b in &bytes[1..4] {
        n = (n << 6) | (b - BIAS) as usize;
    }
    Ok((n, &bytes[4..]))
}

fn encode_bits(bits: &[bool], out: &mut String) {
    for chunk in bits.chunks(6) {
        let mut byte = 0u8;
        for (i, &bit) in chunk.iter().enumerate() {
            if bit {
                byte |= 1 << (5 - i);
            }
        }
        out.push((byte + BIAS) as char);
    }
}

fn decode_bits(bytes: &[u8]) -> Vec<bool> {
    let mut bits = Vec::with_capacity(bytes.len() * 6);
    for &b in bytes {
        let value = b - BIAS;
        for i in (0..6).rev() {
            bits.push((value >> i) & 1 == 1);
        }
    }
    bits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn k4() -> Graph {
        GraphBuilder::new(4)
            .edges([(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)])
            .build()
            .unwrap()
    }

    #[test]
    fn round_trips_k4() {
        let graph = k4();
        let encoded = Graph6Writer::write(&graph).unwrap();
        let decoded = Graph6Reader::read(&encoded).unwrap();
        assert_eq!(decoded.node_count(), 4);
        assert_eq!(decoded.edge_count(), 6);
        assert_eq!(decoded.adjacency_matrix(), graph.adjacency_matrix());
    }

    #[test]
    fn round_trips_path5() {
        let graph = GraphBuilder::new(5)
            .edges([(0, 1), (1, 2), (2, 3), (3, 4)])
            .build()
            .unwrap();
        let encoded = Graph6Writer::write(&graph).unwrap();
        let decoded = Graph6Reader::read(&encoded).unwrap();
        assert_eq!(decoded.adjacency_matrix(), graph.adjacency_matrix());
    }

    #[test]
    fn rejects_multigraphs() {
        let graph = GraphBuilder::new(2)
            .edges([(0, 1), (0, 1)])
            .build_allow_disconnected()
            .unwrap();
        let err = Graph6Writer::write(&graph).unwrap_err();
        assert!(matches!(err, Error::Graph(GraphError::NotSimple { .. })));
    }

    #[test]
    fn rejects_non_printable_bytes() {
        let err = Graph6Reader::read("\u{7f}").unwrap_err();
        assert!(matches!(err, Error::Graph6ByteOutOfRange(_)));
    }

    #[test]
    fn single_vertex_graph_round_trips() {
        let graph = GraphBuilder::new(1).build().unwrap();
        let encoded = Graph6Writer::write(&graph).unwrap();
        let decoded = Graph6Reader::read(&encoded).unwrap();
        assert_eq!(decoded.node_count(), 1);
    }
}

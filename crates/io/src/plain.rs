//! The "plain" text encoding: a name line, an `n m` line, then `m` edge
//! lines of two whitespace-separated vertex indices.
//!
//! ```text
//! my graph
//! 4 6
//! 0 1
//! 0 2
//! 0 3
//! 1 2
//! 1 3
//! 2 3
//! ```

use std::io::{BufRead, Write};

use dgon_core::{Graph, GraphBuilder, UndirectedNeighbors};
use log::debug;

use crate::error::Error;

/// Parses the plain text format from any `BufRead`, validating the result
/// via [`GraphBuilder::build`] (including connectivity).
pub struct PlainTextReader;

impl PlainTextReader {
    /// Reads a graph, returning it alongside the name line that preceded it.
    pub fn read(mut input: impl BufRead) -> Result<(String, Graph), Error> {
        let mut name = String::new();
        input.read_line(&mut name)?;
        let name = name.trim_end().to_string();

        let mut header = String::new();
        input.read_line(&mut header)?;
        let mut parts = header.split_whitespace();
        let n = parse_usize(&header, parts.next(), "vertex count", 2)?;
        let m = parse_usize(&header, parts.next(), "edge count", 2)?;

        let mut builder = GraphBuilder::new(n);
        for i in 0..m {
            let line_no = 3 + i;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Err(Error::Malformed {
                    line: line_no,
                    expected: "an edge line",
                    actual: "end of input".to_string(),
                });
            }
            let mut fields = line.split_whitespace();
            let u = parse_vertex(&line, fields.next(), n, line_no)?;
            let v = parse_vertex(&line, fields.next(), n, line_no)?;
            builder.add_edge(u, v);
        }

        let mut trailing = String::new();
        input.read_line(&mut trailing)?;
        if !trailing.trim().is_empty() {
            return Err(Error::Malformed {
                line: 3 + m,
                expected: "end of input (edge count did not match the edge lines that follow)",
                actual: trailing.trim_end().to_string(),
            });
        }

        let graph = builder.build()?;
        debug!("read plain-text graph \"{name}\" with {n} vertices, {m} edges");
        Ok((name, graph))
    }
}

/// Renders a [`Graph`] back into the plain text format.
pub struct PlainTextWriter;

impl PlainTextWriter {
    pub fn write(mut out: impl Write, name: Option<&str>, graph: &Graph) -> std::io::Result<()> {
        writeln!(out, "{}", name.unwrap_or("unnamed"))?;
        writeln!(out, "{} {}", graph.node_count(), graph.edge_count())?;
        // No self-loops ever occur in a validated graph, so emitting each
        // occurrence of `v > u` in `u`'s neighbor list (once per parallel
        // edge) enumerates every edge exactly once.
        for u in 0..graph.node_count() {
            for &v in graph.neighbors(u) {
                if v > u {
                    writeln!(out, "{u} {v}")?;
                }
            }
        }
        Ok(())
    }
}

fn parse_usize(line: &str, field: Option<&str>, what: &'static str, line_no: usize) -> Result<usize, Error> {
    field
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| Error::Malformed {
            line: line_no,
            expected: what,
            actual: line.trim_end().to_string(),
        })
}

fn parse_vertex(line: &str, field: Option<&str>, n: usize, line_no: usize) -> Result<usize, Error> {
    let v: usize = field
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| Error::Malformed {
            line: line_no,
            expected: "a vertex index",
            actual: line.trim_end().to_string(),
        })?;
    if v >= n {
        return Err(Error::Malformed {
            line: line_no,
            expected: "a vertex index in range",
            actual: v.to_string(),
        });
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_k4() {
        let input = "k4\n4 6\n0 1\n0 2\n0 3\n1 2\n1 3\n2 3\n";
        let (name, graph) = PlainTextReader::read(input.as_bytes()).unwrap();
        assert_eq!(name, "k4");
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 6);

        let mut out = Vec::new();
        PlainTextWriter::write(&mut out, Some(&name), &graph).unwrap();
        let (name2, graph2) = PlainTextReader::read(out.as_slice()).unwrap();
        assert_eq!(name2, name);
        assert_eq!(graph2.edge_count(), graph.edge_count());
        assert_eq!(graph2.node_count(), graph.node_count());
    }

    #[test]
    fn rejects_truncated_input() {
        let input = "p5\n5 4\n0 1\n1 2\n";
        let err = PlainTextReader::read(input.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Malformed { .. }));
    }

    #[test]
    fn rejects_out_of_range_vertex() {
        let input = "bad\n2 1\n0 5\n";
        let err = PlainTextReader::read(input.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Malformed { .. }));
    }

    #[test]
    fn rejects_more_edge_lines_than_the_header_declares() {
        let input = "p3\n3 1\n0 1\n1 2\n";
        let err = PlainTextReader::read(input.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Malformed { .. }));
    }

    #[test]
    fn synthesized_name_round_trips_on_missing_name() {
        let graph = GraphBuilder::new(2).edges([(0, 1)]).build().unwrap();
        let mut out = Vec::new();
        PlainTextWriter::write(&mut out, None, &graph).unwrap();
        let (name, graph2) = PlainTextReader::read(out.as_slice()).unwrap();
        assert_eq!(name, "unnamed");
        assert_eq!(graph2.edge_count(), 1);
    }
}

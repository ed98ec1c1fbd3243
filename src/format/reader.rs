//! Reads whitespace-separated edge lists into edges or a graph.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::graph::TemporalBipartiteGraph;
use crate::types::{AbcResult, Edge};

/// Reader for `upper lower time` edge-list text files.
///
/// Reading stops at the first line that does not start with three integers;
/// everything before it is kept and no error is raised.
pub struct EdgeReader;

impl EdgeReader {
    /// Read an edge-list file into a graph.
    pub fn read_from_file(path: &Path) -> AbcResult<TemporalBipartiteGraph> {
        let file = std::fs::File::open(path)?;
        let edges = Self::read_from(file)?;
        log::info!("loaded {} edges from {}", edges.len(), path.display());
        Ok(TemporalBipartiteGraph::from_edges(edges))
    }

    /// Read edges from any reader.
    ///
    /// Lines are split on raw bytes: a line that is not valid UTF-8 ends the
    /// data like any other malformed line. Only read failures are errors.
    pub fn read_from(reader: impl Read) -> AbcResult<Vec<Edge>> {
        let mut edges = Vec::new();
        for (line_no, raw) in BufReader::new(reader).split(b'\n').enumerate() {
            let raw = raw?;
            match std::str::from_utf8(&raw).ok().and_then(parse_edge_line) {
                Some(edge) => edges.push(edge),
                None => {
                    log::debug!(
                        "edge list truncated at line {}: {:?}",
                        line_no + 1,
                        String::from_utf8_lossy(&raw)
                    );
                    break;
                }
            }
        }
        Ok(edges)
    }

    /// Parse edges from an in-memory string.
    pub fn parse_str(text: &str) -> Vec<Edge> {
        text.lines().map_while(parse_edge_line).collect()
    }
}

/// Parse the first three integers of a line. Extra tokens are ignored.
fn parse_edge_line(line: &str) -> Option<Edge> {
    let mut tokens = line.split_whitespace();
    let upper = tokens.next()?.parse().ok()?;
    let lower = tokens.next()?.parse().ok()?;
    let time = tokens.next()?.parse().ok()?;
    Some(Edge::new(upper, lower, time))
}

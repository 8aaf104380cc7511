use std::io::{self, BufRead};

use log::{debug, warn};
use thiserror::Error;

use super::{Graph, Vertex};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReadMode {
    /// Skip anything that is not a well-formed edge line.
    #[default]
    Lenient,
    /// Reject malformed edge lines and unrecognized lines.
    Strict,
}

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("failed to read graph line")]
    Io(#[from] io::Error),
    #[error("graph line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum LineKind {
    Edge(Vertex, Vertex),
    // comment or .col problem line
    Known,
    Unknown,
    Malformed(String),
}

pub fn parse_graph_str(s: &str, mode: ReadMode) -> Result<Graph, ReadError> {
    read_graph(io::Cursor::new(s.as_bytes()), mode)
}

pub fn read_graph<R: BufRead>(r: R, mode: ReadMode) -> Result<Graph, ReadError> {
    read_graph_lines(r.lines(), mode)
}

/// Reads edge lines until a blank line or the end of `lines`.
///
/// Running out of lines is a normal end of the listing, not an error.
pub fn read_graph_lines<I>(lines: I, mode: ReadMode) -> Result<Graph, ReadError>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    let mut edges = Vec::<(Vertex, Vertex)>::new();

    for (idx, line) in lines.into_iter().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        if line.trim().is_empty() {
            break;
        }

        match classify_line(&line) {
            LineKind::Edge(u, v) => {
                edges.push((u, v));
            }
            LineKind::Known => {}
            LineKind::Unknown => {
                if mode == ReadMode::Strict {
                    return Err(ReadError::MalformedLine {
                        line: line_no,
                        reason: format!("unrecognized line '{}'", line.trim()),
                    });
                }
            }
            LineKind::Malformed(reason) => match mode {
                ReadMode::Strict => {
                    return Err(ReadError::MalformedLine {
                        line: line_no,
                        reason,
                    });
                }
                ReadMode::Lenient => {
                    warn!("skipping graph line {}: {}", line_no, reason);
                }
            },
        }
    }

    let graph = Graph::from_edges(edges);
    debug!(
        "read graph: vertices={} edges={}",
        graph.num_vertices(),
        graph.num_edges()
    );
    Ok(graph)
}

fn classify_line(line: &str) -> LineKind {
    let parts = line.split_whitespace().collect::<Vec<_>>();
    match parts.first().copied() {
        Some("e") => {}
        Some("c") | Some("p") => return LineKind::Known,
        _ => return LineKind::Unknown,
    }
    if parts.len() < 3 {
        return LineKind::Malformed(format!(
            "edge line needs two endpoints, got {}",
            parts.len() - 1
        ));
    }
    match (parse_vertex(parts[1]), parse_vertex(parts[2])) {
        (Ok(u), Ok(v)) => LineKind::Edge(u, v),
        (Err(reason), _) | (_, Err(reason)) => LineKind::Malformed(reason),
    }
}

fn parse_vertex(token: &str) -> Result<Vertex, String> {
    match token.parse::<Vertex>() {
        Ok(0) | Err(_) => Err(format!("invalid vertex '{}', expected a positive integer", token)),
        Ok(v) => Ok(v),
    }
}

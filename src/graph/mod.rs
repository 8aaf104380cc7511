pub mod reader;

use std::collections::BTreeSet;

pub type Vertex = u32;

/// Undirected graph as read from an edge list.
///
/// `vertices` is ascending and deduplicated; `edges` keeps input order and
/// duplicates. Every edge endpoint is in `vertices`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    pub vertices: Vec<Vertex>,
    pub edges: Vec<(Vertex, Vertex)>,
}

impl Graph {
    pub fn from_edges(edges: Vec<(Vertex, Vertex)>) -> Self {
        let vertices = edges
            .iter()
            .flat_map(|&(u, v)| [u, v])
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        Self { vertices, edges }
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

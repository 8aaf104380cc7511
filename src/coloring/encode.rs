use log::{debug, info};
use thiserror::Error;

use crate::cnf::cnf::Cnf;
use crate::graph::{Graph, Vertex};

use super::varmap::VarMap;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("number of colors must be at least 1, got {0}")]
    NoColors(i64),
    #[error("{vertices} vertices with {colors} colors exceed the DIMACS variable range")]
    TooManyVariables { vertices: usize, colors: i64 },
    #[error("edge endpoint {0} is not in the vertex set")]
    UnknownVertex(Vertex),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClauseCounts {
    pub coverage: usize,
    pub exclusivity: usize,
    pub adjacency: usize,
}

impl ClauseCounts {
    /// Counts the encoding produces for a graph of the given size.
    pub fn expected(vertices: usize, edges: usize, colors: usize) -> Self {
        Self {
            coverage: vertices,
            exclusivity: vertices * colors * colors.saturating_sub(1) / 2,
            adjacency: edges * colors,
        }
    }

    pub fn total(&self) -> usize {
        self.coverage + self.exclusivity + self.adjacency
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoringCnf {
    pub cnf: Cnf,
    pub vars: VarMap,
    pub counts: ClauseCounts,
}

pub fn encode_graph(graph: &Graph, colors: i64) -> Result<ColoringCnf, EncodeError> {
    encode_coloring(&graph.vertices, &graph.edges, colors)
}

/// Encodes "the graph is `colors`-colorable" as CNF.
///
/// Clause order: one coverage clause per vertex, then the pairwise
/// exclusivity clauses per vertex, then one clause per edge and color.
/// `vertices` should be ascending; variables are numbered in the order given.
pub fn encode_coloring(
    vertices: &[Vertex],
    edges: &[(Vertex, Vertex)],
    colors: i64,
) -> Result<ColoringCnf, EncodeError> {
    if colors < 1 {
        return Err(EncodeError::NoColors(colors));
    }
    let k = match u32::try_from(colors) {
        Ok(k) => k,
        // nothing to number, the instance is empty whatever k is
        Err(_) if vertices.is_empty() => u32::MAX,
        Err(_) => {
            return Err(EncodeError::TooManyVariables {
                vertices: vertices.len(),
                colors,
            });
        }
    };
    let vars = VarMap::new(vertices, k)?;
    let mut cnf = Cnf::new(vars.num_vars());
    let mut counts = ClauseCounts::default();

    // at least one color
    for v in vars.vertices() {
        let clause = (1..=k)
            .map(|c| vars.lit(v, c))
            .collect::<Result<Vec<_>, _>>()?;
        cnf.add_clause(clause);
        counts.coverage += 1;
    }

    // at most one color
    for v in vars.vertices() {
        for c1 in 1..=k {
            for c2 in c1 + 1..=k {
                cnf.add_clause(vec![vars.lit(v, c1)?.neg(), vars.lit(v, c2)?.neg()]);
                counts.exclusivity += 1;
            }
        }
    }
    debug!(
        "vertex clauses: coverage={} exclusivity={}",
        counts.coverage, counts.exclusivity
    );

    // endpoints differ
    for &(u, v) in edges {
        for c in 1..=k {
            cnf.add_clause(vec![vars.lit(u, c)?.neg(), vars.lit(v, c)?.neg()]);
            counts.adjacency += 1;
        }
    }

    info!(
        "encoded coloring: vertices={} edges={} colors={} vars={} clauses={}",
        vars.num_vertices(),
        edges.len(),
        colors,
        cnf.num_vars,
        cnf.num_clauses()
    );
    Ok(ColoringCnf { cnf, vars, counts })
}

/// Variable assignment (slot 0 unused) that realizes `coloring`, a
/// `(vertex, color)` list. Pairs outside the map are ignored.
pub fn assignment_for(vars: &VarMap, coloring: &[(Vertex, u32)]) -> Vec<bool> {
    let mut model = vec![false; vars.num_vars() as usize + 1];
    for &(v, c) in coloring {
        if let Some(var) = vars.var(v, c) {
            model[var as usize] = true;
        }
    }
    model
}

#[cfg(test)]
mod tests {
    use super::{ClauseCounts, EncodeError, assignment_for, encode_coloring};
    use crate::cnf::cnf::Lit;

    fn lits_of(clause: &[Lit]) -> Vec<i64> {
        clause.iter().map(|l| l.to_dimacs()).collect()
    }

    #[test]
    fn single_edge_two_colors() {
        let enc = encode_coloring(&[1, 2], &[(1, 2)], 2).expect("encode");
        let got = enc
            .cnf
            .clauses
            .iter()
            .map(|c| lits_of(c))
            .collect::<Vec<_>>();
        assert_eq!(
            got,
            vec![
                vec![1, 2],
                vec![3, 4],
                vec![-1, -2],
                vec![-3, -4],
                vec![-1, -3],
                vec![-2, -4],
            ]
        );
        assert_eq!(enc.cnf.num_vars, 4);
        assert_eq!(enc.counts, ClauseCounts::expected(2, 1, 2));
    }

    #[test]
    fn exclusivity_pair_order() {
        let enc = encode_coloring(&[4], &[], 3).expect("encode");
        let got = enc
            .cnf
            .clauses
            .iter()
            .map(|c| lits_of(c))
            .collect::<Vec<_>>();
        assert_eq!(got, vec![vec![1, 2, 3], vec![-1, -2], vec![-1, -3], vec![-2, -3]]);
    }

    #[test]
    fn one_color_has_no_exclusivity() {
        let enc = encode_coloring(&[1, 2], &[(1, 2)], 1).expect("encode");
        assert_eq!(enc.counts.exclusivity, 0);
        assert_eq!(enc.cnf.num_clauses(), 3);
    }

    #[test]
    fn empty_graph_is_empty_instance() {
        let enc = encode_coloring(&[], &[], 3).expect("encode");
        assert_eq!(enc.cnf.num_vars, 0);
        assert!(enc.cnf.clauses.is_empty());
    }

    #[test]
    fn rejects_bad_colors_and_vertices() {
        assert_eq!(
            encode_coloring(&[1], &[], 0).err(),
            Some(EncodeError::NoColors(0))
        );
        assert_eq!(
            encode_coloring(&[1], &[], -2).err(),
            Some(EncodeError::NoColors(-2))
        );
        assert_eq!(
            encode_coloring(&[1], &[(1, 9)], 2).err(),
            Some(EncodeError::UnknownVertex(9))
        );
        assert!(matches!(
            encode_coloring(&[1], &[], i64::MAX),
            Err(EncodeError::TooManyVariables { .. })
        ));
        assert_eq!(
            encode_coloring(&[1, 2], &[], 5_000_000_000).err(),
            Some(EncodeError::TooManyVariables {
                vertices: 2,
                colors: 5_000_000_000
            })
        );
    }

    #[test]
    fn proper_coloring_satisfies() {
        let enc = encode_coloring(&[1, 2, 3], &[(1, 2), (2, 3)], 2).expect("encode");
        assert!(enc.cnf.eval(&assignment_for(&enc.vars, &[(1, 1), (2, 2), (3, 1)])));
        assert!(!enc.cnf.eval(&assignment_for(&enc.vars, &[(1, 1), (2, 1), (3, 2)])));
        assert!(!enc.cnf.eval(&assignment_for(&enc.vars, &[(1, 1), (2, 2)])));
    }
}

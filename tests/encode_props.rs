use colorsat::coloring::encode::{ClauseCounts, encode_coloring, encode_graph};
use colorsat::graph::Graph;
use proptest::prelude::*;

fn graph_strategy() -> impl Strategy<Value = Graph> {
    prop::collection::vec((1u32..12, 1u32..12), 0..20).prop_map(Graph::from_edges)
}

proptest! {
    #[test]
    fn prop_deterministic(g in graph_strategy(), k in 1i64..5) {
        let a = encode_graph(&g, k).expect("encode");
        let b = encode_graph(&g, k).expect("encode");
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_literals_in_range(g in graph_strategy(), k in 1i64..5) {
        let enc = encode_graph(&g, k).expect("encode");
        let max = g.num_vertices() as u32 * k as u32;
        prop_assert_eq!(enc.cnf.num_vars, max);
        for clause in &enc.cnf.clauses {
            for lit in clause {
                prop_assert!(lit.var >= 1 && lit.var <= max);
            }
        }
    }

    #[test]
    fn prop_clause_counts(g in graph_strategy(), k in 1usize..6) {
        let enc = encode_graph(&g, k as i64).expect("encode");
        let expected = ClauseCounts::expected(g.num_vertices(), g.num_edges(), k);
        prop_assert_eq!(enc.counts, expected);
        prop_assert_eq!(
            enc.cnf.num_clauses(),
            g.num_vertices() + g.num_vertices() * k * (k - 1) / 2 + g.num_edges() * k
        );
    }

    #[test]
    fn prop_clause_shapes(g in graph_strategy(), k in 1u32..5) {
        let enc = encode_graph(&g, i64::from(k)).expect("encode");
        let n = g.num_vertices();
        let (coverage, rest) = enc.cnf.clauses.split_at(n);
        let (exclusivity, adjacency) = rest.split_at(enc.counts.exclusivity);

        for (clause, &v) in coverage.iter().zip(g.vertices.iter()) {
            prop_assert_eq!(clause.len(), k as usize);
            for (c, lit) in (1..=k).zip(clause.iter()) {
                prop_assert!(lit.sign);
                prop_assert_eq!(enc.vars.decode(lit.var), Some((v, c)));
            }
        }

        for clause in exclusivity {
            prop_assert_eq!(clause.len(), 2);
            prop_assert!(clause.iter().all(|l| !l.sign));
            let a = enc.vars.decode(clause[0].var).expect("decode");
            let b = enc.vars.decode(clause[1].var).expect("decode");
            prop_assert_eq!(a.0, b.0);
            prop_assert!(a.1 < b.1);
        }

        prop_assert_eq!(adjacency.len(), g.num_edges() * k as usize);
        for (i, clause) in adjacency.iter().enumerate() {
            let (u, v) = g.edges[i / k as usize];
            let c = (i % k as usize) as u32 + 1;
            prop_assert_eq!(clause.len(), 2);
            prop_assert!(clause.iter().all(|l| !l.sign));
            prop_assert_eq!(enc.vars.decode(clause[0].var), Some((u, c)));
            prop_assert_eq!(enc.vars.decode(clause[1].var), Some((v, c)));
        }
    }
}

#[test]
fn no_vertices_any_colors() {
    for k in [1, 3, 50, 5_000_000_000, i64::MAX] {
        let enc = encode_coloring(&[], &[], k).expect("encode");
        assert_eq!(enc.cnf.num_vars, 0);
        assert_eq!(enc.cnf.num_clauses(), 0);
    }
}

#[test]
fn self_loop_forbids_every_color() {
    let enc = encode_coloring(&[1], &[(1, 1)], 2).expect("encode");
    let adjacency = &enc.cnf.clauses[2..];
    assert_eq!(adjacency.len(), 2);
    assert_eq!(adjacency[0][0], adjacency[0][1]);
}

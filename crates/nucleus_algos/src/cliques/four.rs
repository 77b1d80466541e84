use log::debug;
use nucleus_core::{CliqueSet, Graph, OrientationRule, VertexId};

/// Enumerates 4-cliques by orienting the graph by id (target = `max(u, v)`).
///
/// For each source `u`, every pair of out-neighbours `(v1, v2)` with
/// `v1 < v2` that forms an edge yields a triangle `u-v1-v2`; `v2` is
/// recorded as a triangle "apex" of `v1` into a scratch buffer. 4-cliques
/// are then completed by pairing up apexes of the same `v1` that are
/// themselves adjacent. The inner search picks whichever of the two
/// candidate sets is smaller: a linear probe against the graph, or a
/// neighbour-list walk with a binary search into the apex window.
pub fn four_cliques<NI: VertexId>(graph: &Graph<NI>) -> CliqueSet<NI> {
    assert!(
        !graph.is_directed(),
        "4-clique enumeration expects an undirected graph"
    );

    let dag = graph.make_directed(OrientationRule::ByMaxId);

    let mut found = Vec::new();
    for u in 0..dag.node_count() {
        let u_id = NI::new(u);
        let out = dag.csr().row(u_id);

        let mut triangle_ends: Vec<Vec<NI>> = vec![Vec::new(); out.len()];
        for i in 0..out.len() {
            let v1 = out[i];
            for &v2 in &out[i + 1..] {
                if graph.edge(v1, v2).is_some() {
                    triangle_ends[i].push(v2);
                }
            }
        }

        for i in 0..out.len() {
            let v1 = out[i];
            let apexes = &triangle_ends[i];
            for a in 0..apexes.len() {
                let v2 = apexes[a];
                let remaining = &apexes[a + 1..];
                if remaining.is_empty() {
                    continue;
                }
                let v2_out_degree = dag.csr().degree(v2);
                if v2_out_degree >= remaining.len() {
                    for &v3 in remaining {
                        if graph.edge(v2, v3).is_some() {
                            found.push(vec![u_id, v1, v2, v3]);
                        }
                    }
                } else {
                    for &candidate in dag.csr().row(v2) {
                        if remaining.binary_search(&candidate).is_ok() {
                            found.push(vec![u_id, v1, v2, candidate]);
                        }
                    }
                }
            }
        }
    }

    debug!("Enumerated {} 4-cliques", found.len());
    CliqueSet::from_unique_tuples(4, found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nucleus_core::GraphBuilder;

    #[test]
    fn k4_has_exactly_one_four_clique() {
        let graph: Graph<u32> = GraphBuilder::new()
            .edges(vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)])
            .build();
        let cs = four_cliques(&graph);
        assert_eq!(cs.len(), 1);
        assert_eq!(cs.get(0), &[0, 1, 2, 3]);
    }

    #[test]
    fn g0_has_no_four_clique() {
        let graph: Graph<u32> = GraphBuilder::new()
            .edges(vec![(0, 1), (0, 2), (1, 2), (2, 3), (3, 4), (2, 4)])
            .build();
        assert!(four_cliques(&graph).is_empty());
    }

    #[test]
    fn k5_has_five_four_cliques() {
        let edges = (0..5)
            .flat_map(|i| (i + 1..5).map(move |j| (i as u32, j as u32)))
            .collect();
        let graph: Graph<u32> = GraphBuilder::new().edges(edges).build();
        let cs = four_cliques(&graph);
        assert_eq!(cs.len(), 5);
    }
}

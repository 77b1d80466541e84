use log::debug;
use nucleus_core::{CliqueSet, Graph, OrientationRule, VertexId};

/// Enumerates triangles by orienting the graph by degree (ties broken by
/// id) and, for every source `v`, testing every pair of out-neighbours for
/// an edge in the original graph. Each triangle is discovered exactly once
/// because the degree orientation gives it a unique pivot: its lowest-degree
/// vertex. O(m^1.5).
pub fn triangles<NI: VertexId>(graph: &Graph<NI>) -> CliqueSet<NI> {
    assert!(
        !graph.is_directed(),
        "triangle enumeration expects an undirected graph"
    );

    let dag = graph.make_directed(OrientationRule::ByDegreeThenId);

    let mut found = Vec::new();
    for v in 0..dag.node_count() {
        let v_id = NI::new(v);
        let out = dag.csr().row(v_id);
        for i in 0..out.len() {
            let u = out[i];
            for &w in &out[i + 1..] {
                if graph.edge(u, w).is_some() {
                    let mut triple = [v_id, u, w];
                    triple.sort_unstable();
                    found.push(triple.to_vec());
                }
            }
        }
    }

    debug!("Enumerated {} triangles", found.len());
    CliqueSet::from_unique_tuples(3, found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nucleus_core::GraphBuilder;

    #[test]
    fn g0_has_one_triangle() {
        let graph: Graph<u32> = GraphBuilder::new()
            .edges(vec![(0, 1), (0, 2), (1, 2), (2, 3), (3, 4), (2, 4)])
            .build();
        let cs = triangles(&graph);
        assert_eq!(cs.len(), 2);
        assert_eq!(cs.get(0), &[0, 1, 2]);
        assert_eq!(cs.get(1), &[2, 3, 4]);
    }

    #[test]
    fn k4_has_four_triangles_in_lex_order() {
        let graph: Graph<u32> = GraphBuilder::new()
            .edges(vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)])
            .build();
        let cs = triangles(&graph);
        assert_eq!(cs.len(), 4);
        assert_eq!(cs.get(0), &[0, 1, 2]);
        assert_eq!(cs.get(1), &[0, 1, 3]);
        assert_eq!(cs.get(2), &[0, 2, 3]);
        assert_eq!(cs.get(3), &[1, 2, 3]);
    }

    #[test]
    fn two_disjoint_triangles_each_produce_one() {
        let graph: Graph<u32> = GraphBuilder::new()
            .edges(vec![(0, 1), (0, 2), (1, 2), (3, 4), (3, 5), (4, 5)])
            .build();
        let cs = triangles(&graph);
        assert_eq!(cs.len(), 2);
        assert_eq!(cs.get(0), &[0, 1, 2]);
        assert_eq!(cs.get(1), &[3, 4, 5]);
    }
}

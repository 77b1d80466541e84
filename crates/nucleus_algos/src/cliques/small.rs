use nucleus_core::{CliqueSet, Graph, VertexId};

/// Every vertex as a singleton clique. O(n).
pub fn vertices<NI: VertexId>(graph: &Graph<NI>) -> CliqueSet<NI> {
    let tuples = (0..graph.node_count()).map(|v| vec![NI::new(v)]).collect();
    CliqueSet::from_unique_tuples(1, tuples)
}

/// Every undirected edge, emitted once with the lower-id endpoint first. O(m).
pub fn edges<NI: VertexId>(graph: &Graph<NI>) -> CliqueSet<NI> {
    let mut tuples = Vec::new();
    for u in 0..graph.node_count() {
        let u_id = NI::new(u);
        for &v in graph.csr().row(u_id) {
            if v > u_id {
                tuples.push(vec![u_id, v]);
            }
        }
    }
    CliqueSet::from_unique_tuples(2, tuples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nucleus_core::GraphBuilder;

    fn g0() -> Graph<u32> {
        GraphBuilder::new()
            .edges(vec![(0, 1), (0, 2), (1, 2), (2, 3), (3, 4), (2, 4)])
            .build()
    }

    #[test]
    fn vertices_are_every_node() {
        let cs = vertices(&g0());
        assert_eq!(cs.len(), 5);
        assert_eq!(cs.get(4), &[4]);
    }

    #[test]
    fn edges_are_emitted_once() {
        let cs = edges(&g0());
        assert_eq!(cs.len(), 6);
        assert_eq!(cs.get(0), &[0, 1]);
    }
}

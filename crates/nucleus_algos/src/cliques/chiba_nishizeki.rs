use log::debug;
use nucleus_core::graph::csr::Csr;
use nucleus_core::{vertices_not_in_k_core, CliqueSet, Graph, VertexId};

/// Enumerates k-cliques for `k >= 5` via Chiba-Nishizeki backtracking.
///
/// Vertices outside the `(k-1)`-core cannot appear in any k-clique, so they
/// are projected out of the CSR before recursing, rather than re-checked on
/// every frame.
pub fn chiba_nishizeki<NI: VertexId>(graph: &Graph<NI>, k: usize) -> CliqueSet<NI> {
    assert!(k >= 5, "chiba_nishizeki is only used for k >= 5");
    assert!(
        !graph.is_directed(),
        "clique enumeration expects an undirected graph"
    );

    let removed = vertices_not_in_k_core(graph, k - 1);
    let csr = graph.csr().project(&removed);

    let mut found = Vec::new();
    let mut current = Vec::with_capacity(k);

    for v in 0..graph.node_count() {
        if removed[v] {
            continue;
        }
        let v_id = NI::new(v);
        let candidates: Vec<NI> = csr
            .row(v_id)
            .iter()
            .copied()
            .filter(|&w| w > v_id)
            .collect();

        current.push(v_id);
        expand(&csr, &mut current, &candidates, k, &mut found);
        current.pop();
    }

    debug!("Enumerated {} {}-cliques", found.len(), k);
    CliqueSet::from_unique_tuples(k, found)
}

fn expand<NI: VertexId>(
    csr: &Csr<NI>,
    current_clique: &mut Vec<NI>,
    candidates: &[NI],
    k: usize,
    out: &mut Vec<Vec<NI>>,
) {
    if current_clique.len() == k {
        out.push(current_clique.clone());
        return;
    }

    for (idx, &w) in candidates.iter().enumerate() {
        let neighbours_of_w = csr.row(w);
        let new_candidates: Vec<NI> = candidates[idx + 1..]
            .iter()
            .copied()
            .filter(|c| neighbours_of_w.binary_search(c).is_ok())
            .collect();

        current_clique.push(w);
        expand(csr, current_clique, &new_candidates, k, out);
        current_clique.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nucleus_core::GraphBuilder;

    fn complete_graph(n: usize) -> Graph<u32> {
        let edges = (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i as u32, j as u32)))
            .collect();
        GraphBuilder::new().edges(edges).build()
    }

    fn binomial(n: usize, k: usize) -> usize {
        if k > n {
            return 0;
        }
        let mut numerator = 1u128;
        let mut denominator = 1u128;
        for i in 0..k {
            numerator *= (n - i) as u128;
            denominator *= (i + 1) as u128;
        }
        (numerator / denominator) as usize
    }

    #[test]
    fn k6_emits_every_five_clique() {
        let graph = complete_graph(6);
        let cs = chiba_nishizeki(&graph, 5);
        assert_eq!(cs.len(), binomial(6, 5));
        assert_eq!(cs.get(0), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn k7_emits_every_six_clique() {
        let graph = complete_graph(7);
        let cs = chiba_nishizeki(&graph, 6);
        assert_eq!(cs.len(), binomial(7, 6));
    }

    #[test]
    fn sparse_graph_below_core_threshold_has_no_five_clique() {
        let graph: Graph<u32> = GraphBuilder::new()
            .edges(vec![(0, 1), (0, 2), (1, 2), (2, 3), (3, 4), (2, 4)])
            .build();
        assert!(chiba_nishizeki(&graph, 5).is_empty());
    }
}

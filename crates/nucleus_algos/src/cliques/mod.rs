mod chiba_nishizeki;
mod expand;
mod four;
mod small;
mod triangles;

use nucleus_core::{CliqueSet, Graph, VertexId};

pub use expand::expand_cliques;

/// Returns every k-vertex subset of `graph` that forms a complete subgraph,
/// as a `CliqueSet(k)` in lexicographic order. `k == 0` is a contract
/// violation.
pub fn enumerate_k_cliques<NI: VertexId>(graph: &Graph<NI>, k: usize) -> CliqueSet<NI> {
    assert!(k >= 1, "a clique must have at least one vertex");
    assert!(
        !graph.is_directed(),
        "clique enumeration expects an undirected graph"
    );

    match k {
        1 => small::vertices(graph),
        2 => small::edges(graph),
        3 => triangles::triangles(graph),
        4 => four::four_cliques(graph),
        _ => chiba_nishizeki::chiba_nishizeki(graph, k),
    }
}

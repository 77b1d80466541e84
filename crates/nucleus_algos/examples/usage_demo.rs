use log::info;
use nucleus_algos::prelude::*;
use nucleus_core::prelude::*;

fn main() {
    // Prepare logging so the milestones the engine logs become visible.
    env_logger::init();

    // A small graph with a planted triangle plus a pendant path.
    let graph: Graph<u32> = GraphBuilder::new()
        .edges(vec![(0, 1), (0, 2), (1, 2), (2, 3), (3, 4), (2, 4)])
        .build();

    info!(
        "Loaded a demo graph with {} vertices and {} directed arcs",
        graph.node_count(),
        graph.edge_count()
    );

    let triangles = enumerate_k_cliques(&graph, 3);
    info!("Found {} triangles", triangles.len());

    let removed = vertices_not_in_k_core(&graph, 3);
    info!(
        "{} of {} vertices fall outside the 3-core",
        removed.count_ones(),
        graph.node_count()
    );

    let levels = nucleus_decomposition(&graph, 1, 3, NucleusVariant::Exact);
    info!("(1,3)-nucleus levels: {:?}", levels);
}

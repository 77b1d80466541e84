use std::path::PathBuf;

use bitvec::prelude::*;
use nucleus_core::prelude::*;

fn fixture_path() -> PathBuf {
    [env!("CARGO_MANIFEST_DIR"), "resources", "example.el"]
        .iter()
        .collect()
}

#[test]
fn loads_g0_from_fixture() {
    let graph: Graph<u32> = GraphBuilder::new().path(fixture_path()).build().unwrap();

    assert_eq!(graph.node_count(), 5);
    assert_eq!(graph.edge_count(), 12);
    assert!(!graph.is_directed());
    assert_eq!(graph.neighbours(2).as_slice(), &[0, 1, 3, 4]);
}

#[test]
fn g0_three_core_is_empty() {
    let graph: Graph<u32> = GraphBuilder::new().path(fixture_path()).build().unwrap();
    assert_eq!(vertices_not_in_k_core(&graph, 3), BitVec::<usize>::repeat(true, 5));
}

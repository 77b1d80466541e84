use bitvec::prelude::*;
use nucleus_algos::prelude::*;
use nucleus_core::prelude::*;

fn g0() -> Graph<u32> {
    GraphBuilder::new()
        .edges(vec![(0, 1), (0, 2), (1, 2), (2, 3), (3, 4), (2, 4)])
        .build()
}

fn k4() -> Graph<u32> {
    GraphBuilder::new()
        .edges(vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)])
        .build()
}

#[test]
fn g0_has_two_triangles_and_no_four_clique() {
    let graph = g0();
    assert_eq!(enumerate_k_cliques(&graph, 3).len(), 2);
    assert!(enumerate_k_cliques(&graph, 4).is_empty());
}

#[test]
fn g0_three_core_removes_every_vertex() {
    let graph = g0();
    assert_eq!(vertices_not_in_k_core(&graph, 3), BitVec::<usize>::repeat(true, 5));
}

#[test]
fn k4_three_core_removes_nothing() {
    let graph = k4();
    assert_eq!(vertices_not_in_k_core(&graph, 3), BitVec::<usize>::repeat(false, 4));
}

#[test]
fn k4_triangles_expand_to_the_single_four_clique() {
    let graph = k4();
    let triangles = enumerate_k_cliques(&graph, 3);
    assert_eq!(triangles.len(), 4);

    let lifted = expand_cliques(&graph, &triangles);
    assert_eq!(lifted.len(), 1);
    assert_eq!(lifted.get(0), &[0, 1, 2, 3]);
}

#[test]
fn two_disjoint_triangles_nucleus_decomposition() {
    let graph: Graph<u32> = GraphBuilder::new()
        .edges(vec![(0, 1), (0, 2), (1, 2), (3, 4), (3, 5), (4, 5)])
        .build();

    let levels = nucleus_decomposition(&graph, 1, 3, NucleusVariant::Exact);
    assert_eq!(levels, vec![1, 1, 1, 1, 1, 1]);
}

use std::collections::VecDeque;

use bitvec::prelude::*;

use crate::graph::Graph;
use crate::vertex::VertexId;

/// Returns a mask `removed[0..n)` where `removed[v]` holds iff `v` is not in
/// the k-core of `graph`: peel every vertex with degree `< k`, decrementing
/// its neighbours' degrees, repeating until no vertex qualifies. O(n + m).
///
/// `k == 0` trivially returns an all-false mask — every vertex has degree
/// `>= 0`.
pub fn vertices_not_in_k_core<NI: VertexId>(graph: &Graph<NI>, k: usize) -> BitVec<usize> {
    let n = graph.node_count();
    let mut degree = graph.degrees();
    let mut removed = BitVec::<usize>::repeat(false, n);

    if k == 0 {
        return removed;
    }

    let mut queue: VecDeque<usize> = VecDeque::new();
    for v in 0..n {
        if degree[v] < k {
            removed.set(v, true);
            queue.push_back(v);
        }
    }

    while let Some(v) = queue.pop_front() {
        let v_id = NI::new(v);
        for &u in graph.csr().row(v_id) {
            let u = u.index();
            if removed[u] {
                continue;
            }
            if degree[u] > 0 {
                degree[u] -= 1;
            }
            if degree[u] < k {
                removed.set(u, true);
                degree[u] = 0;
                queue.push_back(u);
            }
        }
        degree[v] = 0;
    }

    log::debug!("k-core peel removed {} vertices", removed.count_ones());

    removed
}

use nucleus_core::{CliqueSet, Graph, OrderedIntSet, VertexId};

use crate::cliques::enumerate_k_cliques;

/// Lifts an exact `CliqueSet(k)` to the `CliqueSet(k+1)` of (k+1)-cliques it
/// spans.
///
/// For `k < 3` this delegates straight to the direct `(k+1)`-enumerator. For
/// `k >= 3`, cliques are partitioned into adjacency groups — cliques that
/// pairwise differ by exactly one vertex — and every group of size `>= k+1`
/// yields a (k+1)-clique from the union of any two of its members.
///
/// Every emitted tuple is re-verified as an actual clique of `graph` before
/// being inserted: this makes the operation total rather than silently
/// wrong when the input `CliqueSet(k)` is not the *complete* set of
/// k-cliques of `graph`.
pub fn expand_cliques<NI: VertexId>(graph: &Graph<NI>, cliques: &CliqueSet<NI>) -> CliqueSet<NI> {
    let k = cliques.k();
    assert!(k >= 1, "a clique must have at least one vertex");

    if k < 3 {
        return enumerate_k_cliques(graph, k + 1);
    }

    let mut groups: Vec<Vec<&[NI]>> = Vec::new();
    for c in cliques.iter() {
        let mut placed = false;
        for group in groups.iter_mut() {
            let fits = group.iter().all(|&member| {
                let diff = OrderedIntSet::count_symmetric_difference(c, member);
                debug_assert!(
                    diff != 0 && diff != 1,
                    "CliqueSet invariant violated: duplicate or single-vertex-overlapping clique"
                );
                diff == 2
            });
            if fits {
                group.push(c);
                placed = true;
                break;
            }
        }
        if !placed {
            groups.push(vec![c]);
        }
    }

    let mut output = CliqueSet::new(k + 1);
    for group in &groups {
        if group.len() < k + 1 {
            continue;
        }
        for i in 0..group.len() {
            for j in (i + 1)..group.len() {
                if let Some(union) = OrderedIntSet::union_two_sorted_arrays(group[i], group[j]) {
                    if is_clique(graph, &union) {
                        output.insert(union);
                    }
                }
            }
        }
    }
    output
}

fn is_clique<NI: VertexId>(graph: &Graph<NI>, vertices: &[NI]) -> bool {
    for i in 0..vertices.len() {
        for j in (i + 1)..vertices.len() {
            if graph.edge(vertices[i], vertices[j]).is_none() {
                return false;
            }
        }
    }
    true
}

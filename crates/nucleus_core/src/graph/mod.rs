pub mod csr;
pub mod orientation;

use crate::ordered_int_set::OrderedIntSet;
use crate::vertex::VertexId;
use csr::Csr;
pub use orientation::OrientationRule;

/// A graph over a dense, contiguous vertex id space `[0, n)`, backed by a
/// single CSR.
///
/// For an undirected graph, `n_edges` counts *directed arcs* — each
/// undirected edge contributes 2, so `csr.nnz() == n_edges` always holds.
/// This is the convention fixed by the data model.
#[derive(Debug, Clone)]
pub struct Graph<NI: VertexId> {
    n_vertices: usize,
    n_edges: usize,
    is_directed: bool,
    csr: Csr<NI>,
}

impl<NI: VertexId> Graph<NI> {
    /// Builds an undirected graph from a set of canonical edges `(u, v)`
    /// with `u < v`. Each edge is inserted in both directions into the
    /// underlying symmetric CSR.
    pub fn from_undirected_edges(n_vertices: usize, edges: &[(NI, NI)]) -> Self {
        let mut coo = Vec::with_capacity(edges.len() * 2);
        for &(u, v) in edges {
            assert_ne!(u, v, "self-loops are forbidden");
            coo.push((u, v));
            coo.push((v, u));
        }
        coo.sort_unstable();
        let csr = Csr::compress_coo(n_vertices, &coo, None);
        Self {
            n_vertices,
            n_edges: coo.len(),
            is_directed: false,
            csr,
        }
    }

    /// Builds a directed graph directly from a set of arcs, already sorted
    /// ascending by `(source, target)`.
    pub fn from_directed_arcs(n_vertices: usize, arcs: &[(NI, NI)]) -> Self {
        debug_assert!(arcs.iter().all(|&(u, v)| u != v));
        let csr = Csr::compress_coo(n_vertices, arcs, None);
        Self {
            n_vertices,
            n_edges: arcs.len(),
            is_directed: true,
            csr,
        }
    }

    pub fn node_count(&self) -> usize {
        self.n_vertices
    }

    pub fn edge_count(&self) -> usize {
        self.n_edges
    }

    pub fn is_directed(&self) -> bool {
        self.is_directed
    }

    pub fn csr(&self) -> &Csr<NI> {
        &self.csr
    }

    /// Returns the weight of edge `(u, v)` if it is present.
    ///
    /// Panics on `u == v` (self-loops are a contract violation, never a
    /// valid query).
    pub fn edge(&self, u: NI, v: NI) -> Option<u32> {
        assert_ne!(u, v, "edge() does not accept self-loops");
        self.csr.find(u, v)
    }

    /// The degree of every vertex. For a directed graph this is the
    /// out-degree (see `out_degrees`/`in_degrees` for the oriented split).
    pub fn degrees(&self) -> Vec<usize> {
        (0..self.n_vertices)
            .map(|v| self.csr.degree(NI::new(v)))
            .collect()
    }

    /// Out-degree of every vertex: the length of its CSR row.
    pub fn out_degrees(&self) -> Vec<usize> {
        self.degrees()
    }

    /// In-degree of every vertex, computed by histogramming the column
    /// indices. O(n + m).
    pub fn in_degrees(&self) -> Vec<usize> {
        let mut in_deg = vec![0usize; self.n_vertices];
        for &col in self.csr.col_idx() {
            in_deg[col.index()] += 1;
        }
        in_deg
    }

    /// The neighbours of `u`, bulk-copied from the CSR row (already
    /// ascending, so this is O(deg u) with no per-element insert).
    pub fn neighbours(&self, u: NI) -> OrderedIntSet<NI> {
        OrderedIntSet::from_sorted_slice(self.csr.row(u))
    }

    /// Orients every undirected edge `(u, v)` with `u < v` into a single
    /// directed arc, picking the target with `rule`.
    ///
    /// Panics if `self` is already directed (a contract violation).
    pub fn make_directed(&self, rule: OrientationRule) -> Self {
        let degrees = self
            .degrees()
            .into_iter()
            .map(NI::new)
            .collect::<Vec<_>>();
        self.make_directed_with(|u, v, _| rule.target(u, v, &degrees))
    }

    /// Generalised orientation: `orient` receives `(u, v, degrees)` with
    /// `u < v` and must return the target endpoint (the source is the
    /// other one). This is the closure-based escape hatch replacing the
    /// source's raw function-pointer plumbing.
    pub fn make_directed_with<F>(&self, orient: F) -> Self
    where
        F: Fn(NI, NI, &[NI]) -> NI,
    {
        assert!(
            !self.is_directed,
            "make_directed requires an undirected graph"
        );

        let degrees = self
            .degrees()
            .into_iter()
            .map(NI::new)
            .collect::<Vec<_>>();

        let mut arcs = Vec::with_capacity(self.n_edges / 2);
        for u in 0..self.n_vertices {
            let u = NI::new(u);
            for &v in self.csr.row(u) {
                if v <= u {
                    continue;
                }
                let target = orient(u, v, &degrees);
                let source = if target == u { v } else { u };
                debug_assert!(target == u || target == v);
                arcs.push((source, target));
            }
        }
        arcs.sort_unstable();

        Self::from_directed_arcs(self.n_vertices, &arcs)
    }
}

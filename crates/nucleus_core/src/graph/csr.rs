use bitvec::prelude::*;

use crate::vertex::VertexId;

/// A Compressed-Sparse-Row data structure representing a sparse n x n
/// boolean adjacency matrix, optionally carrying a positive integer weight
/// per edge.
///
/// For a graph with `n` rows and `m` non-zeros, `row_ptr` has exactly `n + 1`
/// entries and `col_idx` exactly `m`. For row `i`, `row_ptr[i]` is the start
/// index of its column list in `col_idx`; the row's length is
/// `row_ptr[i + 1] - row_ptr[i]`. Within a row, `col_idx` is strictly
/// ascending and never contains `i` itself (no self-loops).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Csr<NI: VertexId> {
    row_ptr: Box<[NI]>,
    col_idx: Box<[NI]>,
    weight: Option<Box<[u32]>>,
}

impl<NI: VertexId> Csr<NI> {
    /// Compresses an already row-ascending, column-ascending-within-row
    /// coordinate list into CSR form.
    ///
    /// `coo` must be sorted by `(row, col)`; this is asserted in debug
    /// builds and left undefined (per the CSR contract) in release.
    pub fn compress_coo(n_rows: usize, coo: &[(NI, NI)], weight: Option<&[u32]>) -> Self {
        debug_assert!(
            coo.windows(2).all(|w| w[0] <= w[1]),
            "coordinate list must be sorted ascending by (row, col)"
        );
        debug_assert!(
            coo.iter().all(|&(u, v)| u != v),
            "CSR forbids self-loops"
        );
        if let Some(w) = weight {
            debug_assert_eq!(w.len(), coo.len());
        }

        let mut row_ptr = vec![NI::zero(); n_rows + 1];
        for &(u, _) in coo {
            let u = u.index();
            debug_assert!(u < n_rows, "row index out of range");
            row_ptr[u + 1] += NI::one();
        }
        for i in 1..row_ptr.len() {
            let prev = row_ptr[i - 1];
            row_ptr[i] += prev;
        }

        let col_idx: Vec<NI> = coo.iter().map(|&(_, v)| v).collect();

        Self {
            row_ptr: row_ptr.into_boxed_slice(),
            col_idx: col_idx.into_boxed_slice(),
            weight: weight.map(|w| w.to_vec().into_boxed_slice()),
        }
    }

    /// The inverse of `compress_coo`: expands `row_ptr` back into a parallel
    /// row array, one entry per element of `col_idx`.
    pub fn expand_rows(&self) -> Vec<NI> {
        let mut rows = Vec::with_capacity(self.col_idx.len());
        for row in 0..self.node_count() {
            let (from, to) = self.row_bounds(NI::new(row));
            rows.resize(rows.len() + (to - from), NI::new(row));
        }
        rows
    }

    pub fn node_count(&self) -> usize {
        self.row_ptr.len() - 1
    }

    pub fn nnz(&self) -> usize {
        self.col_idx.len()
    }

    #[inline]
    fn row_bounds(&self, row: NI) -> (usize, usize) {
        let from = self.row_ptr[row.index()].index();
        let to = self.row_ptr[row.index() + 1].index();
        (from, to)
    }

    pub fn degree(&self, row: NI) -> usize {
        let (from, to) = self.row_bounds(row);
        to - from
    }

    pub fn row(&self, row: NI) -> &[NI] {
        let (from, to) = self.row_bounds(row);
        &self.col_idx[from..to]
    }

    pub fn row_weights(&self, row: NI) -> Option<&[u32]> {
        let (from, to) = self.row_bounds(row);
        self.weight.as_deref().map(|w| &w[from..to])
    }

    pub fn row_ptr(&self) -> &[NI] {
        &self.row_ptr
    }

    pub fn col_idx(&self) -> &[NI] {
        &self.col_idx
    }

    /// Binary-searches row `u`'s column list for `v`, returning the edge's
    /// weight if present.
    pub fn find(&self, u: NI, v: NI) -> Option<u32> {
        let row = self.row(u);
        let pos = row.binary_search(&v).ok()?;
        match self.row_weights(u) {
            Some(weights) => Some(weights[pos]),
            None => Some(1),
        }
    }

    /// Projects out a set of removed vertices, returning a new CSR of the
    /// same dimensions where removed rows are empty and removed columns are
    /// skipped. Vertex ids are preserved (the matrix is not compacted).
    pub fn project(&self, removed: &BitVec<usize>) -> Self {
        debug_assert_eq!(removed.len(), self.node_count());

        let mut coo = Vec::new();
        let mut weights = self.weight.is_some().then(Vec::new);

        for row in 0..self.node_count() {
            if removed[row] {
                continue;
            }
            let row_id = NI::new(row);
            let (from, to) = self.row_bounds(row_id);
            for idx in from..to {
                let col = self.col_idx[idx];
                if removed[col.index()] {
                    continue;
                }
                coo.push((row_id, col));
                if let Some(ws) = weights.as_mut() {
                    ws.push(self.weight.as_ref().unwrap()[idx]);
                }
            }
        }

        Self::compress_coo(self.node_count(), &coo, weights.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compress_and_expand_round_trip() {
        let coo: Vec<(u32, u32)> = vec![(0, 1), (0, 2), (1, 2), (2, 0)];
        let csr = Csr::compress_coo(3, &coo, None);
        assert_eq!(csr.row_ptr(), &[0, 2, 3, 4]);
        assert_eq!(csr.col_idx(), &[1, 2, 2, 0]);

        let rows = csr.expand_rows();
        let reconstructed: Vec<(u32, u32)> =
            rows.into_iter().zip(csr.col_idx().iter().copied()).collect();
        assert_eq!(reconstructed, coo);
    }

    #[test]
    fn degree_and_row_slice() {
        let coo: Vec<(u32, u32)> = vec![(0, 1), (0, 2), (1, 2)];
        let csr = Csr::compress_coo(3, &coo, None);
        assert_eq!(csr.degree(0), 2);
        assert_eq!(csr.row(0), &[1, 2]);
        assert_eq!(csr.degree(2), 0);
    }

    #[test]
    fn find_returns_weight_or_none() {
        let coo: Vec<(u32, u32)> = vec![(0, 1), (0, 2)];
        let weights = [5u32, 7];
        let csr = Csr::compress_coo(3, &coo, Some(&weights));
        assert_eq!(csr.find(0, 1), Some(5));
        assert_eq!(csr.find(0, 2), Some(7));
        assert_eq!(csr.find(0, 0), None);
        assert_eq!(csr.find(1, 0), None);
    }

    #[test]
    fn project_drops_removed_rows_and_columns() {
        let coo: Vec<(u32, u32)> = vec![(0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1)];
        let csr = Csr::compress_coo(3, &coo, None);
        let mut removed = BitVec::<usize>::repeat(false, 3);
        removed.set(1, true);
        let projected = csr.project(&removed);
        assert_eq!(projected.node_count(), 3);
        assert_eq!(projected.row(0), &[2]);
        assert_eq!(projected.row(1), &[] as &[u32]);
        assert_eq!(projected.row(2), &[0]);
    }
}

use nucleus_core::{CliqueSet, OrderedIntSet, VertexId};

/// The bipartite incidence between an r-clique set and an s-clique set.
///
/// `r_map[i]` lists the indices of s-cliques that contain the i-th r-clique;
/// `s_map[j]` lists the indices of r-cliques contained in the j-th
/// s-clique. `i` appears in `s_map[j]` iff `j` appears in `r_map[i]` iff the
/// symmetric difference of the two cliques has size exactly `s - r`.
#[derive(Debug, Clone)]
pub struct IncidenceMaps {
    r_map: Vec<OrderedIntSet<usize>>,
    s_map: Vec<OrderedIntSet<usize>>,
}

impl IncidenceMaps {
    pub fn build<NI: VertexId>(r_cliques: &CliqueSet<NI>, s_cliques: &CliqueSet<NI>) -> Self {
        assert!(
            r_cliques.k() < s_cliques.k(),
            "incidence requires r < s"
        );
        let diff = s_cliques.k() - r_cliques.k();

        let mut r_map = vec![OrderedIntSet::new(); r_cliques.len()];
        let mut s_map = vec![OrderedIntSet::new(); s_cliques.len()];

        for i in 0..r_cliques.len() {
            let r = r_cliques.get(i);
            for j in 0..s_cliques.len() {
                let s = s_cliques.get(j);
                if OrderedIntSet::count_symmetric_difference(r, s) == diff {
                    r_map[i].insert(j);
                    s_map[j].insert(i);
                }
            }
        }

        Self { r_map, s_map }
    }

    pub fn n_r(&self) -> usize {
        self.r_map.len()
    }

    pub fn n_s(&self) -> usize {
        self.s_map.len()
    }

    pub fn r_neighbours(&self, r_index: usize) -> &[usize] {
        self.r_map[r_index].as_slice()
    }

    pub fn s_neighbours(&self, s_index: usize) -> &[usize] {
        self.s_map[s_index].as_slice()
    }
}

use std::path::Path;

use crate::error::Error;
use crate::graph::Graph;
use crate::input::edgelist;
use crate::vertex::VertexId;

/// A staged builder for constructing graphs, mirroring the two entry points
/// this crate supports: an in-memory edge Vec, or an on-disk edge-list file.
///
/// # Examples
///
/// ```
/// use nucleus_core::prelude::*;
///
/// let graph: Graph<u32> = GraphBuilder::new()
///     .edges(vec![(0, 1), (0, 2), (1, 2)])
///     .build();
///
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 6);
/// ```
pub struct GraphBuilder;

impl GraphBuilder {
    pub fn new() -> Self {
        GraphBuilder
    }

    pub fn edges<NI: VertexId>(self, edges: Vec<(NI, NI)>) -> FromEdges<NI> {
        FromEdges {
            edges,
            directed: false,
        }
    }

    pub fn path<P: AsRef<Path>>(self, path: P) -> FromPath<P> {
        FromPath { path }
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct FromEdges<NI: VertexId> {
    edges: Vec<(NI, NI)>,
    directed: bool,
}

impl<NI: VertexId> FromEdges<NI> {
    /// Treat `edges` as already-oriented arcs rather than undirected edges.
    pub fn directed(mut self) -> Self {
        self.directed = true;
        self
    }

    /// Builds the graph. The vertex count is inferred as one plus the
    /// largest vertex id appearing in `edges`.
    pub fn build(self) -> Graph<NI> {
        let n_vertices = self
            .edges
            .iter()
            .map(|&(u, v)| u.index().max(v.index()))
            .max()
            .map_or(0, |max_id| max_id + 1);

        if self.directed {
            let mut arcs = self.edges;
            arcs.sort_unstable();
            Graph::from_directed_arcs(n_vertices, &arcs)
        } else {
            Graph::from_undirected_edges(n_vertices, &self.edges)
        }
    }
}

pub struct FromPath<P: AsRef<Path>> {
    path: P,
}

impl<P: AsRef<Path>> FromPath<P> {
    pub fn build<NI: VertexId>(self) -> Result<Graph<NI>, Error> {
        edgelist::load_path(self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_undirected_graph_from_edges() {
        let graph: Graph<u32> = GraphBuilder::new().edges(vec![(0, 1), (1, 2)]).build();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 4);
        assert!(!graph.is_directed());
    }

    #[test]
    fn builds_directed_graph_from_edges() {
        let graph: Graph<u32> = GraphBuilder::new()
            .edges(vec![(0, 1), (1, 2)])
            .directed()
            .build();
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.is_directed());
    }

    #[test]
    fn builds_graph_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("g.el");
        std::fs::write(&path, b"% undirected\n% 3 2\n0 1\n1 2\n").unwrap();

        let graph: Graph<u32> = GraphBuilder::new().path(&path).build().unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 4);
    }
}

use thiserror::Error;

/// Errors surfaced while loading a graph from an external edge-list.
///
/// Contract violations (`k < 1`, `r >= s`, orienting an already-directed
/// graph, ...) are *not* represented here: they are programmer errors, not
/// recoverable input problems, and are reported via `panic!`/`assert!` at the
/// call site per the error handling design.
#[derive(Error, Debug)]
pub enum Error {
    #[error("error while reading edge-list file")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("malformed edge-list header: {0}")]
    MalformedHeader(String),
    #[error("malformed edge on line {line}: {reason}")]
    MalformedEdge { line: usize, reason: String },
    #[error("self-loop at vertex {0} is not permitted")]
    SelfLoop(usize),
    #[error("vertex id {vertex} is out of range for a graph declared with {n_vertices} vertices")]
    VertexOutOfRange { vertex: usize, n_vertices: usize },
    #[error("edges are not sorted ascending by (u, v): ({prev_u}, {prev_v}) is followed by ({u}, {v})")]
    UnsortedEdges {
        prev_u: usize,
        prev_v: usize,
        u: usize,
        v: usize,
    },
    #[error("header declared {declared} edges but the file contains {actual}")]
    DeclaredEdgeCountMismatch { declared: usize, actual: usize },
}

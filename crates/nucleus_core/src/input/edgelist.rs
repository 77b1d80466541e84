use std::fs;
use std::path::Path;

use log::info;

use crate::error::Error;
use crate::graph::Graph;
use crate::vertex::VertexId;

/// Reads an edge-list file from disk and builds a `Graph`.
///
/// # Example
///
/// ```ignore
/// > cat my_graph.el
/// % undirected
/// % 5 6
/// 0 1
/// 0 2
/// 1 2
/// 2 3
/// 2 4
/// 3 4
/// ```
pub fn load_path<NI: VertexId>(path: impl AsRef<Path>) -> Result<Graph<NI>, Error> {
    let bytes = fs::read(path)?;
    load_bytes(&bytes)
}

/// Parses the two-line header plus `n_edges` edge lines described in the
/// file format and builds a `Graph`.
pub fn load_bytes<NI: VertexId>(bytes: &[u8]) -> Result<Graph<NI>, Error> {
    let start = std::time::Instant::now();

    let mut lines = bytes.split(|&b| b == b'\n').filter(|l| !l.is_empty());

    let directed = parse_directedness(lines.next())?;

    let (n_vertices, n_declared_edges) = parse_dimensions(lines.next())?;

    let mut coo = Vec::with_capacity(n_declared_edges);
    let mut prev: Option<(usize, usize)> = None;

    for (line_no, line) in lines.enumerate() {
        let (u, consumed) = NI::parse(line);
        if consumed == 0 {
            return Err(Error::MalformedEdge {
                line: line_no + 3,
                reason: "expected a source vertex id".to_string(),
            });
        }
        let rest = line[consumed..].strip_prefix(b" ").ok_or_else(|| Error::MalformedEdge {
            line: line_no + 3,
            reason: "expected a single space between endpoints".to_string(),
        })?;
        let (v, consumed_v) = NI::parse(rest);
        if consumed_v == 0 {
            return Err(Error::MalformedEdge {
                line: line_no + 3,
                reason: "expected a target vertex id".to_string(),
            });
        }

        if u.index() >= n_vertices {
            return Err(Error::VertexOutOfRange {
                vertex: u.index(),
                n_vertices,
            });
        }
        if v.index() >= n_vertices {
            return Err(Error::VertexOutOfRange {
                vertex: v.index(),
                n_vertices,
            });
        }
        if u == v {
            return Err(Error::SelfLoop(u.index()));
        }

        if let Some((pu, pv)) = prev {
            if (pu, pv) > (u.index(), v.index()) {
                return Err(Error::UnsortedEdges {
                    prev_u: pu,
                    prev_v: pv,
                    u: u.index(),
                    v: v.index(),
                });
            }
        }
        prev = Some((u.index(), v.index()));

        coo.push((u, v));
    }

    if coo.len() != n_declared_edges {
        return Err(Error::DeclaredEdgeCountMismatch {
            declared: n_declared_edges,
            actual: coo.len(),
        });
    }

    let graph = if directed {
        Graph::from_directed_arcs(n_vertices, &coo)
    } else {
        Graph::from_undirected_edges(n_vertices, &coo)
    };

    info!(
        "Loaded graph (n={}, m={}) in {:.2?}",
        graph.node_count(),
        graph.edge_count(),
        start.elapsed()
    );

    Ok(graph)
}

fn parse_directedness(line: Option<&[u8]>) -> Result<bool, Error> {
    let line = line.ok_or_else(|| Error::MalformedHeader("missing directedness line".to_string()))?;
    match line {
        b"% directed" => Ok(true),
        b"% undirected" => Ok(false),
        other => Err(Error::MalformedHeader(format!(
            "expected '% directed' or '% undirected', found {:?}",
            String::from_utf8_lossy(other)
        ))),
    }
}

fn parse_dimensions(line: Option<&[u8]>) -> Result<(usize, usize), Error> {
    let line = line.ok_or_else(|| Error::MalformedHeader("missing dimensions line".to_string()))?;
    let line = line
        .strip_prefix(b"% ")
        .ok_or_else(|| Error::MalformedHeader("dimensions line must start with '% '".to_string()))?;

    let (n_vertices, consumed): (usize, usize) = usize::parse(line);
    if consumed == 0 {
        return Err(Error::MalformedHeader(
            "expected vertex count in dimensions line".to_string(),
        ));
    }
    let rest = line[consumed..]
        .strip_prefix(b" ")
        .ok_or_else(|| Error::MalformedHeader("expected a space between counts".to_string()))?;
    let (n_edges, consumed_edges): (usize, usize) = usize::parse(rest);
    if consumed_edges == 0 {
        return Err(Error::MalformedHeader(
            "expected edge count in dimensions line".to_string(),
        ));
    }

    Ok((n_vertices, n_edges))
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNDIRECTED: &[u8] = b"% undirected\n% 5 6\n0 1\n0 2\n1 2\n2 3\n2 4\n3 4\n";
    const DIRECTED: &[u8] = b"% directed\n% 3 2\n0 1\n1 2\n";

    #[test]
    fn loads_undirected_edge_list() {
        let graph: Graph<u32> = load_bytes(UNDIRECTED).unwrap();
        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.edge_count(), 12);
        assert!(!graph.is_directed());
        assert_eq!(graph.edge(0, 1), Some(1));
    }

    #[test]
    fn loads_directed_edge_list() {
        let graph: Graph<u32> = load_bytes(DIRECTED).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.is_directed());
    }

    #[test]
    fn rejects_self_loop() {
        let bytes = b"% undirected\n% 2 1\n0 0\n";
        let err = load_bytes::<u32>(bytes).unwrap_err();
        assert!(matches!(err, Error::SelfLoop(0)));
    }

    #[test]
    fn rejects_unsorted_edges() {
        let bytes = b"% undirected\n% 3 2\n1 2\n0 1\n";
        let err = load_bytes::<u32>(bytes).unwrap_err();
        assert!(matches!(err, Error::UnsortedEdges { .. }));
    }

    #[test]
    fn rejects_declared_count_mismatch() {
        let bytes = b"% undirected\n% 3 5\n0 1\n1 2\n";
        let err = load_bytes::<u32>(bytes).unwrap_err();
        assert!(matches!(err, Error::DeclaredEdgeCountMismatch { .. }));
    }

    #[test]
    fn rejects_out_of_range_vertex() {
        let bytes = b"% undirected\n% 2 1\n0 5\n";
        let err = load_bytes::<u32>(bytes).unwrap_err();
        assert!(matches!(err, Error::VertexOutOfRange { .. }));
    }
}

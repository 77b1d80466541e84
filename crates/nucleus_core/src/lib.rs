//! Compressed-sparse-row graphs, ordered integer sets, clique sets, the
//! k-core peeler, and the edge-list loader underlying the nucleus
//! decomposition engine.
//!
//! This crate provides the leaf data structures; the clique enumerators and
//! the nucleus-decomposition peeling loop live in `nucleus_algos`, which
//! depends on this crate.
//!
//! # How to build a graph
//!
//! ```
//! use nucleus_core::prelude::*;
//!
//! let graph: Graph<u32> = GraphBuilder::new()
//!     .edges(vec![(0, 1), (0, 2), (1, 2), (2, 3), (3, 4), (2, 4)])
//!     .build();
//!
//! assert_eq!(graph.node_count(), 5);
//! assert_eq!(graph.edge_count(), 12);
//! assert_eq!(graph.neighbours(2).as_slice(), &[0, 1, 3, 4]);
//! ```
//!
//! # Orienting a graph and peeling its k-core
//!
//! ```
//! use nucleus_core::prelude::*;
//!
//! let graph: Graph<u32> = GraphBuilder::new()
//!     .edges(vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)])
//!     .build();
//!
//! let dag = graph.make_directed(OrientationRule::ByMaxId);
//! assert_eq!(dag.edge_count(), 6);
//!
//! let removed = vertices_not_in_k_core(&graph, 3);
//! assert_eq!(removed.count_ones(), 0);
//! ```

pub mod builder;
pub mod clique_set;
pub mod error;
pub mod graph;
pub mod input;
pub mod kcore;
pub mod ordered_int_set;
pub mod vertex;

pub mod prelude;

pub use builder::GraphBuilder;
pub use clique_set::CliqueSet;
pub use error::Error;
pub use graph::{Graph, OrientationRule};
pub use kcore::vertices_not_in_k_core;
pub use ordered_int_set::OrderedIntSet;
pub use vertex::VertexId;

//! K-clique enumeration and (r,s)-nucleus decomposition over
//! `nucleus_core` graphs.
//!
//! # Enumerating cliques
//!
//! ```
//! use nucleus_algos::prelude::*;
//! use nucleus_core::prelude::*;
//!
//! let graph: Graph<u32> = GraphBuilder::new()
//!     .edges(vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)])
//!     .build();
//!
//! let triangles = enumerate_k_cliques(&graph, 3);
//! assert_eq!(triangles.len(), 4);
//!
//! let four_cliques = enumerate_k_cliques(&graph, 4);
//! assert_eq!(four_cliques.len(), 1);
//! ```
//!
//! # Nucleus decomposition
//!
//! ```
//! use nucleus_algos::prelude::*;
//! use nucleus_core::prelude::*;
//!
//! let graph: Graph<u32> = GraphBuilder::new()
//!     .edges(vec![(0, 1), (0, 2), (1, 2), (3, 4), (3, 5), (4, 5)])
//!     .build();
//!
//! let levels = nucleus_decomposition(&graph, 1, 3, NucleusVariant::Exact);
//! assert_eq!(levels, vec![1, 1, 1, 1, 1, 1]);
//! ```

pub mod cliques;
pub mod nucleus;

pub mod prelude;

pub use cliques::{enumerate_k_cliques, expand_cliques};
pub use nucleus::{nucleus_decomposition, IncidenceMaps, NucleusVariant};

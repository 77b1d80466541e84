pub use crate::builder::GraphBuilder;

pub use crate::graph::csr::Csr;
pub use crate::graph::{Graph, OrientationRule};

pub use crate::clique_set::CliqueSet;
pub use crate::kcore::vertices_not_in_k_core;
pub use crate::ordered_int_set::OrderedIntSet;
pub use crate::vertex::VertexId;

pub use crate::input::{load_bytes, load_path};

pub use crate::error::Error;

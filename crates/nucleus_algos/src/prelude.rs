pub use crate::cliques::{enumerate_k_cliques, expand_cliques};
pub use crate::nucleus::{nucleus_decomposition, IncidenceMaps, NucleusVariant};

pub mod edgelist;

pub use edgelist::{load_bytes, load_path};

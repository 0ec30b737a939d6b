//! Error types for graph operations and queries.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("node index {index} is out of range for a graph of {len} nodes")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("\"{0}\" is not in the graph")]
    WordNotFound(String),

    #[error("no path from \"{from}\" to \"{to}\"")]
    NoPath { from: String, to: String },

    #[error("name \"{name}\" is already bound to node {index}")]
    NameTaken { name: String, index: usize },
}

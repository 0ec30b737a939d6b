//! Edge export type.

use crate::graph::Weight;
use serde::{Deserialize, Serialize};

/// A word-labelled edge for graph export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    /// Number of times `source` was directly followed by `target`.
    pub weight: Weight,
}

//! Wordbridge Graph - Word adjacency and shortest paths
//!
//! This crate holds the weighted directed graph built over a corpus:
//! one node per distinct word, and an edge `a -> b` whose weight counts
//! how often `a` is directly followed by `b`.
//!
//! # Queries
//!
//! - Bridge words: `x` such that `a -> x -> b`.
//! - Shortest paths: a tie-preserving Dijkstra builds every
//!   minimum-weight predecessor, a backward pass prunes that to one
//!   target, and a forward walk enumerates the paths or picks one.
//!
//! # Example
//!
//! ```
//! use wordbridge_core::{Corpus, CorpusOptions};
//! use wordbridge_graph::GraphBuilder;
//!
//! let corpus = Corpus::parse("the cat sat on the mat", &CorpusOptions::default());
//! let graph = GraphBuilder::from_corpus(&corpus).unwrap();
//!
//! let bridges = graph.bridges("cat", "on").unwrap();
//! assert!(bridges.contains("sat"));
//!
//! let path = graph.one_path("cat", "mat").unwrap();
//! assert_eq!(path.words, ["cat", "sat", "on", "the", "mat"]);
//! ```

mod bridge;
mod builder;
mod edge;
mod error;
mod graph;
mod names;
mod paths;
mod prune;
mod shortest;

pub use builder::GraphBuilder;
pub use edge::GraphEdge;
pub use error::{GraphError, Result};
pub use graph::{GraphStats, NodeId, Weight, WordGraph};
pub use names::NameTable;
pub use paths::{ShortestPath, WordPath};
pub use prune::PathDag;
pub use shortest::ShortestPathTree;

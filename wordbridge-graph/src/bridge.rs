//! Bridge words: two-hop connections between words.
//!
//! `x` bridges `word1` to `word2` when the graph has both `word1 -> x`
//! and `x -> word2`. The endpoints themselves never count as bridges.

use crate::error::Result;
use crate::graph::{NodeId, WordGraph};
use std::collections::BTreeSet;
use tracing::debug;

impl WordGraph {
    /// Finds the bridge words from `word1` to `word2`.
    ///
    /// # Errors
    ///
    /// [`GraphError::WordNotFound`](crate::GraphError::WordNotFound)
    /// naming the first word that is not in the graph.
    pub fn bridges(&self, word1: &str, word2: &str) -> Result<BTreeSet<String>> {
        let from = self.resolve(word1)?;
        let to = self.resolve(word2)?;

        let bridges: BTreeSet<String> = self
            .bridge_nodes(from, to)?
            .into_iter()
            .map(|node| self.label(node))
            .collect();

        debug!(word1, word2, count = bridges.len(), "bridge lookup");
        Ok(bridges)
    }

    /// Index-level bridge lookup, sorted by index.
    pub fn bridge_nodes(&self, from: NodeId, to: NodeId) -> Result<Vec<NodeId>> {
        self.check(from)?;
        self.check(to)?;

        let mut nodes: Vec<NodeId> = self
            .successors(from)
            .map(|(middle, _)| middle)
            .filter(|&middle| middle != from && middle != to)
            .filter(|&middle| self.graph.find_edge(middle, to).is_some())
            .collect();
        nodes.sort();
        nodes.dedup();
        Ok(nodes)
    }
}

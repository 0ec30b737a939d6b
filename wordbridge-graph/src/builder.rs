//! Graph builder for constructing the word graph from a corpus.
//!
//! The graph's node set is fixed at creation, so building takes two
//! passes: first bind the vocabulary, then add one unit of weight per
//! adjacent word pair.

use crate::error::Result;
use crate::graph::{NodeId, WordGraph};
use tracing::debug;
use wordbridge_core::Corpus;

/// Builds a WordGraph from a corpus.
///
/// Nodes are numbered in order of first appearance.
#[derive(Debug)]
pub struct GraphBuilder {
    graph: WordGraph,
}

impl GraphBuilder {
    /// Pass 1: one named node per vocabulary word, in the given order.
    ///
    /// # Errors
    ///
    /// [`GraphError::NameTaken`](crate::GraphError::NameTaken) if a word
    /// appears twice.
    pub fn with_vocabulary(vocabulary: &[&str]) -> Result<Self> {
        let mut graph = WordGraph::new(vocabulary.len());
        for (index, word) in vocabulary.iter().enumerate() {
            graph.name_node(NodeId::new(index), *word)?;
        }
        Ok(Self { graph })
    }

    /// Pass 2: adds one unit of weight per `(from, to)` pair.
    ///
    /// # Errors
    ///
    /// [`GraphError::WordNotFound`](crate::GraphError::WordNotFound) for a
    /// word that is not in the vocabulary.
    pub fn add_pairs<'w, I>(&mut self, pairs: I) -> Result<()>
    where
        I: IntoIterator<Item = (&'w str, &'w str)>,
    {
        for (from, to) in pairs {
            let from = self.graph.resolve(from)?;
            let to = self.graph.resolve(to)?;
            self.graph.add_weight(from, to, 1)?;
        }
        Ok(())
    }

    /// Finishes building and returns the graph.
    pub fn build(self) -> WordGraph {
        debug!(
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count(),
            "built word graph"
        );
        self.graph
    }

    /// Builds the graph for a whole corpus.
    pub fn from_corpus(corpus: &Corpus) -> Result<WordGraph> {
        let mut builder = Self::with_vocabulary(&corpus.vocabulary())?;
        builder.add_pairs(corpus.pairs())?;
        Ok(builder.build())
    }
}

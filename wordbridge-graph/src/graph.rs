//! Core graph data structure.
//!
//! The WordGraph wraps petgraph and adds a name table so nodes can be
//! addressed by word as well as by index. The node set is fixed when the
//! graph is created; only names and edge weights change afterwards.

use crate::edge::GraphEdge;
use crate::error::{GraphError, Result};
use crate::names::NameTable;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Stable identifier of a node, in `0..node_count()`.
pub type NodeId = NodeIndex;

/// Accumulated weight of an edge. Zero means "no edge".
pub type Weight = u64;

/// A weighted directed graph over words.
#[derive(Debug, Clone)]
pub struct WordGraph {
    /// The underlying petgraph graph. Only pairs with a positive weight
    /// have an edge.
    pub(crate) graph: DiGraph<(), Weight>,

    /// Index <-> word bindings.
    names: NameTable,
}

impl WordGraph {
    /// Creates a graph of `len` nodes with no edges and no names.
    pub fn new(len: usize) -> Self {
        let mut graph = DiGraph::with_capacity(len, 0);
        for _ in 0..len {
            graph.add_node(());
        }

        Self {
            graph,
            names: NameTable::with_len(len),
        }
    }

    /// Binds `name` to `node`, replacing any earlier name of that node.
    ///
    /// # Errors
    ///
    /// [`GraphError::IndexOutOfRange`] for a bad index and
    /// [`GraphError::NameTaken`] if another node already has the name.
    pub fn name_node(&mut self, node: NodeId, name: impl Into<String>) -> Result<()> {
        self.check(node)?;
        self.names.bind(node, name.into()).inspect_err(|err| {
            warn!(node = node.index(), %err, "rejected name binding");
        })
    }

    /// Adds `weight` to the edge `from -> to`, creating it if needed.
    ///
    /// Adding zero is a no-op. The sum saturates at `Weight::MAX`.
    pub fn add_weight(&mut self, from: NodeId, to: NodeId, weight: Weight) -> Result<()> {
        self.check(from)?;
        self.check(to)?;
        if weight == 0 {
            return Ok(());
        }

        match self.graph.find_edge(from, to) {
            Some(edge) => {
                let current = &mut self.graph[edge];
                *current = current.saturating_add(weight);
            }
            None => {
                self.graph.add_edge(from, to, weight);
            }
        }
        Ok(())
    }

    /// Returns the accumulated weight of `from -> to`, 0 if there is no edge.
    pub fn weight(&self, from: NodeId, to: NodeId) -> Result<Weight> {
        self.check(from)?;
        self.check(to)?;
        Ok(self
            .graph
            .find_edge(from, to)
            .map(|edge| self.graph[edge])
            .unwrap_or(0))
    }

    /// Looks up the node bound to `name`.
    pub fn index_of(&self, name: &str) -> Option<NodeId> {
        self.names.resolve(name)
    }

    /// Returns the name bound to `node`, or `None` if it has none or
    /// the index is out of range.
    pub fn name_of(&self, node: NodeId) -> Option<&str> {
        self.names.name(node)
    }

    /// Display label for a node: its name, or `#<index>` when unnamed.
    pub fn label(&self, node: NodeId) -> String {
        match self.name_of(node) {
            Some(name) => name.to_string(),
            None => format!("#{}", node.index()),
        }
    }

    /// Like [`index_of`](Self::index_of), but a missing word is an error.
    pub(crate) fn resolve(&self, word: &str) -> Result<NodeId> {
        self.index_of(word)
            .ok_or_else(|| GraphError::WordNotFound(word.to_string()))
    }

    pub(crate) fn check(&self, node: NodeId) -> Result<()> {
        if node.index() < self.node_count() {
            Ok(())
        } else {
            Err(GraphError::IndexOutOfRange {
                index: node.index(),
                len: self.node_count(),
            })
        }
    }

    /// Outgoing edges of `node` as `(target, weight)`.
    pub(crate) fn successors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, Weight)> + '_ {
        self.graph
            .edges(node)
            .map(|edge_ref| (edge_ref.target(), *edge_ref.weight()))
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of node pairs with a positive weight.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Iterates over all node indexes.
    pub fn node_indexes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.graph.node_indices()
    }

    /// Returns all edges labelled by word for export, sorted by
    /// source then target index.
    pub fn edges(&self) -> Vec<GraphEdge> {
        let mut refs: Vec<_> = self.graph.edge_references().collect();
        refs.sort_by_key(|edge_ref| (edge_ref.source(), edge_ref.target()));

        refs.into_iter()
            .map(|edge_ref| GraphEdge {
                source: self.label(edge_ref.source()),
                target: self.label(edge_ref.target()),
                weight: *edge_ref.weight(),
            })
            .collect()
    }
}

/// Graph statistics for the stats command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    pub named_nodes: usize,
    pub total_weight: Weight,
}

impl WordGraph {
    /// Returns graph statistics.
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            node_count: self.node_count(),
            edge_count: self.edge_count(),
            named_nodes: self.names.len(),
            total_weight: self
                .graph
                .edge_weights()
                .fold(0, |acc: Weight, w| acc.saturating_add(*w)),
        }
    }
}

//! Enumerating and selecting minimum-weight paths.
//!
//! Every query recomputes from scratch: build the shortest-path tree
//! from the source, prune it to the target, then walk the pruned DAG
//! forward. Successors are visited in ascending index order, so paths
//! come out sorted by their node-index sequence and the single-path
//! query is simply the first of them.

use crate::error::{GraphError, Result};
use crate::graph::{NodeId, Weight, WordGraph};
use crate::prune::PathDag;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::ControlFlow;
use tracing::debug;

/// A minimum-weight path as node indexes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    /// Total weight; equal to the source-to-target distance.
    pub weight: Weight,
    /// Nodes from source to target, both included.
    pub nodes: Vec<NodeId>,
}

/// A minimum-weight path labelled by word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPath {
    pub weight: Weight,
    pub words: Vec<String>,
}

impl fmt::Display for WordPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (weight {})", self.words.join(" -> "), self.weight)
    }
}

impl PathDag {
    /// All source-to-target paths in the DAG, in canonical order.
    pub fn paths(&self) -> Vec<ShortestPath> {
        let Some(weight) = self.distance else {
            return Vec::new();
        };

        let mut paths = Vec::new();
        let _ = self.walk(self.source, &mut Vec::new(), &mut |nodes: &[NodeId]| {
            paths.push(ShortestPath {
                weight,
                nodes: nodes.to_vec(),
            });
            ControlFlow::Continue(())
        });
        paths
    }

    /// The first path [`paths`](Self::paths) would return, found without
    /// enumerating the rest.
    pub fn first_path(&self) -> Option<ShortestPath> {
        let weight = self.distance?;

        let mut first = None;
        let _ = self.walk(self.source, &mut Vec::new(), &mut |nodes: &[NodeId]| {
            first = Some(ShortestPath {
                weight,
                nodes: nodes.to_vec(),
            });
            ControlFlow::Break(())
        });
        first
    }

    /// Depth-first walk towards the target. `prefix` is pushed on entry
    /// and popped on every exit, so siblings always see the same prefix.
    fn walk<F>(
        &self,
        current: NodeId,
        prefix: &mut Vec<NodeId>,
        visit: &mut F,
    ) -> ControlFlow<()>
    where
        F: FnMut(&[NodeId]) -> ControlFlow<()>,
    {
        prefix.push(current);
        let flow = if current == self.target {
            visit(prefix)
        } else {
            self.successors(current)
                .try_for_each(|next| self.walk(next, prefix, visit))
        };
        prefix.pop();
        flow
    }
}

impl WordGraph {
    /// Every minimum-weight path from `from` to `to`.
    ///
    /// Empty when `to` is unreachable. When `from == to` the only path
    /// is the single node with weight 0.
    pub fn shortest_paths_between(&self, from: NodeId, to: NodeId) -> Result<Vec<ShortestPath>> {
        self.check(to)?;
        let paths = self.shortest_path_tree(from)?.prune_to(to).paths();

        debug!(
            from = from.index(),
            to = to.index(),
            count = paths.len(),
            "enumerated shortest paths"
        );
        Ok(paths)
    }

    /// One minimum-weight path from `from` to `to`, the first in canonical
    /// order.
    ///
    /// # Errors
    ///
    /// [`GraphError::NoPath`] when `to` is unreachable.
    pub fn one_shortest_path(&self, from: NodeId, to: NodeId) -> Result<ShortestPath> {
        self.check(to)?;
        self.shortest_path_tree(from)?
            .prune_to(to)
            .first_path()
            .ok_or_else(|| GraphError::NoPath {
                from: self.label(from),
                to: self.label(to),
            })
    }

    /// Word-level [`shortest_paths_between`](Self::shortest_paths_between).
    pub fn all_shortest_paths(&self, from: &str, to: &str) -> Result<Vec<WordPath>> {
        let source = self.resolve(from)?;
        let target = self.resolve(to)?;

        Ok(self
            .shortest_paths_between(source, target)?
            .iter()
            .map(|path| self.word_path(path))
            .collect())
    }

    /// Word-level [`one_shortest_path`](Self::one_shortest_path).
    pub fn one_path(&self, from: &str, to: &str) -> Result<WordPath> {
        let source = self.resolve(from)?;
        let target = self.resolve(to)?;

        let path = self.one_shortest_path(source, target)?;
        Ok(self.word_path(&path))
    }

    /// One minimum-weight path from `from` to every other reachable node,
    /// ordered by target index.
    pub fn shortest_paths_from(&self, from: &str) -> Result<Vec<WordPath>> {
        let source = self.resolve(from)?;
        let tree = self.shortest_path_tree(source)?;

        Ok(self
            .node_indexes()
            .filter(|&target| target != source)
            .filter_map(|target| tree.prune_to(target).first_path())
            .map(|path| self.word_path(&path))
            .collect())
    }

    /// Labels each node of `path` by word.
    pub fn word_path(&self, path: &ShortestPath) -> WordPath {
        WordPath {
            weight: path.weight,
            words: path.nodes.iter().map(|&node| self.label(node)).collect(),
        }
    }
}

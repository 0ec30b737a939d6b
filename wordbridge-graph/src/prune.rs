//! Restricting a shortest-path tree to one target.
//!
//! The predecessor sets of a [`ShortestPathTree`] describe minimum-weight
//! paths to every node. For a single target only the edges that can
//! still lead there matter, so we walk predecessor edges backwards from
//! the target with a BFS and keep exactly the edges we cross.

use crate::graph::{NodeId, Weight};
use crate::shortest::ShortestPathTree;
use std::collections::{BTreeSet, VecDeque};

/// The minimum-weight paths from a source to one target, as a DAG.
///
/// Every edge in the DAG lies on some minimum-weight source-to-target
/// path, so a forward walk from the source never dead-ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathDag {
    pub(crate) source: NodeId,
    pub(crate) target: NodeId,

    /// Total weight of every path in the DAG; `None` if the target is
    /// unreachable.
    pub(crate) distance: Option<Weight>,

    /// Forward adjacency: `successors[p]` holds each `w` with `p -> w` kept.
    pub(crate) successors: Vec<BTreeSet<NodeId>>,
}

impl PathDag {
    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    /// Weight shared by every path in the DAG.
    pub fn distance(&self) -> Option<Weight> {
        self.distance
    }

    /// Nodes reachable in one step from `node` within the DAG, ascending.
    pub fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.successors
            .get(node.index())
            .into_iter()
            .flat_map(|next| next.iter().copied())
    }

    /// Number of kept edges.
    pub fn edge_count(&self) -> usize {
        self.successors.iter().map(BTreeSet::len).sum()
    }
}

impl ShortestPathTree {
    /// Keeps only the predecessor edges that lie on a minimum-weight path
    /// from the source to `target`.
    ///
    /// An out-of-range or unreachable target yields an empty DAG with no
    /// distance.
    pub fn prune_to(&self, target: NodeId) -> PathDag {
        let n = self.len();
        let mut successors: Vec<BTreeSet<NodeId>> = vec![BTreeSet::new(); n];
        let distance = self.distance(target);

        if distance.is_some() {
            let mut visited = vec![false; n];
            let mut queue = VecDeque::new();
            visited[target.index()] = true;
            queue.push_back(target);

            while let Some(current) = queue.pop_front() {
                for pred in self.predecessors(current) {
                    successors[pred.index()].insert(current);
                    if !visited[pred.index()] {
                        visited[pred.index()] = true;
                        queue.push_back(pred);
                    }
                }
            }
        }

        PathDag {
            source: self.source,
            target,
            distance,
            successors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::WordGraph;

    fn n(index: usize) -> NodeId {
        NodeId::new(index)
    }

    fn graph_with(len: usize, edges: &[(usize, usize, Weight)]) -> WordGraph {
        let mut graph = WordGraph::new(len);
        for &(u, v, w) in edges {
            graph.add_weight(n(u), n(v), w).unwrap();
        }
        graph
    }

    fn successors(dag: &PathDag, node: usize) -> Vec<usize> {
        dag.successors(n(node)).map(|s| s.index()).collect()
    }

    #[test]
    fn test_side_branches_are_removed() {
        // 0 -> 1 -> 2 is the target path; 0 -> 3 and 1 -> 4 are
        // shortest to their own nodes but never reach 2.
        let graph = graph_with(5, &[(0, 1, 1), (1, 2, 1), (0, 3, 1), (1, 4, 1)]);
        let tree = graph.shortest_path_tree(n(0)).unwrap();
        let dag = tree.prune_to(n(2));

        assert_eq!(dag.distance(), Some(2));
        assert_eq!(successors(&dag, 0), vec![1]);
        assert_eq!(successors(&dag, 1), vec![2]);
        assert_eq!(dag.edge_count(), 2);
    }

    #[test]
    fn test_ties_on_the_way_survive() {
        let graph = graph_with(5, &[(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1), (3, 4, 1)]);
        let dag = graph.shortest_path_tree(n(0)).unwrap().prune_to(n(4));

        assert_eq!(successors(&dag, 0), vec![1, 2]);
        assert_eq!(successors(&dag, 1), vec![3]);
        assert_eq!(successors(&dag, 2), vec![3]);
        assert_eq!(successors(&dag, 3), vec![4]);
    }

    #[test]
    fn test_pruning_to_intermediate_node() {
        // Target 1 only needs the edge 0 -> 1, not 1's onward edges.
        let graph = graph_with(3, &[(0, 1, 1), (1, 2, 1)]);
        let dag = graph.shortest_path_tree(n(0)).unwrap().prune_to(n(1));

        assert_eq!(dag.edge_count(), 1);
        assert_eq!(successors(&dag, 1), Vec::<usize>::new());
    }

    #[test]
    fn test_unreachable_target() {
        let graph = graph_with(3, &[(0, 1, 1), (2, 1, 1)]);
        let dag = graph.shortest_path_tree(n(0)).unwrap().prune_to(n(2));

        assert_eq!(dag.distance(), None);
        assert_eq!(dag.edge_count(), 0);
    }

    #[test]
    fn test_target_is_source() {
        let graph = graph_with(2, &[(0, 1, 1), (1, 0, 1)]);
        let dag = graph.shortest_path_tree(n(0)).unwrap().prune_to(n(0));

        assert_eq!(dag.distance(), Some(0));
        assert_eq!(dag.edge_count(), 0);
    }
}

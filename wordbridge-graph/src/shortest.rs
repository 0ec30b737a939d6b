//! Single-source shortest distances with tie-preserving predecessors.
//!
//! This is Dijkstra's algorithm in its O(n²) array form: each round
//! settles the closest unsettled node and relaxes its outgoing edges.
//! Word graphs are small and dense enough that a scan beats a heap.
//!
//! Unlike the textbook version, every predecessor that reaches a node at
//! the minimum distance is kept. A strictly shorter distance replaces
//! the predecessor set; an equal one adds to it. The result is the
//! shortest-path DAG rooted at the source, which
//! [`ShortestPathTree::prune_to`] then cuts down to a single target.

use crate::error::Result;
use crate::graph::{NodeId, Weight, WordGraph};
use std::collections::BTreeSet;
use tracing::debug;

/// Distances and tied predecessors from one source node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathTree {
    pub(crate) source: NodeId,

    /// Minimum distance per node; `None` means unreachable.
    pub(crate) distances: Vec<Option<Weight>>,

    /// Every node that precedes the key node on some minimum-weight path.
    pub(crate) predecessors: Vec<BTreeSet<NodeId>>,
}

impl ShortestPathTree {
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Minimum total weight from the source to `node`, `None` if unreachable.
    pub fn distance(&self, node: NodeId) -> Option<Weight> {
        self.distances.get(node.index()).copied().flatten()
    }

    /// Nodes `p` such that `p -> node` lies on a minimum-weight path.
    pub fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.predecessors
            .get(node.index())
            .into_iter()
            .flat_map(|preds| preds.iter().copied())
    }

    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.distance(node).is_some()
    }

    /// Number of nodes the tree covers.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

impl WordGraph {
    /// Computes minimum distances and all tied predecessors from `source`.
    pub fn shortest_path_tree(&self, source: NodeId) -> Result<ShortestPathTree> {
        self.check(source)?;

        let n = self.node_count();
        let mut distances: Vec<Option<Weight>> = vec![None; n];
        let mut predecessors: Vec<BTreeSet<NodeId>> = vec![BTreeSet::new(); n];
        let mut settled = vec![false; n];
        distances[source.index()] = Some(0);

        for _ in 0..n {
            // Lowest index wins ties, which keeps runs reproducible.
            let closest = (0..n)
                .filter(|&i| !settled[i])
                .filter_map(|i| distances[i].map(|d| (d, i)))
                .min();
            let Some((base, current)) = closest else {
                // Everything left is unreachable.
                break;
            };
            settled[current] = true;
            let current = NodeId::new(current);

            for (next, weight) in self.successors(current) {
                if next == current || settled[next.index()] {
                    continue;
                }
                // Totals past Weight::MAX are not representable; skip them.
                let Some(candidate) = base.checked_add(weight) else {
                    continue;
                };
                let slot = &mut distances[next.index()];
                match *slot {
                    Some(known) if candidate > known => {}
                    Some(known) if candidate == known => {
                        predecessors[next.index()].insert(current);
                    }
                    _ => {
                        *slot = Some(candidate);
                        let preds = &mut predecessors[next.index()];
                        preds.clear();
                        preds.insert(current);
                    }
                }
            }
        }

        debug!(
            source = source.index(),
            reachable = distances.iter().filter(|d| d.is_some()).count(),
            "built shortest path tree"
        );

        Ok(ShortestPathTree {
            source,
            distances,
            predecessors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;

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

    fn preds(tree: &ShortestPathTree, node: usize) -> Vec<usize> {
        tree.predecessors(n(node)).map(|p| p.index()).collect()
    }

    #[test]
    fn test_source_distance_is_zero() {
        let graph = graph_with(3, &[(0, 1, 2), (1, 2, 3), (2, 0, 1)]);
        for source in graph.node_indexes() {
            let tree = graph.shortest_path_tree(source).unwrap();
            assert_eq!(tree.distance(source), Some(0));
            assert_eq!(tree.predecessors(source).count(), 0);
        }
    }

    #[test]
    fn test_linear_chain() {
        // 0 -> 1 -> 2
        let graph = graph_with(3, &[(0, 1, 2), (1, 2, 3)]);
        let tree = graph.shortest_path_tree(n(0)).unwrap();

        assert_eq!(tree.distance(n(1)), Some(2));
        assert_eq!(tree.distance(n(2)), Some(5));
        assert_eq!(preds(&tree, 2), vec![1]);
    }

    #[test]
    fn test_diamond_keeps_both_predecessors() {
        //     0
        //    / \
        //   1   2
        //    \ /
        //     3
        let graph = graph_with(4, &[(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1)]);
        let tree = graph.shortest_path_tree(n(0)).unwrap();

        assert_eq!(tree.distance(n(3)), Some(2));
        assert_eq!(preds(&tree, 3), vec![1, 2]);
    }

    #[test]
    fn test_shorter_path_replaces_predecessors() {
        // Direct 0 -> 2 costs 10, detour through 1 costs 2.
        let graph = graph_with(3, &[(0, 2, 10), (0, 1, 1), (1, 2, 1)]);
        let tree = graph.shortest_path_tree(n(0)).unwrap();

        assert_eq!(tree.distance(n(2)), Some(2));
        assert_eq!(preds(&tree, 2), vec![1]);
    }

    #[test]
    fn test_unreachable_node() {
        let graph = graph_with(3, &[(0, 1, 1), (2, 0, 1)]);
        let tree = graph.shortest_path_tree(n(0)).unwrap();

        assert!(!tree.is_reachable(n(2)));
        assert_eq!(tree.distance(n(2)), None);
        assert_eq!(tree.predecessors(n(2)).count(), 0);
    }

    #[test]
    fn test_cycle_terminates() {
        let graph = graph_with(3, &[(0, 1, 1), (1, 2, 1), (2, 0, 1), (1, 1, 4)]);
        let tree = graph.shortest_path_tree(n(1)).unwrap();

        assert_eq!(tree.distance(n(0)), Some(2));
        assert_eq!(preds(&tree, 1), Vec::<usize>::new());
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_overflowing_totals_do_not_tie() {
        // 1 and 2 both sit at Weight::MAX; the 1 <-> 2 edges would push
        // past the ceiling and must not make them predecessors of each other.
        let graph = graph_with(
            4,
            &[
                (0, 1, Weight::MAX),
                (0, 2, Weight::MAX),
                (1, 2, 1),
                (2, 1, 1),
                (1, 3, 1),
                (2, 3, 1),
            ],
        );
        let tree = graph.shortest_path_tree(n(0)).unwrap();

        assert_eq!(tree.distance(n(1)), Some(Weight::MAX));
        assert_eq!(tree.distance(n(2)), Some(Weight::MAX));
        assert_eq!(preds(&tree, 1), vec![0]);
        assert_eq!(preds(&tree, 2), vec![0]);
        assert!(!tree.is_reachable(n(3)));
    }

    #[test]
    fn test_bad_source() {
        let graph = WordGraph::new(2);
        assert_eq!(
            graph.shortest_path_tree(n(7)),
            Err(GraphError::IndexOutOfRange { index: 7, len: 2 })
        );
    }
}

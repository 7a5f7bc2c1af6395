//! Best-path extraction.
//!
//! After the last round the colony reads its answer off the trails with a
//! single greedy pass: at every node, follow the open trail with the
//! highest desire. There is no randomness and no backtracking, so the
//! extractor may miss a route that exists behind a dead end.

use crate::config::ColonyConfig;
use antroute_core::graph::GraphIndex;
use antroute_core::path::Path;
use antroute_core::types::NodeId;

/// Greedily follow the most desirable open trail from `start`.
///
/// Ties go to the neighbor met first in row order. Returns `None` when
/// `start` is outside the graph, or when the walk reaches a node whose
/// open trails all have zero desire (or there are none).
pub fn extract_best_path(
    start: NodeId,
    destination: NodeId,
    graph: &GraphIndex,
    config: &ColonyConfig,
) -> Option<Path> {
    if !graph.contains(start) {
        return None;
    }

    let mut visited = vec![false; graph.vertex_count()];
    visited[start.index()] = true;
    let mut path = Path::single(start);
    let mut current = start;

    while current != destination {
        let mut max_desire = 0.0;
        let mut desired = None;
        for (node, trail) in graph.neighbors(current) {
            if visited[node.index()] {
                continue;
            }
            let desire = trail.desire(config.pheromone_exponent, config.distance_exponent);
            if desire > max_desire {
                max_desire = desire;
                desired = Some(node);
            }
        }

        let next = desired?;
        visited[next.index()] = true;
        path.push(next);
        current = next;
    }

    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use antroute_core::types::Edge;

    fn graph(triples: &[(u16, u16, u16)]) -> GraphIndex {
        GraphIndex::build(&Edge::from_triples(triples).unwrap())
    }

    fn ids(path: &Path) -> Vec<u16> {
        path.nodes().iter().map(|n| n.0).collect()
    }

    #[test]
    fn follows_cheapest_trail_on_uniform_pheromone() {
        let g = graph(&[(1, 2, 5), (1, 3, 2), (2, 4, 1), (3, 4, 9)]);
        let path = extract_best_path(NodeId(1), NodeId(4), &g, &ColonyConfig::default()).unwrap();
        assert_eq!(ids(&path), vec![1, 3, 4]);
    }

    #[test]
    fn pheromone_overrides_cost() {
        let mut g = graph(&[(1, 2, 5), (1, 3, 2), (2, 4, 1), (3, 4, 9)]);
        g.update_pheromones(0.5, |from, to| match (from.0, to.0) {
            (1, 2) | (2, 4) => 1.0,
            _ => 0.0,
        });
        let path = extract_best_path(NodeId(1), NodeId(4), &g, &ColonyConfig::default()).unwrap();
        assert_eq!(ids(&path), vec![1, 2, 4]);
    }

    #[test]
    fn ties_go_to_first_neighbor() {
        let g = graph(&[(1, 3, 2), (1, 2, 2), (2, 4, 1), (3, 4, 1)]);
        let path = extract_best_path(NodeId(1), NodeId(4), &g, &ColonyConfig::default()).unwrap();
        assert_eq!(ids(&path), vec![1, 3, 4]);
    }

    #[test]
    fn no_backtracking_past_a_dead_end() {
        // The cheap trail 1 -> 2 leads nowhere; 1 -> 3 -> 4 exists
        let g = graph(&[(1, 2, 1), (1, 3, 9), (3, 4, 1)]);
        assert!(extract_best_path(NodeId(1), NodeId(4), &g, &ColonyConfig::default()).is_none());
    }

    #[test]
    fn zero_desire_everywhere_is_no_path() {
        let mut g = graph(&[(1, 2, 1)]);
        g.update_pheromones(0.0, |_, _| 0.0);
        assert!(extract_best_path(NodeId(1), NodeId(2), &g, &ColonyConfig::default()).is_none());
    }

    #[test]
    fn boundary_endpoints() {
        let g = graph(&[(1, 2, 1)]);
        let config = ColonyConfig::default();
        assert_eq!(
            ids(&extract_best_path(NodeId(2), NodeId(2), &g, &config).unwrap()),
            vec![2]
        );
        assert!(extract_best_path(NodeId(7), NodeId(7), &g, &config).is_none());
        assert!(extract_best_path(NodeId(7), NodeId(1), &g, &config).is_none());
        assert!(extract_best_path(NodeId(1), NodeId(7), &g, &config).is_none());
    }

    #[test]
    fn extraction_is_idempotent() {
        let g = graph(&[(1, 2, 5), (1, 3, 2), (2, 3, 4), (2, 4, 3), (3, 4, 6)]);
        let config = ColonyConfig::default();
        let first = extract_best_path(NodeId(1), NodeId(4), &g, &config);
        let second = extract_best_path(NodeId(1), NodeId(4), &g, &config);
        assert_eq!(first, second);
    }
}

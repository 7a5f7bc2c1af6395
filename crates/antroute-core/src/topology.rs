//! Connectivity over the raw edge list, backed by petgraph.
//!
//! The colony never needs these: an ant simply dead-ends when no route
//! exists. They answer "why was there no route?" for callers, and give
//! tests an exact oracle to compare the heuristic against.

use crate::types::{Cost, Edge, NodeId};
use petgraph::algo::has_path_connecting;
use petgraph::graphmap::UnGraphMap;
use petgraph::visit::Bfs;
use std::collections::HashSet;

fn to_graph_map(edges: &[Edge]) -> UnGraphMap<NodeId, Cost> {
    let mut graph = UnGraphMap::new();
    for edge in edges {
        graph.add_edge(edge.node_a(), edge.node_b(), edge.cost());
    }
    graph
}

/// Connected components of the nodes that appear in `edges`.
///
/// Each component is sorted by id, and components are ordered by their
/// smallest id.
pub fn connected_components(edges: &[Edge]) -> Vec<Vec<NodeId>> {
    let graph = to_graph_map(edges);
    let mut nodes: Vec<NodeId> = graph.nodes().collect();
    nodes.sort();

    let mut seen: HashSet<NodeId> = HashSet::new();
    let mut components = Vec::new();
    for start in nodes {
        if seen.contains(&start) {
            continue;
        }
        let mut component = Vec::new();
        let mut bfs = Bfs::new(&graph, start);
        while let Some(node) = bfs.next(&graph) {
            seen.insert(node);
            component.push(node);
        }
        component.sort();
        components.push(component);
    }
    components
}

/// Whether any route joins `a` and `b`. A node is connected to itself
/// only if it appears in some edge.
pub fn are_connected(edges: &[Edge], a: NodeId, b: NodeId) -> bool {
    let graph = to_graph_map(edges);
    graph.contains_node(a) && graph.contains_node(b) && has_path_connecting(&graph, a, b, None)
}

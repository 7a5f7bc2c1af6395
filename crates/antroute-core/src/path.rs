//! Node paths and the path-to-edge translator.

use crate::graph::GraphIndex;
use crate::types::{Edge, NodeId};
use serde::Serialize;

/// A non-empty sequence of nodes, each joined to the next by a trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Path {
    nodes: Vec<NodeId>,
}

impl Path {
    /// A path that starts (and, for now, ends) at `start`.
    pub fn single(start: NodeId) -> Self {
        Self { nodes: vec![start] }
    }

    /// Wrap an existing node sequence. `None` if it is empty.
    pub fn from_nodes(nodes: Vec<NodeId>) -> Option<Self> {
        (!nodes.is_empty()).then_some(Self { nodes })
    }

    pub fn push(&mut self, node: NodeId) {
        self.nodes.push(node);
    }

    pub fn start(&self) -> NodeId {
        self.nodes[0]
    }

    /// The last node of the path.
    pub fn end(&self) -> NodeId {
        self.nodes[self.nodes.len() - 1]
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A path always holds its start node.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of traversed trails.
    pub fn hop_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Consecutive `(from, to)` pairs.
    pub fn hops(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes.windows(2).map(|w| (w[0], w[1]))
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }
}

/// Translate a node path into ordered, directed edges.
///
/// Each cost is read back from the trail for that exact direction. Returns
/// `None` for an absent path, or when some hop has no trail in `graph`.
/// A single-node path translates to an empty edge list.
pub fn to_edges(path: Option<&Path>, graph: &GraphIndex) -> Option<Vec<Edge>> {
    path?
        .hops()
        .map(|(from, to)| {
            graph
                .trail(from, to)
                .map(|trail| Edge::directed(from, to, trail.cost()))
        })
        .collect()
}

//! Directed edges between nodes.

use serde::{Deserialize, Serialize};

use super::NodeId;

/// A directed edge meaning "source is more abstract than target".
///
/// Edges carry no payload. Self-loops are not rejected and duplicate edges
/// are not suppressed; the store keeps whatever the edit operations (or an
/// imported document) produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// The more abstract endpoint.
    pub source: NodeId,
    /// The more concrete endpoint.
    pub target: NodeId,
}

impl Edge {
    /// Create a new directed edge.
    #[must_use]
    pub const fn new(source: NodeId, target: NodeId) -> Self {
        Self { source, target }
    }

    /// Whether this edge touches the given node as source or target.
    #[must_use]
    pub fn touches(&self, id: NodeId) -> bool {
        self.source == id || self.target == id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_creation() {
        let edge = Edge::new(NodeId::new(1), NodeId::new(0));
        assert_eq!(edge.source.as_u64(), 1);
        assert_eq!(edge.target.as_u64(), 0);
    }

    #[test]
    fn touches_either_endpoint() {
        let edge = Edge::new(NodeId::new(1), NodeId::new(2));
        assert!(edge.touches(NodeId::new(1)));
        assert!(edge.touches(NodeId::new(2)));
        assert!(!edge.touches(NodeId::new(3)));
    }

    #[test]
    fn self_loops_are_representable() {
        let edge = Edge::new(NodeId::new(5), NodeId::new(5));
        assert!(edge.touches(NodeId::new(5)));
    }
}

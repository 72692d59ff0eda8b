//! The in-memory web store and its CRUD operations.

use std::collections::BTreeMap;

use abweb_core::{Edge, NodeId, Question};

use super::error::{GraphError, GraphResult};

/// The web of abstraction: nodes, directed edges, and the editing pointers.
///
/// Nodes are keyed by [`NodeId`] in a `BTreeMap`, so iteration is in
/// ascending id order. Because the counter issues ids monotonically, that
/// order equals insertion order for every web built through the edit
/// operations. Edges keep their insertion order and may contain duplicates
/// or self-loops; nothing here checks for cycles.
///
/// A single web is owned by one logical session and mutated by one request
/// at a time. Every operation either fully succeeds or fails before any
/// mutation takes place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Web {
    nodes: BTreeMap<NodeId, Question>,
    edges: Vec<Edge>,
    id_counter: u64,
    current: Option<NodeId>,
    root: Option<NodeId>,
}

impl Web {
    /// Create an empty web.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a web from raw parts.
    ///
    /// Used by document import. The strict importer validates the parts
    /// first; the lenient importer passes them through as-is, so a web built
    /// this way may violate the pointer and counter invariants.
    pub(crate) fn from_parts(
        nodes: BTreeMap<NodeId, Question>,
        edges: Vec<Edge>,
        id_counter: u64,
        current: Option<NodeId>,
        root: Option<NodeId>,
    ) -> Self {
        Self { nodes, edges, id_counter, current, root }
    }

    /// Add a node with the given text and level, returning its id.
    ///
    /// The id is the current counter value; the counter then advances.
    /// Text is stored as-is (empty allowed).
    pub fn add_node(&mut self, text: impl Into<String>, level: i64) -> NodeId {
        let id = NodeId::new(self.id_counter);
        self.id_counter += 1;
        self.nodes.insert(id, Question::new(text, level));
        id
    }

    /// Add a directed edge from `source` (more abstract) to `target`.
    ///
    /// Duplicate edges and self-loops are accepted; cycles are not detected.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either endpoint is absent.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId) -> GraphResult<()> {
        if !self.contains(source) {
            return Err(GraphError::NodeNotFound(source));
        }
        if !self.contains(target) {
            return Err(GraphError::NodeNotFound(target));
        }
        self.edges.push(Edge::new(source, target));
        Ok(())
    }

    /// Remove a node and every edge touching it.
    ///
    /// If the node was the current node, the current pointer moves to the
    /// minimum remaining id, or clears if the store is now empty. If the
    /// node was the root, the root pointer clears; the root is not rescued.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the id is absent.
    pub fn remove_node(&mut self, id: NodeId) -> GraphResult<()> {
        if self.nodes.remove(&id).is_none() {
            return Err(GraphError::NodeNotFound(id));
        }
        self.edges.retain(|edge| !edge.touches(id));
        if self.current == Some(id) {
            self.current = self.nodes.keys().next().copied();
        }
        if self.root == Some(id) {
            self.root = None;
        }
        Ok(())
    }

    /// Move the current pointer to an existing node.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the id is absent.
    pub fn set_current(&mut self, id: NodeId) -> GraphResult<()> {
        if !self.contains(id) {
            return Err(GraphError::NodeNotFound(id));
        }
        self.current = Some(id);
        Ok(())
    }

    /// Get a node's payload by id.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Question> {
        self.nodes.get(&id)
    }

    /// Mutable access for the edit operations.
    pub(crate) fn node_mut(&mut self, id: NodeId) -> Option<&mut Question> {
        self.nodes.get_mut(&id)
    }

    /// Whether a node with the given id exists.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Iterate over nodes in ascending id order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Question)> {
        self.nodes.iter().map(|(id, q)| (*id, q))
    }

    /// The edges in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of nodes in the store.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges in the store.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the store holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The current node pointer, if set.
    #[must_use]
    pub fn current(&self) -> Option<NodeId> {
        self.current
    }

    /// The root node pointer, if set.
    ///
    /// Root is only a label; no edges are required to or from it.
    #[must_use]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// The next id the counter will issue.
    #[must_use]
    pub fn id_counter(&self) -> u64 {
        self.id_counter
    }

    /// Set both pointers at once. Only the edit operations call this.
    pub(crate) fn set_pointers(&mut self, current: Option<NodeId>, root: Option<NodeId>) {
        self.current = current;
        self.root = root;
    }

    /// Set only the current pointer without validation.
    pub(crate) fn set_current_unchecked(&mut self, id: NodeId) {
        self.current = Some(id);
    }
}

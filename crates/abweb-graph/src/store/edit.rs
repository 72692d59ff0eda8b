//! Ladder-style edit operations.
//!
//! These are the operations the sidebar controls map onto: create the root
//! question, climb the ladder with add-above, descend with add-below, edit
//! text in place, and delete. Each one is a single mutation of the store;
//! none can partially fail.

use abweb_core::NodeId;

use super::error::{GraphError, GraphResult};
use super::web::Web;

impl Web {
    /// Create a level-0 node and point both root and current at it.
    ///
    /// Intended for an empty web. On a non-empty web the node is still
    /// created and both pointers simply move to it; earlier nodes keep
    /// their ids and edges.
    pub fn set_root(&mut self, text: impl Into<String>) -> NodeId {
        let id = self.add_node(text, 0);
        self.set_pointers(Some(id), Some(id));
        id
    }

    /// Add a more abstract node above `current_id` and move current to it.
    ///
    /// The new node is created at `level(current_id) + 1` with an edge from
    /// it down to `current_id`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if `current_id` is absent; the
    /// store is left untouched.
    pub fn add_above(&mut self, current_id: NodeId, text: impl Into<String>) -> GraphResult<NodeId> {
        let level = self.level_of(current_id)?;
        let id = self.add_node(text, level + 1);
        // Both endpoints exist at this point, so the edge cannot fail.
        self.add_edge(id, current_id)?;
        self.set_current_unchecked(id);
        Ok(id)
    }

    /// Add a more concrete node below `current_id` and move current to it.
    ///
    /// Symmetric to [`Web::add_above`]: level `level(current_id) − 1`, edge
    /// from `current_id` down to the new node.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if `current_id` is absent; the
    /// store is left untouched.
    pub fn add_below(&mut self, current_id: NodeId, text: impl Into<String>) -> GraphResult<NodeId> {
        let level = self.level_of(current_id)?;
        let id = self.add_node(text, level - 1);
        self.add_edge(current_id, id)?;
        self.set_current_unchecked(id);
        Ok(id)
    }

    /// Replace the text of an existing node.
    ///
    /// No validation on the new text; empty is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the id is absent.
    pub fn edit_text(&mut self, id: NodeId, new_text: impl Into<String>) -> GraphResult<()> {
        match self.node_mut(id) {
            Some(question) => {
                question.text = new_text.into();
                Ok(())
            }
            None => Err(GraphError::NodeNotFound(id)),
        }
    }

    /// Delete a node.
    ///
    /// Delegates to [`Web::remove_node`]; the store is allowed to empty
    /// itself. Any "don't delete the last node" gate belongs to the UI.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the id is absent.
    pub fn delete_node(&mut self, id: NodeId) -> GraphResult<()> {
        self.remove_node(id)
    }

    fn level_of(&self, id: NodeId) -> GraphResult<i64> {
        self.node(id).map(|q| q.level).ok_or(GraphError::NodeNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_root_points_both_pointers() {
        let mut web = Web::new();
        let root = web.set_root("Q0");

        assert_eq!(root.as_u64(), 0);
        assert_eq!(web.node(root).map(|q| q.level), Some(0));
        assert_eq!(web.root(), Some(root));
        assert_eq!(web.current(), Some(root));
    }

    #[test]
    fn set_root_on_non_empty_web_only_moves_pointers() {
        let mut web = Web::new();
        let first = web.set_root("first");
        let second = web.set_root("second");

        assert!(web.contains(first));
        assert_eq!(web.root(), Some(second));
        assert_eq!(web.current(), Some(second));
        assert_eq!(web.node_count(), 2);
    }

    #[test]
    fn add_above_raises_the_level_and_moves_current() {
        let mut web = Web::new();
        let root = web.set_root("Q0");
        let above = web.add_above(root, "Q1").expect("root exists");

        assert_eq!(web.node(above).map(|q| q.level), Some(1));
        assert_eq!(web.edges(), &[abweb_core::Edge::new(above, root)]);
        assert_eq!(web.current(), Some(above));
    }

    #[test]
    fn add_below_lowers_the_level_and_moves_current() {
        let mut web = Web::new();
        let root = web.set_root("Q0");
        let below = web.add_below(root, "Q-1").expect("root exists");

        assert_eq!(web.node(below).map(|q| q.level), Some(-1));
        assert_eq!(web.edges(), &[abweb_core::Edge::new(root, below)]);
        assert_eq!(web.current(), Some(below));
    }

    #[test]
    fn add_above_missing_node_leaves_store_untouched() {
        let mut web = Web::new();
        web.set_root("Q0");
        let before = web.clone();

        let missing = NodeId::new(42);
        assert_eq!(web.add_above(missing, "x"), Err(GraphError::NodeNotFound(missing)));
        assert_eq!(web, before);
    }

    #[test]
    fn edit_text_replaces_in_place() {
        let mut web = Web::new();
        let root = web.set_root("before");
        web.edit_text(root, "after").expect("node exists");
        assert_eq!(web.node(root).map(|q| q.text.as_str()), Some("after"));
    }

    #[test]
    fn edit_text_missing_node_is_an_error() {
        let mut web = Web::new();
        let missing = NodeId::new(3);
        assert_eq!(web.edit_text(missing, "x"), Err(GraphError::NodeNotFound(missing)));
    }
}

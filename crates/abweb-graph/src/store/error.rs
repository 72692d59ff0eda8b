//! Error types for store operations.

use abweb_core::NodeId;
use thiserror::Error;

/// Errors that can occur when mutating the web store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    /// A node was not found in the store.
    ///
    /// Raised by `add_edge`, `edit_text`, `remove_node`, `set_current`, and
    /// the add-above/add-below operations when the referenced id is absent.
    /// The failing operation leaves the store unchanged.
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),
}

/// Result type for store operations.
pub type GraphResult<T> = Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = GraphError::NodeNotFound(NodeId::new(42));
        assert!(err.to_string().contains("42"));
    }
}

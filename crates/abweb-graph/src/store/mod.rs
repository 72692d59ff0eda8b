//! The editable web store.
//!
//! This module provides CRUD operations for nodes and edges plus the
//! ladder-style edit operations the sidebar controls map onto.
//!
//! # Overview
//!
//! - [`Web`] - nodes, edges, the id counter, and the current/root pointers
//! - edit operations - `set_root`, `add_above`, `add_below`, `edit_text`,
//!   `delete_node` (see the `edit` impl block on [`Web`])
//! - [`GraphError`] - referencing a node id absent from the store
//!
//! # Invariants
//!
//! - The id counter is strictly greater than every node id ever issued.
//! - The current and root pointers, when set, reference existing nodes.
//! - Deleting a node removes every incident edge; the current pointer is
//!   repaired (minimum remaining id) and the root pointer is cleared.
//!
//! # Example
//!
//! ```
//! use abweb_graph::store::Web;
//!
//! let mut web = Web::new();
//! let root = web.set_root("How might we start?");
//! let broader = web.add_above(root, "How might we matter at all?")?;
//!
//! assert_eq!(web.node_count(), 2);
//! assert_eq!(web.edges().len(), 1);
//! assert_eq!(web.current(), Some(broader));
//! # Ok::<(), abweb_graph::store::GraphError>(())
//! ```

mod edit;
mod error;
mod web;

pub use error::{GraphError, GraphResult};
pub use web::Web;

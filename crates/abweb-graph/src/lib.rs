//! Abstraction Web Graph
//!
//! This crate provides the editable core of the web of abstraction: an
//! in-memory graph store with ladder-style edit operations, a JSON document
//! form for import/export, and a render projection for the external
//! visualization widget.
//!
//! # Overview
//!
//! - [`store`] - The [`Web`] store and its edit operations
//! - [`document`] - The persisted JSON document ([`WebDocument`])
//! - [`projection`] - Styled nodes and edges for the rendering widget
//!
//! # Example
//!
//! ```
//! use abweb_graph::store::Web;
//! use abweb_graph::document::WebDocument;
//!
//! let mut web = Web::new();
//! let root = web.set_root("How might we launch a memorable first episode?");
//! let above = web.add_above(root, "How might we make the show memorable?")?;
//!
//! assert_eq!(web.current(), Some(above));
//!
//! // Round-trip through the wire document
//! let doc = WebDocument::from_web(&web);
//! let restored = doc.into_web()?;
//! assert_eq!(web, restored);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod document;
pub mod projection;
pub mod store;

// Re-export core types alongside the store
pub use abweb_core::{Edge, NodeId, Question};

pub use document::{DocumentError, DocumentResult, WebDocument};
pub use projection::Projection;
pub use store::{GraphError, GraphResult, Web};

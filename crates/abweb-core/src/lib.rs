//! Abstraction Web Core
//!
//! This crate provides the fundamental types shared by the Abstraction Web
//! graph editor: node identifiers, node payloads, and directed edges.
//!
//! # Overview
//!
//! A web of abstraction is a small directed graph of "How might we…?"
//! statements. Edges point from the more abstract statement to the more
//! concrete one. The types here carry no behavior beyond construction and
//! access; the editable store lives in `abweb-graph`.
//!
//! # Example
//!
//! ```
//! use abweb_core::{Edge, NodeId, Question};
//!
//! let root = Question::new("How might we launch a memorable first episode?", 0);
//! let above = Question::new("How might we make the show worth remembering?", 1);
//!
//! let edge = Edge::new(NodeId::new(1), NodeId::new(0));
//! assert_eq!(edge.source.as_u64(), 1);
//! assert_eq!(root.level, 0);
//! assert_eq!(above.level, 1);
//! ```
//!
//! # Modules
//!
//! - [`types`] - Core data types ([`Question`], [`Edge`], [`NodeId`])

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod types;

// Re-export commonly used types
pub use types::{Edge, NodeId, Question};

//! The persisted JSON document.
//!
//! This is the only wire/file format of the system:
//!
//! ```json
//! {
//!   "nodes": [{"id": 0, "text": "...", "level": 0}],
//!   "edges": [{"source": 1, "target": 0}],
//!   "current_id": 2,
//!   "root_id": 0,
//!   "id_counter": 3
//! }
//! ```
//!
//! Export is lossless for any web reachable through the edit operations:
//! `WebDocument::from_web` followed by [`WebDocument::into_web`] yields a
//! structurally equal store. Nodes are listed in ascending id order (the
//! store's insertion order) and edges in insertion order.
//!
//! Import comes in two flavors. [`WebDocument::into_web`] validates the
//! document and rejects dangling edge endpoints, dangling pointers,
//! duplicate ids, and a counter that lags behind an issued id.
//! [`WebDocument::into_web_lenient`] accepts the document as-is for
//! compatibility with files exported by older builds that never validated.

mod error;


use std::collections::BTreeMap;

use abweb_core::{Edge, NodeId, Question};
use serde::{Deserialize, Serialize};

use crate::store::Web;

pub use error::{DocumentError, DocumentResult};

/// A node as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// The node id.
    pub id: u64,
    /// The statement text.
    pub text: String,
    /// The abstraction level; defaults to 0 when absent.
    #[serde(default)]
    pub level: i64,
}

/// An edge as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// The more abstract endpoint.
    pub source: u64,
    /// The more concrete endpoint.
    pub target: u64,
}

/// The persisted form of a [`Web`].
///
/// Every field is optional on the wire: missing lists are empty, missing
/// pointers are null, and a missing counter is 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebDocument {
    /// Nodes in ascending id order.
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,
    /// Edges in insertion order.
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
    /// The current-node pointer.
    #[serde(default)]
    pub current_id: Option<u64>,
    /// The root pointer.
    #[serde(default)]
    pub root_id: Option<u64>,
    /// The next id the counter will issue.
    #[serde(default)]
    pub id_counter: u64,
}

impl WebDocument {
    /// Export a web into its document form.
    #[must_use]
    pub fn from_web(web: &Web) -> Self {
        let nodes = web
            .nodes()
            .map(|(id, q)| NodeRecord { id: id.as_u64(), text: q.text.clone(), level: q.level })
            .collect();
        let edges = web
            .edges()
            .iter()
            .map(|e| EdgeRecord { source: e.source.as_u64(), target: e.target.as_u64() })
            .collect();

        Self {
            nodes,
            edges,
            current_id: web.current().map(NodeId::as_u64),
            root_id: web.root().map(NodeId::as_u64),
            id_counter: web.id_counter(),
        }
    }

    /// Import the document into a fresh web, validating it first.
    ///
    /// # Errors
    ///
    /// Returns a [`DocumentError`] when a node id is duplicated, an edge
    /// endpoint or pointer references a missing node, or the counter is not
    /// strictly greater than every node id.
    pub fn into_web(self) -> DocumentResult<Web> {
        let mut nodes = BTreeMap::new();
        for record in &self.nodes {
            let id = NodeId::new(record.id);
            if nodes.insert(id, Question::new(record.text.clone(), record.level)).is_some() {
                return Err(DocumentError::DuplicateNode(id));
            }
        }

        for record in &self.edges {
            let missing = if !nodes.contains_key(&NodeId::new(record.source)) {
                Some(record.source)
            } else if !nodes.contains_key(&NodeId::new(record.target)) {
                Some(record.target)
            } else {
                None
            };
            if let Some(missing) = missing {
                return Err(DocumentError::DanglingEdge {
                    source: record.source,
                    target: record.target,
                    missing: NodeId::new(missing),
                });
            }
        }

        for (pointer, value) in [("current_id", self.current_id), ("root_id", self.root_id)] {
            if let Some(id) = value {
                if !nodes.contains_key(&NodeId::new(id)) {
                    return Err(DocumentError::DanglingPointer { pointer, id: NodeId::new(id) });
                }
            }
        }

        if let Some(max_id) = nodes.keys().next_back().map(|id| id.as_u64()) {
            if self.id_counter <= max_id {
                return Err(DocumentError::CounterBehind {
                    id_counter: self.id_counter,
                    max_id: NodeId::new(max_id),
                });
            }
        }

        Ok(self.assemble(nodes))
    }

    /// Import the document as-is, without validation.
    ///
    /// Matches the behavior of the original exporter's counterpart: dangling
    /// edge endpoints, dangling pointers, and a stale counter are all
    /// accepted. The resulting web may violate the store invariants; prefer
    /// [`WebDocument::into_web`] unless compatibility demands otherwise.
    /// When a node id is duplicated, the last record wins.
    #[must_use]
    pub fn into_web_lenient(self) -> Web {
        let nodes = self
            .nodes
            .iter()
            .map(|r| (NodeId::new(r.id), Question::new(r.text.clone(), r.level)))
            .collect();
        self.assemble(nodes)
    }

    /// Serialize to the pretty-printed JSON handed to the download control.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Json`] if serialization fails.
    pub fn to_json_string(&self) -> DocumentResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a document from JSON text.
    ///
    /// Only JSON-syntax and shape errors are reported here; referential
    /// validation happens in [`WebDocument::into_web`].
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Json`] if parsing fails.
    pub fn from_json_str(s: &str) -> DocumentResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    fn assemble(self, nodes: BTreeMap<NodeId, Question>) -> Web {
        let edges = self
            .edges
            .iter()
            .map(|r| Edge::new(NodeId::new(r.source), NodeId::new(r.target)))
            .collect();
        Web::from_parts(
            nodes,
            edges,
            self.id_counter,
            self.current_id.map(NodeId::new),
            self.root_id.map(NodeId::new),
        )
    }
}

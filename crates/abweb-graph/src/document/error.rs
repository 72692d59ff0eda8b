//! Error types for document import and export.

use abweb_core::NodeId;
use thiserror::Error;

/// Errors that can occur while parsing or validating a document.
///
/// Referential errors are only raised by the strict importer; the lenient
/// importer accepts anything that parses.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The document is not valid JSON, or serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two node records share the same id.
    #[error("duplicate node id: {0}")]
    DuplicateNode(NodeId),

    /// An edge references a node id that is not in the document.
    #[error("edge ({source}, {target}) references missing node {missing}")]
    DanglingEdge {
        /// The edge's source id.
        // Raw identifier keeps thiserror from treating this u64 as the
        // error's `source()`.
        r#source: u64,
        /// The edge's target id.
        target: u64,
        /// The endpoint that is not in the document.
        missing: NodeId,
    },

    /// `current_id` or `root_id` references a node that is not in the document.
    #[error("{pointer} references missing node {id}")]
    DanglingPointer {
        /// Which pointer field was dangling.
        pointer: &'static str,
        /// The missing node id.
        id: NodeId,
    },

    /// The id counter is not strictly greater than every node id.
    #[error("id_counter {id_counter} is not greater than max node id {max_id}")]
    CounterBehind {
        /// The counter recorded in the document.
        id_counter: u64,
        /// The highest node id in the document.
        max_id: NodeId,
    },
}

impl PartialEq for DocumentError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            // serde_json::Error is not comparable; fall back to the message.
            (Self::Json(a), Self::Json(b)) => a.to_string() == b.to_string(),
            (Self::DuplicateNode(a), Self::DuplicateNode(b)) => a == b,
            (
                Self::DanglingEdge { source: s1, target: t1, missing: m1 },
                Self::DanglingEdge { source: s2, target: t2, missing: m2 },
            ) => s1 == s2 && t1 == t2 && m1 == m2,
            (
                Self::DanglingPointer { pointer: p1, id: i1 },
                Self::DanglingPointer { pointer: p2, id: i2 },
            ) => p1 == p2 && i1 == i2,
            (
                Self::CounterBehind { id_counter: c1, max_id: m1 },
                Self::CounterBehind { id_counter: c2, max_id: m2 },
            ) => c1 == c2 && m1 == m2,
            _ => false,
        }
    }
}

/// Result type for document operations.
pub type DocumentResult<T> = Result<T, DocumentError>;

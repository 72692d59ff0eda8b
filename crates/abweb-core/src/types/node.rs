//! Node payload for the web of abstraction.

use serde::{Deserialize, Serialize};

/// The payload of a node: a "How might we…?" statement and its ladder level.
///
/// `level` is advisory. It records where on the abstraction ladder the node
/// was created (root = 0, add-above = parent + 1, add-below = parent − 1)
/// and is never recomputed from the graph structure afterwards. Levels can
/// go negative by repeatedly adding below level 0.
///
/// Empty text is allowed; the store performs no validation on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The statement text.
    pub text: String,
    /// Abstraction level at creation time.
    pub level: i64,
}

impl Question {
    /// Create a new question at the given level.
    #[must_use]
    pub fn new(text: impl Into<String>, level: i64) -> Self {
        Self { text: text.into(), level }
    }
}

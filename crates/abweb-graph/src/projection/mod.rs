//! Render projection for the external visualization widget.
//!
//! The widget owns layout, physics, and drawing; this module only shapes the
//! store into the styled node/edge lists it consumes. No coordinates are
//! supplied; the abstract-to-concrete top-down layout is the widget's job.
//!
//! The only visual state signal is border width: the node matching the
//! current pointer is drawn with a thicker border.

use serde::Serialize;

use crate::store::Web;

/// Column width used when word-wrapping node labels.
pub const LABEL_WRAP_WIDTH: usize = 26;

/// All nodes render as boxes.
pub const NODE_SHAPE: &str = "box";

/// Border width for the current node.
const CURRENT_BORDER_WIDTH: u32 = 3;

/// Border width for every other node.
const DEFAULT_BORDER_WIDTH: u32 = 1;

/// Longest preview shown in node pickers before truncation.
const PREVIEW_MAX_CHARS: usize = 80;

/// A styled node handed to the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectedNode {
    /// The node id.
    pub id: u64,
    /// Text word-wrapped to [`LABEL_WRAP_WIDTH`] columns.
    pub label: String,
    /// Tooltip: `"ID: <id> | Level: <level>"`.
    pub title: String,
    /// Always [`NODE_SHAPE`].
    pub shape: &'static str,
    /// 3 for the current node, 1 otherwise.
    #[serde(rename = "borderWidth")]
    pub border_width: u32,
}

/// A directed edge handed to the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectedEdge {
    /// The more abstract endpoint.
    pub source: u64,
    /// The more concrete endpoint.
    pub target: u64,
}

/// The full projection of a web: styled nodes plus directed edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Projection {
    /// Styled nodes in ascending id order.
    pub nodes: Vec<ProjectedNode>,
    /// Directed edges in store order.
    pub edges: Vec<ProjectedEdge>,
}

impl Projection {
    /// Project a web into the widget's node/edge structures.
    #[must_use]
    pub fn from_web(web: &Web) -> Self {
        let current = web.current();
        let nodes = web
            .nodes()
            .map(|(id, q)| ProjectedNode {
                id: id.as_u64(),
                label: wrap_label(&q.text, LABEL_WRAP_WIDTH),
                title: format!("ID: {} | Level: {}", id, q.level),
                shape: NODE_SHAPE,
                border_width: if Some(id) == current {
                    CURRENT_BORDER_WIDTH
                } else {
                    DEFAULT_BORDER_WIDTH
                },
            })
            .collect();
        let edges = web
            .edges()
            .iter()
            .map(|e| ProjectedEdge { source: e.source.as_u64(), target: e.target.as_u64() })
            .collect();
        Self { nodes, edges }
    }
}

/// A one-line node summary for picker controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeSummary {
    /// The node id.
    pub id: u64,
    /// The abstraction level.
    pub level: i64,
    /// Text truncated to at most 80 characters (with a `...` suffix).
    pub preview: String,
}

/// Summaries of all nodes in ascending id order.
#[must_use]
pub fn node_summaries(web: &Web) -> Vec<NodeSummary> {
    web.nodes()
        .map(|(id, q)| NodeSummary { id: id.as_u64(), level: q.level, preview: preview(&q.text) })
        .collect()
}

/// Greedy word wrap at the given column width.
///
/// Words longer than the width are split into width-sized chunks. Runs of
/// whitespace collapse to single spaces; empty or whitespace-only text
/// yields an empty label.
#[must_use]
pub fn wrap_label(text: &str, width: usize) -> String {
    if width == 0 {
        return text.trim().to_owned();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let mut word = word;
        // Split words that can never fit on one line.
        while word.chars().count() > width {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            let split_at = word
                .char_indices()
                .nth(width)
                .map_or(word.len(), |(byte_index, _)| byte_index);
            let (head, tail) = word.split_at(split_at);
            lines.push(head.to_owned());
            word = tail;
        }
        if word.is_empty() {
            continue;
        }
        if line.is_empty() {
            line.push_str(word);
        } else if line.chars().count() + 1 + word.chars().count() <= width {
            line.push(' ');
            line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines.join("\n")
}

fn preview(text: &str) -> String {
    if text.chars().count() <= PREVIEW_MAX_CHARS {
        text.to_owned()
    } else {
        let head: String = text.chars().take(PREVIEW_MAX_CHARS - 3).collect();
        format!("{head}...")
    }
}

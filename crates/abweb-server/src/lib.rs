//! Abstraction Web HTTP server
//!
//! A JSON API over the editable web of abstraction. Each browser session
//! gets its own [`store::Web`](abweb_graph::store::Web), held in an explicit
//! session map rather than a process-wide store. Every request performs one
//! synchronous mutate-then-project cycle; mutating endpoints return the
//! fresh render projection so the client can redraw immediately.

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod api;
pub mod state;

pub use api::router;
pub use state::AppState;

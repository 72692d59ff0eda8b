//! Core data types for the web of abstraction.

mod edge;
mod id;
mod node;

pub use edge::Edge;
pub use id::NodeId;
pub use node::Question;

//! Defines the sparse edge store that every graph operation reads and produces.
pub mod graph;
mod registry;
pub mod types;

// Re-export key types for convenient access
pub use graph::Graph;
pub use types::{Edge, NodeKey};

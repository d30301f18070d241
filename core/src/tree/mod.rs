//! Diagnosis tree structure and construction
//!
//! - [`Node`]: owned binary tree of symptom tests and diagnosis leaves
//! - [`build_tree`]: deterministic construction from an ordered symptom list
//! - [`Node::minimized`]: structural reduction that keeps every diagnosis

mod builder;
mod minimize;
mod node;

pub use builder::build_tree;
pub use node::Node;

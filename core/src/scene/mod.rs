//! Scene hierarchy types.
//!
//! - [`SceneTree`]: the hierarchy capability targets are written against
//! - [`SceneGraph`]: in-memory arena implementation
//! - [`SceneNode`]: builder for node sub-trees
//! - [`NodeId`] / [`Transform`]: node handle and local TRS transform

mod graph;
mod tree;
mod types;

pub use graph::SceneGraph;
pub use tree::SceneTree;
pub use types::{NodeId, SceneNode, Transform};

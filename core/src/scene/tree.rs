//! The scene hierarchy capability consumed by projection targets.

use glam::Mat4;

use super::types::NodeId;
use crate::math::Aabb;
use crate::mesh::{MeshFilter, MeshRenderer};

/// Read-only view of a transform hierarchy with attached mesh components.
///
/// Implemented by an adapter over whatever host owns the scene;
/// [`SceneGraph`](super::SceneGraph) is the in-memory implementation.
/// Queries on a [`NodeId`] the tree does not know return `None`, `0`,
/// `false`, or the identity matrix.
pub trait SceneTree {
    /// Parent of `node`, or `None` for a root or detached node.
    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// Number of direct children of `node`.
    fn child_count(&self, node: NodeId) -> usize;

    /// Child of `node` at ordinal `index`.
    fn child(&self, node: NodeId, index: usize) -> Option<NodeId>;

    /// Ordinal position of `node` among its parent's children (0 for roots).
    fn sibling_index(&self, node: NodeId) -> usize;

    fn name(&self, node: NodeId) -> Option<&str>;

    /// `true` if `node` and every ancestor are active.
    fn is_active_in_hierarchy(&self, node: NodeId) -> bool;

    /// Node-local to world space matrix.
    fn local_to_world(&self, node: NodeId) -> Mat4;

    /// World to node-local space matrix.
    fn world_to_local(&self, node: NodeId) -> Mat4 {
        self.local_to_world(node).inverse()
    }

    fn renderer(&self, node: NodeId) -> Option<&MeshRenderer>;

    fn mesh_filter(&self, node: NodeId) -> Option<&MeshFilter>;

    /// World-space bounds of the geometry drawn by `node`'s renderer.
    fn world_bounds(&self, node: NodeId) -> Option<Aabb> {
        let renderer = self.renderer(node)?;
        Some(renderer.local_bounds.transform(&self.local_to_world(node)))
    }

    /// `root` followed by all of its descendants in depth-first pre-order.
    fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            out.push(node);
            for index in (0..self.child_count(node)).rev() {
                if let Some(child) = self.child(node, index) {
                    stack.push(child);
                }
            }
        }
        out
    }
}

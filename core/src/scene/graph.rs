//! In-memory arena implementation of [`SceneTree`].

use glam::Mat4;

use super::tree::SceneTree;
use super::types::{NodeId, SceneNode, Transform};
use crate::mesh::{MeshFilter, MeshRenderer};

#[derive(Debug, Clone)]
struct NodeData {
    name: String,
    transform: Transform,
    active: bool,
    renderer: Option<MeshRenderer>,
    filter: Option<MeshFilter>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena-backed scene hierarchy.
///
/// Nodes are never freed; [`detach`](Self::detach) only unlinks a node from
/// its parent, so every [`NodeId`] handed out stays valid for the lifetime
/// of the graph.
#[derive(Debug, Clone, Default)]
pub struct SceneGraph {
    nodes: Vec<NodeData>,
}

impl SceneGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `node` and its sub-tree as a new root.
    pub fn add_root(&mut self, node: SceneNode) -> NodeId {
        self.insert_tree(node, None)
    }

    /// Insert `node` and its sub-tree as the last child of `parent`.
    ///
    /// Returns `None` if `parent` is not part of this graph.
    pub fn add_child(&mut self, parent: NodeId, node: SceneNode) -> Option<NodeId> {
        let index = self.child_count(parent);
        self.insert_child(parent, index, node)
    }

    /// Insert `node` and its sub-tree as a child of `parent` at ordinal
    /// `index`, shifting later siblings up by one.
    ///
    /// Returns `None` if `parent` is not part of this graph or `index` is
    /// past the end of its children.
    pub fn insert_child(&mut self, parent: NodeId, index: usize, node: SceneNode) -> Option<NodeId> {
        if index > self.data(parent)?.children.len() {
            return None;
        }
        let id = self.insert_tree(node, Some(parent));
        // insert_tree appended the id; move it to the requested slot
        let children = &mut self.data_mut(parent)?.children;
        children.pop();
        children.insert(index, id);
        Some(id)
    }

    /// Unlink `node` from its parent. The node and its sub-tree stay in
    /// the arena as a detached tree.
    pub fn detach(&mut self, node: NodeId) {
        let Some(parent) = self.data(node).and_then(|n| n.parent) else {
            return;
        };
        if let Some(data) = self.data_mut(parent) {
            data.children.retain(|&child| child != node);
        }
        if let Some(data) = self.data_mut(node) {
            data.parent = None;
        }
    }

    /// Set the local active flag of `node`.
    pub fn set_active(&mut self, node: NodeId, active: bool) {
        if let Some(data) = self.data_mut(node) {
            data.active = active;
        }
    }

    /// Replace the local transform of `node`.
    pub fn set_transform(&mut self, node: NodeId, transform: Transform) {
        if let Some(data) = self.data_mut(node) {
            data.transform = transform;
        }
    }

    /// Rename `node`.
    pub fn set_name(&mut self, node: NodeId, name: impl Into<String>) {
        if let Some(data) = self.data_mut(node) {
            data.name = name.into();
        }
    }

    /// First node in the sub-tree of `root` (pre-order) named `name`.
    pub fn find_by_name(&self, root: NodeId, name: &str) -> Option<NodeId> {
        self.descendants(root)
            .into_iter()
            .find(|&node| self.name(node) == Some(name))
    }

    fn data(&self, node: NodeId) -> Option<&NodeData> {
        self.nodes.get(node.0 as usize)
    }

    fn data_mut(&mut self, node: NodeId) -> Option<&mut NodeData> {
        self.nodes.get_mut(node.0 as usize)
    }

    fn insert_tree(&mut self, node: SceneNode, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeData {
            name: node.name,
            transform: node.transform,
            active: node.active,
            renderer: node.renderer,
            filter: node.filter,
            parent,
            children: Vec::with_capacity(node.children.len()),
        });
        if let Some(parent) = parent
            && let Some(data) = self.data_mut(parent)
        {
            data.children.push(id);
        }
        for child in node.children {
            self.insert_tree(child, Some(id));
        }
        id
    }
}

impl SceneTree for SceneGraph {
    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.data(node)?.parent
    }

    fn child_count(&self, node: NodeId) -> usize {
        self.data(node).map_or(0, |n| n.children.len())
    }

    fn child(&self, node: NodeId, index: usize) -> Option<NodeId> {
        self.data(node)?.children.get(index).copied()
    }

    fn sibling_index(&self, node: NodeId) -> usize {
        self.parent(node)
            .and_then(|parent| self.data(parent))
            .and_then(|parent| parent.children.iter().position(|&c| c == node))
            .unwrap_or(0)
    }

    fn name(&self, node: NodeId) -> Option<&str> {
        self.data(node).map(|n| n.name.as_str())
    }

    fn is_active_in_hierarchy(&self, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            match self.data(id) {
                Some(data) if data.active => current = data.parent,
                _ => return false,
            }
        }
        true
    }

    fn local_to_world(&self, node: NodeId) -> Mat4 {
        let mut matrix = Mat4::IDENTITY;
        let mut current = self.data(node);
        while let Some(data) = current {
            matrix = data.transform.local_matrix() * matrix;
            current = data.parent.and_then(|parent| self.data(parent));
        }
        matrix
    }

    fn renderer(&self, node: NodeId) -> Option<&MeshRenderer> {
        self.data(node)?.renderer.as_ref()
    }

    fn mesh_filter(&self, node: NodeId) -> Option<&MeshFilter> {
        self.data(node)?.filter.as_ref()
    }
}

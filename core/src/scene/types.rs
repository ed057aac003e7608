//! Scene graph data types.

use glam::{Mat4, Quat, Vec3};

use crate::mesh::{MeshFilter, MeshRenderer};

/// Handle to a node inside a scene tree.
///
/// Handles are only meaningful for the tree that produced them and do not
/// survive a save/reload cycle; persistent references go through
/// hierarchy addresses instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// Parent-relative placement of a node, applied as scale, then rotation,
/// then translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Unrotated, unscaled placement at `(x, y, z)`.
    pub const fn from_xyz(x: f32, y: f32, z: f32) -> Self {
        Self {
            translation: Vec3::new(x, y, z),
            ..Self::IDENTITY
        }
    }

    /// Rotation about the parent origin.
    pub const fn from_rotation(rotation: Quat) -> Self {
        Self {
            rotation,
            ..Self::IDENTITY
        }
    }

    #[must_use]
    pub const fn with_rotation(self, rotation: Quat) -> Self {
        Self { rotation, ..self }
    }

    #[must_use]
    pub const fn with_scale(self, scale: Vec3) -> Self {
        Self { scale, ..self }
    }

    /// Parent-from-local matrix.
    pub fn local_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Builder description of a node sub-tree, inserted into a
/// [`SceneGraph`](super::SceneGraph) in one call.
#[derive(Debug, Clone)]
pub struct SceneNode {
    /// Node name.
    pub name: String,
    /// Local transform relative to parent.
    pub transform: Transform,
    /// Local active flag. A node is active in the hierarchy only if it and
    /// all of its ancestors are active.
    pub active: bool,
    /// Renderer component, if the node draws something.
    pub renderer: Option<MeshRenderer>,
    /// Geometry component.
    pub filter: Option<MeshFilter>,
    /// Child nodes, in sibling order.
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    /// Creates an active node with identity transform and no components.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::IDENTITY,
            active: true,
            renderer: None,
            filter: None,
            children: Vec::new(),
        }
    }

    /// Set the local transform.
    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Set the local active flag.
    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Attach a renderer component.
    #[must_use]
    pub fn with_renderer(mut self, renderer: MeshRenderer) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Attach a geometry component.
    #[must_use]
    pub fn with_filter(mut self, filter: MeshFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Append a child node.
    #[must_use]
    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }
}

//! Mesh components attached to scene nodes.
//!
//! A renderable surface is a node carrying both a [`MeshFilter`] (which
//! geometry) and a [`MeshRenderer`] (which material, and how large).

use std::sync::Arc;

use crate::material::SurfaceMaterial;
use crate::math::Aabb;

/// Opaque handle to mesh geometry owned by the host renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshHandle(pub u32);

/// Geometry slot of a node. `mesh` is `None` when the geometry was not
/// loaded or has been released.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MeshFilter {
    pub mesh: Option<MeshHandle>,
}

impl MeshFilter {
    pub fn new(mesh: MeshHandle) -> Self {
        Self { mesh: Some(mesh) }
    }

    /// A filter with no geometry assigned.
    pub fn empty() -> Self {
        Self { mesh: None }
    }
}

/// Renderer component of a node.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshRenderer {
    /// Material the surface is drawn with, if any.
    pub material: Option<Arc<SurfaceMaterial>>,
    /// Bounds of the rendered geometry in the node's local space.
    pub local_bounds: Aabb,
}

impl MeshRenderer {
    /// Creates a renderer drawing `material` over `local_bounds`.
    pub fn new(material: Arc<SurfaceMaterial>, local_bounds: Aabb) -> Self {
        Self {
            material: Some(material),
            local_bounds,
        }
    }

    /// A renderer with no material assigned.
    pub fn without_material(local_bounds: Aabb) -> Self {
        Self {
            material: None,
            local_bounds,
        }
    }
}

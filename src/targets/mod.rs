//! Decal projection targets.
//!
//! - [`SurfaceTarget`]: one mesh surface and its local-space decal matrix
//! - [`BodyTarget`]: every eligible surface of one rigid body
//! - [`ProjectionTarget`]: the operations both kinds share
//! - [`path`]: hierarchy addresses used to re-find surfaces after reload

mod body;
pub mod path;
mod surface;

pub use body::{BodyId, BodyTarget};
pub use surface::{SurfaceTarget, ValidatedSurface, validate_target};

use conformal_core::material::{MaterialId, PropertyBlock};
use conformal_core::math::Aabb;
use conformal_core::scene::SceneTree;
use glam::Mat4;

use crate::error::TargetResult;
use crate::render::{CameraId, DrawSink};

/// Operations shared by single-surface and whole-body targets.
///
/// `project` and `render` are total: every failure mode is handled when a
/// target is built.
pub trait ProjectionTarget {
    /// Saved form of this target.
    type Record;

    /// Recompute whether and how this target receives the decal.
    ///
    /// `ortho_matrix` is the projector's orthographic projection,
    /// `projector` its local-to-world matrix, and `bounds` the world-space
    /// volume the decal can reach. Returns the new enabled state.
    fn project(
        &mut self,
        scene: &dyn SceneTree,
        ortho_matrix: Mat4,
        projector: Mat4,
        bounds: &Aabb,
    ) -> bool;

    /// Issue this frame's draw calls, or nothing if disabled.
    ///
    /// `body_properties` carries the overrides shared by every surface of
    /// the body (rim lighting).
    fn render(
        &mut self,
        scene: &dyn SceneTree,
        material: MaterialId,
        body_properties: &PropertyBlock,
        camera: CameraId,
        sink: &mut dyn DrawSink,
    );

    /// Capture the state needed to rebuild this target in a later session.
    fn save(&self, scene: &dyn SceneTree) -> TargetResult<Self::Record>;
}

//! Draw-call submission seam between targets and the host renderer.

use conformal_core::material::{MaterialId, PropertyBlock};
use conformal_core::mesh::MeshHandle;
use glam::Mat4;

/// Handle to a camera owned by the host renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CameraId(pub u32);

/// Shadow casting mode of a draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadowCasting {
    /// The geometry does not cast shadows.
    Off,
    #[default]
    On,
}

/// One mesh draw submitted for a single frame.
#[derive(Debug, Clone, Copy)]
pub struct DrawMesh<'a> {
    pub mesh: MeshHandle,
    /// Local-to-world matrix the mesh is drawn with.
    pub transform: Mat4,
    pub material: MaterialId,
    pub submesh: u32,
    pub camera: CameraId,
    pub layer: u32,
    /// Per-draw property overrides.
    pub properties: &'a PropertyBlock,
    pub shadow_casting: ShadowCasting,
    pub receive_shadows: bool,
}

/// Receives draw calls issued by projection targets.
pub trait DrawSink {
    fn draw_mesh(&mut self, call: DrawMesh<'_>);
}

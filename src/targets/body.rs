//! All decal-receiving surfaces of one rigid body.

use conformal_core::material::{MaterialId, PropertyBlock};
use conformal_core::math::Aabb;
use conformal_core::scene::{NodeId, SceneTree};
use glam::Mat4;
use serde::{Deserialize, Serialize};

use super::ProjectionTarget;
use super::surface::SurfaceTarget;
use crate::config::DecalConfig;
use crate::error::{TargetError, TargetResult};
use crate::persistence::{BodyLookup, BodyRecord};
use crate::render::{CameraId, DrawSink};

/// Persistent identifier of a rigid body, stable across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BodyId(pub u32);

impl std::fmt::Display for BodyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Decal targets for every eligible surface under one rigid body.
///
/// A target rebuilt from a save is *locked*: projection no longer touches
/// its surfaces, so the placement chosen when the decal was created
/// survives later projector movement.
#[derive(Debug, Clone)]
pub struct BodyTarget {
    body: BodyId,
    root: NodeId,
    enabled: bool,
    locked: bool,
    surfaces: Vec<SurfaceTarget>,
}

impl BodyTarget {
    /// Collect every eligible surface under `root`, in pre-order.
    ///
    /// Ineligible surfaces are skipped; a body without any eligible
    /// surface yields an empty target. `use_base_normal` is the decal's own
    /// flag, see [`DecalConfig::use_base_normal`].
    pub fn new(
        scene: &dyn SceneTree,
        body: BodyId,
        root: NodeId,
        use_base_normal: bool,
        config: &DecalConfig,
    ) -> Self {
        let mut surfaces = Vec::new();
        for node in scene.descendants(root) {
            if scene.renderer(node).is_none() {
                continue;
            }
            match SurfaceTarget::new(scene, node, root, use_base_normal, config) {
                Ok(surface) => surfaces.push(surface),
                Err(reason) => {
                    log::debug!(
                        "Skipping surface '{}' of body {body}: {reason}",
                        scene.name(node).unwrap_or_default()
                    );
                }
            }
        }

        log::debug!("Created target for body {body} with {} surfaces", surfaces.len());

        Self {
            body,
            root,
            enabled: false,
            locked: false,
            surfaces,
        }
    }

    /// Rebuild a locked target from a saved record.
    ///
    /// Fails with [`TargetError::MissingBody`] if the body no longer exists.
    /// Surface records that cannot be resolved are dropped individually.
    pub fn load(
        record: &BodyRecord,
        scene: &dyn SceneTree,
        bodies: &dyn BodyLookup,
        use_base_normal: bool,
        config: &DecalConfig,
    ) -> TargetResult<Self> {
        let root = bodies
            .body_root(record.body)
            .ok_or(TargetError::MissingBody { body: record.body })?;

        let mut surfaces = Vec::with_capacity(record.surfaces.len());
        for surface_record in &record.surfaces {
            match SurfaceTarget::load(surface_record, scene, root, use_base_normal, config) {
                Ok(surface) => surfaces.push(surface),
                Err(e) => {
                    log::warn!(
                        "Dropping saved surface '{}' ({}) of body {}: {e}",
                        surface_record.target_name,
                        surface_record.target_path,
                        record.body
                    );
                }
            }
        }

        log::info!(
            "Loaded target for body {} ({}/{} surfaces)",
            record.body,
            surfaces.len(),
            record.surfaces.len()
        );

        Ok(Self {
            body: record.body,
            root,
            enabled: !surfaces.is_empty(),
            locked: true,
            surfaces,
        })
    }

    pub fn body(&self) -> BodyId {
        self.body
    }

    /// Root node the surfaces are addressed relative to.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// `true` if any surface received the decal on the last projection.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// `true` if this target was rebuilt from a save and ignores projection.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn surfaces(&self) -> &[SurfaceTarget] {
        &self.surfaces
    }
}

impl ProjectionTarget for BodyTarget {
    type Record = BodyRecord;

    fn project(
        &mut self,
        scene: &dyn SceneTree,
        ortho_matrix: Mat4,
        projector: Mat4,
        bounds: &Aabb,
    ) -> bool {
        if self.locked {
            return self.enabled;
        }

        self.enabled = false;
        for surface in &mut self.surfaces {
            self.enabled |= surface.project(scene, ortho_matrix, projector, bounds);
        }
        self.enabled
    }

    fn render(
        &mut self,
        scene: &dyn SceneTree,
        material: MaterialId,
        body_properties: &PropertyBlock,
        camera: CameraId,
        sink: &mut dyn DrawSink,
    ) {
        if !self.enabled {
            return;
        }

        for surface in &mut self.surfaces {
            surface.render(scene, material, body_properties, camera, sink);
        }
    }

    /// Record every enabled surface. Surfaces that can no longer be
    /// addressed from the body root are left out.
    fn save(&self, scene: &dyn SceneTree) -> TargetResult<BodyRecord> {
        let mut surfaces = Vec::new();
        for surface in self.surfaces.iter().filter(|s| s.is_enabled()) {
            match surface.save(scene) {
                Ok(record) => surfaces.push(record),
                Err(e) => {
                    log::warn!(
                        "Not saving surface {} of body {}: {e}",
                        surface.target(),
                        self.body
                    );
                }
            }
        }

        log::info!(
            "Saved target for body {} ({} surfaces)",
            self.body,
            surfaces.len()
        );

        Ok(BodyRecord {
            body: self.body,
            surfaces,
        })
    }
}

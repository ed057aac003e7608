//! Single mesh surface receiving a decal.

use std::sync::Arc;

use conformal_core::material::{
    MaterialId, PropertyBlock, PropertyId, PropertyValue, SurfaceMaterial,
};
use conformal_core::math::Aabb;
use conformal_core::mesh::MeshHandle;
use conformal_core::scene::{NodeId, SceneTree};
use glam::{Mat4, Vec3};

use super::ProjectionTarget;
use super::path::{decode_path, encode_path};
use crate::config::{DecalConfig, ShaderCompatibility};
use crate::error::{TargetError, TargetResult, ValidationFailure};
use crate::persistence::SurfaceRecord;
use crate::render::{CameraId, DrawMesh, DrawSink, ShadowCasting};

/// Keys shared from the body-level block into every surface draw.
const SHARED_RIM_PROPERTIES: [PropertyId; 2] = [PropertyId::RimFalloff, PropertyId::RimColor];

/// Components of a surface that passed [`validate_target`].
#[derive(Debug, Clone)]
pub struct ValidatedSurface {
    pub mesh: MeshHandle,
    pub material: Arc<SurfaceMaterial>,
}

/// Check that `node` can receive a decal.
///
/// The node needs a renderer and a mesh filter, must be active in the
/// hierarchy, and its renderer needs a material whose shader is not
/// blacklisted and its filter a mesh.
pub fn validate_target(
    scene: &dyn SceneTree,
    node: NodeId,
    compatibility: &dyn ShaderCompatibility,
) -> Result<ValidatedSurface, ValidationFailure> {
    let renderer = scene
        .renderer(node)
        .ok_or(ValidationFailure::MissingRenderer)?;
    let filter = scene
        .mesh_filter(node)
        .ok_or(ValidationFailure::MissingMeshFilter)?;
    if !scene.is_active_in_hierarchy(node) {
        return Err(ValidationFailure::Inactive);
    }

    let material = renderer
        .material
        .as_ref()
        .ok_or(ValidationFailure::MissingMaterial)?;
    if compatibility.is_blacklisted(&material.shader) {
        return Err(ValidationFailure::BlacklistedShader {
            shader: material.shader.clone(),
        });
    }

    let mesh = filter.mesh.ok_or(ValidationFailure::MissingMesh)?;

    Ok(ValidatedSurface {
        mesh,
        material: Arc::clone(material),
    })
}

/// Decal projection state of one mesh surface.
///
/// The decal matrix, normal, and tangent are stored in the surface's local
/// space so they stay valid while the surface moves and can be persisted
/// without the projector. They are only meaningful while the target is
/// enabled.
#[derive(Debug, Clone)]
pub struct SurfaceTarget {
    enabled: bool,
    target: NodeId,
    root: NodeId,
    mesh: MeshHandle,
    decal_matrix: Mat4,
    decal_normal: Vec3,
    decal_tangent: Vec3,
    properties: PropertyBlock,
}

impl SurfaceTarget {
    /// Wrap the live surface at `target`, addressed relative to `root`.
    ///
    /// The target starts disabled until the first projection.
    pub fn new(
        scene: &dyn SceneTree,
        target: NodeId,
        root: NodeId,
        use_base_normal: bool,
        config: &DecalConfig,
    ) -> Result<Self, ValidationFailure> {
        let surface = validate_target(scene, target, config)?;

        let mut properties = PropertyBlock::new();
        set_normal_map(&mut properties, &surface.material, use_base_normal, config);

        Ok(Self {
            enabled: false,
            target,
            root,
            mesh: surface.mesh,
            decal_matrix: Mat4::IDENTITY,
            decal_normal: Vec3::Z,
            decal_tangent: Vec3::X,
            properties,
        })
    }

    /// Rebuild a target from a saved record, resolving its node under `root`.
    ///
    /// The saved projection is adopted as-is and the target is enabled.
    pub fn load(
        record: &SurfaceRecord,
        scene: &dyn SceneTree,
        root: NodeId,
        use_base_normal: bool,
        config: &DecalConfig,
    ) -> TargetResult<Self> {
        let target = decode_path(scene, &record.target_path, root)?;

        let found = scene.name(target).unwrap_or_default();
        if found != record.target_name {
            return Err(TargetError::IdentityMismatch {
                expected: record.target_name.clone(),
                found: found.to_owned(),
            });
        }

        let surface = validate_target(scene, target, config)?;

        let mut properties = PropertyBlock::new();
        set_normal_map(&mut properties, &surface.material, use_base_normal, config);

        let mut loaded = Self {
            enabled: true,
            target,
            root,
            mesh: surface.mesh,
            decal_matrix: Mat4::from_cols_array(&record.decal_matrix),
            decal_normal: Vec3::from_array(record.decal_normal),
            decal_tangent: Vec3::from_array(record.decal_tangent),
            properties,
        };
        loaded.write_projection_properties();
        Ok(loaded)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Node of the mesh surface.
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// Node the surface is addressed relative to.
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn mesh(&self) -> MeshHandle {
        self.mesh
    }

    /// Target-local to decal space matrix.
    pub fn decal_matrix(&self) -> Mat4 {
        self.decal_matrix
    }

    /// Decal facing direction in target-local space.
    pub fn decal_normal(&self) -> Vec3 {
        self.decal_normal
    }

    /// Decal right direction in target-local space.
    pub fn decal_tangent(&self) -> Vec3 {
        self.decal_tangent
    }

    /// Overrides applied to this surface's draw call.
    pub fn properties(&self) -> &PropertyBlock {
        &self.properties
    }

    fn write_projection_properties(&mut self) {
        self.properties.set(
            PropertyId::ProjectionMatrix,
            PropertyValue::Matrix(self.decal_matrix),
        );
        self.properties
            .set(PropertyId::DecalNormal, PropertyValue::Vec3(self.decal_normal));
        self.properties
            .set(PropertyId::DecalTangent, PropertyValue::Vec3(self.decal_tangent));
    }
}

fn set_normal_map(
    properties: &mut PropertyBlock,
    material: &SurfaceMaterial,
    use_base_normal: bool,
    config: &DecalConfig,
) {
    match material.normal_map {
        Some(normal_map) if use_base_normal => {
            properties.set(
                PropertyId::BumpMap,
                PropertyValue::Texture(normal_map.texture),
            );
            properties.set(
                PropertyId::BumpMapScaleOffset,
                PropertyValue::Vec4(normal_map.scale_offset()),
            );
        }
        _ => {
            properties.set(
                PropertyId::BumpMap,
                PropertyValue::Texture(config.blank_normal()),
            );
        }
    }
}

impl ProjectionTarget for SurfaceTarget {
    type Record = SurfaceRecord;

    fn project(
        &mut self,
        scene: &dyn SceneTree,
        ortho_matrix: Mat4,
        projector: Mat4,
        bounds: &Aabb,
    ) -> bool {
        let touches = scene
            .world_bounds(self.target)
            .is_some_and(|surface_bounds| bounds.intersects(&surface_bounds));
        if !touches {
            self.enabled = false;
            return false;
        }

        self.enabled = true;
        let projector_to_target = scene.world_to_local(self.target) * projector;

        self.decal_matrix = ortho_matrix * projector_to_target.inverse();
        // back (+Z) faces the projector in a right-handed frame
        self.decal_normal = projector_to_target
            .transform_vector3(Vec3::Z)
            .normalize_or_zero();
        self.decal_tangent = projector_to_target
            .transform_vector3(Vec3::X)
            .normalize_or_zero();
        self.write_projection_properties();

        true
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

        self.properties
            .copy_from(body_properties, &SHARED_RIM_PROPERTIES);

        sink.draw_mesh(DrawMesh {
            mesh: self.mesh,
            transform: scene.local_to_world(self.target),
            material,
            submesh: 0,
            camera,
            layer: 0,
            properties: &self.properties,
            shadow_casting: ShadowCasting::Off,
            receive_shadows: true,
        });
    }

    fn save(&self, scene: &dyn SceneTree) -> TargetResult<SurfaceRecord> {
        Ok(SurfaceRecord {
            decal_matrix: self.decal_matrix.to_cols_array(),
            decal_normal: self.decal_normal.to_array(),
            decal_tangent: self.decal_tangent.to_array(),
            target_path: encode_path(scene, self.target, self.root)?,
            target_name: scene.name(self.target).unwrap_or_default().to_owned(),
        })
    }
}

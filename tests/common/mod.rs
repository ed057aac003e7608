//! Shared fixtures for target integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use conformal_core::material::{
    MaterialId, NormalMap, PropertyBlock, PropertyId, PropertyValue, SurfaceMaterial,
    TextureHandle,
};
use conformal_core::math::Aabb;
use conformal_core::mesh::{MeshFilter, MeshHandle, MeshRenderer};
use conformal_core::scene::{NodeId, SceneGraph, SceneNode, Transform};
use conformal_decals::{BodyId, CameraId, DecalConfig, DrawMesh, DrawSink, ShadowCasting};
use glam::{Mat4, Quat, Vec2, Vec3, Vec4};

pub const CAPSULE: BodyId = BodyId(100);
pub const TANK: BodyId = BodyId(200);
pub const BLACKLISTED_SHADER: &str = "Unlit/Transparent";

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ---------------------------------------------------------------------------
// Draw recording
// ---------------------------------------------------------------------------

/// Owned copy of a submitted draw call.
#[derive(Debug, Clone)]
pub struct RecordedDraw {
    pub mesh: MeshHandle,
    pub transform: Mat4,
    pub material: MaterialId,
    pub camera: CameraId,
    pub properties: PropertyBlock,
    pub shadow_casting: ShadowCasting,
    pub receive_shadows: bool,
}

#[derive(Debug, Default)]
pub struct RecordingSink {
    pub draws: Vec<RecordedDraw>,
}

impl DrawSink for RecordingSink {
    fn draw_mesh(&mut self, call: DrawMesh<'_>) {
        self.draws.push(RecordedDraw {
            mesh: call.mesh,
            transform: call.transform,
            material: call.material,
            camera: call.camera,
            properties: call.properties.clone(),
            shadow_casting: call.shadow_casting,
            receive_shadows: call.receive_shadows,
        });
    }
}

// ---------------------------------------------------------------------------
// Scene fixtures
// ---------------------------------------------------------------------------

pub const BLANK_NORMAL: TextureHandle = TextureHandle(1);

pub fn config() -> DecalConfig {
    DecalConfig {
        blank_normal: BLANK_NORMAL.0,
        ..DecalConfig::default()
    }
    .with_blacklisted(BLACKLISTED_SHADER)
}

pub fn unit_bounds() -> Aabb {
    Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0))
}

/// Renderable node with a `Standard` material over unit bounds.
pub fn surface(name: &str, transform: Transform, mesh: u32) -> SceneNode {
    shaded_surface(name, transform, mesh, "Standard")
}

/// Normal map texture of the fixture surface drawing `mesh`.
pub fn normal_map_texture(mesh: u32) -> TextureHandle {
    TextureHandle(mesh + 1000)
}

pub const NORMAL_MAP_SCALE: Vec2 = Vec2::new(2.0, 2.0);
pub const NORMAL_MAP_OFFSET: Vec2 = Vec2::new(0.5, 0.0);

pub fn shaded_surface(name: &str, transform: Transform, mesh: u32, shader: &str) -> SceneNode {
    let normal_map = NormalMap::new(normal_map_texture(mesh))
        .with_scale(NORMAL_MAP_SCALE)
        .with_offset(NORMAL_MAP_OFFSET);
    let material = SurfaceMaterial::new(shader).with_normal_map(normal_map);
    SceneNode::new(name)
        .with_transform(transform)
        .with_renderer(MeshRenderer::new(Arc::new(material), unit_bounds()))
        .with_filter(MeshFilter::new(MeshHandle(mesh)))
}

/// A craft with two rigid bodies.
///
/// The capsule body sits at the origin and holds, in pre-order: `hull`,
/// an inactive `window`, a blacklisted `heatshield`, and `fin_a`/`fin_b`
/// nested under a `fins` group. The tank body sits at x = 10 with a single
/// `tank_shell`. Only the hull, fins, and tank shell are eligible.
pub struct Craft {
    pub scene: SceneGraph,
    pub capsule: NodeId,
    pub tank: NodeId,
}

impl Craft {
    pub fn new() -> Self {
        let mut scene = SceneGraph::new();
        let capsule = scene.add_root(
            SceneNode::new("capsule").with_child(
                SceneNode::new("model")
                    .with_child(surface("hull", Transform::IDENTITY, 1))
                    .with_child(surface("window", Transform::from_xyz(0.0, 1.0, 0.0), 2).with_active(false))
                    .with_child(shaded_surface(
                        "heatshield",
                        Transform::from_xyz(0.0, -1.5, 0.0),
                        3,
                        BLACKLISTED_SHADER,
                    ))
                    .with_child(
                        SceneNode::new("fins")
                            .with_child(surface("fin_a", Transform::from_xyz(1.5, 0.0, 0.0), 4))
                            .with_child(surface(
                                "fin_b",
                                Transform::from_xyz(-1.5, 0.0, 0.0)
                                    .with_rotation(Quat::from_rotation_y(std::f32::consts::PI)),
                                4,
                            )),
                    ),
            ),
        );
        let tank = scene.add_root(
            SceneNode::new("tank")
                .with_transform(Transform::from_xyz(10.0, 0.0, 0.0))
                .with_child(surface("tank_shell", Transform::IDENTITY.with_scale(Vec3::new(1.0, 3.0, 1.0)), 5)),
        );
        Self {
            scene,
            capsule,
            tank,
        }
    }

    pub fn bodies(&self) -> HashMap<BodyId, NodeId> {
        HashMap::from([(CAPSULE, self.capsule), (TANK, self.tank)])
    }
}

// ---------------------------------------------------------------------------
// Projector fixtures
// ---------------------------------------------------------------------------

pub fn ortho() -> Mat4 {
    Mat4::orthographic_rh(-0.5, 0.5, -0.5, 0.5, 0.0, 4.0)
}

/// Projector at `position` looking down -Z.
pub fn projector_at(position: Vec3) -> Mat4 {
    Mat4::from_translation(position)
}

pub fn rim_properties() -> PropertyBlock {
    PropertyBlock::new()
        .with(PropertyId::RimFalloff, PropertyValue::Float(2.5))
        .with(PropertyId::RimColor, PropertyValue::Color(Vec4::new(0.2, 0.4, 1.0, 1.0)))
}

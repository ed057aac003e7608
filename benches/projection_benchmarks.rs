use std::sync::Arc;

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use conformal_core::material::{MaterialId, PropertyBlock, SurfaceMaterial};
use conformal_core::math::Aabb;
use conformal_core::mesh::{MeshFilter, MeshHandle, MeshRenderer};
use conformal_core::scene::{NodeId, SceneGraph, SceneNode, Transform};
use conformal_decals::persistence::{Format, encode, save_bodies};
use conformal_decals::targets::path::{decode_path, encode_path};
use conformal_decals::{BodyId, BodyTarget, CameraId, DecalConfig, DrawMesh, DrawSink, ProjectionTarget};
use glam::{Mat4, Vec3};

struct NullSink;

impl DrawSink for NullSink {
    fn draw_mesh(&mut self, call: DrawMesh<'_>) {
        black_box(call.mesh);
    }
}

/// Body with `groups` model groups of `per_group` surfaces each, laid out
/// along X.
fn body(groups: usize, per_group: usize) -> (SceneGraph, NodeId) {
    let material = Arc::new(SurfaceMaterial::new("Standard"));
    let mut root = SceneNode::new("body");
    for g in 0..groups {
        let mut group = SceneNode::new(format!("group_{g}"));
        for s in 0..per_group {
            let x = (g * per_group + s) as f32;
            group = group.with_child(
                SceneNode::new(format!("surface_{g}_{s}"))
                    .with_transform(Transform::from_xyz(x, 0.0, 0.0))
                    .with_renderer(MeshRenderer::new(
                        material.clone(),
                        Aabb::new(Vec3::splat(-0.5), Vec3::splat(0.5)),
                    ))
                    .with_filter(MeshFilter::new(MeshHandle(s as u32))),
            );
        }
        root = root.with_child(group);
    }
    let mut graph = SceneGraph::new();
    let root = graph.add_root(root);
    (graph, root)
}

fn projector() -> (Mat4, Mat4) {
    (
        Mat4::orthographic_rh(-0.5, 0.5, -0.5, 0.5, 0.0, 4.0),
        Mat4::from_translation(Vec3::new(16.0, 0.0, 3.0)),
    )
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

fn bench_project_body_64(c: &mut Criterion) {
    let (graph, root) = body(8, 8);
    let config = DecalConfig::default();
    let mut target = BodyTarget::new(&graph, BodyId(1), root, true, &config);
    let (ortho, pose) = projector();
    let culling = Aabb::from_center_half_extents(Vec3::new(16.0, 0.0, 0.0), Vec3::splat(8.0));

    c.bench_function("project_body_64_surfaces", |b| {
        b.iter(|| black_box(target.project(&graph, black_box(ortho), black_box(pose), &culling)));
    });
}

fn bench_render_body_64(c: &mut Criterion) {
    let (graph, root) = body(8, 8);
    let config = DecalConfig::default();
    let mut target = BodyTarget::new(&graph, BodyId(1), root, true, &config);
    let (ortho, pose) = projector();
    let everything = Aabb::new(Vec3::splat(-100.0), Vec3::splat(100.0));
    target.project(&graph, ortho, pose, &everything);
    let body_properties = PropertyBlock::new();

    c.bench_function("render_body_64_surfaces", |b| {
        b.iter(|| target.render(&graph, MaterialId(0), &body_properties, CameraId(0), &mut NullSink));
    });
}

// ---------------------------------------------------------------------------
// Addressing and persistence
// ---------------------------------------------------------------------------

fn bench_path_round_trip(c: &mut Criterion) {
    let (graph, root) = body(16, 16);
    let leaf = graph.find_by_name(root, "surface_15_15").unwrap();

    c.bench_function("path_encode_decode", |b| {
        b.iter(|| {
            let path = encode_path(&graph, black_box(leaf), root).unwrap();
            black_box(decode_path(&graph, &path, root).unwrap())
        });
    });
}

fn bench_save_ron(c: &mut Criterion) {
    let (graph, root) = body(8, 8);
    let config = DecalConfig::default();
    let mut target = BodyTarget::new(&graph, BodyId(1), root, true, &config);
    let (ortho, pose) = projector();
    target.project(&graph, ortho, pose, &Aabb::new(Vec3::splat(-100.0), Vec3::splat(100.0)));
    let targets = [target];

    c.bench_function("save_body_64_surfaces_ron", |b| {
        b.iter(|| {
            let record = save_bodies(black_box(&targets), &graph);
            black_box(encode(&record, Format::Ron).unwrap())
        });
    });
}

criterion_group!(
    benches,
    bench_project_body_64,
    bench_render_body_64,
    bench_path_round_trip,
    bench_save_ron,
);
criterion_main!(benches);

//! Saved target data structures.
//!
//! These are the on-disk form of [`SurfaceTarget`](crate::targets::SurfaceTarget)
//! and [`BodyTarget`](crate::targets::BodyTarget). Vectors and matrices are
//! stored as plain float arrays, matrices in column-major order.

use serde::{Deserialize, Serialize};

use crate::targets::BodyId;

/// Saved projection of one surface.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename = "MESH_TARGET")]
pub struct SurfaceRecord {
    /// Target-local to decal space matrix, column-major.
    pub decal_matrix: [f32; 16],
    pub decal_normal: [f32; 3],
    pub decal_tangent: [f32; 3],
    /// Hierarchy address of the surface node relative to the body root.
    pub target_path: String,
    /// Name of the surface node, used to check that the address still
    /// resolves to the same node.
    pub target_name: String,
}

impl SurfaceRecord {
    pub const NODE_NAME: &'static str = "MESH_TARGET";
}

/// Saved surfaces of one rigid body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename = "PART_TARGET")]
pub struct BodyRecord {
    pub body: BodyId,
    /// Surface records in discovery order.
    pub surfaces: Vec<SurfaceRecord>,
}

impl BodyRecord {
    pub const NODE_NAME: &'static str = "PART_TARGET";
}

/// Saved body targets of one decal.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DecalRecord {
    pub bodies: Vec<BodyRecord>,
}

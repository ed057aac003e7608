//! Saving and reloading decal targets.
//!
//! - [`SurfaceRecord`] / [`BodyRecord`] / [`DecalRecord`]: saved target data
//! - [`save_bodies`] / [`load_bodies`]: whole-decal save and reload
//! - [`BodyLookup`]: resolves saved body ids against the live scene
//! - [`Format`] / [`encode`] / [`decode`]: byte-level I/O
//!
//! Reloading is best effort. A record that no longer matches the scene is
//! dropped with a warning and the rest continue to load.

mod format;
mod records;

use std::collections::HashMap;

use conformal_core::scene::{NodeId, SceneTree};

pub use format::{Format, PersistenceError, decode, encode};
pub use records::{BodyRecord, DecalRecord, SurfaceRecord};

use crate::config::DecalConfig;
use crate::targets::{BodyId, BodyTarget, ProjectionTarget};

/// Resolves a saved body id to the root node of that body in the live scene.
pub trait BodyLookup {
    /// Root node of `body`, or `None` if the body was destroyed or detached.
    fn body_root(&self, body: BodyId) -> Option<NodeId>;
}

impl BodyLookup for HashMap<BodyId, NodeId> {
    fn body_root(&self, body: BodyId) -> Option<NodeId> {
        self.get(&body).copied()
    }
}

/// Save every body target that currently receives the decal.
pub fn save_bodies(targets: &[BodyTarget], scene: &dyn SceneTree) -> DecalRecord {
    let mut bodies = Vec::new();
    for target in targets.iter().filter(|t| t.is_enabled()) {
        match target.save(scene) {
            Ok(record) => bodies.push(record),
            Err(e) => log::warn!("Not saving target for body {}: {e}", target.body()),
        }
    }
    DecalRecord { bodies }
}

/// Rebuild locked body targets from `record`.
///
/// Bodies that no longer exist are dropped; see [`BodyTarget::load`] for
/// per-surface handling. `use_base_normal` is the decal's own flag, not
/// read from `config`.
pub fn load_bodies(
    record: &DecalRecord,
    scene: &dyn SceneTree,
    bodies: &dyn BodyLookup,
    use_base_normal: bool,
    config: &DecalConfig,
) -> Vec<BodyTarget> {
    record
        .bodies
        .iter()
        .filter_map(|body_record| {
            BodyTarget::load(body_record, scene, bodies, use_base_normal, config)
                .map_err(|e| log::warn!("Dropping saved target for body {}: {e}", body_record.body))
                .ok()
        })
        .collect()
}

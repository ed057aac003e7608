//! # Conformal Decals
//!
//! Projects a decal onto the mesh surfaces of rigid bodies and keeps the
//! placement across save/reload.
//!
//! A projector supplies an orthographic matrix, its world pose, and a
//! culling volume. Each [`BodyTarget`] fans that out to its
//! [`SurfaceTarget`]s, which cull against their world bounds and store the
//! decal matrix in their own local space. Per frame, rendering a body
//! issues one draw call per enabled surface through a [`DrawSink`]. At save
//! time targets become [`persistence`] records that address surfaces by
//! their position in the hierarchy; reloaded targets are locked to the
//! saved placement.

pub mod config;
pub mod error;
pub mod persistence;
pub mod render;
pub mod targets;

pub use config::{DecalConfig, ShaderCompatibility};
pub use error::{TargetError, TargetResult, ValidationFailure};
pub use render::{CameraId, DrawMesh, DrawSink, ShadowCasting};
pub use targets::{BodyId, BodyTarget, ProjectionTarget, SurfaceTarget};

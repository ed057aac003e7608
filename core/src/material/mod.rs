//! Surface materials and draw-call property overrides.
//!
//! - [`SurfaceMaterial`] / [`NormalMap`]: what a surface is drawn with
//! - [`PropertyBlock`]: per-draw overrides keyed by [`PropertyId`]

mod types;

pub use types::{
    MaterialId, NormalMap, PropertyBlock, PropertyId, PropertyValue, SurfaceMaterial,
    TextureHandle,
};

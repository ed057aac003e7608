//! # Conformal Core
//!
//! Host-independent scene data consumed by the decal projection targets:
//! the scene hierarchy capability, bounds math, mesh components, and
//! material override blocks.

pub mod material;
pub mod math;
pub mod mesh;
pub mod scene;

//! Material descriptions and per-draw property override blocks.
//!
//! A [`SurfaceMaterial`] is the read-only material of a mesh surface as the
//! host renderer reports it. A [`PropertyBlock`] is a set of
//! [`PropertyId`] / [`PropertyValue`] overrides applied to a single draw
//! call without touching the shared material.

use glam::{Mat4, Vec2, Vec3, Vec4};

/// Opaque handle to a texture owned by the host renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextureHandle(pub u32);

/// Opaque handle to a material owned by the host renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MaterialId(pub u32);

/// A normal map bound to a surface material, with its UV transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalMap {
    pub texture: TextureHandle,
    /// UV scale.
    pub scale: Vec2,
    /// UV offset.
    pub offset: Vec2,
}

impl NormalMap {
    /// Normal map with identity UV transform.
    pub fn new(texture: TextureHandle) -> Self {
        Self {
            texture,
            scale: Vec2::ONE,
            offset: Vec2::ZERO,
        }
    }

    /// Returns this normal map with a different UV scale.
    #[must_use]
    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }

    /// Returns this normal map with a different UV offset.
    #[must_use]
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// Packed `(scale.x, scale.y, offset.x, offset.y)` tiling vector.
    pub fn scale_offset(&self) -> Vec4 {
        Vec4::new(self.scale.x, self.scale.y, self.offset.x, self.offset.y)
    }
}

/// Material of a renderable surface.
///
/// Only the parts relevant to decal placement are described: the shader
/// name (checked against the compatibility blacklist) and the normal map
/// slot, which is `None` when the shader has no normal map property.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceMaterial {
    /// Shader name.
    pub shader: String,
    /// Normal map slot, if the shader declares one.
    pub normal_map: Option<NormalMap>,
}

impl SurfaceMaterial {
    /// Creates a material for `shader` without a normal map slot.
    pub fn new(shader: impl Into<String>) -> Self {
        Self {
            shader: shader.into(),
            normal_map: None,
        }
    }

    /// Set the normal map slot.
    #[must_use]
    pub fn with_normal_map(mut self, normal_map: NormalMap) -> Self {
        self.normal_map = Some(normal_map);
        self
    }
}

/// Well-known override properties used by decal shaders.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyId {
    /// Normal map texture.
    BumpMap,
    /// Normal map tiling `(scale.x, scale.y, offset.x, offset.y)`.
    BumpMapScaleOffset,
    /// Target-local to decal space matrix.
    ProjectionMatrix,
    /// Decal facing direction in target-local space.
    DecalNormal,
    /// Decal right direction in target-local space.
    DecalTangent,
    /// Rim light falloff exponent.
    RimFalloff,
    /// Rim light color.
    RimColor,
}

/// A typed property override value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Float(f32),
    Vec3(Vec3),
    Vec4(Vec4),
    /// RGBA color.
    Color(Vec4),
    Matrix(Mat4),
    Texture(TextureHandle),
}

/// Property overrides for one draw call.
///
/// Setting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyBlock {
    entries: Vec<(PropertyId, PropertyValue)>,
}

impl PropertyBlock {
    /// Creates an empty block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `id` to `value`, replacing any previous value.
    pub fn set(&mut self, id: PropertyId, value: PropertyValue) {
        match self.entries.iter_mut().find(|(key, _)| *key == id) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((id, value)),
        }
    }

    /// Builder form of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, id: PropertyId, value: PropertyValue) -> Self {
        self.set(id, value);
        self
    }

    /// Find a property value by id.
    pub fn get(&self, id: &PropertyId) -> Option<&PropertyValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, value)| value)
    }

    /// Get a float property by id.
    pub fn get_float(&self, id: &PropertyId) -> Option<f32> {
        match self.get(id)? {
            PropertyValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Get a color property by id.
    pub fn get_color(&self, id: &PropertyId) -> Option<Vec4> {
        match self.get(id)? {
            PropertyValue::Color(c) => Some(*c),
            _ => None,
        }
    }

    /// Get a matrix property by id.
    pub fn get_matrix(&self, id: &PropertyId) -> Option<Mat4> {
        match self.get(id)? {
            PropertyValue::Matrix(m) => Some(*m),
            _ => None,
        }
    }

    /// Get a texture property by id.
    pub fn get_texture(&self, id: &PropertyId) -> Option<TextureHandle> {
        match self.get(id)? {
            PropertyValue::Texture(t) => Some(*t),
            _ => None,
        }
    }

    /// Copy the listed keys from `source`, overwriting local values.
    ///
    /// Keys missing from `source` are left untouched.
    pub fn copy_from(&mut self, source: &PropertyBlock, ids: &[PropertyId]) {
        for id in ids {
            if let Some(value) = source.get(id) {
                self.set(id.clone(), value.clone());
            }
        }
    }
}

//! Decal configuration loaded from TOML.
//!
//! ```toml
//! shader_blacklist = ["Unlit/Transparent", "Particles/Additive"]
//! blank_normal = 7
//! use_base_normal = false
//! ```

use std::collections::HashSet;
use std::path::Path;

use conformal_core::material::TextureHandle;
use serde::Deserialize;
use thiserror::Error;

/// Configuration error type
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Material-compatibility check for surfaces that may receive decals.
pub trait ShaderCompatibility {
    /// `true` if surfaces drawn with `shader` must never receive decals.
    fn is_blacklisted(&self, shader: &str) -> bool;
}

/// Settings shared by every decal target.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DecalConfig {
    /// Shaders that cannot receive decals.
    pub shader_blacklist: HashSet<String>,
    /// Texture id of the flat normal map used when a surface's own normal
    /// map is not used.
    pub blank_normal: u32,
    /// Default for the "use base normal map" flag of new decals.
    ///
    /// Targets never read this field. The flag belongs to each decal, so
    /// callers pass it to [`BodyTarget::new`](crate::BodyTarget::new) and
    /// [`load_bodies`](crate::persistence::load_bodies) explicitly, seeding
    /// it from here when the decal has no setting of its own.
    pub use_base_normal: bool,
}

impl Default for DecalConfig {
    fn default() -> Self {
        Self {
            shader_blacklist: HashSet::new(),
            blank_normal: 0,
            use_base_normal: true,
        }
    }
}

impl DecalConfig {
    /// Parse a config from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        log::info!(
            "Loaded decal config from {} ({} blacklisted shaders)",
            path.display(),
            config.shader_blacklist.len()
        );
        Ok(config)
    }

    /// Handle of the flat normal map texture.
    pub fn blank_normal(&self) -> TextureHandle {
        TextureHandle(self.blank_normal)
    }

    /// Returns this config with `shader` added to the blacklist.
    #[must_use]
    pub fn with_blacklisted(mut self, shader: impl Into<String>) -> Self {
        self.shader_blacklist.insert(shader.into());
        self
    }
}

impl ShaderCompatibility for DecalConfig {
    fn is_blacklisted(&self, shader: &str) -> bool {
        self.shader_blacklist.contains(shader)
    }
}

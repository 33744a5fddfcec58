//! # Game Configuration
//!
//! One TOML file for the whole dive:
//!
//! ```toml
//! preset = "high"
//!
//! [world]
//! seed = 42
//! map_size = 100
//!
//! [render.shading.phong]
//! enabled = true
//! ```
//!
//! A `preset` overrides `[render.view]`.

use std::path::{Path, PathBuf};

use abyss_procedural::{ConfigError, WorldConfig};
use abyss_rendering::{GraphicsPreset, RenderConfig, ViewConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading the game configuration.
#[derive(Error, Debug)]
pub enum GameConfigError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for this schema.
    #[error("invalid game config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A section parsed but holds an unusable value.
    #[error(transparent)]
    Invalid(#[from] ConfigError),
}

/// Complete game configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Graphics preset; replaces `render.view` when set.
    pub preset: Option<GraphicsPreset>,
    /// World generation.
    pub world: WorldConfig,
    /// Rendering.
    pub render: RenderConfig,
}

impl GameConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`GameConfigError::Parse`] for malformed TOML and
    /// [`GameConfigError::Invalid`] for unusable values.
    pub fn from_toml_str(source: &str) -> Result<Self, GameConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`GameConfigError::Io`] if the file cannot be read, otherwise
    /// as [`Self::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| GameConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::info!("Loaded game config from {}", path.display());
        Ok(config)
    }

    /// Validates both sections.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.world.validate()?;
        self.render.validate()
    }

    /// View settings after applying the preset.
    #[must_use]
    pub fn effective_view(&self) -> ViewConfig {
        self.preset.map_or(self.render.view, GraphicsPreset::view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.effective_view(), ViewConfig::default());
    }

    #[test]
    fn test_sections_and_preset() {
        let config = GameConfig::from_toml_str(
            r#"
            preset = "ultra"

            [world]
            seed = 42
            map_size = 64

            [render.view]
            draw_radius = 20
            "#,
        )
        .unwrap();
        assert_eq!(config.world.seed, Some(42));
        assert_eq!(config.world.map_size, 64);
        assert_eq!(config.render.view.draw_radius, 20);
        assert_eq!(config.effective_view(), GraphicsPreset::Ultra.view());
    }

    #[test]
    fn test_invalid_world_value_surfaces() {
        let err = GameConfig::from_toml_str("[world]\nmax_height = 1").unwrap_err();
        assert!(matches!(
            err,
            GameConfigError::Invalid(ConfigError::Invalid { field: "max_height", .. })
        ));
    }

    #[test]
    fn test_invalid_render_value_surfaces() {
        let err = GameConfig::from_toml_str("[render.view]\ndraw_radius = -3").unwrap_err();
        assert!(err.to_string().contains("view.draw_radius"));
    }

    #[test]
    fn test_unknown_preset_is_parse_error() {
        let err = GameConfig::from_toml_str("preset = \"cinematic\"").unwrap_err();
        assert!(matches!(err, GameConfigError::Parse(_)));
    }
}

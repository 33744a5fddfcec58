//! # Render Configuration
//!
//! Lighting, caustics, culling, minimap and bubble parameters. Like the
//! world configuration, every section is `#[serde(default)]` and immutable
//! once the frame builder holds it.

use abyss_procedural::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// All render-side settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Per-voxel lighting.
    pub shading: ShadingConfig,
    /// Draw radius and culling switch.
    pub view: ViewConfig,
    /// Minimap window.
    pub minimap: MinimapConfig,
    /// Rising bubbles.
    pub bubbles: BubbleConfig,
}

impl RenderConfig {
    /// Rejects values that cannot be used.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first bad field.
    pub fn validate(&self) -> ConfigResult<()> {
        let shading = &self.shading;
        for (field, value) in [
            ("shading.ambient", shading.ambient),
            ("shading.depth_darken", shading.depth_darken),
            ("shading.cave_darken", shading.cave_darken),
            ("shading.caustics.scale", shading.caustics.scale),
            ("shading.caustics.speed", shading.caustics.speed),
            ("shading.caustics.intensity", shading.caustics.intensity),
            ("shading.phong.ambient", shading.phong.ambient),
            ("shading.phong.diffuse", shading.phong.diffuse),
            ("shading.phong.specular", shading.phong.specular),
            ("shading.phong.shininess", shading.phong.shininess),
            ("bubbles.spawn_rate", self.bubbles.spawn_rate),
            ("bubbles.start_y", self.bubbles.start_y),
        ] {
            if !value.is_finite() {
                return Err(invalid(field, format!("{value} is not finite")));
            }
        }
        if shading.phong.light_dir.iter().any(|v| !v.is_finite()) {
            return Err(invalid("shading.phong.light_dir", "must be finite"));
        }
        if self.view.draw_radius < 0 {
            return Err(invalid("view.draw_radius", "must not be negative"));
        }
        if self.minimap.view_size == 0 {
            return Err(invalid("minimap.view_size", "must be at least 1"));
        }
        for (field, [min, max]) in [
            ("bubbles.speed", self.bubbles.speed),
            ("bubbles.radius", self.bubbles.radius),
        ] {
            if !(min.is_finite() && max.is_finite()) || min > max {
                return Err(invalid(field, format!("bad range [{min}, {max}]")));
            }
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

/// Depth lighting, cave shadow, caustics and Phong settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadingConfig {
    /// Light at y = 0.
    pub ambient: f32,
    /// Light added per unit of height.
    pub depth_darken: f32,
    /// Multiplier for voxels under a ceiling.
    pub cave_darken: f32,
    /// Animated floor ripple.
    pub caustics: CausticsConfig,
    /// Heightfield directional shading.
    pub phong: PhongConfig,
}

impl Default for ShadingConfig {
    fn default() -> Self {
        Self {
            ambient: 0.55,
            depth_darken: 0.02,
            cave_darken: 0.5,
            caustics: CausticsConfig::default(),
            phong: PhongConfig::default(),
        }
    }
}

/// Caustics ripple on the seabed floor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CausticsConfig {
    /// Master switch.
    pub enabled: bool,
    /// Noise frequency per column.
    pub scale: f32,
    /// Drift speed along both axes.
    pub speed: f32,
    /// Brightness swing.
    pub intensity: f32,
    /// Highest Y that receives caustics.
    pub max_y: i32,
}

impl Default for CausticsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            scale: 0.25,
            speed: 0.4,
            intensity: 0.35,
            max_y: 1,
        }
    }
}

/// Directional light over the heightfield gradient.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhongConfig {
    /// Master switch.
    pub enabled: bool,
    /// Direction towards the light (normalized on use).
    pub light_dir: [f32; 3],
    /// Constant term.
    pub ambient: f32,
    /// Lambert weight.
    pub diffuse: f32,
    /// Specular weight.
    pub specular: f32,
    /// Specular exponent.
    pub shininess: f32,
}

impl Default for PhongConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            light_dir: [0.6, 0.8, 0.2],
            ambient: 0.3,
            diffuse: 0.7,
            specular: 0.15,
            shininess: 8.0,
        }
    }
}

/// Draw distance and culling switch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Draw radius in columns.
    pub draw_radius: i32,
    /// When false every voxel is drawn.
    pub culling: bool,
}

impl ViewConfig {
    /// Smallest radius reachable through [`Self::adjust_radius`].
    pub const MIN_RADIUS: i32 = 10;
    /// Largest radius reachable through [`Self::adjust_radius`].
    pub const MAX_RADIUS: i32 = 150;

    /// Moves the draw radius by `delta`, clamped to the adjustable range.
    pub fn adjust_radius(&mut self, delta: i32) {
        self.draw_radius = self
            .draw_radius
            .saturating_add(delta)
            .clamp(Self::MIN_RADIUS, Self::MAX_RADIUS);
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        GraphicsPreset::Medium.view()
    }
}

/// Settings-menu graphics presets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphicsPreset {
    /// Radius 30, culled.
    Low,
    /// Radius 50, culled.
    #[default]
    Medium,
    /// Radius 70, culled.
    High,
    /// Radius 100, culling off.
    Ultra,
}

impl GraphicsPreset {
    /// Presets in menu order.
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Ultra];

    /// View settings for this preset.
    #[must_use]
    pub const fn view(self) -> ViewConfig {
        let (draw_radius, culling) = match self {
            Self::Low => (30, true),
            Self::Medium => (50, true),
            Self::High => (70, true),
            Self::Ultra => (100, false),
        };
        ViewConfig {
            draw_radius,
            culling,
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Ultra => "Ultra",
        }
    }
}

/// Minimap window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinimapConfig {
    /// Columns shown per side in dynamic mode.
    pub view_size: u32,
    /// Follow the viewer instead of showing the whole map.
    pub dynamic: bool,
    /// Pixel size of one column.
    pub cell_size: u32,
}

impl Default for MinimapConfig {
    fn default() -> Self {
        Self {
            view_size: 40,
            dynamic: true,
            cell_size: 4,
        }
    }
}

/// Rising bubble particles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BubbleConfig {
    /// Expected spawns per second.
    pub spawn_rate: f32,
    /// Rise speed range.
    pub speed: [f32; 2],
    /// Radius range.
    pub radius: [f32; 2],
    /// Spawn height.
    pub start_y: f32,
    /// Bubble color.
    pub color: [f32; 3],
}

impl Default for BubbleConfig {
    fn default() -> Self {
        Self {
            spawn_rate: 0.6,
            speed: [0.5, 1.2],
            radius: [0.05, 0.12],
            start_y: 0.2,
            color: [0.9, 0.95, 1.0],
        }
    }
}

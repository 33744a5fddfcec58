//! # World Configuration
//!
//! Immutable generation parameters, constructed once and passed by
//! reference into the generator. Every section derives `Deserialize` with
//! `#[serde(default)]`, so a TOML file only needs the keys it changes.
//!
//! ```toml
//! seed = 1234
//! map_size = 120
//!
//! [terrain]
//! amplitude = 4.0
//!
//! [caves]
//! threshold = 0.5
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Top-level world generation parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Structural seed (permutation table). `None` draws one from entropy.
    pub seed: Option<u64>,
    /// Decoration seed (palette, clusters, caves). `None` draws one from entropy.
    pub decoration_seed: Option<u64>,
    /// Map width and depth in columns.
    pub map_size: u32,
    /// Highest Y the diver can reach; dressing respects this headroom.
    pub max_height: i32,
    /// Base terrain pass.
    pub terrain: TerrainConfig,
    /// Coral/rock surface dressing.
    pub dressing: DressingConfig,
    /// Seaweed placement.
    pub vegetation: VegetationConfig,
    /// Central coral reef.
    pub reef: ReefConfig,
    /// Dense seaweed garden in the far corner.
    pub patch: PatchConfig,
    /// Subtractive cave pass.
    pub caves: CaveConfig,
    /// Spawn point search.
    pub spawn: SpawnConfig,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            seed: None,
            decoration_seed: None,
            map_size: 80,
            max_height: 15,
            terrain: TerrainConfig::default(),
            dressing: DressingConfig::default(),
            vegetation: VegetationConfig::default(),
            reef: ReefConfig::default(),
            patch: PatchConfig::default(),
            caves: CaveConfig::default(),
            spawn: SpawnConfig::default(),
        }
    }
}

impl WorldConfig {
    /// Pins both seeds, making the whole world reproducible.
    #[must_use]
    pub const fn with_seeds(mut self, seed: u64, decoration_seed: u64) -> Self {
        self.seed = Some(seed);
        self.decoration_seed = Some(decoration_seed);
        self
    }

    /// Sets the map size.
    #[must_use]
    pub const fn with_map_size(mut self, map_size: u32) -> Self {
        self.map_size = map_size;
        self
    }

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::Invalid`] for unusable values.
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`Self::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Rejects values that clamping cannot make meaningful.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first bad field.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.map_size == 0 {
            return Err(ConfigError::invalid("map_size", "must be at least 1"));
        }
        if self.max_height < 2 {
            return Err(ConfigError::invalid("max_height", "must be at least 2"));
        }

        finite("terrain.scale", self.terrain.scale)?;
        finite("terrain.amplitude", self.terrain.amplitude)?;
        if self.terrain.amplitude < 0.0 {
            return Err(ConfigError::invalid("terrain.amplitude", "must not be negative"));
        }

        finite("dressing.frequency", self.dressing.frequency)?;
        finite("dressing.offset", self.dressing.offset)?;
        finite("dressing.coral_threshold", self.dressing.coral_threshold)?;
        finite("dressing.rock_threshold", self.dressing.rock_threshold)?;

        finite("vegetation.frequency", self.vegetation.frequency)?;
        finite("vegetation.offset", self.vegetation.offset)?;
        finite("vegetation.threshold", self.vegetation.threshold)?;
        probability("vegetation.cluster_probability", self.vegetation.cluster_probability)?;
        ordered("vegetation.cluster", self.vegetation.cluster_min, self.vegetation.cluster_max)?;

        ordered("reef.size", self.reef.min_size, self.reef.max_size)?;
        finite("reef.scale", self.reef.scale)?;
        finite("reef.offset", self.reef.offset)?;
        finite("reef.falloff", self.reef.falloff)?;
        finite("reef.threshold", self.reef.threshold)?;
        probability("reef.extension_probability", self.reef.extension_probability)?;
        ordered("reef.rects", self.reef.rects_min, self.reef.rects_max)?;
        float_range("reef.rect_height", self.reef.rect_height)?;
        float_range("reef.rect_width", self.reef.rect_width)?;

        finite("caves.scale", self.caves.scale)?;
        finite("caves.offset", self.caves.offset)?;
        finite("caves.threshold", self.caves.threshold)?;
        ordered("caves.tunnel", self.caves.tunnel_min, self.caves.tunnel_max)?;
        if self.caves.tunnel_min < 1 {
            return Err(ConfigError::invalid("caves.tunnel_min", "must be at least 1"));
        }

        finite(
            "spawn.height_above_surface",
            f64::from(self.spawn.height_above_surface),
        )?;
        if self.spawn.fallback.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::invalid("spawn.fallback", "must be finite"));
        }

        Ok(())
    }
}

fn finite(field: &'static str, value: f64) -> ConfigResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("{value} is not finite")))
    }
}

fn probability(field: &'static str, value: f64) -> ConfigResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("{value} is not in [0, 1]")))
    }
}

fn ordered<T: PartialOrd + std::fmt::Display>(
    field: &'static str,
    min: T,
    max: T,
) -> ConfigResult<()> {
    if min <= max {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("min {min} exceeds max {max}")))
    }
}

fn float_range(field: &'static str, [min, max]: [f32; 2]) -> ConfigResult<()> {
    if !(min.is_finite() && max.is_finite()) {
        return Err(ConfigError::invalid(field, "must be finite"));
    }
    if min >= max {
        return Err(ConfigError::invalid(field, format!("empty range [{min}, {max})")));
    }
    Ok(())
}

/// Base terrain pass: `h = max(1, round(1 + amplitude * (n * 0.5 + 0.5)))`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Noise frequency per column.
    pub scale: f64,
    /// Height added at noise maximum.
    pub amplitude: f64,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            scale: 0.12,
            amplitude: 3.0,
        }
    }
}

/// Coral and rock dressing on top of the terrain surface.
///
/// Sampled at `column * terrain.scale * frequency + offset`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DressingConfig {
    /// Frequency multiplier relative to the terrain scale.
    pub frequency: f64,
    /// Lattice offset decorrelating dressing from terrain.
    pub offset: f64,
    /// Noise above this grows a two-block coral.
    pub coral_threshold: f64,
    /// Noise above this (and below coral) places a rock.
    pub rock_threshold: f64,
}

impl Default for DressingConfig {
    fn default() -> Self {
        Self {
            frequency: 1.7,
            offset: 100.0,
            coral_threshold: 0.55,
            rock_threshold: 0.4,
        }
    }
}

/// Seaweed placement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VegetationConfig {
    /// Frequency multiplier relative to the terrain scale.
    pub frequency: f64,
    /// Lattice offset.
    pub offset: f64,
    /// Noise above this anchors a strand.
    pub threshold: f64,
    /// Chance that a strand spawns a neighbourhood cluster.
    pub cluster_probability: f64,
    /// Fewest extra strands in a cluster.
    pub cluster_min: u32,
    /// Most extra strands in a cluster.
    pub cluster_max: u32,
    /// Strand geometry.
    pub seaweed: SeaweedConfig,
}

impl Default for VegetationConfig {
    fn default() -> Self {
        Self {
            frequency: 2.1,
            offset: 200.0,
            threshold: 0.4,
            cluster_probability: 0.6,
            cluster_min: 2,
            cluster_max: 4,
            seaweed: SeaweedConfig::default(),
        }
    }
}

/// Seaweed strand geometry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeaweedConfig {
    /// Height of each of the two segments.
    pub segment_length: f32,
    /// Lower segment sway amplitude.
    pub sway_amplitude: f32,
    /// Segment width.
    pub width: f32,
    /// Strand color.
    pub color: [f32; 3],
}

impl Default for SeaweedConfig {
    fn default() -> Self {
        Self {
            segment_length: 1.8,
            sway_amplitude: 0.25,
            width: 0.15,
            color: [0.1, 0.6, 0.2],
        }
    }
}

/// Central coral reef with a radial mask.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReefConfig {
    /// Smallest reef side.
    pub min_size: u32,
    /// Largest reef side.
    pub max_size: u32,
    /// Mask noise frequency.
    pub scale: f64,
    /// Mask noise lattice offset.
    pub offset: f64,
    /// Weight of the noise term in the mask.
    pub noise_weight: f64,
    /// Weight of the radial term in the mask.
    pub radial_weight: f64,
    /// Radial falloff steepness.
    pub falloff: f64,
    /// Mask above this grows reef coral.
    pub threshold: f64,
    /// Chance a reef coral grows a second block.
    pub extension_probability: f64,
    /// Fewest decorative blades per reef column.
    pub rects_min: u32,
    /// Most decorative blades per reef column.
    pub rects_max: u32,
    /// Blade height range.
    pub rect_height: [f32; 2],
    /// Blade width range.
    pub rect_width: [f32; 2],
    /// Horizontal jitter span of a blade inside its column.
    pub jitter: f32,
}

impl Default for ReefConfig {
    fn default() -> Self {
        Self {
            min_size: 20,
            max_size: 30,
            scale: 0.18,
            offset: 350.0,
            noise_weight: 0.6,
            radial_weight: 0.4,
            falloff: 1.4,
            threshold: 0.35,
            extension_probability: 0.7,
            rects_min: 1,
            rects_max: 4,
            rect_height: [0.6, 1.4],
            rect_width: [0.08, 0.12],
            jitter: 0.6,
        }
    }
}

/// Dense seaweed garden anchored at the high-x/high-z corner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatchConfig {
    /// Garden extent along X.
    pub width: u32,
    /// Garden extent along Z.
    pub depth: u32,
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self { width: 8, depth: 8 }
    }
}

/// Subtractive cave carving.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaveConfig {
    /// Noise frequency.
    pub scale: f64,
    /// Noise lattice offset.
    pub offset: f64,
    /// Noise above this carves a tunnel.
    pub threshold: f64,
    /// Only columns taller than this are carved.
    pub min_surface: i32,
    /// Shortest tunnel.
    pub tunnel_min: i32,
    /// Tallest tunnel.
    pub tunnel_max: i32,
}

impl Default for CaveConfig {
    fn default() -> Self {
        Self {
            scale: 0.35,
            offset: 300.0,
            threshold: 0.6,
            min_surface: 3,
            tunnel_min: 2,
            tunnel_max: 4,
        }
    }
}

/// Spawn point search.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Neighbourhood radius that must be open sand.
    pub obstacle_radius: i32,
    /// Spawn height above the column surface.
    pub height_above_surface: f32,
    /// Returned when no column qualifies.
    pub fallback: [f32; 3],
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            obstacle_radius: 2,
            height_above_surface: 2.0,
            fallback: [1.5, 2.0, 1.5],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        WorldConfig::default().validate().unwrap();
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = WorldConfig::from_toml_str(
            r"
            seed = 7
            map_size = 40

            [terrain]
            amplitude = 0.0

            [caves]
            threshold = 0.5
            ",
        )
        .unwrap();

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.decoration_seed, None);
        assert_eq!(config.map_size, 40);
        assert_eq!(config.terrain.amplitude, 0.0);
        assert_eq!(config.terrain.scale, 0.12);
        assert_eq!(config.caves.threshold, 0.5);
        assert_eq!(config.caves.tunnel_max, 4);
        assert_eq!(config.reef, ReefConfig::default());
    }

    #[test]
    fn test_zero_map_rejected() {
        let err = WorldConfig::from_toml_str("map_size = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "map_size", .. }));
    }

    #[test]
    fn test_inverted_reef_range_rejected() {
        let err = WorldConfig::from_toml_str("[reef]\nmin_size = 40\nmax_size = 10").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "reef.size", .. }));
    }

    #[test]
    fn test_bad_probability_rejected() {
        let err =
            WorldConfig::from_toml_str("[vegetation]\ncluster_probability = 1.5").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { field: "vegetation.cluster_probability", .. }
        ));
    }

    #[test]
    fn test_non_finite_spawn_height_rejected() {
        let err = WorldConfig::from_toml_str("[spawn]\nheight_above_surface = nan").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { field: "spawn.height_above_surface", .. }
        ));
    }

    #[test]
    fn test_syntax_error_reported() {
        let err = WorldConfig::from_toml_str("map_size = [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_reported() {
        let err = WorldConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("here.toml"));
    }
}

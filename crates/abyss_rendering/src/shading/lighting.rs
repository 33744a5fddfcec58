//! Depth lighting and cave shadow.
//!
//! Light grows linearly with height above the floor. A voxel with either of
//! the two cells above it occupied counts as under a ceiling and is darkened;
//! this is an occupancy proxy, not a shadow ray.

use abyss_procedural::SeabedWorld;

use crate::config::ShadingConfig;

/// Darkest light factor after clamping.
pub const MIN_LIGHT: f32 = 0.1;
/// Brightest light factor after clamping.
pub const MAX_LIGHT: f32 = 1.0;
/// Cells above a voxel checked for a ceiling.
pub const CEILING_PROBE: i32 = 2;

/// Returns true if either of the two cells above `(x, y, z)` is occupied.
#[inline]
#[must_use]
pub fn is_cave_shadow(world: &SeabedWorld, x: i32, y: i32, z: i32) -> bool {
    (1..=CEILING_PROBE).any(|dy| world.is_occupied(x, y + dy, z))
}

/// `clamp((ambient + y * depth_darken) * shadow, 0.1, 1.0)`.
///
/// The cave multiplier is applied before clamping, so a shadowed voxel never
/// drops below [`MIN_LIGHT`].
#[inline]
#[must_use]
pub fn depth_light(config: &ShadingConfig, y: i32, in_shadow: bool) -> f32 {
    let mut light = config.ambient + y as f32 * config.depth_darken;
    if in_shadow {
        light *= config.cave_darken;
    }
    light.clamp(MIN_LIGHT, MAX_LIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_rises_with_height() {
        let config = ShadingConfig::default();
        assert!((depth_light(&config, 0, false) - 0.55).abs() < 1e-6);
        assert!((depth_light(&config, 10, false) - 0.75).abs() < 1e-6);
        assert_eq!(depth_light(&config, 100, false), MAX_LIGHT);
    }

    #[test]
    fn test_shadow_halves_then_clamps() {
        let config = ShadingConfig::default();
        assert!((depth_light(&config, 0, true) - 0.275).abs() < 1e-6);

        let dim = ShadingConfig {
            ambient: 0.15,
            depth_darken: 0.0,
            ..ShadingConfig::default()
        };
        assert_eq!(depth_light(&dim, 0, true), MIN_LIGHT);
    }
}

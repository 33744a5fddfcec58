//! Animated caustics ripple on the seabed floor.

use abyss_procedural::{PerlinNoise, WorldSeed};

use crate::config::CausticsConfig;

/// Floor brightness modulation `1 + intensity * noise(x*s + t*v, z*s + t*v)`.
#[derive(Clone, Debug)]
pub struct Caustics {
    noise: PerlinNoise,
    config: CausticsConfig,
}

impl Caustics {
    /// Builds the ripple field over the world's structural noise table.
    #[must_use]
    pub fn new(seed: WorldSeed, config: CausticsConfig) -> Self {
        Self {
            noise: PerlinNoise::new(seed),
            config,
        }
    }

    /// Returns true if voxels at height `y` are modulated.
    #[inline]
    #[must_use]
    pub const fn applies_to(&self, y: i32) -> bool {
        self.config.enabled && y <= self.config.max_y
    }

    /// Brightness factor for voxel `(x, y, z)` at time `t`; exactly 1 above the floor.
    #[must_use]
    pub fn factor(&self, x: i32, y: i32, z: i32, t: f64) -> f32 {
        if !self.applies_to(y) {
            return 1.0;
        }
        let scale = f64::from(self.config.scale);
        let drift = t * f64::from(self.config.speed);
        let n = self
            .noise
            .sample(f64::from(x) * scale + drift, f64::from(z) * scale + drift);
        1.0 + self.config.intensity * n as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_above_floor_untouched() {
        let caustics = Caustics::new(WorldSeed::new(1), CausticsConfig::default());
        for t in [0.0, 0.37, 12.5] {
            assert_eq!(caustics.factor(3, 2, 4, t), 1.0);
            assert_eq!(caustics.factor(3, 5, 4, t), 1.0);
        }
    }

    #[test]
    fn test_floor_ripples_within_intensity() {
        let config = CausticsConfig::default();
        let caustics = Caustics::new(WorldSeed::new(1), config.clone());
        let mut varied = false;
        for x in 0..20 {
            let f = caustics.factor(x, 0, 7, 1.3);
            assert!((1.0 - config.intensity - 1e-4..=1.0 + config.intensity + 1e-4).contains(&f));
            varied |= (f - 1.0).abs() > 1e-3;
        }
        assert!(varied);
    }

    #[test]
    fn test_ripple_moves_with_time() {
        let caustics = Caustics::new(WorldSeed::new(5), CausticsConfig::default());
        let a: Vec<_> = (0..16).map(|x| caustics.factor(x, 1, 3, 0.0)).collect();
        let b: Vec<_> = (0..16).map(|x| caustics.factor(x, 1, 3, 2.0)).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn test_samples_the_terrain_noise_field() {
        let seed = WorldSeed::new(77);
        let config = CausticsConfig::default();
        let caustics = Caustics::new(seed, config.clone());
        let terrain = PerlinNoise::new(seed);

        let t = 3.25;
        let drift = t * f64::from(config.speed);
        let scale = f64::from(config.scale);
        for x in 0..12 {
            let n = terrain.sample(f64::from(x) * scale + drift, 5.0 * scale + drift);
            let expected = 1.0 + config.intensity * n as f32;
            assert_eq!(caustics.factor(x, 0, 5, t), expected);
        }
    }

    #[test]
    fn test_disabled_is_identity() {
        let config = CausticsConfig {
            enabled: false,
            ..CausticsConfig::default()
        };
        let caustics = Caustics::new(WorldSeed::new(1), config);
        assert_eq!(caustics.factor(3, 0, 4, 0.5), 1.0);
    }
}

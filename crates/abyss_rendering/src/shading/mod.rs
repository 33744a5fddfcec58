//! # Voxel Shading
//!
//! Per-voxel color for one frame:
//!
//! ```text
//! color = clamp(block_color * light * caustics, 0, 1)
//! light = depth_light(y, cave_shadow) [* phong, surface voxels only]
//! ```

mod caustics;
mod lighting;
mod phong;

pub use caustics::Caustics;
pub use lighting::{depth_light, is_cave_shadow, CEILING_PROBE, MAX_LIGHT, MIN_LIGHT};
pub use phong::PhongShader;

use abyss_procedural::{BlockType, SeabedWorld};

use crate::config::ShadingConfig;

/// Combines depth light, cave shadow, caustics and optional Phong.
#[derive(Clone, Debug)]
pub struct VoxelShader {
    config: ShadingConfig,
    caustics: Caustics,
    phong: Option<PhongShader>,
}

impl VoxelShader {
    /// Shader for a world; caustics sample the world's own noise field.
    #[must_use]
    pub fn new(world: &SeabedWorld, config: &ShadingConfig) -> Self {
        Self {
            caustics: Caustics::new(world.seed(), config.caustics.clone()),
            phong: config.phong.enabled.then(|| PhongShader::new(&config.phong)),
            config: config.clone(),
        }
    }

    /// Light factor before caustics.
    #[must_use]
    pub fn light(&self, world: &SeabedWorld, x: i32, y: i32, z: i32) -> f32 {
        let mut light = depth_light(&self.config, y, is_cave_shadow(world, x, y, z));
        if let Some(phong) = &self.phong {
            if PhongShader::is_surface(world.heights(), x, y, z) {
                light *= phong.factor(world.heights(), x, y, z);
            }
        }
        light
    }

    /// Final RGB of a voxel at time `t`, each channel clamped to `[0, 1]`.
    #[must_use]
    pub fn shade(
        &self,
        world: &SeabedWorld,
        x: i32,
        y: i32,
        z: i32,
        block: BlockType,
        t: f64,
    ) -> [f32; 3] {
        let factor = self.light(world, x, y, z) * self.caustics.factor(x, y, z, t);
        block.color().map(|c| (c * factor).clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abyss_procedural::{WorldConfig, WorldGenerator};

    fn world() -> SeabedWorld {
        let config = WorldConfig::default().with_seeds(21, 3).with_map_size(24);
        WorldGenerator::new(&config).generate()
    }

    #[test]
    fn test_caustics_leave_upper_voxels_alone() {
        let world = world();
        let on = VoxelShader::new(&world, &ShadingConfig::default());
        let mut off_config = ShadingConfig::default();
        off_config.caustics.enabled = false;
        let off = VoxelShader::new(&world, &off_config);

        for t in [0.0, 1.5, 40.0] {
            assert_eq!(
                on.shade(&world, 4, 5, 4, BlockType::CoralPink, t),
                off.shade(&world, 4, 5, 4, BlockType::CoralPink, t)
            );
        }
    }

    #[test]
    fn test_cave_ceiling_darkens() {
        let world = world();
        let shader = VoxelShader::new(&world, &ShadingConfig::default());
        // y = 0 under sand at y = 1 or 2 is always shadowed when the column is tall enough.
        let (x, z, _) = world
            .heights()
            .iter()
            .find(|&(x, z, h)| h >= 3 && world.is_occupied(x, 1, z))
            .unwrap();
        let shaded = shader.light(&world, x, 0, z);
        assert!((shaded - 0.55 * 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_channels_clamped() {
        let world = world();
        let config = ShadingConfig {
            ambient: 5.0,
            ..ShadingConfig::default()
        };
        let shader = VoxelShader::new(&world, &config);
        let rgb = shader.shade(&world, 2, 0, 2, BlockType::CoralYellow, 0.3);
        assert!(rgb.iter().all(|c| (0.0..=1.0).contains(c)));
    }

    #[test]
    fn test_phong_only_on_surface() {
        let world = world();
        let mut config = ShadingConfig::default();
        config.phong.enabled = true;
        let lit = VoxelShader::new(&world, &config);
        let plain = VoxelShader::new(&world, &ShadingConfig::default());

        let (x, z, h) = world.heights().iter().next().unwrap();
        // Below the surface the factor is untouched.
        assert_eq!(lit.light(&world, x, h - 1, z), plain.light(&world, x, h - 1, z));
        assert_ne!(lit.light(&world, x, h, z), plain.light(&world, x, h, z));
    }
}

//! Phong approximation over the heightfield gradient.
//!
//! The normal of a surface voxel is `(-Δh_x, 2, -Δh_z)` from the two
//! neighbouring columns on each axis. Neighbour indices are clamped onto the
//! map; a neighbour without a height entry reads as the voxel's own `y`.

use abyss_procedural::HeightMap;

use crate::config::PhongConfig;

const MIN_LENGTH: f32 = 1e-6;

fn normalize([x, y, z]: [f32; 3]) -> [f32; 3] {
    let len = (x * x + y * y + z * z).sqrt().max(MIN_LENGTH);
    [x / len, y / len, z / len]
}

/// Directional shading for the column surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhongShader {
    light_dir: [f32; 3],
    ambient: f32,
    diffuse: f32,
    specular: f32,
    shininess: f32,
}

impl PhongShader {
    /// Builds the shader, normalizing the light direction.
    #[must_use]
    pub fn new(config: &PhongConfig) -> Self {
        Self {
            light_dir: normalize(config.light_dir),
            ambient: config.ambient,
            diffuse: config.diffuse,
            specular: config.specular,
            shininess: config.shininess,
        }
    }

    /// Only the voxel sitting exactly at the column height is lit.
    #[inline]
    #[must_use]
    pub fn is_surface(heights: &HeightMap, x: i32, y: i32, z: i32) -> bool {
        heights.height_or(x, z, y) == y
    }

    /// Unit normal of the heightfield at `(x, z)`.
    #[must_use]
    pub fn surface_normal(heights: &HeightMap, x: i32, y: i32, z: i32) -> [f32; 3] {
        let hx0 = heights.clamped_height_or(x - 1, z, y);
        let hx1 = heights.clamped_height_or(x + 1, z, y);
        let hz0 = heights.clamped_height_or(x, z - 1, y);
        let hz1 = heights.clamped_height_or(x, z + 1, y);
        normalize([-(hx1 - hx0) as f32, 2.0, -(hz1 - hz0) as f32])
    }

    /// `ambient + diffuse * n·l + specular * (n·l)^shininess`.
    #[must_use]
    pub fn factor(&self, heights: &HeightMap, x: i32, y: i32, z: i32) -> f32 {
        let [nx, ny, nz] = Self::surface_normal(heights, x, y, z);
        let [lx, ly, lz] = self.light_dir;
        let n_dot_l = (nx * lx + ny * ly + nz * lz).max(0.0);
        self.ambient + self.diffuse * n_dot_l + self.specular * n_dot_l.powf(self.shininess)
    }
}

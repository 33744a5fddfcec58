//! # Decorations
//!
//! Value records appended by the generator and read-only afterwards:
//! seaweed strands, decorative coral rects and reef region descriptors.
//! Every record is anchored to a column with a height map entry.

use std::f32::consts::TAU;

use rand::Rng;

use crate::config::SeaweedConfig;

/// Phase offset between the lower and upper seaweed segment.
const UPPER_PHASE_LAG: f32 = 0.8;
/// Upper segment sways further than the lower one.
const UPPER_SWAY_GAIN: f32 = 1.3;

/// A two-segment seaweed strand anchored on a column surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Seaweed {
    /// Column centre X.
    pub x: f32,
    /// Column centre Z.
    pub z: f32,
    /// Bottom of the strand.
    pub base_y: f32,
    /// Strand color.
    pub color: [f32; 3],
    /// Sway phase in `[0, 2π)`.
    pub phase: f32,
    /// Horizontal sway amplitude of the lower segment.
    pub sway_amplitude: f32,
    /// Segment width (X and Z).
    pub width: f32,
    /// Segment height.
    pub segment_length: f32,
}

impl Seaweed {
    /// Anchors a strand on column `(x, z)` whose surface is at `surface_y`.
    pub fn anchored<R: Rng>(
        x: i32,
        z: i32,
        surface_y: i32,
        config: &SeaweedConfig,
        rng: &mut R,
    ) -> Self {
        Self {
            x: x as f32 + 0.5,
            z: z as f32 + 0.5,
            base_y: surface_y as f32 + 0.5,
            color: config.color,
            phase: rng.gen_range(0.0..TAU),
            sway_amplitude: config.sway_amplitude,
            width: config.width,
            segment_length: config.segment_length,
        }
    }

    /// Column this strand is anchored to.
    #[must_use]
    pub fn column(&self) -> (i32, i32) {
        (self.x.floor() as i32, self.z.floor() as i32)
    }

    /// Horizontal X offsets of the lower and upper segment at time `t`.
    #[must_use]
    pub fn sway(&self, t: f32) -> (f32, f32) {
        let lower = (t + self.phase).sin() * self.sway_amplitude;
        let upper =
            (t + self.phase + UPPER_PHASE_LAG).sin() * self.sway_amplitude * UPPER_SWAY_GAIN;
        (lower, upper)
    }

    /// Returns true if `point` lies inside either swayed segment at time `t`.
    #[must_use]
    pub fn contains(&self, point: [f32; 3], t: f32) -> bool {
        let (lower, upper) = self.sway(t);
        let half = self.width * 0.5;
        let [px, py, pz] = point;

        let in_z = (self.z - half..=self.z + half).contains(&pz);
        if !in_z {
            return false;
        }

        let in_lower = (self.x + lower - half..=self.x + lower + half).contains(&px)
            && (self.base_y..=self.base_y + self.segment_length).contains(&py);
        let in_upper = (self.x + upper - half..=self.x + upper + half).contains(&px)
            && (self.base_y + self.segment_length..=self.base_y + self.segment_length * 2.0)
                .contains(&py);

        in_lower || in_upper
    }
}

/// A thin decorative coral blade standing on a reef column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoralRect {
    /// Centre X.
    pub x: f32,
    /// Bottom Y.
    pub y: f32,
    /// Centre Z.
    pub z: f32,
    /// Blade width (X and Z).
    pub width: f32,
    /// Blade height.
    pub height: f32,
    /// Blade color.
    pub color: [f32; 3],
}

impl CoralRect {
    /// Column the blade stands on.
    #[must_use]
    pub fn column(&self) -> (i32, i32) {
        (self.x.floor() as i32, self.z.floor() as i32)
    }
}

/// Rectangular sub-area generated as a dense coral reef.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReefRegion {
    /// Min X corner.
    pub x0: i32,
    /// Min Z corner.
    pub z0: i32,
    /// Extent along X.
    pub width: i32,
    /// Extent along Z.
    pub depth: i32,
}

impl ReefRegion {
    /// Returns true if the column lies in the region.
    #[must_use]
    pub const fn contains(&self, x: i32, z: i32) -> bool {
        x >= self.x0 && x < self.x0 + self.width && z >= self.z0 && z < self.z0 + self.depth
    }

    /// Distance from the region centre, normalized to the region extents.
    ///
    /// 0 at the centre, 0.5 at the middle of each edge.
    #[must_use]
    pub fn normalized_distance(&self, x: i32, z: i32) -> f64 {
        let nx = f64::from(x - self.x0) / f64::from(self.width).max(1.0);
        let nz = f64::from(z - self.z0) / f64::from(self.depth).max(1.0);
        let dx = nx - 0.5;
        let dz = nz - 0.5;
        (dx * dx + dz * dz).sqrt()
    }

    /// Radial falloff `1 - min(1, distance * falloff)`.
    #[must_use]
    pub fn radial_falloff(&self, x: i32, z: i32, falloff: f64) -> f64 {
        1.0 - (self.normalized_distance(x, z) * falloff).min(1.0)
    }

    /// Iterates every column of the region in raster order.
    pub fn columns(&self) -> impl Iterator<Item = (i32, i32)> {
        let (x0, z0, width, depth) = (self.x0, self.z0, self.width, self.depth);
        (x0..x0 + width).flat_map(move |x| (z0..z0 + depth).map(move |z| (x, z)))
    }
}

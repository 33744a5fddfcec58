//! # Perlin Noise Implementation
//!
//! Classic 2D gradient noise over a shuffled permutation table.
//!
//! ## Determinism Guarantee
//!
//! Given the same [`PermutationTable`], [`PerlinNoise::sample`] produces
//! **exactly** the same values on any platform, any time. The table itself
//! is built from a [`WorldSeed`] through ChaCha8, so the same seed always
//! yields the same seabed shape.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// World seed for deterministic generation.
///
/// All structural (shape) randomness derives from this seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WorldSeed(u64);

impl WorldSeed {
    /// Creates a new world seed.
    #[inline]
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Draws a fresh seed from OS entropy.
    #[must_use]
    pub fn random() -> Self {
        Self(ChaCha8Rng::from_entropy().gen())
    }

    /// Returns the raw seed value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl Default for WorldSeed {
    fn default() -> Self {
        Self(0x5EA_BED5)
    }
}

/// Permutation table backing gradient selection.
///
/// 256 entries, stored twice so that `perm[i + 1]` never needs wrapping.
#[derive(Clone, PartialEq, Eq)]
pub struct PermutationTable {
    perm: [u8; 512],
}

impl PermutationTable {
    /// Number of distinct entries in the table.
    pub const SIZE: usize = 256;

    /// Shuffles the identity permutation with a seeded ChaCha8 stream.
    #[must_use]
    pub fn from_seed(seed: WorldSeed) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed.value());
        Self::shuffled(&mut rng)
    }

    /// Shuffles the identity permutation with OS entropy.
    ///
    /// Two tables built this way will almost never agree.
    #[must_use]
    pub fn random() -> Self {
        Self::shuffled(&mut ChaCha8Rng::from_entropy())
    }

    /// Builds a table from explicit values.
    ///
    /// Values do not have to form a permutation; every `u8` is a valid index.
    #[must_use]
    pub fn from_values(values: &[u8; Self::SIZE]) -> Self {
        let mut perm = [0u8; 512];
        perm[..Self::SIZE].copy_from_slice(values);
        perm[Self::SIZE..].copy_from_slice(values);
        Self { perm }
    }

    fn shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut values: [u8; Self::SIZE] = std::array::from_fn(|i| i as u8);
        values.shuffle(rng);
        Self::from_values(&values)
    }

    /// The 256 source entries (the first half of the doubled table).
    #[must_use]
    pub fn values(&self) -> &[u8] {
        &self.perm[..Self::SIZE]
    }

    #[inline]
    fn get(&self, index: usize) -> u8 {
        self.perm[index & 511]
    }
}

impl std::fmt::Debug for PermutationTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PermutationTable")
            .field("head", &&self.perm[..8])
            .finish_non_exhaustive()
    }
}

/// 2D Perlin noise field.
///
/// Produces smooth, continuous values in `[-1, 1]`. Exactly zero on every
/// integer lattice point.
///
/// # Example
///
/// ```rust
/// use abyss_procedural::noise::{PerlinNoise, WorldSeed};
///
/// let noise = PerlinNoise::new(WorldSeed::new(42));
/// let value = noise.sample(10.3, 4.7);
/// assert!((-1.0..=1.0).contains(&value));
/// ```
#[derive(Clone, Debug)]
pub struct PerlinNoise {
    table: PermutationTable,
}

impl PerlinNoise {
    /// Creates a noise field from a seed.
    #[must_use]
    pub fn new(seed: WorldSeed) -> Self {
        Self::from_table(PermutationTable::from_seed(seed))
    }

    /// Creates a noise field over an existing permutation table.
    #[must_use]
    pub fn from_table(table: PermutationTable) -> Self {
        Self { table }
    }

    /// Returns the permutation table.
    #[must_use]
    pub fn table(&self) -> &PermutationTable {
        &self.table
    }

    /// Samples 2D Perlin noise at the given coordinates.
    ///
    /// Any finite input is accepted; the lattice wraps every 256 units.
    #[must_use]
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let x_floor = x.floor();
        let y_floor = y.floor();
        let xi = (x_floor as i64 & 255) as usize;
        let yi = (y_floor as i64 & 255) as usize;
        let xf = x - x_floor;
        let yf = y - y_floor;

        let u = fade(xf);
        let v = fade(yf);

        let aa = self.table.get(xi) as usize + yi;
        let ab = aa + 1;
        let ba = self.table.get(xi + 1) as usize + yi;
        let bb = ba + 1;

        let bottom = lerp(
            grad(self.table.get(aa), xf, yf),
            grad(self.table.get(ba), xf - 1.0, yf),
            u,
        );
        let top = lerp(
            grad(self.table.get(ab), xf, yf - 1.0),
            grad(self.table.get(bb), xf - 1.0, yf - 1.0),
            u,
        );
        lerp(bottom, top, v)
    }
}

/// Quintic fade curve `6t^5 - 15t^4 + 10t^3`.
#[inline]
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Four diagonal gradients keyed by the low two bits of the hash.
#[inline]
fn grad(hash: u8, x: f64, y: f64) -> f64 {
    let h = hash & 3;
    let (u, v) = if h < 2 { (x, y) } else { (y, x) };
    let u = if h & 1 == 0 { u } else { -u };
    let v = if h & 2 == 0 { v } else { -v };
    u + v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let seed = WorldSeed::new(12345);
        let noise1 = PerlinNoise::new(seed);
        let noise2 = PerlinNoise::new(seed);

        for i in 0..100 {
            let x = f64::from(i) * 0.1;
            let y = f64::from(i) * 0.17;
            assert_eq!(noise1.sample(x, y), noise2.sample(x, y));
        }
    }

    #[test]
    fn test_same_table_same_field() {
        let table = PermutationTable::random();
        let a = PerlinNoise::from_table(table.clone());
        let b = PerlinNoise::from_table(table);

        for i in -50..50 {
            let x = f64::from(i) * 0.37;
            let y = f64::from(i) * -0.21 + 3.3;
            assert_eq!(a.sample(x, y), b.sample(x, y));
        }
    }

    #[test]
    fn test_different_seeds_different_tables() {
        let a = PermutationTable::from_seed(WorldSeed::new(1));
        let b = PermutationTable::from_seed(WorldSeed::new(2));
        assert_ne!(a, b);
    }

    #[test]
    fn test_table_is_permutation() {
        let table = PermutationTable::from_seed(WorldSeed::new(7));
        let mut seen = [false; 256];
        for &v in table.values() {
            assert!(!seen[v as usize], "duplicate entry {v}");
            seen[v as usize] = true;
        }
        assert_eq!(table.get(300), table.get(44));
    }

    #[test]
    fn test_range() {
        let noise = PerlinNoise::new(WorldSeed::new(42));

        for i in 0..10_000 {
            let x = f64::from(i) * 0.1 - 500.0;
            let y = f64::from(i) * 0.13 - 650.0;
            let value = noise.sample(x, y);
            assert!(
                (-1.0 - 1e-9..=1.0 + 1e-9).contains(&value),
                "Value {value} out of range at ({x}, {y})"
            );
        }
    }

    #[test]
    fn test_zero_on_lattice() {
        let noise = PerlinNoise::new(WorldSeed::new(99));
        for x in -5..5 {
            for y in -5..5 {
                assert_eq!(noise.sample(f64::from(x), f64::from(y)), 0.0);
            }
        }
    }

    #[test]
    fn test_no_seam_across_cells() {
        let noise = PerlinNoise::new(WorldSeed::new(3));
        let eps = 1e-9;

        for k in 1..20 {
            let edge = f64::from(k);
            for j in 0..10 {
                let y = f64::from(j) * 0.31 + 0.05;
                let left = noise.sample(edge - eps, y);
                let right = noise.sample(edge + eps, y);
                assert!((left - right).abs() < 1e-6, "seam at x={edge}, y={y}");

                let below = noise.sample(y, edge - eps);
                let above = noise.sample(y, edge + eps);
                assert!((below - above).abs() < 1e-6, "seam at y={edge}, x={y}");
            }
        }
    }

    #[test]
    fn test_wraps_every_256() {
        let noise = PerlinNoise::new(WorldSeed::new(5));
        let a = noise.sample(3.25, 7.5);
        let b = noise.sample(3.25 + 256.0, 7.5 - 256.0);
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn test_grad_directions() {
        assert_eq!(grad(0, 0.25, 0.5), 0.75);
        assert_eq!(grad(1, 0.25, 0.5), 0.25);
        assert_eq!(grad(2, 0.25, 0.5), 0.25);
        assert_eq!(grad(3, 0.25, 0.5), -0.75);
        assert_eq!(grad(7, 0.25, 0.5), grad(3, 0.25, 0.5));
    }
}

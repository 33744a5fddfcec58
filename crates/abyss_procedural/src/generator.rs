//! # World Generator
//!
//! Strict ordered pipeline, each pass reading what the previous one wrote:
//!
//! 1. **Terrain**: sand columns from remapped noise, recorded in the height map
//! 2. **Dressing**: coral/rock on the surface plus seaweed strands and clusters
//! 3. **Reef**: radially masked coral in a centred region
//! 4. **Patch**: one strand per column in the far corner
//! 5. **Caves**: subtractive tunnels that leave the height map untouched
//! 6. **Spawn**: first open sand column in raster order
//!
//! ## Two random sources
//!
//! Shape comes from the permutation table, built from the structural
//! [`WorldSeed`]. Decoration identity (coral colors, clusters, tunnel
//! heights, blade jitter) comes from a separate ChaCha8 stream. Pinning one
//! seed and leaving the other to entropy keeps the terrain fixed while the
//! dressing varies, or the other way round.

use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::WorldConfig;
use crate::decoration::{CoralRect, ReefRegion, Seaweed};
use crate::noise::{PerlinNoise, WorldSeed};
use crate::voxel::BlockType;
use crate::world::SeabedWorld;

/// Runs the generation pipeline for one configuration.
pub struct WorldGenerator<'a> {
    config: &'a WorldConfig,
    seed: WorldSeed,
    noise: PerlinNoise,
    rng: ChaCha8Rng,
}

impl<'a> WorldGenerator<'a> {
    /// Builds the noise field and decoration stream for `config`.
    ///
    /// Absent seeds are drawn from entropy.
    #[must_use]
    pub fn new(config: &'a WorldConfig) -> Self {
        let seed = config.seed.map_or_else(WorldSeed::random, WorldSeed::new);
        let rng = config
            .decoration_seed
            .map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64);
        Self {
            config,
            seed,
            noise: PerlinNoise::new(seed),
            rng,
        }
    }

    /// Structural seed in use.
    #[must_use]
    pub const fn seed(&self) -> WorldSeed {
        self.seed
    }

    /// The shared structural noise field.
    #[must_use]
    pub const fn noise(&self) -> &PerlinNoise {
        &self.noise
    }

    /// An empty world sized for this configuration.
    #[must_use]
    pub fn empty_world(&self) -> SeabedWorld {
        SeabedWorld::empty(self.config.map_size, self.config.max_height, self.seed)
    }

    /// Runs every pass and returns the finished world.
    #[must_use]
    pub fn generate(mut self) -> SeabedWorld {
        let started = Instant::now();
        let mut world = self.empty_world();

        self.terrain_pass(&mut world);
        self.dressing_pass(&mut world);
        self.reef_pass(&mut world);
        self.patch_pass(&mut world);
        self.cave_pass(&mut world);
        self.place_spawn(&mut world);

        tracing::info!(
            "Generated {}x{} seabed (seed {:#x}): {} blocks, {} seaweeds, {} coral rects in {:?}",
            world.map_size(),
            world.map_size(),
            self.seed.value(),
            world.voxels.len(),
            world.seaweeds.len(),
            world.coral_rects.len(),
            started.elapsed()
        );
        world
    }

    /// Column height `max(1, round(1 + amplitude * (n * 0.5 + 0.5)))`.
    #[must_use]
    pub fn terrain_height(&self, x: i32, z: i32) -> i32 {
        let terrain = &self.config.terrain;
        let n = self
            .noise
            .sample(f64::from(x) * terrain.scale, f64::from(z) * terrain.scale);
        ((1.0 + terrain.amplitude * (n * 0.5 + 0.5)).round() as i32).max(1)
    }

    #[inline]
    fn sample_offset(&self, x: i32, z: i32, frequency: f64, offset: f64) -> f64 {
        self.noise
            .sample(f64::from(x) * frequency + offset, f64::from(z) * frequency + offset)
    }

    fn columns(&self) -> impl Iterator<Item = (i32, i32)> {
        let size = self.config.map_size.min(i32::MAX as u32) as i32;
        (0..size).flat_map(move |x| (0..size).map(move |z| (x, z)))
    }

    /// Lays sand from y = 0 to `h - 1` and records `h` for every column.
    pub fn terrain_pass(&self, world: &mut SeabedWorld) {
        let mut placed = 0;
        for (x, z) in self.columns() {
            let h = self.terrain_height(x, z);
            for y in 0..h {
                world.voxels.set_block(x, y, z, BlockType::Sand);
            }
            world.heights.set_height(x, z, h);
            placed += h as usize;
        }
        world.report.terrain_blocks = placed;
        tracing::debug!("Terrain pass: {} sand blocks", placed);
    }

    /// Surface coral/rock and seaweed placement.
    pub fn dressing_pass(&mut self, world: &mut SeabedWorld) {
        let cfg = self.config;
        let dressing_freq = cfg.terrain.scale * cfg.dressing.frequency;
        let vegetation_freq = cfg.terrain.scale * cfg.vegetation.frequency;
        let max_height = cfg.max_height;

        let (mut corals, mut rocks, mut strands) = (0, 0, 0);
        let columns: Vec<_> = self.columns().collect();

        for (x, z) in columns {
            let top = world.heights.height_at(x, z);

            let d = self.sample_offset(x, z, dressing_freq, cfg.dressing.offset);
            if d > cfg.dressing.coral_threshold && top + 2 < max_height {
                let coral = self.pick_coral();
                world.voxels.set_block(x, top, z, coral);
                world.voxels.set_block(x, top + 1, z, coral);
                corals += 2;
            } else if d > cfg.dressing.rock_threshold {
                world.voxels.set_block(x, top, z, BlockType::Rock);
                rocks += 1;
            }

            let v = self.sample_offset(x, z, vegetation_freq, cfg.vegetation.offset);
            if v > cfg.vegetation.threshold && top + 3 < max_height {
                world.seaweeds.push(Seaweed::anchored(
                    x,
                    z,
                    top,
                    &cfg.vegetation.seaweed,
                    &mut self.rng,
                ));
                strands += 1;

                if chance(&mut self.rng, cfg.vegetation.cluster_probability) {
                    let extra = pick_u32(
                        &mut self.rng,
                        cfg.vegetation.cluster_min,
                        cfg.vegetation.cluster_max,
                    );
                    for _ in 0..extra {
                        let nx = x + self.rng.gen_range(-1..=1);
                        let nz = z + self.rng.gen_range(-1..=1);
                        if !world.in_bounds(nx, nz) {
                            continue;
                        }
                        let surface = world.heights.height_or(nx, nz, top);
                        if surface + 3 >= max_height {
                            continue;
                        }
                        world.seaweeds.push(Seaweed::anchored(
                            nx,
                            nz,
                            surface,
                            &cfg.vegetation.seaweed,
                            &mut self.rng,
                        ));
                        strands += 1;
                    }
                }
            }
        }

        world.report.dressing_corals = corals;
        world.report.rocks = rocks;
        world.report.seaweeds = strands;
        tracing::debug!(
            "Dressing pass: {} coral blocks, {} rocks, {} seaweeds",
            corals,
            rocks,
            strands
        );
    }

    /// Centred reef region, clamped to the map.
    #[must_use]
    pub fn reef_region(&self) -> ReefRegion {
        let map = self.config.map_size.min(i32::MAX as u32) as i32;
        let reef = &self.config.reef;
        let wanted = (reef.max_size.min(i32::MAX as u32) as i32)
            .min(map)
            .max(reef.min_size.min(i32::MAX as u32) as i32);
        let side = if wanted > map {
            tracing::warn!("Reef size {} exceeds map size {}, clamping", wanted, map);
            map
        } else {
            wanted
        };
        let origin = (map - side) / 2;
        ReefRegion {
            x0: origin,
            z0: origin,
            width: side,
            depth: side,
        }
    }

    /// Radially masked coral growth inside [`Self::reef_region`].
    pub fn reef_pass(&mut self, world: &mut SeabedWorld) {
        let cfg = self.config;
        let reef = &cfg.reef;
        let region = self.reef_region();
        world.reef = Some(region);

        let jitter = reef.jitter.clamp(0.0, 0.98);
        let (mut corals, mut rects) = (0, 0);

        for (x, z) in region.columns() {
            let ring = region.radial_falloff(x, z, reef.falloff);
            let n = self.sample_offset(x, z, reef.scale, reef.offset);
            let mask = n * reef.noise_weight + ring * reef.radial_weight;
            if mask <= reef.threshold {
                continue;
            }

            let top = world.heights.height_at(x, z);
            let coral = self.pick_coral();
            if top + 2 < cfg.max_height {
                world.voxels.set_block(x, top, z, coral);
                corals += 1;
                if chance(&mut self.rng, reef.extension_probability) {
                    world.voxels.set_block(x, top + 1, z, coral);
                    corals += 1;
                }
            }

            for _ in 0..pick_u32(&mut self.rng, reef.rects_min, reef.rects_max) {
                let ox = (self.rng.gen::<f32>() - 0.5) * jitter;
                let oz = (self.rng.gen::<f32>() - 0.5) * jitter;
                let height = uniform(&mut self.rng, reef.rect_height);
                let width = uniform(&mut self.rng, reef.rect_width);
                world.coral_rects.push(CoralRect {
                    x: x as f32 + 0.5 + ox,
                    y: top as f32 + 0.5,
                    z: z as f32 + 0.5 + oz,
                    width,
                    height,
                    color: coral.color(),
                });
                rects += 1;
            }
        }

        world.report.reef_corals = corals;
        world.report.coral_rects = rects;
        tracing::debug!(
            "Reef pass: region {:?}, {} coral blocks, {} coral rects",
            region,
            corals,
            rects
        );
    }

    /// One seaweed strand per column of the corner garden.
    pub fn patch_pass(&mut self, world: &mut SeabedWorld) {
        let cfg = self.config;
        let map = cfg.map_size.min(i32::MAX as u32) as i32;
        let patch = &cfg.patch;
        let clamp_side = |side: u32, axis: &str| {
            let side = side.min(i32::MAX as u32) as i32;
            if side > map {
                tracing::warn!("Patch {} {} exceeds map size {}, clamping", axis, side, map);
                map
            } else {
                side
            }
        };
        let width = clamp_side(patch.width, "width");
        let depth = clamp_side(patch.depth, "depth");
        let (x0, z0) = (map - width, map - depth);

        let mut strands = 0;
        for x in x0..map {
            for z in z0..map {
                let top = world.heights.height_at(x, z);
                world.seaweeds.push(Seaweed::anchored(
                    x,
                    z,
                    top,
                    &cfg.vegetation.seaweed,
                    &mut self.rng,
                ));
                strands += 1;
            }
        }

        world.report.patch_seaweeds = strands;
        tracing::debug!("Patch pass: {} seaweeds at ({}, {})", strands, x0, z0);
    }

    /// Hollows tunnels under tall columns. The height map is not touched.
    pub fn cave_pass(&mut self, world: &mut SeabedWorld) {
        let cfg = self.config;
        let caves = &cfg.caves;
        let (mut columns, mut removed) = (0, 0);
        let candidates: Vec<_> = self.columns().collect();

        for (x, z) in candidates {
            let top = world.heights.height_at(x, z);
            if top <= caves.min_surface {
                continue;
            }
            if self.sample_offset(x, z, caves.scale, caves.offset) <= caves.threshold {
                continue;
            }

            let tunnel = pick_i32(&mut self.rng, caves.tunnel_min, caves.tunnel_max);
            let start = self.rng.gen_range(1..=(top - tunnel).max(1));
            for y in start..top.min(start + tunnel) {
                if world.voxels.remove_block(x, y, z).is_some() {
                    removed += 1;
                }
            }
            columns += 1;
        }

        world.report.carved_columns = columns;
        world.report.carved_blocks = removed;
        tracing::debug!("Cave pass: {} columns, {} blocks removed", columns, removed);
    }

    /// First interior column whose top is sand with only sand tops around it.
    ///
    /// Returns the point `height_above_surface` over the centre of that column.
    #[must_use]
    pub fn find_spawn(&self, world: &SeabedWorld) -> Option<[f32; 3]> {
        let spawn = &self.config.spawn;
        let map = world.map_size();
        (1..map - 1)
            .flat_map(|x| (1..map - 1).map(move |z| (x, z)))
            .find(|&(x, z)| {
                world.top_block_id(x, z) == BlockType::Sand
                    && !world.has_obstacle_near(x, z, spawn.obstacle_radius)
            })
            .map(|(x, z)| {
                [
                    x as f32 + 0.5,
                    world.height_at(x, z) as f32 + spawn.height_above_surface,
                    z as f32 + 0.5,
                ]
            })
    }

    /// Stores [`Self::find_spawn`] (or the fallback point) in the world.
    pub fn place_spawn(&self, world: &mut SeabedWorld) {
        if let Some(spawn) = self.find_spawn(world) {
            world.spawn = spawn;
            world.report.spawn_fallback = false;
        } else {
            tracing::warn!("No open sand column found, using fallback spawn");
            world.spawn = self.config.spawn.fallback;
            world.report.spawn_fallback = true;
        }
    }

    fn pick_coral(&mut self) -> BlockType {
        BlockType::CORALS[self.rng.gen_range(0..BlockType::CORALS.len())]
    }
}

/// `random() < p`, tolerant of probabilities outside `[0, 1]`.
#[inline]
fn chance<R: Rng>(rng: &mut R, p: f64) -> bool {
    rng.gen::<f64>() < p
}

fn pick_u32<R: Rng>(rng: &mut R, min: u32, max: u32) -> u32 {
    if max <= min {
        min
    } else {
        rng.gen_range(min..=max)
    }
}

fn pick_i32<R: Rng>(rng: &mut R, min: i32, max: i32) -> i32 {
    if max <= min {
        min
    } else {
        rng.gen_range(min..=max)
    }
}

fn uniform<R: Rng>(rng: &mut R, [min, max]: [f32; 2]) -> f32 {
    if max > min {
        rng.gen_range(min..max)
    } else {
        min
    }
}

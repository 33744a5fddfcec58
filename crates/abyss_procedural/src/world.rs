//! # Seabed World
//!
//! The generated world: voxel occupancy, the terrain height map, decoration
//! records and the spawn point. Produced by
//! [`WorldGenerator`](crate::generator::WorldGenerator) and queried every
//! frame by collision, shading and the minimap.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::decoration::{CoralRect, ReefRegion, Seaweed};
use crate::height_map::HeightMap;
use crate::noise::WorldSeed;
use crate::voxel::{BlockType, VoxelStore};

/// Headroom above the surface scanned by [`SeabedWorld::top_block_id`].
pub const TOP_SCAN_HEADROOM: i32 = 3;

/// Counters collected while generating a world.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Sand blocks laid by the terrain pass.
    pub terrain_blocks: usize,
    /// Coral blocks from surface dressing.
    pub dressing_corals: usize,
    /// Rock blocks from surface dressing.
    pub rocks: usize,
    /// Coral blocks grown by the reef pass.
    pub reef_corals: usize,
    /// Seaweed strands from the vegetation pass (clusters included).
    pub seaweeds: usize,
    /// Seaweed strands from the dense patch.
    pub patch_seaweeds: usize,
    /// Decorative coral blades.
    pub coral_rects: usize,
    /// Columns hollowed by the cave pass.
    pub carved_columns: usize,
    /// Blocks removed by the cave pass.
    pub carved_blocks: usize,
    /// True if the spawn search fell back to the fixed point.
    pub spawn_fallback: bool,
}

/// A fully generated seabed.
#[derive(Clone, Debug)]
pub struct SeabedWorld {
    pub(crate) voxels: VoxelStore,
    pub(crate) heights: HeightMap,
    pub(crate) seaweeds: Vec<Seaweed>,
    pub(crate) coral_rects: Vec<CoralRect>,
    pub(crate) reef: Option<ReefRegion>,
    pub(crate) spawn: [f32; 3],
    pub(crate) report: GenerationReport,
    map_size: i32,
    max_height: i32,
    seed: WorldSeed,
}

impl SeabedWorld {
    /// Creates an empty world over a `map_size x map_size` grid.
    #[must_use]
    pub fn empty(map_size: u32, max_height: i32, seed: WorldSeed) -> Self {
        let side = map_size.min(i32::MAX as u32) as usize;
        Self {
            voxels: VoxelStore::with_capacity(side * side * 4),
            heights: HeightMap::new(map_size, map_size),
            seaweeds: Vec::new(),
            coral_rects: Vec::new(),
            reef: None,
            spawn: [0.0; 3],
            report: GenerationReport::default(),
            map_size: map_size.min(i32::MAX as u32) as i32,
            max_height,
            seed,
        }
    }

    /// Map side length in columns.
    #[inline]
    #[must_use]
    pub const fn map_size(&self) -> i32 {
        self.map_size
    }

    /// Highest swimmable Y.
    #[inline]
    #[must_use]
    pub const fn max_height(&self) -> i32 {
        self.max_height
    }

    /// Structural seed the terrain was built from.
    #[inline]
    #[must_use]
    pub const fn seed(&self) -> WorldSeed {
        self.seed
    }

    /// Returns true if the column lies inside the map.
    #[inline]
    #[must_use]
    pub const fn in_bounds(&self, x: i32, z: i32) -> bool {
        x >= 0 && x < self.map_size && z >= 0 && z < self.map_size
    }

    /// Voxel occupancy.
    #[must_use]
    pub const fn voxels(&self) -> &VoxelStore {
        &self.voxels
    }

    /// Terrain height map.
    #[must_use]
    pub const fn heights(&self) -> &HeightMap {
        &self.heights
    }

    /// O(1) collision query.
    #[inline]
    #[must_use]
    pub fn is_occupied(&self, x: i32, y: i32, z: i32) -> bool {
        self.voxels.is_occupied(x, y, z)
    }

    /// Collision query for a world-space point.
    #[inline]
    #[must_use]
    pub fn is_occupied_at(&self, point: [f32; 3]) -> bool {
        self.voxels.is_occupied_world(point[0], point[1], point[2])
    }

    /// Terrain surface height (1 for columns without an entry).
    #[inline]
    #[must_use]
    pub fn height_at(&self, x: i32, z: i32) -> i32 {
        self.heights.height_at(x, z)
    }

    /// What is seen looking straight down the column.
    ///
    /// Scans from `height + 3` (capped at the max height) down to 0 and
    /// returns the first block, or sand if the column is empty.
    #[must_use]
    pub fn top_block_id(&self, x: i32, z: i32) -> BlockType {
        let start = (self.height_at(x, z) + TOP_SCAN_HEADROOM).min(self.max_height);
        self.voxels
            .top_block_from(x, z, start)
            .unwrap_or(BlockType::Sand)
    }

    /// Returns true if any in-map column within `radius` (square) has a
    /// non-sand top block.
    #[must_use]
    pub fn has_obstacle_near(&self, x: i32, z: i32, radius: i32) -> bool {
        (-radius..=radius).any(|dx| {
            (-radius..=radius).any(|dz| {
                let (cx, cz) = (x + dx, z + dz);
                self.in_bounds(cx, cz) && self.top_block_id(cx, cz) != BlockType::Sand
            })
        })
    }

    /// Where the diver starts.
    #[inline]
    #[must_use]
    pub const fn spawn_position(&self) -> [f32; 3] {
        self.spawn
    }

    /// Seaweed strands.
    #[must_use]
    pub fn seaweeds(&self) -> &[Seaweed] {
        &self.seaweeds
    }

    /// Decorative coral blades.
    #[must_use]
    pub fn coral_rects(&self) -> &[CoralRect] {
        &self.coral_rects
    }

    /// The reef region, once the reef pass has run.
    #[must_use]
    pub const fn reef_region(&self) -> Option<ReefRegion> {
        self.reef
    }

    /// Generation counters.
    #[must_use]
    pub const fn report(&self) -> &GenerationReport {
        &self.report
    }

    /// Stacks a random pillar on every in-map column of the footprint.
    ///
    /// Each column gets `1..=max_height` blocks of one palette entry, laid
    /// from y = 0 upward over whatever is there. Returns the number of
    /// blocks written. The height map is left alone.
    #[allow(clippy::too_many_arguments)]
    pub fn place_random_structure<R: Rng>(
        &mut self,
        origin_x: i32,
        origin_z: i32,
        width: u32,
        depth: u32,
        max_height: u32,
        palette: &[BlockType],
        rng: &mut R,
    ) -> usize {
        if palette.is_empty() || max_height == 0 {
            return 0;
        }
        let max_height = max_height.min(i32::MAX as u32) as i32;
        let mut placed = 0;

        for dx in 0..width.min(i32::MAX as u32) as i32 {
            for dz in 0..depth.min(i32::MAX as u32) as i32 {
                let (x, z) = (origin_x.saturating_add(dx), origin_z.saturating_add(dz));
                let height = rng.gen_range(1..=max_height);
                let Some(&block) = palette.choose(rng) else {
                    continue;
                };
                if !self.in_bounds(x, z) {
                    continue;
                }
                for y in 0..height {
                    self.voxels.set_block(x, y, z, block);
                }
                placed += height as usize;
            }
        }

        tracing::debug!(
            "Placed {}x{} structure at ({}, {}): {} blocks",
            width,
            depth,
            origin_x,
            origin_z,
            placed
        );
        placed
    }
}

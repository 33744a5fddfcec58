//! # Voxel Store
//!
//! Sparse mapping from integer `(x, y, z)` to a [`BlockType`].
//!
//! Presence means solid, absence means open water. Every `i32` coordinate
//! is its own key; there is no aliasing between distant cells.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Block types placed on the seabed.
///
/// The numeric ids are stable and double as the minimap/renderer lookup key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum BlockType {
    /// Demo red block (structure palettes).
    DemoRed = 1,
    /// Demo green block (structure palettes).
    DemoGreen = 2,
    /// Demo blue block (structure palettes).
    DemoBlue = 3,
    /// Base seabed sand.
    Sand = 10,
    /// Rock outcrop.
    Rock = 11,
    /// Pink coral.
    CoralPink = 12,
    /// Yellow coral.
    CoralYellow = 13,
    /// Blue coral.
    CoralBlue = 14,
    /// Purple coral.
    CoralPurple = 15,
    /// Seaweed green.
    SeaweedGreen = 16,
}

impl BlockType {
    /// Coral palette used by surface dressing and the reef.
    pub const CORALS: [Self; 4] = [
        Self::CoralPink,
        Self::CoralYellow,
        Self::CoralBlue,
        Self::CoralPurple,
    ];

    /// Every block type, in id order.
    pub const ALL: [Self; 10] = [
        Self::DemoRed,
        Self::DemoGreen,
        Self::DemoBlue,
        Self::Sand,
        Self::Rock,
        Self::CoralPink,
        Self::CoralYellow,
        Self::CoralBlue,
        Self::CoralPurple,
        Self::SeaweedGreen,
    ];

    /// Numeric block id.
    #[inline]
    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Converts a raw id back into a block type.
    #[must_use]
    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Self::DemoRed),
            2 => Some(Self::DemoGreen),
            3 => Some(Self::DemoBlue),
            10 => Some(Self::Sand),
            11 => Some(Self::Rock),
            12 => Some(Self::CoralPink),
            13 => Some(Self::CoralYellow),
            14 => Some(Self::CoralBlue),
            15 => Some(Self::CoralPurple),
            16 => Some(Self::SeaweedGreen),
            _ => None,
        }
    }

    /// Display color (linear RGB, 0-1).
    #[must_use]
    pub const fn color(self) -> [f32; 3] {
        match self {
            Self::DemoRed => [0.8, 0.2, 0.2],
            Self::DemoGreen => [0.2, 0.8, 0.2],
            Self::DemoBlue => [0.2, 0.2, 0.8],
            Self::Sand => [0.85, 0.75, 0.55],
            Self::Rock => [0.4, 0.4, 0.45],
            Self::CoralPink => [1.0, 0.4, 0.6],
            Self::CoralYellow => [1.0, 0.9, 0.3],
            Self::CoralBlue => [0.3, 0.6, 1.0],
            Self::CoralPurple => [0.8, 0.3, 0.9],
            Self::SeaweedGreen => [0.1, 0.6, 0.2],
        }
    }

    /// Hardness/class tag consumed by gameplay code.
    #[must_use]
    pub const fn hardness(self) -> u8 {
        match self {
            Self::DemoRed | Self::Sand => 1,
            Self::DemoGreen
            | Self::Rock
            | Self::CoralPink
            | Self::CoralYellow
            | Self::CoralBlue
            | Self::CoralPurple => 2,
            Self::SeaweedGreen => 3,
            Self::DemoBlue => 4,
        }
    }

    /// Returns true for the four coral colors.
    #[must_use]
    pub const fn is_coral(self) -> bool {
        matches!(
            self,
            Self::CoralPink | Self::CoralYellow | Self::CoralBlue | Self::CoralPurple
        )
    }
}

/// Integer voxel coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VoxelPos {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate (up).
    pub y: i32,
    /// Z coordinate.
    pub z: i32,
}

impl VoxelPos {
    /// Creates a voxel coordinate.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Truncates a world-space point to the voxel containing it.
    ///
    /// Truncation is toward zero, matching how gameplay code addresses cells.
    #[inline]
    #[must_use]
    pub fn from_world(x: f32, y: f32, z: f32) -> Self {
        Self::new(x as i32, y as i32, z as i32)
    }
}

/// Sparse voxel storage.
///
/// At most one block per coordinate: writes overwrite.
#[derive(Clone, Debug, Default)]
pub struct VoxelStore {
    blocks: HashMap<VoxelPos, BlockType>,
}

impl VoxelStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store sized for roughly `capacity` blocks.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            blocks: HashMap::with_capacity(capacity),
        }
    }

    /// Inserts or overwrites a block, returning the previous occupant.
    #[inline]
    pub fn set_block(&mut self, x: i32, y: i32, z: i32, block: BlockType) -> Option<BlockType> {
        self.blocks.insert(VoxelPos::new(x, y, z), block)
    }

    /// Removes a block if present. Removing an empty cell is a no-op.
    #[inline]
    pub fn remove_block(&mut self, x: i32, y: i32, z: i32) -> Option<BlockType> {
        self.blocks.remove(&VoxelPos::new(x, y, z))
    }

    /// Returns the block at a coordinate.
    #[inline]
    #[must_use]
    pub fn block_at(&self, x: i32, y: i32, z: i32) -> Option<BlockType> {
        self.blocks.get(&VoxelPos::new(x, y, z)).copied()
    }

    /// O(1) occupancy test.
    #[inline]
    #[must_use]
    pub fn is_occupied(&self, x: i32, y: i32, z: i32) -> bool {
        self.blocks.contains_key(&VoxelPos::new(x, y, z))
    }

    /// Occupancy test for a world-space point (truncated to its voxel).
    #[inline]
    #[must_use]
    pub fn is_occupied_world(&self, x: f32, y: f32, z: f32) -> bool {
        self.blocks.contains_key(&VoxelPos::from_world(x, y, z))
    }

    /// First block found scanning the column from `start_y` down to 0.
    #[must_use]
    pub fn top_block_from(&self, x: i32, z: i32, start_y: i32) -> Option<BlockType> {
        (0..=start_y).rev().find_map(|y| self.block_at(x, y, z))
    }

    /// Number of stored blocks.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns true if no block is stored.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of blocks of one type.
    #[must_use]
    pub fn count_of(&self, block: BlockType) -> usize {
        self.blocks.values().filter(|&&b| b == block).count()
    }

    /// Iterates every stored block (unordered).
    pub fn iter(&self) -> impl Iterator<Item = (VoxelPos, BlockType)> + '_ {
        self.blocks
            .iter()
            .map(|(&pos, &block)| (pos, block))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distant_cells_do_not_alias() {
        let mut store = VoxelStore::new();
        store.set_block(0, 0, 0, BlockType::Sand);
        assert!(!store.is_occupied(1 << 21, 0, 0));
        assert!(!store.is_occupied(0, i32::MIN, 0));
        assert_eq!(store.block_at(0, 0, i32::MAX), None);

        assert_eq!(store.set_block(1 << 21, 0, 0, BlockType::Rock), None);
        assert_eq!(store.block_at(0, 0, 0), Some(BlockType::Sand));
        assert_eq!(store.block_at(1 << 21, 0, 0), Some(BlockType::Rock));
        assert_eq!(store.len(), 2);

        assert_eq!(store.remove_block(-(1 << 21), 0, 0), None);
        assert!(store.is_occupied(0, 0, 0));
    }

    #[test]
    fn test_iter_reports_positions() {
        let mut store = VoxelStore::new();
        store.set_block(-3, 7, i32::MAX, BlockType::CoralPink);
        let entries: Vec<_> = store.iter().collect();
        assert_eq!(entries, vec![(VoxelPos::new(-3, 7, i32::MAX), BlockType::CoralPink)]);
    }

    #[test]
    fn test_last_write_wins() {
        let mut store = VoxelStore::new();
        assert_eq!(store.set_block(1, 2, 3, BlockType::Sand), None);
        assert_eq!(store.set_block(1, 2, 3, BlockType::Rock), Some(BlockType::Sand));
        assert_eq!(store.block_at(1, 2, 3), Some(BlockType::Rock));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_twice_is_noop() {
        let mut store = VoxelStore::new();
        store.set_block(4, 0, 4, BlockType::Sand);
        assert_eq!(store.remove_block(4, 0, 4), Some(BlockType::Sand));
        assert_eq!(store.remove_block(4, 0, 4), None);
        assert!(!store.is_occupied(4, 0, 4));
        assert!(store.is_empty());
    }

    #[test]
    fn test_world_lookup_truncates() {
        let mut store = VoxelStore::new();
        store.set_block(3, 1, 7, BlockType::Rock);
        assert!(store.is_occupied_world(3.9, 1.2, 7.99));
        assert!(!store.is_occupied_world(4.0, 1.2, 7.5));
    }

    #[test]
    fn test_top_block_scan() {
        let mut store = VoxelStore::new();
        store.set_block(0, 0, 0, BlockType::Sand);
        store.set_block(0, 3, 0, BlockType::CoralBlue);
        assert_eq!(store.top_block_from(0, 0, 5), Some(BlockType::CoralBlue));
        assert_eq!(store.top_block_from(0, 0, 2), Some(BlockType::Sand));
        assert_eq!(store.top_block_from(1, 0, 5), None);
    }

    #[test]
    fn test_block_ids_round_trip() {
        for block in BlockType::ALL {
            assert_eq!(BlockType::from_id(block.id()), Some(block));
        }
        assert_eq!(BlockType::from_id(0), None);
        assert!(BlockType::CORALS.iter().all(|b| b.is_coral()));
    }
}

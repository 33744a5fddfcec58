//! # Height Map
//!
//! Per-column terrain surface height written by the terrain pass.
//!
//! Stored as a flat `[z][x]` grid over the map bounds. Columns that were
//! never written (or lie outside the map) read back as
//! [`HeightMap::DEFAULT_HEIGHT`], so queries issued before generation
//! completes are always safe.
//!
//! Cave carving never touches this map: a hollowed column keeps its
//! original surface height.

/// Per-column terrain height over a `width x depth` map.
#[derive(Clone, Debug)]
pub struct HeightMap {
    width: i32,
    depth: i32,
    heights: Vec<Option<i32>>,
}

impl HeightMap {
    /// Height reported for columns without a generated entry.
    pub const DEFAULT_HEIGHT: i32 = 1;

    /// Creates an empty height map covering `[0, width) x [0, depth)`.
    #[must_use]
    pub fn new(width: u32, depth: u32) -> Self {
        let width = width.min(i32::MAX as u32) as i32;
        let depth = depth.min(i32::MAX as u32) as i32;
        Self {
            width,
            depth,
            heights: vec![None; width as usize * depth as usize],
        }
    }

    /// Map width (x extent).
    #[inline]
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Map depth (z extent).
    #[inline]
    #[must_use]
    pub const fn depth(&self) -> i32 {
        self.depth
    }

    /// Returns true if `(x, z)` lies inside the map bounds.
    #[inline]
    #[must_use]
    pub const fn contains(&self, x: i32, z: i32) -> bool {
        x >= 0 && x < self.width && z >= 0 && z < self.depth
    }

    #[inline]
    fn index(&self, x: i32, z: i32) -> Option<usize> {
        self.contains(x, z)
            .then(|| z as usize * self.width as usize + x as usize)
    }

    /// Returns the recorded height, if the column has one.
    #[inline]
    #[must_use]
    pub fn get(&self, x: i32, z: i32) -> Option<i32> {
        self.index(x, z).and_then(|i| self.heights[i])
    }

    /// Terrain height of a column, [`Self::DEFAULT_HEIGHT`] if undefined.
    #[inline]
    #[must_use]
    pub fn height_at(&self, x: i32, z: i32) -> i32 {
        self.height_or(x, z, Self::DEFAULT_HEIGHT)
    }

    /// Terrain height of a column, or `fallback` if undefined.
    #[inline]
    #[must_use]
    pub fn height_or(&self, x: i32, z: i32, fallback: i32) -> i32 {
        self.get(x, z).unwrap_or(fallback)
    }

    /// Height of the column nearest to `(x, z)` inside the map.
    ///
    /// Out-of-range coordinates are clamped onto the border; an undefined
    /// clamped column yields `fallback`.
    #[must_use]
    pub fn clamped_height_or(&self, x: i32, z: i32, fallback: i32) -> i32 {
        if self.width == 0 || self.depth == 0 {
            return fallback;
        }
        let x = x.clamp(0, self.width - 1);
        let z = z.clamp(0, self.depth - 1);
        self.height_or(x, z, fallback)
    }

    /// Records the height of a column. Writes outside the map are ignored.
    #[inline]
    pub fn set_height(&mut self, x: i32, z: i32, height: i32) {
        if let Some(i) = self.index(x, z) {
            self.heights[i] = Some(height);
        }
    }

    /// Number of columns with a recorded height.
    #[must_use]
    pub fn defined_columns(&self) -> usize {
        self.heights.iter().filter(|h| h.is_some()).count()
    }

    /// Iterates `(x, z, height)` over every defined column in `[z][x]` order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, i32)> + '_ {
        let width = self.width.max(1) as usize;
        self.heights.iter().enumerate().filter_map(move |(i, h)| {
            h.map(|h| ((i % width) as i32, (i / width) as i32, h))
        })
    }
}

//! # Minimap Sampling
//!
//! Top-down view of the seabed: one colored cell per column, read through
//! [`SeabedWorld::top_block_id`], plus a heading marker for the viewer.
//!
//! In dynamic mode the window is `view_size` columns centred on the viewer
//! and shifted back inside the map near the edges.

use abyss_procedural::SeabedWorld;

use crate::config::MinimapConfig;
use crate::viewer::Viewer;

/// Column window shown by the minimap (half-open on both axes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MinimapWindow {
    /// First column along X.
    pub x_start: i32,
    /// First column along Z.
    pub z_start: i32,
    /// One past the last column along X.
    pub x_end: i32,
    /// One past the last column along Z.
    pub z_end: i32,
}

impl MinimapWindow {
    /// Window for a viewer column, or the whole map when `dynamic` is off.
    #[must_use]
    pub fn around(column: Option<(i32, i32)>, map_size: i32, config: &MinimapConfig) -> Self {
        let full = Self {
            x_start: 0,
            z_start: 0,
            x_end: map_size,
            z_end: map_size,
        };
        let Some((px, pz)) = column.filter(|_| config.dynamic && map_size > 0) else {
            return full;
        };

        let view = config.view_size.min(i32::MAX as u32) as i32;
        let half = view / 2;
        let axis = |p: i32| {
            let p = p.clamp(0, map_size - 1);
            let end = ((p - half).max(0).saturating_add(view)).min(map_size);
            ((end - view).max(0), end)
        };
        let (x_start, x_end) = axis(px);
        let (z_start, z_end) = axis(pz);
        Self {
            x_start,
            z_start,
            x_end,
            z_end,
        }
    }

    /// Columns along X.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.x_end - self.x_start
    }

    /// Columns along Z.
    #[must_use]
    pub const fn depth(&self) -> i32 {
        self.z_end - self.z_start
    }
}

/// Viewer marker on the minimap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinimapMarker {
    /// Cell column along X, relative to the window.
    pub cell_x: i32,
    /// Cell column along Z, relative to the window.
    pub cell_z: i32,
    /// Marker rotation in radians (`-yaw`).
    pub angle: f32,
}

/// One sampled minimap frame.
#[derive(Clone, Debug, PartialEq)]
pub struct MinimapView {
    /// Columns covered.
    pub window: MinimapWindow,
    /// Row-major colors, `window.depth()` rows of `window.width()` cells
    /// (index `(z - z_start) * width + (x - x_start)`).
    pub cells: Vec<[f32; 3]>,
    /// Viewer marker, if a viewer was supplied.
    pub marker: Option<MinimapMarker>,
    /// Pixel size of one cell.
    pub cell_size: u32,
}

impl MinimapView {
    /// Samples the top block color of every column in the window.
    #[must_use]
    pub fn sample(world: &SeabedWorld, viewer: Option<&Viewer>, config: &MinimapConfig) -> Self {
        let map = world.map_size();
        let clamped = viewer.map(|v| {
            let (x, z) = v.column();
            (x.clamp(0, (map - 1).max(0)), z.clamp(0, (map - 1).max(0)))
        });
        let window = MinimapWindow::around(clamped, map, config);

        let capacity = window.width().max(0) * window.depth().max(0);
        let mut cells = Vec::with_capacity(capacity as usize);
        for z in window.z_start..window.z_end {
            for x in window.x_start..window.x_end {
                cells.push(world.top_block_id(x, z).color());
            }
        }

        let marker = viewer.zip(clamped).map(|(v, (x, z))| MinimapMarker {
            cell_x: x - window.x_start,
            cell_z: z - window.z_start,
            angle: -v.yaw.to_radians(),
        });

        Self {
            window,
            cells,
            marker,
            cell_size: config.cell_size,
        }
    }

    /// Color of a map column, if it is inside the window.
    #[must_use]
    pub fn color_at(&self, x: i32, z: i32) -> Option<[f32; 3]> {
        let w = &self.window;
        if x < w.x_start || x >= w.x_end || z < w.z_start || z >= w.z_end {
            return None;
        }
        let index = (z - w.z_start) * w.width() + (x - w.x_start);
        self.cells.get(index as usize).copied()
    }

    /// Pixel size of the whole view.
    #[must_use]
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            self.window.width().max(0) as u32 * self.cell_size,
            self.window.depth().max(0) as u32 * self.cell_size,
        )
    }
}

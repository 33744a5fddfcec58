//! Radius culling around the viewer column.
//!
//! A column `(x, z)` is drawn iff `(x - cx)² + (z - cz)² <= r²`, where
//! `(cx, cz)` is the truncated viewer position. Decorations are tested at
//! the column containing their centre.

use crate::config::ViewConfig;
use crate::viewer::Viewer;

/// Per-frame visibility predicate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RadiusCuller {
    center: (i32, i32),
    radius_sq: i64,
    enabled: bool,
}

impl RadiusCuller {
    /// Culler centred on `center` with the given radius.
    #[must_use]
    pub fn new(center: (i32, i32), radius: i32, enabled: bool) -> Self {
        let radius = i64::from(radius.max(0));
        Self {
            center,
            radius_sq: radius * radius,
            enabled,
        }
    }

    /// Culler for a viewer under the given view settings.
    #[must_use]
    pub fn for_viewer(viewer: &Viewer, view: &ViewConfig) -> Self {
        Self::new(viewer.column(), view.draw_radius, view.culling)
    }

    /// Culler that accepts everything.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            center: (0, 0),
            radius_sq: 0,
            enabled: false,
        }
    }

    /// Returns true if culling is active.
    #[inline]
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Column visibility.
    #[inline]
    #[must_use]
    pub fn is_visible(&self, x: i32, z: i32) -> bool {
        if !self.enabled {
            return true;
        }
        let dx = i64::from(x) - i64::from(self.center.0);
        let dz = i64::from(z) - i64::from(self.center.1);
        dx * dx + dz * dz <= self.radius_sq
    }

    /// Visibility of a world-space point, by the column containing it.
    #[inline]
    #[must_use]
    pub fn is_point_visible(&self, x: f32, z: f32) -> bool {
        self.is_visible(x as i32, z as i32)
    }
}

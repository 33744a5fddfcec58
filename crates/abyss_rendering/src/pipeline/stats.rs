//! Frame statistics.

/// Counters from one assembled frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameStats {
    /// Voxels that passed the radius cull.
    pub visible_voxels: u32,
    /// Voxels rejected by the radius cull.
    pub culled_voxels: u32,
    /// Seaweed strands drawn (two boxes each).
    pub visible_seaweeds: u32,
    /// Coral blades drawn.
    pub visible_coral_rects: u32,
    /// Decorations rejected by the radius cull.
    pub culled_decorations: u32,
    /// Bubbles in the snapshot.
    pub bubbles: u32,
    /// CPU time spent assembling the frame, in milliseconds.
    pub build_time_ms: f32,
}

impl FrameStats {
    /// Share of voxels that were drawn, in `[0, 1]`.
    #[must_use]
    pub fn visible_ratio(&self) -> f32 {
        let total = self.visible_voxels + self.culled_voxels;
        if total > 0 {
            self.visible_voxels as f32 / total as f32
        } else {
            0.0
        }
    }

    /// Total box instances a renderer has to draw.
    #[must_use]
    pub const fn instances(&self) -> u32 {
        self.visible_voxels + self.visible_seaweeds * 2 + self.visible_coral_rects
    }
}

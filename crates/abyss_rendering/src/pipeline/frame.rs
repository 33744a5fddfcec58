//! Render frame data structures.
//!
//! Contains everything a backend needs to draw one frame. Instances are
//! `#[repr(C)]` and `Pod`, so they can be uploaded as raw bytes.

use bytemuck::{Pod, Zeroable};

use crate::effects::Bubble;

use super::FrameStats;

/// One shaded unit cube.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct VoxelInstance {
    /// Cube centre (`voxel + 0.5`).
    pub center: [f32; 3],
    /// Final RGB, each channel in `[0, 1]`.
    pub color: [f32; 3],
}

/// An axis-aligned box (seaweed segment, coral blade).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct BoxInstance {
    /// Box centre.
    pub center: [f32; 3],
    /// Extents along X, Y, Z.
    pub size: [f32; 3],
    /// RGB.
    pub color: [f32; 3],
}

/// All data needed to render a frame.
///
/// Produced by [`FrameBuilder::build`](super::FrameBuilder::build).
#[derive(Debug, Clone, Default)]
pub struct RenderFrame {
    /// Shaded voxels.
    pub voxels: Vec<VoxelInstance>,
    /// Swayed seaweed segments, two per strand.
    pub seaweed: Vec<BoxInstance>,
    /// Decorative coral blades.
    pub coral: Vec<BoxInstance>,
    /// Bubble snapshot.
    pub bubbles: Vec<Bubble>,
    /// True when the viewer is inside a seaweed segment.
    pub viewer_in_vegetation: bool,
    /// Frame statistics.
    pub stats: FrameStats,
}

impl RenderFrame {
    /// Voxel instances as a byte slice.
    #[must_use]
    pub fn voxel_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.voxels)
    }

    /// Seaweed instances as a byte slice.
    #[must_use]
    pub fn seaweed_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.seaweed)
    }

    /// Coral instances as a byte slice.
    #[must_use]
    pub fn coral_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.coral)
    }

    /// Returns true if there's anything to render.
    #[must_use]
    pub fn has_content(&self) -> bool {
        !(self.voxels.is_empty() && self.seaweed.is_empty() && self.coral.is_empty())
    }

    /// Number of box instances.
    #[must_use]
    pub fn instance_count(&self) -> usize {
        self.voxels.len() + self.seaweed.len() + self.coral.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_layout_is_tight() {
        assert_eq!(std::mem::size_of::<VoxelInstance>(), 24);
        assert_eq!(std::mem::size_of::<BoxInstance>(), 36);
    }

    #[test]
    fn test_bytes_follow_instances() {
        let frame = RenderFrame {
            voxels: vec![VoxelInstance::default(); 3],
            coral: vec![BoxInstance::default(); 2],
            ..RenderFrame::default()
        };
        assert_eq!(frame.voxel_bytes().len(), 72);
        assert_eq!(frame.coral_bytes().len(), 72);
        assert!(frame.seaweed_bytes().is_empty());
        assert!(frame.has_content());
        assert_eq!(frame.instance_count(), 5);
        assert!(!RenderFrame::default().has_content());
    }
}

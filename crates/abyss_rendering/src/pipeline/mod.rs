//! # Frame Assembly
//!
//! Walks the world once per frame: radius-cull every voxel and decoration,
//! shade the survivors and snapshot the bubbles.

mod frame;
mod stats;

pub use frame::{BoxInstance, RenderFrame, VoxelInstance};
pub use stats::FrameStats;

use std::time::Instant;

use abyss_procedural::{CoralRect, SeabedWorld, Seaweed};

use crate::config::{GraphicsPreset, RenderConfig, ViewConfig};
use crate::culling::RadiusCuller;
use crate::effects::BubbleField;
use crate::shading::VoxelShader;
use crate::viewer::Viewer;

/// Builds [`RenderFrame`]s for one world.
#[derive(Clone, Debug)]
pub struct FrameBuilder {
    shader: VoxelShader,
    view: ViewConfig,
}

impl FrameBuilder {
    /// Builder for `world` under `config`.
    #[must_use]
    pub fn new(world: &SeabedWorld, config: &RenderConfig) -> Self {
        Self {
            shader: VoxelShader::new(world, &config.shading),
            view: config.view,
        }
    }

    /// Current view settings.
    #[must_use]
    pub const fn view(&self) -> ViewConfig {
        self.view
    }

    /// Replaces the view settings.
    pub fn set_view(&mut self, view: ViewConfig) {
        self.view = view;
    }

    /// Applies a graphics preset.
    pub fn apply_preset(&mut self, preset: GraphicsPreset) {
        tracing::info!("Applied {} graphics preset", preset.name());
        self.view = preset.view();
    }

    /// The shader in use.
    #[must_use]
    pub const fn shader(&self) -> &VoxelShader {
        &self.shader
    }

    /// Assembles one frame at time `t` (seconds).
    #[must_use]
    pub fn build(
        &self,
        world: &SeabedWorld,
        viewer: &Viewer,
        t: f64,
        bubbles: &BubbleField,
    ) -> RenderFrame {
        let started = Instant::now();
        let culler = RadiusCuller::for_viewer(viewer, &self.view);
        let mut frame = RenderFrame::default();
        let mut stats = FrameStats::default();

        for (pos, block) in world.voxels().iter() {
            if !culler.is_visible(pos.x, pos.z) {
                stats.culled_voxels += 1;
                continue;
            }
            frame.voxels.push(VoxelInstance {
                center: [pos.x as f32 + 0.5, pos.y as f32 + 0.5, pos.z as f32 + 0.5],
                color: self.shader.shade(world, pos.x, pos.y, pos.z, block, t),
            });
            stats.visible_voxels += 1;
        }

        for rect in world.coral_rects() {
            if !culler.is_point_visible(rect.x, rect.z) {
                stats.culled_decorations += 1;
                continue;
            }
            frame.coral.push(coral_box(rect));
            stats.visible_coral_rects += 1;
        }

        let sway_time = t as f32;
        for weed in world.seaweeds() {
            if !culler.is_point_visible(weed.x, weed.z) {
                stats.culled_decorations += 1;
                continue;
            }
            frame.seaweed.extend(seaweed_boxes(weed, sway_time));
            frame.viewer_in_vegetation |= weed.contains(viewer.position, sway_time);
            stats.visible_seaweeds += 1;
        }

        frame.bubbles = bubbles.bubbles().to_vec();
        stats.bubbles = frame.bubbles.len() as u32;
        stats.build_time_ms = started.elapsed().as_secs_f32() * 1000.0;
        frame.stats = stats;

        tracing::trace!(
            "Frame: {} voxels ({} culled), {} seaweeds, {} coral rects",
            stats.visible_voxels,
            stats.culled_voxels,
            stats.visible_seaweeds,
            stats.visible_coral_rects
        );
        frame
    }
}

fn coral_box(rect: &CoralRect) -> BoxInstance {
    BoxInstance {
        center: [rect.x, rect.y + rect.height * 0.5, rect.z],
        size: [rect.width, rect.height, rect.width],
        color: rect.color,
    }
}

fn seaweed_boxes(weed: &Seaweed, t: f32) -> [BoxInstance; 2] {
    let (lower, upper) = weed.sway(t);
    let size = [weed.width, weed.segment_length, weed.width];
    [
        BoxInstance {
            center: [weed.x + lower, weed.base_y + weed.segment_length * 0.5, weed.z],
            size,
            color: weed.color,
        },
        BoxInstance {
            center: [weed.x + upper, weed.base_y + weed.segment_length * 1.5, weed.z],
            size,
            color: weed.color,
        },
    ]
}

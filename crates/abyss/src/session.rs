//! # Dive Session
//!
//! Owns a generated seabed and everything that changes per frame: the
//! viewer, the bubble list and the clock. Single-threaded; one tick reads
//! and writes it exclusively.

use abyss_procedural::{SeabedWorld, WorldGenerator};
use abyss_rendering::{
    BubbleField, FrameBuilder, GraphicsPreset, MinimapConfig, MinimapView, RenderFrame, Viewer,
};

use crate::config::GameConfig;

/// Lowest Y the diver may occupy.
pub const MIN_SWIM_HEIGHT: f32 = 0.5;

/// A running dive.
pub struct Dive {
    world: SeabedWorld,
    frames: FrameBuilder,
    bubbles: BubbleField,
    minimap: MinimapConfig,
    viewer: Viewer,
    time: f64,
}

impl Dive {
    /// Generates the world and puts the viewer at the spawn point.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let world = WorldGenerator::new(&config.world).generate();
        let mut frames = FrameBuilder::new(&world, &config.render);
        frames.set_view(config.effective_view());
        let bubbles = BubbleField::new(
            config.render.bubbles.clone(),
            world.map_size(),
            world.max_height(),
        );
        let viewer = Viewer::new(world.spawn_position(), 0.0);

        tracing::info!(
            "Dive ready: spawn at ({:.1}, {:.1}, {:.1})",
            viewer.position[0],
            viewer.position[1],
            viewer.position[2]
        );

        Self {
            world,
            frames,
            bubbles,
            minimap: config.render.minimap,
            viewer,
            time: 0.0,
        }
    }

    /// The seabed.
    #[must_use]
    pub const fn world(&self) -> &SeabedWorld {
        &self.world
    }

    /// Mutable seabed, for runtime structure placement.
    pub fn world_mut(&mut self) -> &mut SeabedWorld {
        &mut self.world
    }

    /// Current viewer.
    #[must_use]
    pub const fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    /// Seconds since the dive started.
    #[must_use]
    pub const fn time(&self) -> f64 {
        self.time
    }

    /// Live bubbles.
    #[must_use]
    pub const fn bubbles(&self) -> &BubbleField {
        &self.bubbles
    }

    /// Turns the viewer to `yaw` degrees.
    pub fn set_yaw(&mut self, yaw: f32) {
        self.viewer.yaw = yaw;
    }

    /// Applies a graphics preset to subsequent frames.
    pub fn apply_preset(&mut self, preset: GraphicsPreset) {
        self.frames.apply_preset(preset);
    }

    /// Draw radius adjustment, clamped to the menu range.
    pub fn adjust_draw_radius(&mut self, delta: i32) {
        let mut view = self.frames.view();
        view.adjust_radius(delta);
        self.frames.set_view(view);
    }

    /// Advances time and bubbles by `dt` seconds and assembles the frame.
    pub fn tick(&mut self, dt: f32) -> RenderFrame {
        self.time += f64::from(dt);
        self.bubbles.update(dt);
        self.frames
            .build(&self.world, &self.viewer, self.time, &self.bubbles)
    }

    /// Returns true if the diver may stand at `point`.
    ///
    /// The point must lie over the map (edges inclusive), between
    /// [`MIN_SWIM_HEIGHT`] and the max height, in an empty voxel.
    #[must_use]
    pub fn can_move_to(&self, point: [f32; 3]) -> bool {
        let [x, y, z] = point;
        let size = self.world.map_size() as f32;
        let max = self.world.max_height() as f32;
        (0.0..=size).contains(&x)
            && (0.0..=size).contains(&z)
            && (MIN_SWIM_HEIGHT..=max).contains(&y)
            && !self.world.is_occupied_at(point)
    }

    /// Moves the viewer if [`Self::can_move_to`] allows it.
    pub fn try_move(&mut self, point: [f32; 3]) -> bool {
        let allowed = self.can_move_to(point);
        if allowed {
            self.viewer.position = point;
        }
        allowed
    }

    /// Puts the viewer back at the spawn point.
    pub fn respawn(&mut self) {
        self.viewer.position = self.world.spawn_position();
    }

    /// Samples the minimap around the viewer.
    #[must_use]
    pub fn minimap(&self) -> MinimapView {
        MinimapView::sample(&self.world, Some(&self.viewer), &self.minimap)
    }
}

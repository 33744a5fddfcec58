//! Rising bubble particles.
//!
//! A bounded grow-and-reap list: each update may append one bubble, moves
//! all of them up, and drops those that reached the max height. Ordering is
//! not preserved.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::BubbleConfig;

/// One bubble.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bubble {
    /// World-space centre.
    pub position: [f32; 3],
    /// Rise speed in units per second.
    pub speed: f32,
    /// Sphere radius.
    pub radius: f32,
}

/// The live bubble list.
#[derive(Clone, Debug)]
pub struct BubbleField {
    bubbles: Vec<Bubble>,
    config: BubbleConfig,
    map_size: i32,
    ceiling: f32,
    rng: ChaCha8Rng,
}

impl BubbleField {
    /// Empty field over a `map_size` map that reaps bubbles at `max_height`.
    #[must_use]
    pub fn new(config: BubbleConfig, map_size: i32, max_height: i32) -> Self {
        Self::with_rng(config, map_size, max_height, ChaCha8Rng::from_entropy())
    }

    /// Same as [`Self::new`] with a fixed seed.
    #[must_use]
    pub fn seeded(config: BubbleConfig, map_size: i32, max_height: i32, seed: u64) -> Self {
        Self::with_rng(config, map_size, max_height, ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(config: BubbleConfig, map_size: i32, max_height: i32, rng: ChaCha8Rng) -> Self {
        Self {
            bubbles: Vec::new(),
            config,
            map_size,
            ceiling: max_height as f32,
            rng,
        }
    }

    /// Live bubbles.
    #[must_use]
    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    /// Number of live bubbles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bubbles.len()
    }

    /// Returns true if no bubble is alive.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bubbles.is_empty()
    }

    /// Bubble color.
    #[must_use]
    pub const fn color(&self) -> [f32; 3] {
        self.config.color
    }

    /// Appends a bubble at a random column centre.
    pub fn spawn(&mut self) {
        if self.map_size <= 0 {
            return;
        }
        let x = self.rng.gen_range(0..self.map_size) as f32 + 0.5;
        let z = self.rng.gen_range(0..self.map_size) as f32 + 0.5;
        let speed = sample(&mut self.rng, self.config.speed);
        let radius = sample(&mut self.rng, self.config.radius);
        self.bubbles.push(Bubble {
            position: [x, self.config.start_y, z],
            speed,
            radius,
        });
    }

    /// Advances the field by `dt` seconds.
    ///
    /// Spawns with probability `spawn_rate * dt`, then rises and reaps.
    pub fn update(&mut self, dt: f32) {
        if self.rng.gen::<f32>() < self.config.spawn_rate * dt {
            self.spawn();
        }
        for bubble in &mut self.bubbles {
            bubble.position[1] += bubble.speed * dt;
        }
        let ceiling = self.ceiling;
        self.bubbles.retain(|b| b.position[1] < ceiling);
    }
}

fn sample<R: Rng>(rng: &mut R, [min, max]: [f32; 2]) -> f32 {
    if max > min {
        rng.gen_range(min..=max)
    } else {
        min
    }
}

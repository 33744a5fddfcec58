//! # ABYSS Procedural Generation
//!
//! Seabed generation and the spatial queries built on top of it.
//!
//! ## Design Principles
//!
//! 1. **Seeded shape**: the same structural seed always yields the same terrain
//! 2. **Free decoration**: coral colors, clusters and tunnels use their own stream
//! 3. **Never fails**: degenerate bounds are clamped, lookups outside the map
//!    return defaults
//!
//! ## Core Components
//!
//! - `PerlinNoise`: 2D gradient noise over a shuffled permutation table
//! - `HeightMap`: per-column terrain surface
//! - `VoxelStore`: sparse block occupancy keyed by integer coordinates
//! - `WorldGenerator`: terrain, dressing, reef, garden, caves, spawn
//! - `SeabedWorld`: the finished world and its queries
//!
//! ## Example
//!
//! ```rust,ignore
//! use abyss_procedural::{WorldConfig, WorldGenerator};
//!
//! let config = WorldConfig::default().with_seeds(12345, 678);
//! let world = WorldGenerator::new(&config).generate();
//!
//! let [x, y, z] = world.spawn_position();
//! assert!(!world.is_occupied_at([x, y, z]));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod decoration;
pub mod error;
pub mod generator;
pub mod height_map;
pub mod noise;
pub mod voxel;
pub mod world;

pub use config::{
    CaveConfig, DressingConfig, PatchConfig, ReefConfig, SeaweedConfig, SpawnConfig, TerrainConfig,
    VegetationConfig, WorldConfig,
};
pub use decoration::{CoralRect, ReefRegion, Seaweed};
pub use error::{ConfigError, ConfigResult};
pub use generator::WorldGenerator;
pub use height_map::HeightMap;
pub use noise::{PerlinNoise, PermutationTable, WorldSeed};
pub use voxel::{BlockType, VoxelPos, VoxelStore};
pub use world::{GenerationReport, SeabedWorld};

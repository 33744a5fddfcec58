//! # ABYSS
//!
//! An underwater voxel seabed: procedural terrain, coral reef, seaweed and
//! caves, plus a dive session that renders it frame by frame.
//!
//! ## Crates
//!
//! - [`abyss_procedural`]: seeded world generation
//! - [`abyss_rendering`]: culling, shading and frame assembly
//! - this crate: [`GameConfig`] and the [`Dive`] session
//!
//! ```no_run
//! use abyss::{Dive, GameConfig};
//!
//! let config = GameConfig::load("abyss.toml")?;
//! let mut dive = Dive::new(&config);
//! let frame = dive.tick(1.0 / 60.0);
//! println!("{} voxels on screen", frame.voxels.len());
//! # Ok::<(), abyss::GameConfigError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod session;

pub use abyss_procedural as procedural;
pub use abyss_rendering as rendering;

pub use config::{GameConfig, GameConfigError};
pub use session::{Dive, MIN_SWIM_HEIGHT};

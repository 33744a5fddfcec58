//! # ABYSS Rendering
//!
//! Visibility and shading for the generated seabed. Backend-agnostic: the
//! output is plain instance data, never a graphics API call.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     FRAME PIPELINE                       │
//! ├──────────────────────────────────────────────────────────┤
//! │  SeabedWorld → Radius Cull → Depth Light × Cave Shadow   │
//! │                                  ↓                       │
//! │                 Phong (surface) × Caustics (floor)       │
//! │                                  ↓                       │
//! │          RenderFrame { voxels, seaweed, coral, bubbles } │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The minimap reads the same world through `top_block_id` and is sampled
//! independently of the frame.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod culling;
pub mod effects;
pub mod minimap;
pub mod pipeline;
pub mod shading;
pub mod viewer;

pub use config::{
    BubbleConfig, CausticsConfig, GraphicsPreset, MinimapConfig, PhongConfig, RenderConfig,
    ShadingConfig, ViewConfig,
};
pub use culling::RadiusCuller;
pub use effects::{Bubble, BubbleField};
pub use minimap::{MinimapMarker, MinimapView, MinimapWindow};
pub use pipeline::{BoxInstance, FrameBuilder, FrameStats, RenderFrame, VoxelInstance};
pub use shading::{Caustics, PhongShader, VoxelShader};
pub use viewer::Viewer;

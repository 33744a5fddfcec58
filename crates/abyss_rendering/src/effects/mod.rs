//! Ambient effects drawn alongside the seabed.

mod bubbles;

pub use bubbles::{Bubble, BubbleField};

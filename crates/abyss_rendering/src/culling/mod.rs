//! Culling systems.
//!
//! Only a horizontal radius test: the seabed is shallow enough that height
//! never decides visibility.

mod radius;

pub use radius::RadiusCuller;

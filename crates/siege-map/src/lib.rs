//! Map representation for Nano-Siege.
//!
//! Grid occupancy and placement rules, enemy path geometry,
//! spawn-lane selection policies, and the built-in map layouts.

pub use siege_core as core;

pub mod grid;
pub mod layouts;
pub mod path;

// Re-export key types for convenience.
pub use grid::GridMap;
pub use layouts::{layout, MapLayout};
pub use path::{Path, PathSelector};

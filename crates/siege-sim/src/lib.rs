//! Simulation engine for Nano-Siege.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameStateSnapshots for the frontend.

pub mod combat;
pub mod drone_turret;
pub mod economy;
pub mod engine;
pub mod hazard;
pub mod systems;
pub mod tower;
pub mod world_setup;

pub use engine::SiegeEngine;
pub use siege_core as core;

#[cfg(test)]
mod tests;

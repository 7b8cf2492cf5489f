//! Systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` plus the engine state
//! they need. They do not own state — enemy/projectile state lives in
//! components, everything else on the engine.

pub mod cleanup;
pub mod deaths;
pub mod drone_turrets;
pub mod hazards;
pub mod leaks;
pub mod movement;
pub mod projectiles;
pub mod separation;
pub mod snapshot;
pub mod spawner;
pub mod status;
pub mod towers;

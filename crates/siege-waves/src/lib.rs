//! Wave composition for Nano-Siege.
//!
//! Archetype stat/behavior profiles, per-wave spawn-list generation,
//! boss scheduling, and bonus-wave eligibility tracking.
//! Pure logic over a seeded RNG — no ECS dependency.

pub use siege_core as core;

pub mod bonus;
pub mod compose;
pub mod profiles;

pub use bonus::BonusTracker;
pub use compose::{compose_bonus_wave, compose_wave, SpawnEntry};
pub use profiles::{profile, ArchetypeProfile, OnDeathRule};

#[cfg(test)]
mod tests;

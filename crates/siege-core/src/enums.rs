//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy archetype — a small closed set of behaviors and stat tiers.
/// Behavior details (on-death rule, airborne flag, hazard immunity,
/// reward tier) live in the profile table in `siege-waves`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyArchetype {
    /// Tier-1 walker. The baseline unit.
    #[default]
    Grunt,
    /// Tier-2: fast, fragile.
    Runner,
    /// Tier-3: slow, heavily armored.
    Brute,
    /// Support unit — heals nearby enemies when it dies.
    Blob,
    /// Airborne. Ignores the shared path, immune to ground hazards.
    Drone,
    /// Boss: bursts into a swarm of Grunts on death.
    BossNano,
    /// Boss: fractures into 2-3 Shards on death.
    BossSplit,
    /// Medium fragment spawned by a dying BossSplit.
    Shard,
}

impl EnemyArchetype {
    /// True for the boss variants. Bosses anchor group pace (separation
    /// exempt) and deal scaled reactor damage on leak.
    pub fn is_boss(&self) -> bool {
        matches!(self, EnemyArchetype::BossNano | EnemyArchetype::BossSplit)
    }
}

/// Tower kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TowerKind {
    /// Discrete single-target projectile.
    #[default]
    Cannon,
    /// Continuous beam with a stability ramp while locked on one target.
    Laser,
    /// Arcing AoE shell with a minimum-range dead zone; can leave an
    /// acid pool hazard.
    Mortar,
}

/// One-time boolean module installs that alter on-hit status application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TowerModule {
    Slow,
    Burn,
}

/// Upgrade tracks, each level 0-3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpgradeTrack {
    Rate,
    Range,
}

/// How a multi-path map picks the lane for each spawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathPolicy {
    /// Weighted-random using per-path weights.
    #[default]
    WeightedRandom,
    /// Persistent cursor incremented per spawn, wrapping modulo path count.
    RoundRobin,
}

/// Built-in map layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MapId {
    /// Single winding path.
    Conduit,
    /// Two paths with 70/30 spawn weighting.
    Crossfire,
    /// Three parallel lanes, round-robin spawns.
    Trident,
}

/// Projectile kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileKind {
    /// Cannon round: resolves against its target enemy at travel time.
    CannonShot,
    /// Mortar shell: detonates at its target point on arrival.
    MortarShell,
}

/// What dealt a hit — recorded in `last_hit` for on-kill chain effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageKind {
    Impact,
    Beam,
    Blast,
    Burn,
    Hazard,
    Arc,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Active,
    Paused,
    GameOver,
}

/// Alert severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AlertLevel {
    Info,
    Warning,
    Critical,
}

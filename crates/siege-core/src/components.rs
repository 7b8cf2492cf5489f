//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{CellCoord, Position};

/// Marks an entity as an enemy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Engine-assigned identifier, unique within a run. Stable across the
/// enemy's lifetime; referenced by projectiles and views instead of raw
/// ECS entity handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyId {
    pub id: u32,
}

/// Enemy lifecycle flags.
///
/// Exactly one terminal transition happens: killed (`alive = false`,
/// `reached_end = false`) or leaked (`reached_end = true`, `alive` set
/// false in the same update). The two are never both true.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyLife {
    pub alive: bool,
    pub reached_end: bool,
}

impl Default for EnemyLife {
    fn default() -> Self {
        Self {
            alive: true,
            reached_end: false,
        }
    }
}

/// Hit points. `hp` is floored at 0 and capped at `max_hp`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub hp: f64,
    pub max_hp: f64,
}

impl Health {
    pub fn full(max_hp: f64) -> Self {
        Self { hp: max_hp, max_hp }
    }
}

/// Progress along an assigned path. The enemy's position is always
/// resolvable to (path, current waypoint, distance traveled).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PathFollower {
    /// Which of the map's paths this enemy walks.
    pub path_index: usize,
    /// Index of the waypoint currently being approached.
    pub waypoint_index: usize,
    /// Total distance traveled along the path (pixels). Sort key for
    /// the separation pass.
    pub progress_px: f64,
    /// Last movement direction, unit length (separation alignment check).
    pub dir_x: f64,
    pub dir_y: f64,
}

/// Movement parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Mobility {
    /// Base speed in px/s, before throttles.
    pub base_speed: f64,
    /// Smoothed separation throttle in [SEPARATION_MIN_MULTIPLIER, 1.0].
    pub speed_multiplier: f64,
    /// Body radius in pixels.
    pub radius: f64,
}

/// Active status effects. Slow takes the strongest potency; burn
/// refreshes its duration and keeps the stronger DPS. Neither stacks
/// indefinitely.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct StatusEffects {
    /// Fractional speed reduction in [0, 1).
    pub slow_potency: f64,
    pub slow_remaining_secs: f64,
    pub burn_dps: f64,
    pub burn_remaining_secs: f64,
}

/// Metadata about the most recent hit, used by on-kill chain effects.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HitMeta {
    pub kind: DamageKind,
    /// Cell of the tower that dealt the hit, if a tower dealt it.
    pub source_cell: Option<CellCoord>,
    /// Damage dealt by the hit (basis for arc-chain damage).
    pub amount: f64,
}

/// Archetype, reward, and kill bookkeeping for an enemy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyInfo {
    pub archetype: EnemyArchetype,
    /// Boss tier (0 for non-bosses). Scales reactor damage on leak.
    pub boss_tier: u8,
    pub reward_credits: u32,
    pub last_hit: Option<HitMeta>,
}

/// Bespoke curved entry trajectory for airborne drones (quadratic
/// Bezier from off-screen to the base). Replaces `PathFollower`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FlightPath {
    pub origin: Position,
    pub control: Position,
    pub dest: Position,
    pub elapsed_secs: f64,
    pub duration_secs: f64,
}

/// Status payload applied on projectile impact.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct OnHitStatus {
    /// (potency, duration_secs) — applied via the strongest-slow rule.
    pub slow: Option<(f64, f64)>,
    /// (dps, duration_secs) — refreshes burn duration.
    pub burn: Option<(f64, f64)>,
}

/// A projectile in flight. Travel is a plain decrementing timer;
/// position is interpolated for display only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub kind: ProjectileKind,
    pub damage: f64,
    pub origin: Position,
    pub target_point: Position,
    /// Enemy id the shot was aimed at (cannon resolves against this).
    pub target_enemy: Option<u32>,
    pub travel_secs: f64,
    pub elapsed_secs: f64,
    pub source_cell: CellCoord,
    /// AoE radius on detonation (mortar only).
    pub splash_radius: f64,
    /// Whether detonation leaves an acid pool.
    pub spawns_hazard: bool,
    pub on_hit: OnHitStatus,
}

//! Game state snapshot — the complete visible state sent to the
//! frontend each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{Alert, AudioEvent, FxEvent};
use crate::types::{CellCoord, Position, SimTime};

/// Complete game state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub map: Option<MapId>,
    /// Current wave number (0 before the first wave starts).
    pub wave: u32,
    /// `(queued + alive) / total_scheduled` for the active wave.
    pub wave_progress: f64,
    pub enemies: Vec<EnemyView>,
    pub towers: Vec<TowerView>,
    pub projectiles: Vec<ProjectileView>,
    pub hazards: Vec<HazardView>,
    pub drones: Vec<DroneTurretView>,
    /// Seconds left on the active chrono buff (0 when none).
    pub chrono_remaining_secs: f64,
    pub spawner: SpawnerView,
    pub economy: EconomyView,
    pub alerts: Vec<Alert>,
    pub audio_events: Vec<AudioEvent>,
    pub fx_events: Vec<FxEvent>,
}

/// A visible enemy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnemyView {
    pub enemy_id: u32,
    pub archetype: EnemyArchetype,
    pub position: Position,
    pub hp: f64,
    pub max_hp: f64,
    pub radius: f64,
    /// Current fractional speed reduction from slow effects.
    pub slow_potency: f64,
    pub burning: bool,
    pub boss_tier: u8,
    pub airborne: bool,
}

/// A placed tower.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TowerView {
    pub cell: CellCoord,
    pub kind: TowerKind,
    pub position: Position,
    /// Effective range after upgrades and modifiers (pixels).
    pub range: f64,
    /// Turret facing (radians, 0 = +x, CCW).
    pub rotation: f64,
    pub rate_level: u8,
    pub range_level: u8,
    pub slow_module: bool,
    pub burn_module: bool,
    pub invested_credits: u32,
    pub cooldown_secs: f64,
    /// Enemy id currently targeted, if any.
    pub target_enemy: Option<u32>,
    /// Laser lock time on the current target (seconds).
    pub beam_stability_secs: f64,
}

/// A projectile in flight (position interpolated for display).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub kind: ProjectileKind,
    pub position: Position,
    /// Flight completion in [0, 1].
    pub progress: f64,
}

/// A transient ground hazard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HazardView {
    pub center: Position,
    pub radius: f64,
    pub remaining_secs: f64,
}

/// A deployed ally drone turret.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DroneTurretView {
    pub position: Position,
    pub remaining_secs: f64,
    /// Enemy id currently targeted, if any.
    pub target_enemy: Option<u32>,
}

/// Spawner status for the wave-progress UI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpawnerView {
    pub active: bool,
    pub bonus_wave: bool,
    pub queued: u32,
    pub spawned: u32,
    /// Live counter — includes enemies injected mid-wave.
    pub total_scheduled: u32,
}

/// Economy / scoring state for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EconomyView {
    pub credits: u32,
    pub data_fragments: u32,
    pub core_shards: u32,
    pub lives: u32,
    pub max_lives: u32,
    /// Reactor shield pool — absorbs leak damage before lives.
    pub shield: u32,
    pub perfect_streak: u32,
    pub best_wave: u32,
}

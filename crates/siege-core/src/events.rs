//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Audio events for the frontend sound system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// A wave has started spawning.
    WaveStarted { wave: u32, bonus: bool },
    /// A boss entered the field.
    BossInbound { wave: u32, tier: u8 },
    /// An enemy reached the core.
    CoreHit { damage: u32, shield_absorbed: u32 },
    /// Lives hit zero.
    CoreDestroyed,
    /// An enemy was destroyed.
    EnemyDestroyed {
        enemy_id: u32,
        archetype: EnemyArchetype,
    },
    /// A kill arced damage to a nearby enemy.
    ArcDischarge { from_enemy: u32, to_enemy: u32 },
    /// Wave cleared.
    WaveComplete { wave: u32, perfect: bool },
    /// A tower was sold.
    TowerSold { refund: u32 },
}

/// Visual feedback events (consumed by the renderer, not the mixer).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FxEvent {
    /// Shake the camera (leaks, boss deaths).
    CameraShake { intensity: f64 },
    /// Detonation flash at a point.
    Detonation { x: f64, y: f64, radius: f64 },
}

/// Alert for the UI alert queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
    pub tick: u64,
}

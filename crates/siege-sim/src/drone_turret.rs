//! Ally drone turrets: short-lived hovering guns the player deploys.
//!
//! Like hazard zones they live in a plain Vec on the engine, not in the
//! ECS world — only the drone-turret system touches them, and their
//! kills feed the normal death pipeline.

use serde::{Deserialize, Serialize};

use siege_core::constants::*;
use siege_core::types::Position;

/// One deployed drone turret. Hovers in place, fires hit-scan shots at
/// the most progressed enemy in range, and expires after its lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DroneTurret {
    pub position: Position,
    pub remaining_secs: f64,
    pub cooldown_secs: f64,
    pub target: Option<u32>,
}

impl DroneTurret {
    pub fn deploy(position: Position) -> Self {
        Self {
            position,
            remaining_secs: DRONE_TURRET_LIFETIME_SECS,
            cooldown_secs: 0.0,
            target: None,
        }
    }

    pub fn expired(&self) -> bool {
        self.remaining_secs <= 0.0
    }
}

//! Tower data model — placement, upgrades, derived combat stats.
//!
//! Towers are engine-owned (keyed by grid cell in a BTreeMap for
//! deterministic iteration), NOT ECS entities. They are created on
//! placement, mutated by upgrades, and destroyed only by selling.

use serde::{Deserialize, Serialize};

use siege_core::constants::*;
use siege_core::enums::{TowerKind, TowerModule, UpgradeTrack};
use siege_core::types::{CellCoord, CombatModifiers, Position};

/// A placed tower.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tower {
    pub kind: TowerKind,
    pub cell: CellCoord,
    pub position: Position,
    /// Fire-rate upgrade level (0-3).
    pub rate_level: u8,
    /// Range upgrade level (0-3).
    pub range_level: u8,
    pub slow_module: bool,
    pub burn_module: bool,
    /// Cumulative credits spent on this tower (placement + upgrades +
    /// modules). Basis for sell refunds.
    pub invested_credits: u32,
    /// Seconds until the tower may fire again.
    pub cooldown_secs: f64,
    /// Turret facing (radians, 0 = +x, CCW).
    pub rotation: f64,
    /// Enemy id currently targeted.
    pub target: Option<u32>,
    /// Continuous lock time on the current target (laser ramp).
    pub beam_stability_secs: f64,
}

impl Tower {
    pub fn new(kind: TowerKind, cell: CellCoord, position: Position) -> Self {
        Self {
            kind,
            cell,
            position,
            rate_level: 0,
            range_level: 0,
            slow_module: false,
            burn_module: false,
            invested_credits: Self::base_cost(kind),
            cooldown_secs: 0.0,
            rotation: 0.0,
            target: None,
            beam_stability_secs: 0.0,
        }
    }

    pub fn base_cost(kind: TowerKind) -> u32 {
        match kind {
            TowerKind::Cannon => CANNON_COST,
            TowerKind::Laser => LASER_COST,
            TowerKind::Mortar => MORTAR_COST,
        }
    }

    fn rate_factor(&self) -> f64 {
        1.0 + UPGRADE_RATE_BONUS * self.rate_level as f64
    }

    /// Per-shot damage (cannon, mortar) after modifiers.
    pub fn damage(&self, modifiers: &CombatModifiers) -> f64 {
        let base = match self.kind {
            TowerKind::Cannon => CANNON_DAMAGE,
            TowerKind::Laser => 0.0,
            TowerKind::Mortar => MORTAR_DAMAGE,
        };
        base * modifiers.damage_mul
    }

    /// Beam damage per second (laser), including the rate track.
    pub fn dps(&self, modifiers: &CombatModifiers) -> f64 {
        match self.kind {
            TowerKind::Laser => LASER_DPS * self.rate_factor() * modifiers.damage_mul,
            _ => 0.0,
        }
    }

    /// Effective range in pixels after upgrades and modifiers.
    pub fn range(&self, modifiers: &CombatModifiers) -> f64 {
        let base = match self.kind {
            TowerKind::Cannon => CANNON_RANGE_PX,
            TowerKind::Laser => LASER_RANGE_PX,
            TowerKind::Mortar => MORTAR_RANGE_PX,
        };
        base * (1.0 + UPGRADE_RANGE_BONUS * self.range_level as f64) * modifiers.range_mul
    }

    /// Minimum engagement distance. The mortar's envelope is a ring:
    /// targets inside `range * MORTAR_DEAD_ZONE_FRACTION` cannot be hit.
    pub fn min_range(&self, modifiers: &CombatModifiers) -> f64 {
        match self.kind {
            TowerKind::Mortar => self.range(modifiers) * MORTAR_DEAD_ZONE_FRACTION,
            _ => 0.0,
        }
    }

    /// Seconds between shots after upgrades and modifiers.
    /// Lasers do not use a cooldown (continuous beam).
    pub fn fire_interval_secs(&self, modifiers: &CombatModifiers) -> f64 {
        let base_rate = match self.kind {
            TowerKind::Cannon => CANNON_FIRE_RATE,
            TowerKind::Laser => return 0.0,
            TowerKind::Mortar => MORTAR_FIRE_RATE,
        };
        1.0 / (base_rate * self.rate_factor() * modifiers.fire_rate_mul)
    }

    /// Turret rotation rate (rad/s).
    pub fn rotation_rate(&self) -> f64 {
        match self.kind {
            TowerKind::Cannon => CANNON_ROTATION_RATE,
            TowerKind::Laser => LASER_ROTATION_RATE,
            TowerKind::Mortar => MORTAR_ROTATION_RATE,
        }
    }

    /// Current upgrade level on a track.
    pub fn level(&self, track: UpgradeTrack) -> u8 {
        match track {
            UpgradeTrack::Rate => self.rate_level,
            UpgradeTrack::Range => self.range_level,
        }
    }

    /// Cost of the next level on a track, or None at the cap.
    pub fn upgrade_cost(&self, track: UpgradeTrack) -> Option<u32> {
        let level = self.level(track);
        if level >= UPGRADE_MAX_LEVEL {
            return None;
        }
        let base = Self::base_cost(self.kind) as f64;
        Some((base * UPGRADE_COST_FACTOR * (level + 1) as f64).round() as u32)
    }

    /// Apply one purchased upgrade level. Caller has already paid.
    pub fn apply_upgrade(&mut self, track: UpgradeTrack, cost: u32) {
        match track {
            UpgradeTrack::Rate => self.rate_level += 1,
            UpgradeTrack::Range => self.range_level += 1,
        }
        self.invested_credits += cost;
    }

    pub fn has_module(&self, module: TowerModule) -> bool {
        match module {
            TowerModule::Slow => self.slow_module,
            TowerModule::Burn => self.burn_module,
        }
    }

    /// Install a one-time module. Caller has already paid.
    pub fn install_module(&mut self, module: TowerModule, cost: u32) {
        match module {
            TowerModule::Slow => self.slow_module = true,
            TowerModule::Burn => self.burn_module = true,
        }
        self.invested_credits += cost;
    }

    /// Credits returned when selling.
    pub fn sell_refund(&self) -> u32 {
        (self.invested_credits as f64 * SELL_REFUND_FRACTION).floor() as u32
    }
}

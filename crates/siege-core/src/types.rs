//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 2D position in world space (pixels).
/// x grows to the right, y grows downward (screen convention).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to another position in pixels.
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Squared distance (avoids the sqrt for comparisons).
    pub fn distance_sq_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Angle from this position toward another (radians, 0 = +x, CCW).
    pub fn angle_to(&self, other: &Position) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }
}

/// Integer grid cell coordinates. Used as the tower placement key.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct CellCoord {
    pub col: i32,
    pub row: i32,
}

impl CellCoord {
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the fixed tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}

/// Global combat multiplier table, owned by the engine and replaced only
/// at perk-purchase boundaries via `PlayerCommand::SetCombatModifiers`.
/// Towers and status application read these multiplicatively.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CombatModifiers {
    pub damage_mul: f64,
    pub fire_rate_mul: f64,
    pub range_mul: f64,
    pub slow_potency_mul: f64,
    pub burn_dps_mul: f64,
    pub credit_mul: f64,
}

impl Default for CombatModifiers {
    fn default() -> Self {
        Self {
            damage_mul: 1.0,
            fire_rate_mul: 1.0,
            range_mul: 1.0,
            slow_potency_mul: 1.0,
            burn_dps_mul: 1.0,
            credit_mul: 1.0,
        }
    }
}

impl CombatModifiers {
    /// Clamp every multiplier into a sane band. Perk math upstream can
    /// produce junk; the engine never trusts raw input.
    pub fn sanitized(self) -> Self {
        const LO: f64 = 0.1;
        const HI: f64 = 10.0;
        Self {
            damage_mul: self.damage_mul.clamp(LO, HI),
            fire_rate_mul: self.fire_rate_mul.clamp(LO, HI),
            range_mul: self.range_mul.clamp(LO, HI),
            slow_potency_mul: self.slow_potency_mul.clamp(LO, HI),
            burn_dps_mul: self.burn_dps_mul.clamp(LO, HI),
            credit_mul: self.credit_mul.clamp(LO, HI),
        }
    }

    /// Field-wise product with another table. Timed buffs layer on top
    /// of the base perk table this way.
    pub fn combined(&self, other: &CombatModifiers) -> CombatModifiers {
        CombatModifiers {
            damage_mul: self.damage_mul * other.damage_mul,
            fire_rate_mul: self.fire_rate_mul * other.fire_rate_mul,
            range_mul: self.range_mul * other.range_mul,
            slow_potency_mul: self.slow_potency_mul * other.slow_potency_mul,
            burn_dps_mul: self.burn_dps_mul * other.burn_dps_mul,
            credit_mul: self.credit_mul * other.credit_mul,
        }
    }
}

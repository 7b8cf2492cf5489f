//! Transient ground-effect zones (acid pools, thermal vents).
//!
//! Stored in a plain Vec on the engine, NOT as ECS entities — they are
//! few, short-lived, and only the hazard system touches them.

use serde::{Deserialize, Serialize};

use siege_core::constants::*;
use siege_core::types::Position;

/// A damaging/slowing ground region with a limited lifetime.
/// The radius ramps in over `grow_secs` and ramps out over the final
/// `grow_secs` of life.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HazardZone {
    pub center: Position,
    pub max_radius: f64,
    pub grow_secs: f64,
    pub life_secs: f64,
    pub remaining_secs: f64,
    pub damage_per_sec: f64,
    pub slow_potency: f64,
    pub slow_duration_secs: f64,
}

impl HazardZone {
    /// Acid pool left by a mortar detonation.
    pub fn acid_pool(center: Position) -> Self {
        Self {
            center,
            max_radius: ACID_POOL_RADIUS_PX,
            grow_secs: ACID_POOL_GROW_SECS,
            life_secs: ACID_POOL_LIFE_SECS,
            remaining_secs: ACID_POOL_LIFE_SECS,
            damage_per_sec: ACID_POOL_DPS,
            slow_potency: ACID_POOL_SLOW_POTENCY,
            slow_duration_secs: ACID_POOL_SLOW_DURATION_SECS,
        }
    }

    /// Thermal vent where a burning enemy died.
    pub fn thermal_vent(center: Position) -> Self {
        Self {
            center,
            max_radius: THERMAL_VENT_RADIUS_PX,
            grow_secs: 0.2,
            life_secs: THERMAL_VENT_LIFE_SECS,
            remaining_secs: THERMAL_VENT_LIFE_SECS,
            damage_per_sec: THERMAL_VENT_DPS,
            slow_potency: 0.0,
            slow_duration_secs: 0.0,
        }
    }

    /// Radius at the current point in the zone's life.
    pub fn current_radius(&self) -> f64 {
        let elapsed = (self.life_secs - self.remaining_secs).max(0.0);
        let grow = self.grow_secs.max(1e-6);
        let ramp_in = (elapsed / grow).min(1.0);
        let ramp_out = (self.remaining_secs / grow).min(1.0);
        self.max_radius * ramp_in.min(ramp_out).max(0.0)
    }

    pub fn expired(&self) -> bool {
        self.remaining_secs <= 0.0
    }
}

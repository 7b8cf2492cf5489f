//! Archetype stat and behavior profiles.
//!
//! The closed set of enemy archetypes maps to an explicit behavior
//! table: base stats, airborne/hazard-immunity flags, and the on-death
//! rule. No string matching anywhere.

use siege_core::constants::*;
use siege_core::enums::EnemyArchetype;

/// What happens when an enemy of this archetype dies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OnDeathRule {
    None,
    /// Burst into a swarm of weak units (BossNano).
    BurstInto {
        archetype: EnemyArchetype,
        min: u32,
        max: u32,
    },
    /// Fracture into a few medium units (BossSplit).
    FractureInto {
        archetype: EnemyArchetype,
        min: u32,
        max: u32,
    },
    /// Heal nearby enemies for a fraction of their max hp (Blob).
    HealNearby { fraction: f64, radius_px: f64 },
}

/// Static profile for one archetype.
#[derive(Debug, Clone, Copy)]
pub struct ArchetypeProfile {
    pub base_hp: f64,
    /// Base speed in px/s.
    pub base_speed: f64,
    pub radius_px: f64,
    pub reward_credits: u32,
    /// Airborne units skip the shared path (bespoke entry trajectory).
    pub airborne: bool,
    /// Immune to ground hazard zones.
    pub hazard_immune: bool,
    pub on_death: OnDeathRule,
}

/// Look up the behavior profile for an archetype.
pub fn profile(archetype: EnemyArchetype) -> ArchetypeProfile {
    match archetype {
        EnemyArchetype::Grunt => ArchetypeProfile {
            base_hp: 30.0,
            base_speed: 55.0,
            radius_px: 12.0,
            reward_credits: 4,
            airborne: false,
            hazard_immune: false,
            on_death: OnDeathRule::None,
        },
        EnemyArchetype::Runner => ArchetypeProfile {
            base_hp: 22.0,
            base_speed: 95.0,
            radius_px: 10.0,
            reward_credits: 5,
            airborne: false,
            hazard_immune: false,
            on_death: OnDeathRule::None,
        },
        EnemyArchetype::Brute => ArchetypeProfile {
            base_hp: 110.0,
            base_speed: 38.0,
            radius_px: 17.0,
            reward_credits: 9,
            airborne: false,
            hazard_immune: false,
            on_death: OnDeathRule::None,
        },
        EnemyArchetype::Blob => ArchetypeProfile {
            base_hp: 48.0,
            base_speed: 50.0,
            radius_px: 14.0,
            reward_credits: 7,
            airborne: false,
            hazard_immune: false,
            on_death: OnDeathRule::HealNearby {
                fraction: BLOB_HEAL_FRACTION,
                radius_px: BLOB_HEAL_RADIUS_PX,
            },
        },
        EnemyArchetype::Drone => ArchetypeProfile {
            base_hp: 26.0,
            base_speed: 70.0,
            radius_px: 11.0,
            reward_credits: 6,
            airborne: true,
            hazard_immune: true,
            on_death: OnDeathRule::None,
        },
        EnemyArchetype::BossNano => ArchetypeProfile {
            base_hp: 520.0,
            base_speed: 30.0,
            radius_px: 26.0,
            reward_credits: 60,
            airborne: false,
            hazard_immune: false,
            on_death: OnDeathRule::BurstInto {
                archetype: EnemyArchetype::Grunt,
                min: NANO_BURST_MIN,
                max: NANO_BURST_MAX,
            },
        },
        EnemyArchetype::BossSplit => ArchetypeProfile {
            base_hp: 460.0,
            base_speed: 32.0,
            radius_px: 26.0,
            reward_credits: 60,
            airborne: false,
            hazard_immune: false,
            on_death: OnDeathRule::FractureInto {
                archetype: EnemyArchetype::Shard,
                min: SPLIT_SHARD_MIN,
                max: SPLIT_SHARD_MAX,
            },
        },
        EnemyArchetype::Shard => ArchetypeProfile {
            base_hp: 70.0,
            base_speed: 60.0,
            radius_px: 13.0,
            reward_credits: 5,
            airborne: false,
            hazard_immune: false,
            on_death: OnDeathRule::None,
        },
    }
}

/// HP scaling with wave number: +14% compounding per wave past the first.
pub fn hp_for_wave(archetype: EnemyArchetype, wave: u32) -> f64 {
    let base = profile(archetype).base_hp;
    base * 1.14_f64.powi(wave.saturating_sub(1) as i32)
}

/// Speed creeps up slowly and is capped at +40%.
pub fn speed_for_wave(archetype: EnemyArchetype, wave: u32) -> f64 {
    let base = profile(archetype).base_speed;
    let factor = (1.0 + 0.015 * wave.saturating_sub(1) as f64).min(1.4);
    base * factor
}

/// Reward grows with wave number (linear, gentle).
pub fn reward_for_wave(archetype: EnemyArchetype, wave: u32) -> u32 {
    let base = profile(archetype).reward_credits;
    base + wave / 4
}

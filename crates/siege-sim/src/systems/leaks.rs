//! Core-damage processing for enemies that reached the base.
//!
//! Leaked enemies are despawned by the cleanup system in the same tick,
//! so each leak is charged exactly once.

use hecs::World;

use siege_core::components::{EnemyInfo, EnemyLife};
use siege_core::constants::{BOSS_LEAK_FLOOR, LEAK_DAMAGE};
use siege_core::events::{AudioEvent, FxEvent};

use crate::economy::EconomyState;

/// Charge the reactor for every enemy that arrived this tick. Returns
/// true if lives hit zero (the run is over). Dev mode waives the
/// deduction entirely.
pub fn run(
    world: &mut World,
    economy: &mut EconomyState,
    dev_mode: bool,
    audio_events: &mut Vec<AudioEvent>,
    fx_events: &mut Vec<FxEvent>,
) -> bool {
    let mut core_destroyed = false;

    for (_entity, (life, info)) in world.query_mut::<(&EnemyLife, &EnemyInfo)>() {
        if !life.reached_end || dev_mode {
            continue;
        }

        let damage = if info.archetype.is_boss() {
            (BOSS_LEAK_FLOOR + info.boss_tier as u32).max(BOSS_LEAK_FLOOR)
        } else {
            LEAK_DAMAGE
        };

        let (absorbed, lost) = economy.absorb_leak(damage);
        audio_events.push(AudioEvent::CoreHit {
            damage: lost,
            shield_absorbed: absorbed,
        });
        if lost > 0 {
            fx_events.push(FxEvent::CameraShake {
                intensity: (lost as f64 / 4.0).min(1.0).max(0.25),
            });
        }

        if economy.lives == 0 {
            core_destroyed = true;
        }
    }

    if core_destroyed {
        audio_events.push(AudioEvent::CoreDestroyed);
        fx_events.push(FxEvent::CameraShake { intensity: 1.0 });
    }

    core_destroyed
}

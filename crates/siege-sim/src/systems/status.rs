//! Status-effect decay and burn damage.
//!
//! Slow and burn carry independent remaining-duration counters, plain
//! decrementing timers clamped at zero. Burn applies its DPS here,
//! before movement, so a burn kill never also leaks in the same tick.

use hecs::World;

use siege_core::components::{EnemyLife, StatusEffects};
use siege_core::constants::DT;
use siege_core::enums::DamageKind;

use crate::combat;

pub fn run(world: &mut World) {
    let mut burn_ticks: Vec<(hecs::Entity, f64)> = Vec::new();

    for (entity, (status, life)) in world.query_mut::<(&mut StatusEffects, &EnemyLife)>() {
        if !life.alive {
            continue;
        }

        if status.slow_remaining_secs > 0.0 {
            status.slow_remaining_secs = (status.slow_remaining_secs - DT).max(0.0);
            if status.slow_remaining_secs <= 0.0 {
                status.slow_potency = 0.0;
            }
        }

        if status.burn_remaining_secs > 0.0 {
            status.burn_remaining_secs = (status.burn_remaining_secs - DT).max(0.0);
            burn_ticks.push((entity, status.burn_dps * DT));
            if status.burn_remaining_secs <= 0.0 {
                status.burn_dps = 0.0;
            }
        }
    }

    for (entity, amount) in burn_ticks {
        combat::apply_damage(world, entity, amount, DamageKind::Burn, None);
    }
}

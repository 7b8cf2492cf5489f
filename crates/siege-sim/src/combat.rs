//! Damage, healing, and status application helpers.
//!
//! Every hp mutation in the simulation goes through these functions so
//! the lifecycle invariants hold everywhere: hp is floored at 0, a
//! killed enemy has `alive = false, reached_end = false`, and the
//! last-hit metadata is recorded for on-kill chain effects.

use hecs::{Entity, World};

use siege_core::components::{EnemyInfo, EnemyLife, Health, HitMeta, StatusEffects};
use siege_core::enums::DamageKind;
use siege_core::types::{CellCoord, CombatModifiers};

/// Apply damage to an enemy. Returns true if this hit killed it.
/// No-op (returns false) if the enemy is already dead or arrived.
pub fn apply_damage(
    world: &mut World,
    entity: Entity,
    amount: f64,
    kind: DamageKind,
    source_cell: Option<CellCoord>,
) -> bool {
    let amount = amount.max(0.0);

    let alive = world
        .get::<&EnemyLife>(entity)
        .map(|life| life.alive)
        .unwrap_or(false);
    if !alive {
        return false;
    }

    let mut killed = false;
    if let Ok(mut health) = world.get::<&mut Health>(entity) {
        health.hp = (health.hp - amount).max(0.0);
        killed = health.hp <= 0.0;
    }

    if let Ok(mut info) = world.get::<&mut EnemyInfo>(entity) {
        info.last_hit = Some(HitMeta {
            kind,
            source_cell,
            amount,
        });
    }

    if killed {
        if let Ok(mut life) = world.get::<&mut EnemyLife>(entity) {
            // Killed, not leaked: reward logic keys off this distinction.
            life.alive = false;
            life.reached_end = false;
        }
    }
    killed
}

/// Heal an enemy, capped at max hp. Dead enemies stay dead.
pub fn heal(world: &mut World, entity: Entity, amount: f64) {
    let alive = world
        .get::<&EnemyLife>(entity)
        .map(|life| life.alive)
        .unwrap_or(false);
    if !alive {
        return;
    }
    if let Ok(mut health) = world.get::<&mut Health>(entity) {
        health.hp = (health.hp + amount.max(0.0)).min(health.max_hp);
    }
}

/// Apply a slow effect: the strongest potency wins outright; equal
/// potency refreshes the duration. Slows never stack multiplicatively.
pub fn apply_slow(
    status: &mut StatusEffects,
    potency: f64,
    duration_secs: f64,
    modifiers: &CombatModifiers,
) {
    let potency = (potency * modifiers.slow_potency_mul).clamp(0.0, 0.95);
    let duration_secs = duration_secs.max(0.0);
    if potency > status.slow_potency {
        status.slow_potency = potency;
        status.slow_remaining_secs = duration_secs;
    } else if (potency - status.slow_potency).abs() < f64::EPSILON {
        status.slow_remaining_secs = status.slow_remaining_secs.max(duration_secs);
    }
    // A weaker slow never downgrades an active stronger one.
}

/// Apply a burn effect: refreshes the duration, keeps the stronger DPS.
pub fn apply_burn(
    status: &mut StatusEffects,
    dps: f64,
    duration_secs: f64,
    modifiers: &CombatModifiers,
) {
    let dps = (dps * modifiers.burn_dps_mul).max(0.0);
    status.burn_dps = status.burn_dps.max(dps);
    status.burn_remaining_secs = duration_secs.max(0.0);
}

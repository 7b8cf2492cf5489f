//! Tower fire control: target selection, turret rotation, firing.
//!
//! Target priority is "first" — the enemy furthest along its journey
//! inside the engagement envelope. The mortar's envelope is a ring
//! (dead zone inside `range * MORTAR_DEAD_ZONE_FRACTION`) and it cannot
//! engage airborne targets at all.

use std::collections::BTreeMap;

use hecs::World;

use siege_core::components::{
    EnemyId, EnemyLife, FlightPath, OnHitStatus, PathFollower, Projectile, StatusEffects,
};
use siege_core::constants::*;
use siege_core::enums::{DamageKind, ProjectileKind, TowerKind};
use siege_core::types::{CellCoord, CombatModifiers, Position};

use siege_map::MapLayout;

use crate::combat;
use crate::tower::Tower;

/// A targeting candidate snapshot, taken once per tick. Shared with the
/// drone-turret system.
pub(crate) struct Candidate {
    pub(crate) entity: hecs::Entity,
    pub(crate) id: u32,
    pub(crate) position: Position,
    /// Fraction of the journey completed — the "first" ordering key.
    pub(crate) journey: f64,
    pub(crate) airborne: bool,
}

pub(crate) fn collect_candidates(world: &mut World, layout: &MapLayout) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    for (entity, (id, pos, life, follower, flight)) in world.query_mut::<(
        &EnemyId,
        &Position,
        &EnemyLife,
        Option<&PathFollower>,
        Option<&FlightPath>,
    )>() {
        if !life.alive {
            continue;
        }
        let journey = match (follower, flight) {
            (Some(f), _) => {
                let total = layout.paths[f.path_index.min(layout.paths.len() - 1)].total_len();
                (f.progress_px / total.max(1.0)).min(1.0)
            }
            (None, Some(fl)) => (fl.elapsed_secs / fl.duration_secs.max(1e-6)).min(1.0),
            (None, None) => 0.0,
        };
        candidates.push(Candidate {
            entity,
            id: id.id,
            position: *pos,
            journey,
            airborne: flight.is_some(),
        });
    }
    candidates
}

/// Can this tower engage this candidate right now?
fn in_envelope(tower: &Tower, candidate: &Candidate, modifiers: &CombatModifiers) -> bool {
    if tower.kind == TowerKind::Mortar && candidate.airborne {
        return false;
    }
    let dist = tower.position.distance_to(&candidate.position);
    dist <= tower.range(modifiers) && dist >= tower.min_range(modifiers)
}

/// Shortest signed angular difference a - b, in (-pi, pi].
fn angle_delta(a: f64, b: f64) -> f64 {
    let mut d = a - b;
    while d > std::f64::consts::PI {
        d -= std::f64::consts::TAU;
    }
    while d <= -std::f64::consts::PI {
        d += std::f64::consts::TAU;
    }
    d
}

fn on_hit_status(tower: &Tower) -> OnHitStatus {
    OnHitStatus {
        slow: tower
            .slow_module
            .then_some((SLOW_MODULE_POTENCY, SLOW_MODULE_DURATION_SECS)),
        // The mortar's burn module becomes an acid pool on detonation,
        // not a direct burn.
        burn: (tower.burn_module && tower.kind != TowerKind::Mortar)
            .then_some((BURN_MODULE_DPS, BURN_MODULE_DURATION_SECS)),
    }
}

pub fn run(
    world: &mut World,
    towers: &mut BTreeMap<CellCoord, Tower>,
    layout: &MapLayout,
    modifiers: &CombatModifiers,
) {
    let candidates = collect_candidates(world, layout);

    for tower in towers.values_mut() {
        tower.cooldown_secs = (tower.cooldown_secs - DT).max(0.0);

        // Keep the current target while it remains engageable; otherwise
        // pick the enemy furthest along its journey.
        let current = tower.target.and_then(|id| {
            candidates
                .iter()
                .find(|c| c.id == id && in_envelope(tower, c, modifiers))
        });
        let picked = current.or_else(|| {
            candidates
                .iter()
                .filter(|c| in_envelope(tower, c, modifiers))
                .max_by(|a, b| {
                    a.journey
                        .partial_cmp(&b.journey)
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
        });

        let target = match picked {
            Some(t) => t,
            None => {
                tower.target = None;
                tower.beam_stability_secs = 0.0;
                continue;
            }
        };

        if tower.target != Some(target.id) {
            tower.target = Some(target.id);
            tower.beam_stability_secs = 0.0;
        }

        // Rotate toward the target, rate-limited.
        let desired = tower.position.angle_to(&target.position);
        let delta = angle_delta(desired, tower.rotation);
        let max_step = tower.rotation_rate() * DT;
        tower.rotation += delta.clamp(-max_step, max_step);
        let aimed = angle_delta(desired, tower.rotation).abs() <= AIM_TOLERANCE_RAD;
        if !aimed {
            if tower.kind == TowerKind::Laser {
                tower.beam_stability_secs = 0.0;
            }
            continue;
        }

        match tower.kind {
            TowerKind::Laser => {
                // Continuous beam: damage ramps with lock stability.
                tower.beam_stability_secs += DT;
                let ramp = (tower.beam_stability_secs / LASER_STABILITY_RAMP_SECS).min(1.0);
                let bonus = 1.0 + LASER_STABILITY_MAX_BONUS * ramp;
                let amount = tower.dps(modifiers) * bonus * DT;
                combat::apply_damage(
                    world,
                    target.entity,
                    amount,
                    DamageKind::Beam,
                    Some(tower.cell),
                );
                let status = on_hit_status(tower);
                if status.slow.is_some() || status.burn.is_some() {
                    if let Ok(mut effects) = world.get::<&mut StatusEffects>(target.entity) {
                        if let Some((potency, duration)) = status.slow {
                            combat::apply_slow(&mut effects, potency, duration, modifiers);
                        }
                        if let Some((dps, duration)) = status.burn {
                            combat::apply_burn(&mut effects, dps, duration, modifiers);
                        }
                    }
                }
            }
            TowerKind::Cannon => {
                if tower.cooldown_secs > 0.0 {
                    continue;
                }
                tower.cooldown_secs = tower.fire_interval_secs(modifiers);
                let dist = tower.position.distance_to(&target.position);
                world.spawn((
                    Projectile {
                        kind: ProjectileKind::CannonShot,
                        damage: tower.damage(modifiers),
                        origin: tower.position,
                        target_point: target.position,
                        target_enemy: Some(target.id),
                        travel_secs: (dist / CANNON_SHOT_SPEED).max(DT),
                        elapsed_secs: 0.0,
                        source_cell: tower.cell,
                        splash_radius: 0.0,
                        spawns_hazard: false,
                        on_hit: on_hit_status(tower),
                    },
                    tower.position,
                ));
            }
            TowerKind::Mortar => {
                if tower.cooldown_secs > 0.0 {
                    continue;
                }
                tower.cooldown_secs = tower.fire_interval_secs(modifiers);
                let dist = tower.position.distance_to(&target.position);
                // Shells are aimed at ground, not at the unit: the
                // target point is fixed at launch.
                world.spawn((
                    Projectile {
                        kind: ProjectileKind::MortarShell,
                        damage: tower.damage(modifiers),
                        origin: tower.position,
                        target_point: target.position,
                        target_enemy: None,
                        travel_secs: (dist / MORTAR_SHELL_SPEED).max(DT),
                        elapsed_secs: 0.0,
                        source_cell: tower.cell,
                        splash_radius: MORTAR_SPLASH_RADIUS_PX,
                        spawns_hazard: tower.burn_module,
                        on_hit: on_hit_status(tower),
                    },
                    tower.position,
                ));
            }
        }
    }
}

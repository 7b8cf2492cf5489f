//! Ally drone turrets: hovering hit-scan guns on a lifetime clock.
//!
//! Drones share the towers' candidate snapshot and targeting order
//! ("first" — most progressed enemy in range) but engage airborne
//! enemies too. Their kills carry no source cell and resolve through
//! the ordinary death pipeline.

use hecs::World;

use siege_core::constants::*;
use siege_core::enums::DamageKind;
use siege_core::types::CombatModifiers;

use siege_map::MapLayout;

use crate::combat;
use crate::drone_turret::DroneTurret;
use crate::systems::towers::{collect_candidates, Candidate};

fn in_range(drone: &DroneTurret, candidate: &Candidate, range_sq: f64) -> bool {
    drone.position.distance_sq_to(&candidate.position) <= range_sq
}

pub fn run(
    world: &mut World,
    drones: &mut Vec<DroneTurret>,
    layout: &MapLayout,
    modifiers: &CombatModifiers,
) {
    if drones.is_empty() {
        return;
    }
    let candidates = collect_candidates(world, layout);
    let range = DRONE_TURRET_RANGE_PX * modifiers.range_mul;
    let range_sq = range * range;

    for drone in drones.iter_mut() {
        drone.remaining_secs -= DT;
        drone.cooldown_secs = (drone.cooldown_secs - DT).max(0.0);
        if drone.expired() {
            continue;
        }

        let current = drone
            .target
            .and_then(|id| candidates.iter().find(|c| c.id == id && in_range(drone, c, range_sq)));
        let picked = current.or_else(|| {
            candidates
                .iter()
                .filter(|c| in_range(drone, c, range_sq))
                .max_by(|a, b| {
                    a.journey
                        .partial_cmp(&b.journey)
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
        });
        let target = match picked {
            Some(t) => t,
            None => {
                drone.target = None;
                continue;
            }
        };
        drone.target = Some(target.id);

        if drone.cooldown_secs > 0.0 {
            continue;
        }
        drone.cooldown_secs = 1.0 / (DRONE_TURRET_FIRE_RATE * modifiers.fire_rate_mul);
        combat::apply_damage(
            world,
            target.entity,
            DRONE_TURRET_DAMAGE * modifiers.damage_mul,
            DamageKind::Impact,
            None,
        );
    }

    drones.retain(|d| !d.expired());
}

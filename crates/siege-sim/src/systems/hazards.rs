//! Hazard zone ticking: lifetime decay, area damage, area slow.
//!
//! Hazard-immune enemies (airborne drones) walk through untouched.

use glam::DVec2;
use hecs::World;

use siege_core::components::{EnemyInfo, EnemyLife, StatusEffects};
use siege_core::constants::DT;
use siege_core::enums::DamageKind;
use siege_core::types::{CombatModifiers, Position};

use siege_waves::profiles;

use crate::combat;
use crate::hazard::HazardZone;

pub fn run(
    world: &mut World,
    hazards: &mut Vec<HazardZone>,
    modifiers: &CombatModifiers,
) {
    for zone in hazards.iter_mut() {
        zone.remaining_secs = (zone.remaining_secs - DT).max(0.0);
        let radius = zone.current_radius();
        if radius <= 0.0 {
            continue;
        }
        let center = DVec2::new(zone.center.x, zone.center.y);

        let mut caught: Vec<hecs::Entity> = Vec::new();
        for (entity, (pos, life, info)) in
            world.query_mut::<(&Position, &EnemyLife, &EnemyInfo)>()
        {
            if !life.alive || profiles::profile(info.archetype).hazard_immune {
                continue;
            }
            if center.distance(DVec2::new(pos.x, pos.y)) <= radius {
                caught.push(entity);
            }
        }

        for enemy in caught {
            if zone.slow_potency > 0.0 {
                if let Ok(mut effects) = world.get::<&mut StatusEffects>(enemy) {
                    combat::apply_slow(
                        &mut effects,
                        zone.slow_potency,
                        zone.slow_duration_secs,
                        modifiers,
                    );
                }
            }
            combat::apply_damage(
                world,
                enemy,
                zone.damage_per_sec * DT,
                DamageKind::Hazard,
                None,
            );
        }
    }

    hazards.retain(|zone| !zone.expired());
}

//! Projectile flight and impact resolution.
//!
//! Flight is a plain timer; the position component is interpolated for
//! display only. Cannon shots resolve against their target enemy (and
//! fizzle if it died mid-flight); mortar shells detonate at their fixed
//! target point and splash everything grounded in radius.

use glam::DVec2;
use hecs::World;

use siege_core::components::{
    EnemyId, EnemyLife, FlightPath, OnHitStatus, Projectile, StatusEffects,
};
use siege_core::constants::DT;
use siege_core::enums::{DamageKind, ProjectileKind};
use siege_core::events::FxEvent;
use siege_core::types::{CombatModifiers, Position};

use crate::combat;
use crate::hazard::HazardZone;

fn apply_on_hit(
    world: &mut World,
    entity: hecs::Entity,
    on_hit: &OnHitStatus,
    modifiers: &CombatModifiers,
) {
    if on_hit.slow.is_none() && on_hit.burn.is_none() {
        return;
    }
    if let Ok(mut effects) = world.get::<&mut StatusEffects>(entity) {
        if let Some((potency, duration)) = on_hit.slow {
            combat::apply_slow(&mut effects, potency, duration, modifiers);
        }
        if let Some((dps, duration)) = on_hit.burn {
            combat::apply_burn(&mut effects, dps, duration, modifiers);
        }
    }
}

pub fn run(
    world: &mut World,
    modifiers: &CombatModifiers,
    hazards: &mut Vec<HazardZone>,
    fx_events: &mut Vec<FxEvent>,
) {
    // Advance flights; collect impacts for resolution after the query.
    let mut impacts: Vec<(hecs::Entity, Projectile)> = Vec::new();
    for (entity, (projectile, pos)) in world.query_mut::<(&mut Projectile, &mut Position)>() {
        projectile.elapsed_secs += DT;
        let t = (projectile.elapsed_secs / projectile.travel_secs.max(DT)).min(1.0);
        pos.x = projectile.origin.x + (projectile.target_point.x - projectile.origin.x) * t;
        pos.y = projectile.origin.y + (projectile.target_point.y - projectile.origin.y) * t;
        if projectile.elapsed_secs >= projectile.travel_secs {
            impacts.push((entity, *projectile));
        }
    }

    for (shot_entity, shot) in impacts {
        match shot.kind {
            ProjectileKind::CannonShot => {
                let target = shot.target_enemy.and_then(|id| {
                    world
                        .query_mut::<(&EnemyId, &EnemyLife)>()
                        .into_iter()
                        .find(|(_, (eid, life))| eid.id == id && life.alive)
                        .map(|(entity, _)| entity)
                });
                if let Some(enemy) = target {
                    combat::apply_damage(
                        world,
                        enemy,
                        shot.damage,
                        DamageKind::Impact,
                        Some(shot.source_cell),
                    );
                    apply_on_hit(world, enemy, &shot.on_hit, modifiers);
                }
            }
            ProjectileKind::MortarShell => {
                fx_events.push(FxEvent::Detonation {
                    x: shot.target_point.x,
                    y: shot.target_point.y,
                    radius: shot.splash_radius,
                });

                let center = DVec2::new(shot.target_point.x, shot.target_point.y);
                let mut victims: Vec<hecs::Entity> = Vec::new();
                for (entity, (pos, life, flight)) in
                    world.query_mut::<(&Position, &EnemyLife, Option<&FlightPath>)>()
                {
                    // Blast stays on the ground: airborne units are immune.
                    if !life.alive || flight.is_some() {
                        continue;
                    }
                    if center.distance(DVec2::new(pos.x, pos.y)) <= shot.splash_radius {
                        victims.push(entity);
                    }
                }
                for enemy in victims {
                    combat::apply_damage(
                        world,
                        enemy,
                        shot.damage,
                        DamageKind::Blast,
                        Some(shot.source_cell),
                    );
                    apply_on_hit(world, enemy, &shot.on_hit, modifiers);
                }

                if shot.spawns_hazard {
                    hazards.push(HazardZone::acid_pool(shot.target_point));
                }
            }
        }

        // Spent shells are removed immediately, not via cleanup.
        let _ = world.despawn(shot_entity);
    }
}

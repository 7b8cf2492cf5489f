//! Kill processing: rewards, on-death rules, chain effects.
//!
//! Runs after every damage source. Dead enemies are despawned by the
//! cleanup system in the same tick, so each death is processed exactly
//! once. Arc discharges can kill in turn; the worklist loops until no
//! new deaths appear, so a whole chain resolves within one tick.

use std::collections::HashSet;

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use siege_core::components::{
    EnemyId, EnemyInfo, EnemyLife, Health, HitMeta, PathFollower, StatusEffects,
};
use siege_core::constants::*;
use siege_core::enums::{DamageKind, EnemyArchetype};
use siege_core::events::{AudioEvent, FxEvent};
use siege_core::types::{CombatModifiers, Position};

use siege_waves::compose;
use siege_waves::profiles::{self, OnDeathRule};

use crate::combat;
use crate::economy::EconomyState;
use crate::hazard::HazardZone;
use crate::systems::spawner::WaveSpawner;
use crate::world_setup::{self, PathSpot};

struct Death {
    entity: hecs::Entity,
    id: u32,
    position: Position,
    archetype: EnemyArchetype,
    reward: u32,
    last_hit: Option<HitMeta>,
    burning: bool,
    /// (path_index, waypoint_index, progress_px) for grounded enemies.
    path_spot: Option<(usize, usize, f64)>,
}

fn collect_deaths(world: &mut World, processed: &HashSet<hecs::Entity>) -> Vec<Death> {
    let mut deaths = Vec::new();
    for (entity, (id, life, pos, info, status, follower)) in world.query_mut::<(
        &EnemyId,
        &EnemyLife,
        &Position,
        &EnemyInfo,
        &StatusEffects,
        Option<&PathFollower>,
    )>() {
        if life.alive || life.reached_end || processed.contains(&entity) {
            continue;
        }
        deaths.push(Death {
            entity,
            id: id.id,
            position: *pos,
            archetype: info.archetype,
            reward: info.reward_credits,
            last_hit: info.last_hit,
            burning: status.burn_remaining_secs > 0.0
                || matches!(info.last_hit, Some(hit) if hit.kind == DamageKind::Burn),
            path_spot: follower.map(|f| (f.path_index, f.waypoint_index, f.progress_px)),
        });
    }
    deaths
}

/// Nearest other living enemy within `range` of a point.
fn nearest_living(world: &mut World, from: Position, range: f64) -> Option<(hecs::Entity, u32)> {
    let range_sq = range * range;
    let mut best: Option<(hecs::Entity, u32, f64)> = None;
    for (entity, (id, pos, life)) in world.query_mut::<(&EnemyId, &Position, &EnemyLife)>() {
        if !life.alive {
            continue;
        }
        let dist_sq = from.distance_sq_to(pos);
        if dist_sq <= range_sq && best.map_or(true, |(_, _, d)| dist_sq < d) {
            best = Some((entity, id.id, dist_sq));
        }
    }
    best.map(|(entity, id, _)| (entity, id))
}

#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    spawner: &mut WaveSpawner,
    economy: &mut EconomyState,
    modifiers: &CombatModifiers,
    hazards: &mut Vec<HazardZone>,
    vent_timer_secs: &mut f64,
    next_enemy_id: &mut u32,
    wave: u32,
    audio_events: &mut Vec<AudioEvent>,
    fx_events: &mut Vec<FxEvent>,
) {
    *vent_timer_secs = (*vent_timer_secs - DT).max(0.0);

    let mut processed: HashSet<hecs::Entity> = HashSet::new();
    loop {
        let deaths = collect_deaths(world, &processed);
        if deaths.is_empty() {
            break;
        }

        for death in deaths {
            processed.insert(death.entity);

            economy.credit_kill((death.reward as f64 * modifiers.credit_mul).floor() as u32);
            audio_events.push(AudioEvent::EnemyDestroyed {
                enemy_id: death.id,
                archetype: death.archetype,
            });
            if death.archetype.is_boss() {
                fx_events.push(FxEvent::CameraShake { intensity: 0.8 });
            }

            match profiles::profile(death.archetype).on_death {
                OnDeathRule::None => {}
                OnDeathRule::BurstInto { archetype, min, max }
                | OnDeathRule::FractureInto { archetype, min, max } => {
                    if let Some((path_index, waypoint_index, progress_px)) = death.path_spot {
                        let count = rng.gen_range(min..=max);
                        for _ in 0..count {
                            let entry = compose::minion_entry(archetype, wave);
                            let spot = PathSpot {
                                position: Position::new(
                                    death.position.x + rng.gen_range(-8.0..8.0),
                                    death.position.y + rng.gen_range(-8.0..8.0),
                                ),
                                waypoint_index,
                                progress_px,
                            };
                            world_setup::spawn_enemy(
                                world,
                                next_enemy_id,
                                &entry,
                                path_index,
                                spot,
                            );
                        }
                        // Injected spawns count toward wave progress.
                        spawner.register_injected(count);
                    }
                }
                OnDeathRule::HealNearby { fraction, radius_px } => {
                    let radius_sq = radius_px * radius_px;
                    let mut allies: Vec<(hecs::Entity, f64)> = Vec::new();
                    for (entity, (pos, life, health)) in
                        world.query_mut::<(&Position, &EnemyLife, &Health)>()
                    {
                        if !life.alive {
                            continue;
                        }
                        if death.position.distance_sq_to(pos) <= radius_sq {
                            allies.push((entity, health.max_hp * fraction));
                        }
                    }
                    for (ally, amount) in allies {
                        combat::heal(world, ally, amount);
                    }
                }
            }

            if death.burning && *vent_timer_secs <= 0.0 {
                hazards.push(HazardZone::thermal_vent(death.position));
                *vent_timer_secs = THERMAL_VENT_COOLDOWN_SECS;
            }

            if let Some(hit) = death.last_hit {
                // Kills may arc to the nearest neighbor for a fraction of
                // the killing hit. Arc kills feed back into the worklist.
                if hit.amount > 0.0
                    && hit.kind != DamageKind::Arc
                    && rng.gen_bool(ARC_CHAIN_CHANCE)
                {
                    if let Some((neighbor, neighbor_id)) =
                        nearest_living(world, death.position, ARC_CHAIN_RANGE_PX)
                    {
                        combat::apply_damage(
                            world,
                            neighbor,
                            hit.amount * ARC_CHAIN_FACTOR,
                            DamageKind::Arc,
                            hit.source_cell,
                        );
                        audio_events.push(AudioEvent::ArcDischarge {
                            from_enemy: death.id,
                            to_enemy: neighbor_id,
                        });
                    }
                }
            }
        }
    }
}

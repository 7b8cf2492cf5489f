//! Builds the per-tick `GameStateSnapshot` from the world and engine
//! state. Pure read; the only mutation is draining the event queues.

use std::collections::BTreeMap;

use hecs::World;

use siege_core::components::{
    EnemyId, EnemyInfo, EnemyLife, FlightPath, Health, Mobility, Projectile, StatusEffects,
};
use siege_core::enums::{GamePhase, MapId};
use siege_core::events::{Alert, AudioEvent, FxEvent};
use siege_core::state::*;
use siege_core::types::{CellCoord, CombatModifiers, Position, SimTime};

use crate::drone_turret::DroneTurret;
use crate::economy::EconomyState;
use crate::hazard::HazardZone;
use crate::systems::spawner::WaveSpawner;
use crate::tower::Tower;

/// Everything the snapshot reads from the engine besides the world.
#[allow(clippy::too_many_arguments)]
pub fn build(
    world: &mut World,
    time: SimTime,
    phase: GamePhase,
    map: Option<MapId>,
    wave: u32,
    towers: &BTreeMap<CellCoord, Tower>,
    hazards: &[HazardZone],
    drones: &[DroneTurret],
    chrono_remaining_secs: f64,
    spawner: &WaveSpawner,
    economy: &EconomyState,
    modifiers: &CombatModifiers,
    alerts: &mut Vec<Alert>,
    audio_events: &mut Vec<AudioEvent>,
    fx_events: &mut Vec<FxEvent>,
) -> GameStateSnapshot {
    let mut enemies = Vec::new();
    for (_entity, (id, info, pos, health, mobility, status, life, flight)) in world
        .query_mut::<(
            &EnemyId,
            &EnemyInfo,
            &Position,
            &Health,
            &Mobility,
            &StatusEffects,
            &EnemyLife,
            Option<&FlightPath>,
        )>()
    {
        if !life.alive {
            continue;
        }
        enemies.push(EnemyView {
            enemy_id: id.id,
            archetype: info.archetype,
            position: *pos,
            hp: health.hp,
            max_hp: health.max_hp,
            radius: mobility.radius,
            slow_potency: status.slow_potency,
            burning: status.burn_remaining_secs > 0.0,
            boss_tier: info.boss_tier,
            airborne: flight.is_some(),
        });
    }

    let tower_views = towers
        .values()
        .map(|t| TowerView {
            cell: t.cell,
            kind: t.kind,
            position: t.position,
            range: t.range(modifiers),
            rotation: t.rotation,
            rate_level: t.rate_level,
            range_level: t.range_level,
            slow_module: t.slow_module,
            burn_module: t.burn_module,
            invested_credits: t.invested_credits,
            cooldown_secs: t.cooldown_secs,
            target_enemy: t.target,
            beam_stability_secs: t.beam_stability_secs,
        })
        .collect();

    let mut projectiles = Vec::new();
    for (_entity, (projectile, pos)) in world.query_mut::<(&Projectile, &Position)>() {
        projectiles.push(ProjectileView {
            kind: projectile.kind,
            position: *pos,
            progress: (projectile.elapsed_secs / projectile.travel_secs.max(1e-6)).min(1.0),
        });
    }

    let hazard_views = hazards
        .iter()
        .map(|z| HazardView {
            center: z.center,
            radius: z.current_radius(),
            remaining_secs: z.remaining_secs,
        })
        .collect();

    let drone_views = drones
        .iter()
        .map(|d| DroneTurretView {
            position: d.position,
            remaining_secs: d.remaining_secs,
            target_enemy: d.target,
        })
        .collect();

    let wave_progress = if spawner.total_scheduled > 0 {
        let outstanding = spawner.queued() + enemies.len() as u32;
        (outstanding as f64 / spawner.total_scheduled as f64).min(1.0)
    } else {
        0.0
    };

    GameStateSnapshot {
        time,
        phase,
        map,
        wave,
        wave_progress,
        enemies,
        towers: tower_views,
        projectiles,
        hazards: hazard_views,
        drones: drone_views,
        chrono_remaining_secs,
        spawner: SpawnerView {
            active: spawner.active,
            bonus_wave: spawner.bonus_wave,
            queued: spawner.queued(),
            spawned: spawner.spawned_count,
            total_scheduled: spawner.total_scheduled,
        },
        economy: economy.view(),
        alerts: std::mem::take(alerts),
        audio_events: std::mem::take(audio_events),
        fx_events: std::mem::take(fx_events),
    }
}

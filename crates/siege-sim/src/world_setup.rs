//! Entity spawn factories for the simulation world.
//!
//! Builds enemy component bundles from spawn definitions. Grounded
//! enemies get a `PathFollower`; airborne drones get a `FlightPath`
//! (curved entry from off-screen to the base) instead.

use glam::DVec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use siege_core::components::*;
use siege_core::constants::{DRONE_ENTRY_SECS, DRONE_SPAWN_MARGIN_PX};
use siege_core::types::Position;

use siege_map::MapLayout;
use siege_waves::compose::SpawnEntry;
use siege_waves::profiles;

/// Where on a path a spawn enters. Normal spawns enter at the start;
/// mid-wave injections (boss minions) enter at the parent's spot.
#[derive(Debug, Clone, Copy)]
pub struct PathSpot {
    pub position: Position,
    pub waypoint_index: usize,
    pub progress_px: f64,
}

impl PathSpot {
    /// Entry spot at the head of a path.
    pub fn path_start(layout: &MapLayout, path_index: usize) -> Self {
        let path = &layout.paths[path_index];
        Self {
            position: path.start(),
            waypoint_index: 1,
            progress_px: 0.0,
        }
    }
}

/// Spawn a grounded, path-following enemy.
pub fn spawn_enemy(
    world: &mut World,
    next_enemy_id: &mut u32,
    entry: &SpawnEntry,
    path_index: usize,
    spot: PathSpot,
) -> hecs::Entity {
    let id = *next_enemy_id;
    *next_enemy_id += 1;

    world.spawn((
        Enemy,
        EnemyId { id },
        EnemyLife::default(),
        Health::full(entry.hp),
        spot.position,
        PathFollower {
            path_index,
            waypoint_index: spot.waypoint_index,
            progress_px: spot.progress_px,
            dir_x: 0.0,
            dir_y: 0.0,
        },
        Mobility {
            base_speed: entry.speed,
            speed_multiplier: 1.0,
            radius: entry.radius,
        },
        StatusEffects::default(),
        EnemyInfo {
            archetype: entry.archetype,
            boss_tier: entry.boss_tier,
            reward_credits: entry.reward,
            last_hit: None,
        },
    ))
}

/// Spawn an airborne drone on a curved entry trajectory: off-screen
/// edge point, a laterally offset control point, ending at the base.
pub fn spawn_drone(
    world: &mut World,
    next_enemy_id: &mut u32,
    entry: &SpawnEntry,
    layout: &MapLayout,
    rng: &mut ChaCha8Rng,
) -> hecs::Entity {
    debug_assert!(profiles::profile(entry.archetype).airborne);

    let id = *next_enemy_id;
    *next_enemy_id += 1;

    let base = layout.grid.base;
    let width = layout.grid.width_px();

    // Enter from a random point along the top edge, just off-screen.
    let origin = Position::new(
        rng.gen_range(0.0..width),
        -DRONE_SPAWN_MARGIN_PX,
    );

    // Control point: midpoint pushed sideways for a visible curve.
    let o = DVec2::new(origin.x, origin.y);
    let b = DVec2::new(base.x, base.y);
    let mid = (o + b) * 0.5;
    let along = (b - o).normalize_or_zero();
    let lateral = DVec2::new(-along.y, along.x);
    let offset = rng.gen_range(-160.0..160.0_f64);
    let c = mid + lateral * offset;

    // Entry duration scales with the unit's speed relative to profile base.
    let speed_ratio = entry.speed / profiles::profile(entry.archetype).base_speed;
    let duration = (DRONE_ENTRY_SECS / speed_ratio.max(0.1)).max(1.0);

    world.spawn((
        Enemy,
        EnemyId { id },
        EnemyLife::default(),
        Health::full(entry.hp),
        origin,
        FlightPath {
            origin,
            control: Position::new(c.x, c.y),
            dest: base,
            elapsed_secs: 0.0,
            duration_secs: duration,
        },
        Mobility {
            base_speed: entry.speed,
            speed_multiplier: 1.0,
            radius: entry.radius,
        },
        StatusEffects::default(),
        EnemyInfo {
            archetype: entry.archetype,
            boss_tier: entry.boss_tier,
            reward_credits: entry.reward,
            last_hit: None,
        },
    ))
}

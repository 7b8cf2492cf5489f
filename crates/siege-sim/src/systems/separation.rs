//! Crowd separation: trailing enemies throttle their speed instead of
//! overlapping the unit ahead of them on the same lane.
//!
//! The multiplier stays within [SEPARATION_MIN_MULTIPLIER, 1.0] and is
//! smoothed toward its target each tick, so speed never snaps. Airborne
//! drones fly free and never participate.

use glam::DVec2;
use hecs::World;

use siege_core::components::{EnemyInfo, EnemyLife, Mobility, PathFollower};
use siege_core::constants::{
    SEPARATION_ALIGNMENT_DOT, SEPARATION_MIN_GAP_PX, SEPARATION_MIN_MULTIPLIER,
    SEPARATION_SMOOTHING,
};
use siege_core::types::Position;

struct Snapshot {
    entity: hecs::Entity,
    path_index: usize,
    progress_px: f64,
    position: DVec2,
    dir: DVec2,
    radius: f64,
    boss: bool,
}

pub fn run(world: &mut World) {
    let mut snapshots: Vec<Snapshot> = Vec::new();
    for (entity, (pos, follower, life, info, mobility)) in
        world.query_mut::<(&Position, &PathFollower, &EnemyLife, &EnemyInfo, &Mobility)>()
    {
        if !life.alive {
            continue;
        }
        snapshots.push(Snapshot {
            entity,
            path_index: follower.path_index,
            progress_px: follower.progress_px,
            position: DVec2::new(pos.x, pos.y),
            dir: DVec2::new(follower.dir_x, follower.dir_y),
            radius: mobility.radius,
            boss: info.archetype.is_boss(),
        });
    }

    for me in &snapshots {
        // Bosses set the pace; they never brake for the units ahead
        // (but they still act as obstacles for trailing units).
        if me.boss {
            continue;
        }
        // Nearest unit ahead of us on the same lane, within the gap.
        let mut target = 1.0_f64;
        for other in &snapshots {
            if other.entity == me.entity
                || other.path_index != me.path_index
                || other.progress_px <= me.progress_px
            {
                continue;
            }
            // Only brake for units we are actually following, not ones
            // across a hairpin bend.
            if me.dir.length_squared() > 0.0
                && other.dir.length_squared() > 0.0
                && me.dir.dot(other.dir) < SEPARATION_ALIGNMENT_DOT
            {
                continue;
            }
            // Required gap is the sum of both body radii, floored at the
            // global minimum so small units still keep their distance.
            let gap = (me.radius + other.radius).max(SEPARATION_MIN_GAP_PX);
            let dist = me.position.distance(other.position);
            if dist < gap {
                let scaled = (dist / gap).max(SEPARATION_MIN_MULTIPLIER);
                target = target.min(scaled);
            }
        }

        if let Ok(mut mobility) = world.get::<&mut Mobility>(me.entity) {
            let current = mobility.speed_multiplier;
            let next = current + (target - current) * SEPARATION_SMOOTHING;
            mobility.speed_multiplier = next.clamp(SEPARATION_MIN_MULTIPLIER, 1.0);
        }
    }
}

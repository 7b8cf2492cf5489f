//! Enemy movement: path following for grounded units, curved entry
//! flight for drones.
//!
//! Arrival semantics: stepping past the final waypoint sets
//! `reached_end = true` and `alive = false` in the same update — an
//! enemy is never both alive and arrived.

use glam::DVec2;
use hecs::World;

use siege_core::components::{EnemyLife, FlightPath, Mobility, PathFollower, StatusEffects};
use siege_core::constants::{DT, WAYPOINT_EPSILON_PX};
use siege_core::types::Position;

use siege_map::MapLayout;

/// Effective speed after separation throttle and slow effects.
fn effective_speed(mobility: &Mobility, status: &StatusEffects) -> f64 {
    (mobility.base_speed * mobility.speed_multiplier * (1.0 - status.slow_potency)).max(0.0)
}

/// Advance all grounded path-followers.
pub fn run(world: &mut World, layout: &MapLayout) {
    for (_entity, (pos, follower, mobility, status, life)) in world.query_mut::<(
        &mut Position,
        &mut PathFollower,
        &Mobility,
        &StatusEffects,
        &mut EnemyLife,
    )>() {
        if !life.alive {
            continue;
        }

        let path = match layout.paths.get(follower.path_index) {
            Some(p) => p,
            None => continue,
        };

        let mut budget = effective_speed(mobility, status) * DT;

        // A fast unit can cross more than one waypoint per tick.
        while budget > 0.0 {
            let target = match path.waypoint(follower.waypoint_index) {
                Some(t) => t,
                None => {
                    life.reached_end = true;
                    life.alive = false;
                    break;
                }
            };

            let to_target = DVec2::new(target.x - pos.x, target.y - pos.y);
            let dist = to_target.length();

            if dist <= budget + WAYPOINT_EPSILON_PX {
                // Snap to the waypoint and continue along the next segment.
                pos.x = target.x;
                pos.y = target.y;
                follower.progress_px += dist;
                budget -= dist;
                follower.waypoint_index += 1;
                if follower.waypoint_index >= path.len() {
                    life.reached_end = true;
                    life.alive = false;
                    break;
                }
            } else {
                let dir = to_target / dist;
                pos.x += dir.x * budget;
                pos.y += dir.y * budget;
                follower.progress_px += budget;
                follower.dir_x = dir.x;
                follower.dir_y = dir.y;
                break;
            }
        }
    }
}

/// Advance drone entry flights (quadratic Bezier, time-parameterized).
/// Slow effects stretch the flight; separation never applies.
pub fn run_flights(world: &mut World) {
    for (_entity, (pos, flight, status, life)) in world.query_mut::<(
        &mut Position,
        &mut FlightPath,
        &StatusEffects,
        &mut EnemyLife,
    )>() {
        if !life.alive {
            continue;
        }

        flight.elapsed_secs += DT * (1.0 - status.slow_potency).max(0.0);
        let t = (flight.elapsed_secs / flight.duration_secs.max(1e-6)).min(1.0);

        let o = DVec2::new(flight.origin.x, flight.origin.y);
        let c = DVec2::new(flight.control.x, flight.control.y);
        let d = DVec2::new(flight.dest.x, flight.dest.y);
        let u = 1.0 - t;
        let p = o * (u * u) + c * (2.0 * u * t) + d * (t * t);
        pos.x = p.x;
        pos.y = p.y;

        if t >= 1.0 {
            life.reached_end = true;
            life.alive = false;
        }
    }
}

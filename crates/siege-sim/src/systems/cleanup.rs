//! End-of-tick despawn of finished enemies.
//!
//! Runs last, after deaths and leaks have both observed this tick's
//! terminal transitions. The buffer is engine-owned and reused to avoid
//! a per-tick allocation.

use hecs::{Entity, World};

use siege_core::components::EnemyLife;

pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();
    for (entity, life) in world.query_mut::<&EnemyLife>() {
        if !life.alive {
            despawn_buffer.push(entity);
        }
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

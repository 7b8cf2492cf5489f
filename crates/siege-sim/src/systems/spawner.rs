//! Wave spawner — a timed queue of pending spawn definitions.
//!
//! Built fresh each time a wave starts. `total_scheduled` is a LIVE
//! counter: any code path that injects enemies mid-wave (boss minions)
//! must report them via `register_injected` so wave-progress accounting
//! stays consistent. This is part of the spawner's public contract.

use std::collections::VecDeque;

use hecs::World;
use rand_chacha::ChaCha8Rng;

use siege_core::constants::DT;
use siege_core::events::AudioEvent;

use siege_map::{MapLayout, PathSelector};
use siege_waves::compose::SpawnEntry;
use siege_waves::profiles;

use crate::world_setup::{self, PathSpot};

/// Per-wave spawn state. Boss minions never pass through the queue —
/// the death system spawns them in place on the parent's lane and
/// reports them via `register_injected`.
#[derive(Debug, Clone, Default)]
pub struct WaveSpawner {
    queue: VecDeque<SpawnEntry>,
    pub elapsed_since_spawn: f64,
    pub total_scheduled: u32,
    pub spawned_count: u32,
    /// True from wave start until completion is detected.
    pub active: bool,
    pub bonus_wave: bool,
}

impl WaveSpawner {
    /// Reset for a new wave.
    pub fn start_wave(&mut self, entries: Vec<SpawnEntry>, bonus_wave: bool) {
        self.queue = entries.into();
        self.elapsed_since_spawn = 0.0;
        self.total_scheduled = self.queue.len() as u32;
        self.spawned_count = 0;
        self.active = true;
        self.bonus_wave = bonus_wave;
    }

    pub fn queued(&self) -> u32 {
        self.queue.len() as u32
    }

    /// Record `count` enemies spawned outside the queue (mid-wave
    /// injection). Keeps `total_scheduled` and `spawned_count` honest.
    pub fn register_injected(&mut self, count: u32) {
        self.total_scheduled += count;
        self.spawned_count += count;
    }

    /// Halt spawning (game over).
    pub fn halt(&mut self) {
        self.queue.clear();
        self.active = false;
    }

    /// Mark the wave finished.
    pub fn finish(&mut self) {
        self.active = false;
    }
}

/// Advance the spawn queue and spawn any due entries.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    spawner: &mut WaveSpawner,
    selector: &mut PathSelector,
    layout: &MapLayout,
    next_enemy_id: &mut u32,
    audio_events: &mut Vec<AudioEvent>,
    wave: u32,
) {
    if !spawner.active || spawner.queue.is_empty() {
        return;
    }

    spawner.elapsed_since_spawn += DT;

    while let Some(head) = spawner.queue.front() {
        if spawner.elapsed_since_spawn < head.delay_secs {
            break;
        }
        let entry = match spawner.queue.pop_front() {
            Some(e) => e,
            None => break,
        };
        spawner.elapsed_since_spawn -= entry.delay_secs;

        if profiles::profile(entry.archetype).airborne {
            world_setup::spawn_drone(world, next_enemy_id, &entry, layout, rng);
        } else {
            let path_index = selector.choose(rng).min(layout.paths.len() - 1);
            let spot = PathSpot::path_start(layout, path_index);
            world_setup::spawn_enemy(world, next_enemy_id, &entry, path_index, spot);
        }
        spawner.spawned_count += 1;

        if entry.archetype.is_boss() {
            audio_events.push(AudioEvent::BossInbound {
                wave,
                tier: entry.boss_tier,
            });
        }
    }
}

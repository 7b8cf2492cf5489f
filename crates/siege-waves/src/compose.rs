//! Per-wave spawn-list generation.
//!
//! Given a wave number and the run RNG, produces the ordered list of
//! timed spawn definitions the spawner consumes. Every
//! `BOSS_WAVE_INTERVAL`th wave schedules exactly one boss.

use rand::Rng;

use siege_core::constants::BOSS_WAVE_INTERVAL;
use siege_core::enums::EnemyArchetype;

use crate::profiles::{self, profile};

/// One scheduled spawn: stats are resolved here so the spawner stays a
/// dumb timed queue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnEntry {
    /// Delay after the previous spawn (seconds).
    pub delay_secs: f64,
    pub archetype: EnemyArchetype,
    pub hp: f64,
    pub speed: f64,
    pub reward: u32,
    pub radius: f64,
    /// Boss tier (0 for non-bosses).
    pub boss_tier: u8,
}

fn entry(archetype: EnemyArchetype, wave: u32, delay_secs: f64) -> SpawnEntry {
    SpawnEntry {
        delay_secs,
        archetype,
        hp: profiles::hp_for_wave(archetype, wave),
        speed: profiles::speed_for_wave(archetype, wave),
        reward: profiles::reward_for_wave(archetype, wave),
        radius: profile(archetype).radius_px,
        boss_tier: 0,
    }
}

fn boss_entry(wave: u32, delay_secs: f64) -> SpawnEntry {
    // Alternate the boss kind between intervals; tier scales damage on leak.
    let interval = wave / BOSS_WAVE_INTERVAL;
    let archetype = if interval % 2 == 1 {
        EnemyArchetype::BossNano
    } else {
        EnemyArchetype::BossSplit
    };
    let mut e = entry(archetype, wave, delay_secs);
    e.boss_tier = interval.min(u8::MAX as u32) as u8;
    e
}

/// Wave-scaled stats for a mid-wave spawn (boss death bursts). The
/// delay is zero; these are injected, not queued.
pub fn minion_entry(archetype: EnemyArchetype, wave: u32) -> SpawnEntry {
    entry(archetype, wave, 0.0)
}

/// Compose the spawn list for a regular wave.
pub fn compose_wave(wave: u32, rng: &mut impl Rng) -> Vec<SpawnEntry> {
    let wave = wave.max(1);
    let mut entries = Vec::new();

    // Tier mix shifts with wave number.
    let grunts = 4 + wave;
    let runners = if wave >= 3 { 1 + wave / 2 } else { 0 };
    let brutes = if wave >= 5 { wave / 3 } else { 0 };
    let blobs = if wave >= 4 { wave / 5 } else { 0 };
    let drones = if wave >= 6 { 1 + wave / 6 } else { 0 };

    let gap = (1.1 - 0.02 * wave as f64).max(0.45);
    let mut push = |list: &mut Vec<SpawnEntry>, archetype, count: u32, gap_factor: f64| {
        for _ in 0..count {
            let delay = gap * gap_factor + rng.gen_range(-0.1..0.1);
            list.push(entry(archetype, wave, delay.max(0.1)));
        }
    };

    push(&mut entries, EnemyArchetype::Grunt, grunts, 1.0);
    push(&mut entries, EnemyArchetype::Runner, runners, 0.7);
    push(&mut entries, EnemyArchetype::Brute, brutes, 1.6);
    push(&mut entries, EnemyArchetype::Blob, blobs, 1.2);
    push(&mut entries, EnemyArchetype::Drone, drones, 1.0);

    if wave % BOSS_WAVE_INTERVAL == 0 {
        // Exactly one boss, after a short dramatic pause.
        entries.push(boss_entry(wave, 2.5));
    }

    // First spawn of a wave comes quickly.
    if let Some(first) = entries.first_mut() {
        first.delay_secs = 0.5;
    }
    entries
}

/// Compose a bonus wave: fewer, faster units with inflated rewards.
pub fn compose_bonus_wave(wave: u32, rng: &mut impl Rng) -> Vec<SpawnEntry> {
    let wave = wave.max(1);
    let count = 5 + wave / 3;
    let mut entries = Vec::with_capacity(count as usize);
    for i in 0..count {
        let mut e = entry(
            EnemyArchetype::Runner,
            wave,
            if i == 0 { 0.5 } else { rng.gen_range(0.35..0.6) },
        );
        e.reward *= 3;
        entries.push(e);
    }
    entries
}

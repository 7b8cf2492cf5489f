//! Run economy and scoring state.

use serde::{Deserialize, Serialize};

use siege_core::constants::*;
use siege_core::state::EconomyView;

/// Credits, fragments, shards, lives, and streak tracking for one run.
/// Mutated by wave completion, kills, leaks, and shop purchases; reset
/// at run start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EconomyState {
    pub credits: u32,
    pub data_fragments: u32,
    pub core_shards: u32,
    pub lives: u32,
    pub max_lives: u32,
    /// Reactor shield pool — absorbs leak damage before lives.
    pub shield: u32,
    pub perfect_streak: u32,
    pub best_wave: u32,
    /// Whether any reactor damage was taken during the current wave.
    pub wave_damage_taken: bool,
}

impl Default for EconomyState {
    fn default() -> Self {
        Self {
            credits: STARTING_CREDITS,
            data_fragments: 0,
            core_shards: 0,
            lives: STARTING_LIVES,
            max_lives: STARTING_LIVES,
            shield: 0,
            perfect_streak: 0,
            best_wave: 0,
            wave_damage_taken: false,
        }
    }
}

/// Payout summary for a completed wave (for events/alerts).
#[derive(Debug, Clone, Copy, Default)]
pub struct WaveRewards {
    pub credits: u32,
    pub fragments: u32,
    pub shards: u32,
    pub perfect: bool,
}

impl EconomyState {
    /// Absorb leak damage: shield first, then lives. Returns
    /// (shield_absorbed, lives_lost).
    pub fn absorb_leak(&mut self, damage: u32) -> (u32, u32) {
        let absorbed = damage.min(self.shield);
        self.shield -= absorbed;
        let through = damage - absorbed;
        let lost = through.min(self.lives);
        self.lives -= lost;
        self.wave_damage_taken = true;
        (absorbed, lost)
    }

    /// Settle a completed wave: income, perfect-streak bonus, fragment
    /// checkpoints, boss-wave shards, bonus-wave payout.
    pub fn settle_wave(&mut self, wave: u32, bonus_wave: bool, credit_mul: f64) -> WaveRewards {
        let mut rewards = WaveRewards {
            perfect: !self.wave_damage_taken,
            ..WaveRewards::default()
        };

        let mut credits = WAVE_INCOME_BASE + WAVE_INCOME_PER_WAVE * wave;
        if rewards.perfect {
            self.perfect_streak += 1;
            credits += PERFECT_WAVE_BONUS;
        } else {
            self.perfect_streak = 0;
        }
        if bonus_wave {
            credits += BONUS_WAVE_PAYOUT;
        }
        rewards.credits = (credits as f64 * credit_mul).floor() as u32;
        self.credits += rewards.credits;

        if wave % FRAGMENT_CHECKPOINT_INTERVAL == 0 {
            rewards.fragments = FRAGMENT_CHECKPOINT_REWARD;
            self.data_fragments += rewards.fragments;
        }

        if wave % BOSS_WAVE_INTERVAL == 0 {
            rewards.shards = BOSS_WAVE_SHARD_REWARD;
            if rewards.perfect {
                rewards.shards += BOSS_WAVE_FLAWLESS_SHARD;
            }
            self.core_shards += rewards.shards;
        }

        self.best_wave = self.best_wave.max(wave);
        rewards
    }

    /// Credit a kill reward (already modifier-scaled by the caller).
    pub fn credit_kill(&mut self, reward: u32) {
        self.credits += reward;
    }

    pub fn view(&self) -> EconomyView {
        EconomyView {
            credits: self.credits,
            data_fragments: self.data_fragments,
            core_shards: self.core_shards,
            lives: self.lives,
            max_lives: self.max_lives,
            shield: self.shield,
            perfect_streak: self.perfect_streak,
            best_wave: self.best_wave,
        }
    }
}

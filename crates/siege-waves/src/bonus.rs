//! Bonus-wave eligibility tracking.
//!
//! A wave may roll into a bonus wave when: the wave number has reached
//! the minimum, enough waves have passed since the last bonus, and the
//! trailing window is not saturated. These are tuning parameters, not
//! invariants — all thresholds live in `siege_core::constants`.

use rand::Rng;

use siege_core::constants::{
    BONUS_WAVE_CHANCE, BONUS_WAVE_MAX_PER_WINDOW, BONUS_WAVE_MIN_GAP, BONUS_WAVE_MIN_WAVE,
    BONUS_WAVE_WINDOW,
};

/// Tracks bonus-wave history across a run.
#[derive(Debug, Clone, Default)]
pub struct BonusTracker {
    /// Wave numbers that were bonus waves, ascending.
    history: Vec<u32>,
}

impl BonusTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `wave` passes the structural eligibility checks
    /// (before the random roll).
    pub fn eligible(&self, wave: u32) -> bool {
        if wave < BONUS_WAVE_MIN_WAVE {
            return false;
        }
        if let Some(&last) = self.history.last() {
            if wave.saturating_sub(last) < BONUS_WAVE_MIN_GAP {
                return false;
            }
        }
        let window_start = wave.saturating_sub(BONUS_WAVE_WINDOW);
        let in_window = self
            .history
            .iter()
            .filter(|&&w| w > window_start)
            .count();
        in_window < BONUS_WAVE_MAX_PER_WINDOW
    }

    /// Roll for a bonus wave. Records the wave on success.
    pub fn roll(&mut self, wave: u32, rng: &mut impl Rng) -> bool {
        if !self.eligible(wave) {
            return false;
        }
        if rng.gen_bool(BONUS_WAVE_CHANCE) {
            self.history.push(wave);
            true
        } else {
            false
        }
    }

    /// Record a bonus wave without rolling (forced/scripted bonuses).
    pub fn record(&mut self, wave: u32) {
        self.history.push(wave);
    }

    /// Wave numbers recorded as bonus waves.
    pub fn history(&self) -> &[u32] {
        &self.history
    }
}

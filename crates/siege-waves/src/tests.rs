use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use siege_core::constants::{BONUS_WAVE_MIN_WAVE, BOSS_WAVE_INTERVAL};
use siege_core::enums::EnemyArchetype;

use crate::bonus::BonusTracker;
use crate::compose::{compose_bonus_wave, compose_wave};
use crate::profiles::{self, OnDeathRule};

// ---- Profiles ----

#[test]
fn test_profile_flags() {
    let drone = profiles::profile(EnemyArchetype::Drone);
    assert!(drone.airborne);
    assert!(drone.hazard_immune);

    let grunt = profiles::profile(EnemyArchetype::Grunt);
    assert!(!grunt.airborne);
    assert!(!grunt.hazard_immune);
    assert_eq!(grunt.on_death, OnDeathRule::None);
}

#[test]
fn test_boss_on_death_rules() {
    match profiles::profile(EnemyArchetype::BossNano).on_death {
        OnDeathRule::BurstInto { archetype, min, max } => {
            assert_eq!(archetype, EnemyArchetype::Grunt);
            assert!(min >= 2 && max >= min);
        }
        other => panic!("BossNano should burst, got {other:?}"),
    }
    match profiles::profile(EnemyArchetype::BossSplit).on_death {
        OnDeathRule::FractureInto { archetype, min, max } => {
            assert_eq!(archetype, EnemyArchetype::Shard);
            assert!((2..=3).contains(&min) && (2..=3).contains(&max));
        }
        other => panic!("BossSplit should fracture, got {other:?}"),
    }
}

#[test]
fn test_hp_scaling_is_monotonic() {
    for archetype in [
        EnemyArchetype::Grunt,
        EnemyArchetype::Brute,
        EnemyArchetype::BossNano,
    ] {
        let mut prev = 0.0;
        for wave in 1..30 {
            let hp = profiles::hp_for_wave(archetype, wave);
            assert!(hp > prev, "hp must grow with wave number");
            prev = hp;
        }
    }
}

// ---- Wave composition ----

#[test]
fn test_boss_wave_has_exactly_one_boss() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    for wave in [BOSS_WAVE_INTERVAL, BOSS_WAVE_INTERVAL * 2, BOSS_WAVE_INTERVAL * 3] {
        let entries = compose_wave(wave, &mut rng);
        let bosses = entries
            .iter()
            .filter(|e| e.archetype.is_boss())
            .count();
        assert_eq!(bosses, 1, "wave {wave} must schedule exactly one boss");
    }
}

#[test]
fn test_non_boss_waves_have_no_boss() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    for wave in 1..BOSS_WAVE_INTERVAL {
        let entries = compose_wave(wave, &mut rng);
        assert!(entries.iter().all(|e| !e.archetype.is_boss()));
        assert!(entries.iter().all(|e| e.boss_tier == 0));
    }
}

#[test]
fn test_boss_tier_scales_with_interval() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let w10 = compose_wave(10, &mut rng);
    let w20 = compose_wave(20, &mut rng);
    let t10 = w10.iter().find(|e| e.archetype.is_boss()).unwrap();
    let t20 = w20.iter().find(|e| e.archetype.is_boss()).unwrap();
    assert_eq!(t10.boss_tier, 1);
    assert_eq!(t20.boss_tier, 2);
    // The boss kind alternates between intervals.
    assert_ne!(t10.archetype, t20.archetype);
}

#[test]
fn test_delays_are_positive() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    for wave in 1..25 {
        for e in compose_wave(wave, &mut rng) {
            assert!(e.delay_secs > 0.0);
            assert!(e.hp > 0.0);
            assert!(e.speed > 0.0);
        }
    }
}

#[test]
fn test_drones_appear_from_wave_six() {
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let early = compose_wave(5, &mut rng);
    assert!(early
        .iter()
        .all(|e| e.archetype != EnemyArchetype::Drone));
    let later = compose_wave(6, &mut rng);
    assert!(later
        .iter()
        .any(|e| e.archetype == EnemyArchetype::Drone));
}

#[test]
fn test_bonus_wave_rewards_are_inflated() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let regular_reward = profiles::reward_for_wave(EnemyArchetype::Runner, 7);
    let entries = compose_bonus_wave(7, &mut rng);
    assert!(!entries.is_empty());
    for e in &entries {
        assert_eq!(e.archetype, EnemyArchetype::Runner);
        assert_eq!(e.reward, regular_reward * 3);
    }
}

// ---- Bonus eligibility ----

#[test]
fn test_bonus_requires_minimum_wave() {
    let tracker = BonusTracker::new();
    for wave in 0..BONUS_WAVE_MIN_WAVE {
        assert!(!tracker.eligible(wave));
    }
    assert!(tracker.eligible(BONUS_WAVE_MIN_WAVE));
}

#[test]
fn test_bonus_gap_rule() {
    let mut tracker = BonusTracker::new();
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    // Force a recorded bonus at wave 5.
    loop {
        if tracker.roll(5, &mut rng) {
            break;
        }
    }
    assert_eq!(tracker.history(), &[5]);

    // Waves 6-8 are inside the minimum gap of 4.
    assert!(!tracker.eligible(6));
    assert!(!tracker.eligible(7));
    assert!(!tracker.eligible(8));
    // Wave 9 clears the gap.
    assert!(tracker.eligible(9));
}

#[test]
fn test_bonus_window_saturation() {
    let mut tracker = BonusTracker::new();
    tracker.record(13);
    tracker.record(16);

    // Wave 20: gap since 16 is 4 (passes), but both 13 and 16 sit inside
    // the trailing 8-wave window — saturated.
    assert!(!tracker.eligible(20));

    // Wave 25: both drop out of the window.
    assert!(tracker.eligible(25));
}

#[test]
fn test_bonus_roll_is_deterministic_per_seed() {
    let mut a = BonusTracker::new();
    let mut b = BonusTracker::new();
    let mut rng_a = ChaCha8Rng::seed_from_u64(42);
    let mut rng_b = ChaCha8Rng::seed_from_u64(42);

    for wave in 1..40 {
        assert_eq!(a.roll(wave, &mut rng_a), b.roll(wave, &mut rng_b));
    }
    assert_eq!(a.history(), b.history());
}

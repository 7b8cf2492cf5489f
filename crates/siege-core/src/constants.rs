//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz). One tick per display frame.
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Grid ---

/// Tile edge length in world pixels.
pub const TILE_SIZE_PX: f64 = 40.0;

// --- Path following ---

/// Distance at which a waypoint counts as reached (pixels).
pub const WAYPOINT_EPSILON_PX: f64 = 2.0;

// --- Separation ---

/// Minimum required gap between two queued units (pixels). Used when the
/// sum of body radii is smaller.
pub const SEPARATION_MIN_GAP_PX: f64 = 34.0;

/// Floor of the separation speed multiplier.
pub const SEPARATION_MIN_MULTIPLIER: f64 = 0.2;

/// Per-frame exponential smoothing factor toward the target multiplier.
/// Smoothing (rather than snapping) is what prevents corner jitter.
pub const SEPARATION_SMOOTHING: f64 = 0.22;

/// Pair is only throttled when both units move in a similar direction:
/// dot product of their last movement directions at or above this
/// (0.5 = within ~60 degrees).
pub const SEPARATION_ALIGNMENT_DOT: f64 = 0.5;

// --- Leaks / reactor ---

/// Reactor damage for a non-boss leak.
pub const LEAK_DAMAGE: u32 = 1;

/// Boss leak damage is `max(BOSS_LEAK_FLOOR, BOSS_LEAK_FLOOR + tier)`.
pub const BOSS_LEAK_FLOOR: u32 = 3;

/// Starting reactor lives.
pub const STARTING_LIVES: u32 = 20;

// --- Economy ---

/// Starting credits.
pub const STARTING_CREDITS: u32 = 120;

/// Fixed credit income per completed wave.
pub const WAVE_INCOME_BASE: u32 = 25;

/// Extra income scaling per wave number.
pub const WAVE_INCOME_PER_WAVE: u32 = 3;

/// Bonus credits for a perfect (leak-free) wave.
pub const PERFECT_WAVE_BONUS: u32 = 15;

/// Data fragments granted at checkpoint waves.
pub const FRAGMENT_CHECKPOINT_REWARD: u32 = 3;

/// A checkpoint every N waves.
pub const FRAGMENT_CHECKPOINT_INTERVAL: u32 = 5;

/// Core shards for clearing a boss wave.
pub const BOSS_WAVE_SHARD_REWARD: u32 = 1;

/// Extra shard when the boss wave was cleared without reactor damage.
pub const BOSS_WAVE_FLAWLESS_SHARD: u32 = 1;

/// Fraction of invested credits refunded on sell.
pub const SELL_REFUND_FRACTION: f64 = 0.25;

/// Extra credit payout for completing a bonus wave.
pub const BONUS_WAVE_PAYOUT: u32 = 40;

// --- Towers: cannon ---

pub const CANNON_COST: u32 = 50;
pub const CANNON_DAMAGE: f64 = 14.0;
pub const CANNON_RANGE_PX: f64 = 130.0;
/// Shots per second at level 0.
pub const CANNON_FIRE_RATE: f64 = 1.2;
pub const CANNON_ROTATION_RATE: f64 = 6.0;
/// Round flight speed (px/s) — travel time = distance / speed.
pub const CANNON_SHOT_SPEED: f64 = 420.0;

// --- Towers: laser ---

pub const LASER_COST: u32 = 90;
/// Damage per second at level 0, before the stability ramp.
pub const LASER_DPS: f64 = 18.0;
pub const LASER_RANGE_PX: f64 = 110.0;
pub const LASER_ROTATION_RATE: f64 = 9.0;
/// Seconds of continuous lock to reach the full stability bonus.
pub const LASER_STABILITY_RAMP_SECS: f64 = 2.5;
/// Damage multiplier bonus at full stability (1.0 = +100%).
pub const LASER_STABILITY_MAX_BONUS: f64 = 0.75;

// --- Towers: mortar ---

pub const MORTAR_COST: u32 = 120;
pub const MORTAR_DAMAGE: f64 = 26.0;
pub const MORTAR_RANGE_PX: f64 = 200.0;
/// Shots per second at level 0.
pub const MORTAR_FIRE_RATE: f64 = 0.4;
pub const MORTAR_ROTATION_RATE: f64 = 3.0;
pub const MORTAR_SHELL_SPEED: f64 = 240.0;
pub const MORTAR_SPLASH_RADIUS_PX: f64 = 55.0;
/// Targets closer than `range * this` are inside the dead zone
/// (the engagement envelope is a ring, not a disk).
pub const MORTAR_DEAD_ZONE_FRACTION: f64 = 0.3;

/// Angular error under which a turret counts as aimed (radians).
pub const AIM_TOLERANCE_RAD: f64 = 0.15;

// --- Upgrades ---

pub const UPGRADE_MAX_LEVEL: u8 = 3;
/// Damage / fire-rate bonus per Rate level.
pub const UPGRADE_RATE_BONUS: f64 = 0.20;
/// Range bonus per Range level.
pub const UPGRADE_RANGE_BONUS: f64 = 0.15;
/// Upgrade cost = tower base cost * this * (level + 1).
pub const UPGRADE_COST_FACTOR: f64 = 0.6;
pub const MODULE_COST: u32 = 70;

// --- Status modules ---

pub const SLOW_MODULE_POTENCY: f64 = 0.3;
pub const SLOW_MODULE_DURATION_SECS: f64 = 1.5;
pub const BURN_MODULE_DPS: f64 = 6.0;
pub const BURN_MODULE_DURATION_SECS: f64 = 3.0;

// --- Hazard zones ---

/// Acid pool left by mortar shells (when the burn module is installed).
pub const ACID_POOL_RADIUS_PX: f64 = 48.0;
pub const ACID_POOL_GROW_SECS: f64 = 0.4;
pub const ACID_POOL_LIFE_SECS: f64 = 4.0;
pub const ACID_POOL_DPS: f64 = 8.0;
pub const ACID_POOL_SLOW_POTENCY: f64 = 0.25;
pub const ACID_POOL_SLOW_DURATION_SECS: f64 = 0.5;

/// Thermal vent: hazard left where a burning enemy died.
pub const THERMAL_VENT_RADIUS_PX: f64 = 36.0;
pub const THERMAL_VENT_LIFE_SECS: f64 = 2.5;
pub const THERMAL_VENT_DPS: f64 = 12.0;
/// Global cooldown between thermal vents (seconds).
pub const THERMAL_VENT_COOLDOWN_SECS: f64 = 8.0;

// --- On-kill chain effects ---

/// Chance that a kill arcs damage to the nearest other enemy.
pub const ARC_CHAIN_CHANCE: f64 = 0.25;
pub const ARC_CHAIN_RANGE_PX: f64 = 90.0;
/// Arc damage as a fraction of the killing hit's damage basis.
pub const ARC_CHAIN_FACTOR: f64 = 0.5;

// --- Blob ---

/// Fraction of max hp restored to nearby enemies when a Blob dies.
pub const BLOB_HEAL_FRACTION: f64 = 0.25;
pub const BLOB_HEAL_RADIUS_PX: f64 = 120.0;

// --- Boss on-death spawns ---

pub const NANO_BURST_MIN: u32 = 6;
pub const NANO_BURST_MAX: u32 = 10;
pub const SPLIT_SHARD_MIN: u32 = 2;
pub const SPLIT_SHARD_MAX: u32 = 3;

// --- Waves ---

/// Every Nth wave carries exactly one boss.
pub const BOSS_WAVE_INTERVAL: u32 = 10;

/// Bonus wave eligibility — tuning parameters, not invariants.
pub const BONUS_WAVE_MIN_WAVE: u32 = 4;
pub const BONUS_WAVE_MIN_GAP: u32 = 4;
pub const BONUS_WAVE_WINDOW: u32 = 8;
pub const BONUS_WAVE_MAX_PER_WINDOW: usize = 2;
pub const BONUS_WAVE_CHANCE: f64 = 0.35;

// --- Airborne enemies ---

/// Airborne entry flight duration (seconds).
pub const DRONE_ENTRY_SECS: f64 = 9.0;
/// Off-screen spawn margin beyond the map edge (pixels).
pub const DRONE_SPAWN_MARGIN_PX: f64 = 80.0;

// --- Ally drone turrets ---

pub const DRONE_TURRET_COST: u32 = 60;
pub const DRONE_TURRET_LIFETIME_SECS: f64 = 20.0;
pub const DRONE_TURRET_RANGE_PX: f64 = 100.0;
pub const DRONE_TURRET_DAMAGE: f64 = 8.0;
/// Shots per second.
pub const DRONE_TURRET_FIRE_RATE: f64 = 2.0;

// --- Chrono buff ---

/// Longest allowed duration for a timed combat buff (seconds).
pub const CHRONO_BUFF_MAX_SECS: f64 = 30.0;

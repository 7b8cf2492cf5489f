//! Simulation engine — the core of the game.
//!
//! `SiegeEngine` owns the hecs ECS world, processes player commands at
//! tick boundaries, runs all systems, and produces `GameStateSnapshot`s.
//! Completely headless, enabling deterministic testing: the same seed
//! and command sequence always produce the same snapshots.

use std::collections::{BTreeMap, VecDeque};

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use siege_core::commands::PlayerCommand;
use siege_core::components::EnemyLife;
use siege_core::constants::{CHRONO_BUFF_MAX_SECS, DRONE_TURRET_COST, DT, MODULE_COST};
use siege_core::enums::{AlertLevel, GamePhase, MapId};
use siege_core::events::{Alert, AudioEvent, FxEvent};
use siege_core::state::GameStateSnapshot;
use siege_core::types::{CellCoord, CombatModifiers, SimTime};

use siege_map::{layouts, MapLayout, PathSelector};
use siege_waves::{compose, BonusTracker};

use crate::drone_turret::DroneTurret;
use crate::economy::EconomyState;
use crate::hazard::HazardZone;
use crate::systems;
use crate::systems::spawner::WaveSpawner;
use crate::tower::Tower;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
        }
    }
}

/// A timed modifier table layered multiplicatively on the base one.
struct ChronoBuff {
    modifiers: CombatModifiers,
    remaining_secs: f64,
}

/// The simulation engine. Owns the ECS world and all run state.
pub struct SiegeEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    map: Option<MapId>,
    layout: Option<MapLayout>,
    selector: Option<PathSelector>,
    wave: u32,
    time_scale: f64,
    dev_mode: bool,
    modifiers: CombatModifiers,
    rng: ChaCha8Rng,
    next_enemy_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    alerts: Vec<Alert>,
    audio_events: Vec<AudioEvent>,
    fx_events: Vec<FxEvent>,

    towers: BTreeMap<CellCoord, Tower>,
    hazards: Vec<HazardZone>,
    drones: Vec<DroneTurret>,
    chrono: Option<ChronoBuff>,
    spawner: WaveSpawner,
    bonus: BonusTracker,
    economy: EconomyState,
    vent_timer_secs: f64,
}

impl SiegeEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            map: None,
            layout: None,
            selector: None,
            wave: 0,
            time_scale: config.time_scale,
            dev_mode: false,
            modifiers: CombatModifiers::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_enemy_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            alerts: Vec::new(),
            audio_events: Vec::new(),
            fx_events: Vec::new(),
            towers: BTreeMap::new(),
            hazards: Vec::new(),
            drones: Vec::new(),
            chrono: None,
            spawner: WaveSpawner::default(),
            bonus: BonusTracker::new(),
            economy: EconomyState::default(),
            vent_timer_secs: 0.0,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active && self.layout.is_some() {
            self.run_systems();
            self.time.advance();
        }

        // Tower ranges in the view reflect any active chrono buff.
        let modifiers = self.effective_modifiers();
        let chrono_remaining = self.chrono.as_ref().map_or(0.0, |b| b.remaining_secs);
        systems::snapshot::build(
            &mut self.world,
            self.time,
            self.phase,
            self.map,
            self.wave,
            &self.towers,
            &self.hazards,
            &self.drones,
            chrono_remaining,
            &self.spawner,
            &self.economy,
            &modifiers,
            &mut self.alerts,
            &mut self.audio_events,
            &mut self.fx_events,
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn wave(&self) -> u32 {
        self.wave
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn towers(&self) -> &BTreeMap<CellCoord, Tower> {
        &self.towers
    }

    pub fn economy(&self) -> &EconomyState {
        &self.economy
    }

    pub fn drones(&self) -> &[DroneTurret] {
        &self.drones
    }

    /// The modifier table the systems actually see: the base table,
    /// multiplied by the chrono buff while one is active.
    pub(crate) fn effective_modifiers(&self) -> CombatModifiers {
        match &self.chrono {
            Some(buff) => self.modifiers.combined(&buff.modifiers),
            None => self.modifiers,
        }
    }

    #[cfg(test)]
    pub fn economy_mut(&mut self) -> &mut EconomyState {
        &mut self.economy
    }

    #[cfg(test)]
    pub fn spawner(&self) -> &WaveSpawner {
        &self.spawner
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    fn alert(&mut self, level: AlertLevel, message: impl Into<String>) {
        self.alerts.push(Alert {
            level,
            message: message.into(),
            tick: self.time.tick,
        });
    }

    /// Deduct a purchase. Dev mode makes everything free.
    fn charge(&mut self, cost: u32) -> bool {
        if self.dev_mode {
            return true;
        }
        if self.economy.credits >= cost {
            self.economy.credits -= cost;
            true
        } else {
            false
        }
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command. Invalid commands degrade to
    /// alerts, never to state corruption.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartRun { map } => {
                if matches!(self.phase, GamePhase::MainMenu | GamePhase::GameOver) {
                    self.start_run(map);
                }
            }
            PlayerCommand::ReturnToMenu => {
                self.world.clear();
                self.towers.clear();
                self.hazards.clear();
                self.drones.clear();
                self.chrono = None;
                self.spawner = WaveSpawner::default();
                self.layout = None;
                self.selector = None;
                self.map = None;
                self.phase = GamePhase::MainMenu;
            }
            PlayerCommand::StartWave => self.start_wave(),
            PlayerCommand::PlaceTower { cell, kind } => self.place_tower(cell, kind),
            PlayerCommand::UpgradeTower { cell, track } => {
                let Some(tower) = self.towers.get(&cell) else {
                    self.alert(AlertLevel::Warning, "no tower at that cell");
                    return;
                };
                match tower.upgrade_cost(track) {
                    Some(cost) => {
                        if self.charge(cost) {
                            if let Some(tower) = self.towers.get_mut(&cell) {
                                tower.apply_upgrade(track, cost);
                            }
                        } else {
                            self.alert(AlertLevel::Warning, "insufficient credits");
                        }
                    }
                    None => self.alert(AlertLevel::Warning, "track already at max level"),
                }
            }
            PlayerCommand::InstallModule { cell, module } => {
                let Some(tower) = self.towers.get(&cell) else {
                    self.alert(AlertLevel::Warning, "no tower at that cell");
                    return;
                };
                if tower.has_module(module) {
                    self.alert(AlertLevel::Warning, "module already installed");
                    return;
                }
                if self.charge(MODULE_COST) {
                    if let Some(tower) = self.towers.get_mut(&cell) {
                        tower.install_module(module, MODULE_COST);
                    }
                } else {
                    self.alert(AlertLevel::Warning, "insufficient credits");
                }
            }
            PlayerCommand::SellTower { cell } => {
                let Some(tower) = self.towers.remove(&cell) else {
                    self.alert(AlertLevel::Warning, "no tower at that cell");
                    return;
                };
                let refund = tower.sell_refund();
                self.economy.credits += refund;
                if let Some(layout) = self.layout.as_mut() {
                    layout.grid.release(cell);
                }
                self.audio_events.push(AudioEvent::TowerSold { refund });
            }
            PlayerCommand::DeployDroneTurret { cell } => self.deploy_drone_turret(cell),
            PlayerCommand::SetCombatModifiers { modifiers } => {
                self.modifiers = modifiers.sanitized();
            }
            PlayerCommand::ApplyChronoBuff {
                modifiers,
                duration_secs,
            } => {
                if duration_secs <= 0.0 {
                    self.alert(AlertLevel::Warning, "buff duration must be positive");
                    return;
                }
                self.chrono = Some(ChronoBuff {
                    modifiers: modifiers.sanitized(),
                    remaining_secs: duration_secs.min(CHRONO_BUFF_MAX_SECS),
                });
            }
            PlayerCommand::SetDevMode { enabled } => {
                self.dev_mode = enabled;
            }
            PlayerCommand::SetTimeScale { scale } => {
                self.time_scale = scale.clamp(0.0, 4.0);
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
        }
    }

    /// Reset all run state and enter the build phase on a fresh map.
    fn start_run(&mut self, map: MapId) {
        let layout = layouts::layout(map);
        self.selector = Some(PathSelector::new(layout.policy, &layout.paths));
        self.layout = Some(layout);
        self.map = Some(map);
        self.world.clear();
        self.towers.clear();
        self.hazards.clear();
        self.drones.clear();
        self.chrono = None;
        self.spawner = WaveSpawner::default();
        self.bonus = BonusTracker::new();
        self.economy = EconomyState::default();
        self.wave = 0;
        self.next_enemy_id = 0;
        self.vent_timer_secs = 0.0;
        self.time = SimTime::default();
        self.phase = GamePhase::Active;
    }

    /// Begin the next wave (regular, boss, or bonus).
    fn start_wave(&mut self) {
        if self.phase != GamePhase::Active || self.layout.is_none() {
            return;
        }
        if self.spawner.active {
            self.alert(AlertLevel::Warning, "wave already in progress");
            return;
        }

        self.wave += 1;
        let bonus_wave = self.bonus.roll(self.wave, &mut self.rng);
        let entries = if bonus_wave {
            compose::compose_bonus_wave(self.wave, &mut self.rng)
        } else {
            compose::compose_wave(self.wave, &mut self.rng)
        };
        self.spawner.start_wave(entries, bonus_wave);
        self.economy.wave_damage_taken = false;
        self.audio_events.push(AudioEvent::WaveStarted {
            wave: self.wave,
            bonus: bonus_wave,
        });
        if bonus_wave {
            self.alert(AlertLevel::Info, format!("bonus wave {}", self.wave));
        }
    }

    fn place_tower(&mut self, cell: CellCoord, kind: siege_core::enums::TowerKind) {
        if self.phase != GamePhase::Active {
            return;
        }
        let position = match self.layout.as_ref() {
            Some(layout) if layout.grid.can_place(cell) => layout.grid.cell_center(cell),
            Some(_) => {
                self.alert(AlertLevel::Warning, "cell is not buildable");
                return;
            }
            None => return,
        };
        let cost = Tower::base_cost(kind);
        if !self.charge(cost) {
            self.alert(AlertLevel::Warning, "insufficient credits");
            return;
        }
        if let Some(layout) = self.layout.as_mut() {
            layout.grid.occupy(cell);
        }
        self.towers.insert(cell, Tower::new(kind, cell, position));
    }

    /// Drones hover, so any in-bounds cell works — path tiles included.
    fn deploy_drone_turret(&mut self, cell: CellCoord) {
        if self.phase != GamePhase::Active {
            return;
        }
        let position = match self.layout.as_ref() {
            Some(layout) if layout.grid.in_bounds(cell) => layout.grid.cell_center(cell),
            Some(_) => {
                self.alert(AlertLevel::Warning, "cell is out of bounds");
                return;
            }
            None => return,
        };
        if !self.charge(DRONE_TURRET_COST) {
            self.alert(AlertLevel::Warning, "insufficient credits");
            return;
        }
        self.drones.push(DroneTurret::deploy(position));
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let layout = match self.layout.as_ref() {
            Some(l) => l,
            None => return,
        };
        let selector = match self.selector.as_mut() {
            Some(s) => s,
            None => return,
        };

        // Chrono buff runs on its own clock; combat systems below read
        // the combined table for this tick.
        if let Some(buff) = self.chrono.as_mut() {
            buff.remaining_secs -= DT;
        }
        if self.chrono.as_ref().map_or(false, |b| b.remaining_secs <= 0.0) {
            self.chrono = None;
        }
        let modifiers = match &self.chrono {
            Some(buff) => self.modifiers.combined(&buff.modifiers),
            None => self.modifiers,
        };

        // 1. Wave spawning
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.spawner,
            selector,
            layout,
            &mut self.next_enemy_id,
            &mut self.audio_events,
            self.wave,
        );
        // 2. Status decay + burn damage
        systems::status::run(&mut self.world);
        // 3. Crowd separation
        systems::separation::run(&mut self.world);
        // 4. Movement (path followers, then drone flights)
        systems::movement::run(&mut self.world, layout);
        systems::movement::run_flights(&mut self.world);
        // 5. Tower fire control
        systems::towers::run(&mut self.world, &mut self.towers, layout, &modifiers);
        // 6. Ally drone turrets
        systems::drone_turrets::run(&mut self.world, &mut self.drones, layout, &modifiers);
        // 7. Projectile flight + impacts
        systems::projectiles::run(
            &mut self.world,
            &modifiers,
            &mut self.hazards,
            &mut self.fx_events,
        );
        // 8. Hazard zones
        systems::hazards::run(&mut self.world, &mut self.hazards, &modifiers);
        // 9. Death processing (rewards, bursts, arcs, vents)
        systems::deaths::run(
            &mut self.world,
            &mut self.rng,
            &mut self.spawner,
            &mut self.economy,
            &modifiers,
            &mut self.hazards,
            &mut self.vent_timer_secs,
            &mut self.next_enemy_id,
            self.wave,
            &mut self.audio_events,
            &mut self.fx_events,
        );
        // 10. Leaks (reactor damage)
        let core_destroyed = systems::leaks::run(
            &mut self.world,
            &mut self.economy,
            self.dev_mode,
            &mut self.audio_events,
            &mut self.fx_events,
        );
        // 11. Wave completion
        self.check_wave_complete();
        // 12. Cleanup (despawn dead and leaked)
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
        // 13. Game over transition
        if core_destroyed {
            self.spawner.halt();
            self.phase = GamePhase::GameOver;
            self.economy.best_wave = self.economy.best_wave.max(self.wave);
        }
    }

    /// A wave is complete when the spawn queue is empty and no enemy is
    /// left alive.
    fn check_wave_complete(&mut self) {
        if !self.spawner.active || self.spawner.queued() > 0 {
            return;
        }
        let any_alive = self
            .world
            .query_mut::<&EnemyLife>()
            .into_iter()
            .any(|(_, life)| life.alive);
        if any_alive {
            return;
        }

        self.spawner.finish();
        let credit_mul = self.effective_modifiers().credit_mul;
        let rewards = self
            .economy
            .settle_wave(self.wave, self.spawner.bonus_wave, credit_mul);
        self.audio_events.push(AudioEvent::WaveComplete {
            wave: self.wave,
            perfect: rewards.perfect,
        });
        if rewards.shards > 0 {
            self.alert(
                AlertLevel::Info,
                format!("boss wave cleared: +{} core shards", rewards.shards),
            );
        }
    }
}

//! Player commands sent from the frontend to the simulation.
//!
//! Commands are validated and queued for processing at the next tick
//! boundary. Invalid commands produce an `Alert` and change nothing.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{CellCoord, CombatModifiers};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Run lifecycle ---
    /// Start a fresh run on the given map.
    StartRun { map: MapId },
    /// Begin the next wave (only when the spawner is idle).
    StartWave,
    /// Return to the main menu (from game over or mid-run).
    ReturnToMenu,

    // --- Build / economy ---
    /// Place a tower on a buildable cell (consumes credits).
    PlaceTower { cell: CellCoord, kind: TowerKind },
    /// Buy one upgrade level on a track (Rate or Range, max 3).
    UpgradeTower { cell: CellCoord, track: UpgradeTrack },
    /// Install a one-time status module (Slow or Burn).
    InstallModule { cell: CellCoord, module: TowerModule },
    /// Sell a tower: refunds a fraction of invested credits, frees the cell.
    SellTower { cell: CellCoord },
    /// Deploy a temporary ally drone turret hovering over a cell
    /// (consumes credits; any in-bounds cell, path included).
    DeployDroneTurret { cell: CellCoord },

    // --- Global state ---
    /// Replace the combat modifier table (perk-purchase boundary).
    SetCombatModifiers { modifiers: CombatModifiers },
    /// Apply a chrono buff: a timed modifier table that multiplies the
    /// base one and expires on its own clock. A new buff replaces the
    /// active one.
    ApplyChronoBuff {
        modifiers: CombatModifiers,
        duration_secs: f64,
    },
    /// Dev mode: purchases are free and leaks cost no lives.
    SetDevMode { enabled: bool },

    // --- Simulation control ---
    /// Set time scale (1.0 = normal, 2.0 = double, 0.0 = paused).
    SetTimeScale { scale: f64 },
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}

//! Enemy path geometry and spawn-lane selection.

use rand::Rng;
use serde::{Deserialize, Serialize};

use siege_core::constants::TILE_SIZE_PX;
use siege_core::enums::PathPolicy;
use siege_core::types::{CellCoord, Position};

/// An ordered sequence of world-space waypoints. Enemies walk the
/// segments in order; the final waypoint is the base entrance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Path {
    waypoints: Vec<Position>,
    /// Relative selection weight for weighted-random lane choice.
    weight: f64,
    /// Cumulative length at each waypoint (pixels). `cumulative[0] = 0`.
    cumulative: Vec<f64>,
}

impl Path {
    /// Build a path from at least two waypoints. Weights below a small
    /// floor are clamped so a misconfigured map cannot starve a lane.
    pub fn new(waypoints: Vec<Position>, weight: f64) -> Self {
        debug_assert!(waypoints.len() >= 2, "a path needs at least two waypoints");
        let mut cumulative = Vec::with_capacity(waypoints.len());
        let mut total = 0.0;
        cumulative.push(0.0);
        for pair in waypoints.windows(2) {
            total += pair[0].distance_to(&pair[1]);
            cumulative.push(total);
        }
        Self {
            waypoints,
            weight: weight.max(0.01),
            cumulative,
        }
    }

    pub fn waypoints(&self) -> &[Position] {
        &self.waypoints
    }

    pub fn waypoint(&self, index: usize) -> Option<Position> {
        self.waypoints.get(index).copied()
    }

    pub fn start(&self) -> Position {
        self.waypoints[0]
    }

    pub fn end(&self) -> Position {
        self.waypoints[self.waypoints.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Total path length in pixels.
    pub fn total_len(&self) -> f64 {
        *self.cumulative.last().unwrap_or(&0.0)
    }

    /// Cumulative distance from the start to the given waypoint.
    pub fn distance_at_waypoint(&self, index: usize) -> f64 {
        let clamped = index.min(self.cumulative.len() - 1);
        self.cumulative[clamped]
    }

    /// Cells touched by this path, sampled at half-tile intervals.
    /// Used to derive the grid's non-buildable mask.
    pub fn covered_cells(&self) -> Vec<CellCoord> {
        let step = TILE_SIZE_PX / 2.0;
        let mut cells = Vec::new();
        for pair in self.waypoints.windows(2) {
            let seg_len = pair[0].distance_to(&pair[1]);
            let samples = (seg_len / step).ceil().max(1.0) as usize;
            for i in 0..=samples {
                let t = i as f64 / samples as f64;
                let x = pair[0].x + (pair[1].x - pair[0].x) * t;
                let y = pair[0].y + (pair[1].y - pair[0].y) * t;
                let cell = CellCoord::new(
                    (x / TILE_SIZE_PX).floor() as i32,
                    (y / TILE_SIZE_PX).floor() as i32,
                );
                if cells.last() != Some(&cell) && !cells.contains(&cell) {
                    cells.push(cell);
                }
            }
        }
        cells
    }
}

/// Picks which path a given spawn uses on multi-path maps.
///
/// Round-robin keeps a persistent cursor across waves; weighted-random
/// draws against the configured per-path weights. Spawns with a forced
/// lane (boss minions inheriting the parent's lane) bypass the selector.
#[derive(Debug, Clone)]
pub struct PathSelector {
    policy: PathPolicy,
    weights: Vec<f64>,
    cursor: usize,
}

impl PathSelector {
    pub fn new(policy: PathPolicy, paths: &[Path]) -> Self {
        Self {
            policy,
            weights: paths.iter().map(|p| p.weight()).collect(),
            cursor: 0,
        }
    }

    pub fn path_count(&self) -> usize {
        self.weights.len()
    }

    /// Choose the lane for the next spawn.
    pub fn choose(&mut self, rng: &mut impl Rng) -> usize {
        if self.weights.len() <= 1 {
            return 0;
        }
        match self.policy {
            PathPolicy::RoundRobin => {
                let index = self.cursor;
                self.cursor = (self.cursor + 1) % self.weights.len();
                index
            }
            PathPolicy::WeightedRandom => {
                let total: f64 = self.weights.iter().sum();
                let mut roll = rng.gen_range(0.0..total);
                for (index, w) in self.weights.iter().enumerate() {
                    if roll < *w {
                        return index;
                    }
                    roll -= w;
                }
                self.weights.len() - 1
            }
        }
    }
}

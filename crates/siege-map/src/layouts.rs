//! Built-in map layouts.
//!
//! Waypoints are world-space pixel coordinates on a 20x15 tile grid
//! (800x600 px at the default tile size). Each layout's paths all
//! converge on the base.

use siege_core::enums::{MapId, PathPolicy};
use siege_core::types::Position;

use crate::grid::GridMap;
use crate::path::Path;

/// A complete playable map: grid, enemy paths, and spawn-lane policy.
#[derive(Debug, Clone)]
pub struct MapLayout {
    pub id: MapId,
    pub grid: GridMap,
    pub paths: Vec<Path>,
    pub policy: PathPolicy,
}

/// Build the layout for a map id.
pub fn layout(id: MapId) -> MapLayout {
    match id {
        MapId::Conduit => conduit(),
        MapId::Crossfire => crossfire(),
        MapId::Trident => trident(),
    }
}

/// Conduit: one winding path, west edge to the base in the east.
fn conduit() -> MapLayout {
    let base = Position::new(740.0, 300.0);
    let paths = vec![Path::new(
        vec![
            Position::new(-20.0, 100.0),
            Position::new(300.0, 100.0),
            Position::new(300.0, 460.0),
            Position::new(560.0, 460.0),
            Position::new(560.0, 300.0),
            base,
        ],
        1.0,
    )];
    let grid = GridMap::new(20, 15, base, &paths);
    MapLayout {
        id: MapId::Conduit,
        grid,
        paths,
        policy: PathPolicy::WeightedRandom,
    }
}

/// Crossfire: two lanes with 70/30 spawn weighting, converging center.
fn crossfire() -> MapLayout {
    let base = Position::new(400.0, 540.0);
    let paths = vec![
        Path::new(
            vec![
                Position::new(-20.0, 140.0),
                Position::new(400.0, 140.0),
                Position::new(400.0, 380.0),
                base,
            ],
            0.7,
        ),
        Path::new(
            vec![
                Position::new(820.0, 220.0),
                Position::new(520.0, 220.0),
                Position::new(520.0, 380.0),
                Position::new(400.0, 380.0),
                base,
            ],
            0.3,
        ),
    ];
    let grid = GridMap::new(20, 15, base, &paths);
    MapLayout {
        id: MapId::Crossfire,
        grid,
        paths,
        policy: PathPolicy::WeightedRandom,
    }
}

/// Trident: three parallel lanes from the north edge, round-robin spawns.
fn trident() -> MapLayout {
    let base = Position::new(400.0, 560.0);
    let lane = |x: f64| {
        Path::new(
            vec![
                Position::new(x, -20.0),
                Position::new(x, 420.0),
                Position::new(400.0, 420.0),
                base,
            ],
            1.0,
        )
    };
    let paths = vec![lane(160.0), lane(400.0), lane(640.0)];
    let grid = GridMap::new(20, 15, base, &paths);
    MapLayout {
        id: MapId::Trident,
        grid,
        paths,
        policy: PathPolicy::RoundRobin,
    }
}

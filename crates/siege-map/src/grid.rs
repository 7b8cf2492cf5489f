//! GridMap: static buildable-tile representation with occupancy.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use siege_core::constants::TILE_SIZE_PX;
use siege_core::types::{CellCoord, Position};

use crate::path::Path;

/// The static map: tile bounds, the base position, path-covered cells
/// (never buildable), and the set of cells occupied by towers.
///
/// A tile is buildable iff it is in bounds, not on any path, and not
/// occupied. Towers may never occupy a path tile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridMap {
    /// Width in tiles.
    pub width: u32,
    /// Height in tiles.
    pub height: u32,
    /// World-space position of the base/core.
    pub base: Position,
    path_cells: HashSet<CellCoord>,
    occupied: HashSet<CellCoord>,
}

impl GridMap {
    /// Build a grid and derive its non-buildable mask from the paths.
    pub fn new(width: u32, height: u32, base: Position, paths: &[Path]) -> Self {
        let mut path_cells = HashSet::new();
        for path in paths {
            path_cells.extend(path.covered_cells());
        }
        // The base tile is reserved too.
        path_cells.insert(Self::cell_at_position(base));
        Self {
            width,
            height,
            base,
            path_cells,
            occupied: HashSet::new(),
        }
    }

    pub fn in_bounds(&self, cell: CellCoord) -> bool {
        cell.col >= 0
            && cell.row >= 0
            && (cell.col as u32) < self.width
            && (cell.row as u32) < self.height
    }

    pub fn is_path_cell(&self, cell: CellCoord) -> bool {
        self.path_cells.contains(&cell)
    }

    pub fn is_occupied(&self, cell: CellCoord) -> bool {
        self.occupied.contains(&cell)
    }

    /// In bounds, not on a path, not occupied.
    pub fn can_place(&self, cell: CellCoord) -> bool {
        self.in_bounds(cell) && !self.is_path_cell(cell) && !self.is_occupied(cell)
    }

    /// Mark a cell occupied. Returns false if placement is not allowed.
    pub fn occupy(&mut self, cell: CellCoord) -> bool {
        if !self.can_place(cell) {
            return false;
        }
        self.occupied.insert(cell)
    }

    /// Free a previously occupied cell.
    pub fn release(&mut self, cell: CellCoord) -> bool {
        self.occupied.remove(&cell)
    }

    /// World-space center of a cell.
    pub fn cell_center(&self, cell: CellCoord) -> Position {
        Position::new(
            (cell.col as f64 + 0.5) * TILE_SIZE_PX,
            (cell.row as f64 + 0.5) * TILE_SIZE_PX,
        )
    }

    /// Cell containing a world-space position.
    pub fn cell_at_position(pos: Position) -> CellCoord {
        CellCoord::new(
            (pos.x / TILE_SIZE_PX).floor() as i32,
            (pos.y / TILE_SIZE_PX).floor() as i32,
        )
    }

    /// World-space width in pixels.
    pub fn width_px(&self) -> f64 {
        self.width as f64 * TILE_SIZE_PX
    }

    /// World-space height in pixels.
    pub fn height_px(&self) -> f64 {
        self.height as f64 * TILE_SIZE_PX
    }
}

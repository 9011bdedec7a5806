//! Board module - the 15x15 grid of placed tiles
//!
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where both range 0..15, x left to right, y top to bottom.
//! Flat index is `y * 15 + x`. Bonus cells are static and come from
//! [`tile_bonus`](crate::types::tile_bonus).

use crate::types::{tile_bonus, Bonus, Cell, TileCode, BOARD_CELLS, BOARD_SIZE};

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * SIZE + x)
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_CELLS],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    pub fn index(x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= BOARD_SIZE as i32 || y < 0 || y >= BOARD_SIZE as i32 {
            return None;
        }
        Some((y as usize) * (BOARD_SIZE as usize) + (x as usize))
    }

    /// (x, y) of a flat index
    #[inline(always)]
    pub fn coords(index: usize) -> (i32, i32) {
        let size = BOARD_SIZE as usize;
        ((index % size) as i32, (index / size) as i32)
    }

    /// Get cell at (x, y); `None` if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Tile at a flat index; `None` when empty or out of range
    pub fn tile_at(&self, index: usize) -> Option<TileCode> {
        self.cells.get(index).copied().flatten()
    }

    /// Set cell at (x, y); returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    pub fn set_index(&mut self, index: usize, cell: Cell) -> bool {
        match self.cells.get_mut(index) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// Within bounds and filled
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Within bounds and empty
    pub fn is_free(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    pub fn is_out_of_bounds(&self, x: i32, y: i32) -> bool {
        Self::index(x, y).is_none()
    }

    /// Bonus printed on (x, y)
    pub fn bonus(&self, x: i32, y: i32) -> Bonus {
        tile_bonus(x, y)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Write raw tile codes (0 = empty) into a row-major grid without allocating.
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_SIZE as usize]; BOARD_SIZE as usize]) {
        let size = BOARD_SIZE as usize;
        for (y, row) in out.iter_mut().enumerate() {
            for (x, slot) in row.iter_mut().enumerate() {
                *slot = self.cells[y * size + x].map_or(0, TileCode::raw);
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

//! Viewport geometry: how the board sits inside the window and which cell the
//! pointer is over.

use crate::types::BOARD_SIZE;

/// Board placement for a given window size, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layout {
    pub width: i32,
    pub height: i32,
    pub tile_size: i32,
    pub x_offset: i32,
    pub y_offset: i32,
}

impl Layout {
    /// Default window, 800 by 450
    pub const DEFAULT_WIDTH: i32 = 800;
    pub const DEFAULT_HEIGHT: i32 = 450;

    /// Tiles are sized to fit 16 across and 20 down; the board is centred
    /// horizontally and leaves two tile rows below it for the rack.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let tile_size = (width / 16).min(height / 20);
        let board_len = tile_size * BOARD_SIZE as i32;
        Self {
            width,
            height,
            tile_size,
            x_offset: (width - board_len) / 2,
            y_offset: (height - board_len - 2 * tile_size) / 2,
        }
    }

    pub fn board_len(&self) -> i32 {
        self.tile_size * BOARD_SIZE as i32
    }

    /// Board cell under pixel (px, py)
    pub fn cell_at(&self, px: i32, py: i32) -> Option<(i32, i32)> {
        if self.tile_size <= 0 {
            return None;
        }
        let bx = px.saturating_sub(self.x_offset);
        let by = py.saturating_sub(self.y_offset);
        if bx < 0 || by < 0 {
            return None;
        }
        let (col, row) = (bx / self.tile_size, by / self.tile_size);
        let size = BOARD_SIZE as i32;
        (col < size && row < size).then_some((col, row))
    }

    /// Pixel centre of board cell (x, y)
    pub fn cell_center(&self, x: i32, y: i32) -> (i32, i32) {
        (
            self.x_offset + x * self.tile_size + self.tile_size / 2,
            self.y_offset + y * self.tile_size + self.tile_size / 2,
        )
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }
}

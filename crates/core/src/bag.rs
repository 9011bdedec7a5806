//! Tile bag - the multiset of undrawn tiles
//!
//! The bag keeps the raw letter byte of every physical tile (fixed for the whole
//! match) and a set of indices that have not been drawn yet. Drawing picks a
//! uniformly random live index and swap-removes it, so order is not preserved.

use arrayvec::ArrayVec;

use crate::rng::TickRng;
use crate::types::{TileCode, TILES, TOTAL_TILES};

#[derive(Debug, Clone)]
pub struct TileBag {
    /// One byte per physical tile (`b'A'..=b'Z'` or `b' '`), indexed by tile instance
    chars: [u8; TOTAL_TILES],
    /// Instance indices not yet drawn
    live: ArrayVec<u8, TOTAL_TILES>,
}

impl TileBag {
    /// A full bag expanded from the tile catalog.
    pub fn new() -> Self {
        let mut chars = [0u8; TOTAL_TILES];
        let mut idx = 0usize;
        for tile in TILES.iter() {
            for _ in 0..tile.count {
                chars[idx] = tile.letter;
                idx += 1;
            }
        }

        let mut live = ArrayVec::new();
        for i in 0..TOTAL_TILES {
            live.push(i as u8);
        }

        Self { chars, live }
    }

    /// Refill to a fresh, full bag.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Instance indices still in the bag (unordered)
    pub fn live_indices(&self) -> &[u8] {
        &self.live
    }

    /// Raw letter byte of a tile instance
    pub fn instance_byte(&self, index: usize) -> Option<u8> {
        self.chars.get(index).copied()
    }

    /// Draw one tile. Returns `None` once the bag is exhausted; no RNG is consumed then.
    pub fn draw(&mut self, rng: &mut TickRng) -> Option<TileCode> {
        if self.live.is_empty() {
            return None;
        }

        let pick = rng.next_range(self.live.len() as u32) as usize;
        let selected = self.live.swap_remove(pick);
        TileCode::from_bag_byte(self.chars[selected as usize])
    }
}

impl Default for TileBag {
    fn default() -> Self {
        Self::new()
    }
}

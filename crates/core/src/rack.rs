//! Rack module - packed 7-slot hands and per-player turn state
//!
//! # Packing
//!
//! A rack is an ordered sequence of 7 optional tile codes packed 8 bits per slot
//! into the low 56 bits of a `u64`. Slot 0 is the most significant byte, slot 6
//! the least significant; an empty slot is a zero byte.
//!
//! Removing a tile splices it out: every slot left of it moves one place right,
//! which leaves slot 0 empty. Inserting is the exact inverse when slot 0 is free.

use arrayvec::ArrayVec;

use crate::animation::Animated;
use crate::bag::TileBag;
use crate::rng::TickRng;
use crate::types::{Cell, Orientation, PlayerKind, TileCode, RACK_SIZE};

const SLOT_BITS: u32 = 8;
const SLOT_MASK: u64 = 0xff;
const RACK_MASK: u64 = (1u64 << (SLOT_BITS as u64 * RACK_SIZE as u64)) - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct RackBits(u64);

impl RackBits {
    pub const EMPTY: RackBits = RackBits(0);

    /// Wrap a packed word; bits above 56 are dropped.
    pub fn from_bits(bits: u64) -> Self {
        Self(bits & RACK_MASK)
    }

    pub fn bits(self) -> u64 {
        self.0
    }

    pub fn from_slots(slots: [Cell; RACK_SIZE]) -> Self {
        let mut rack = Self::EMPTY;
        for (slot, cell) in slots.into_iter().enumerate() {
            rack.set(slot, cell);
        }
        rack
    }

    #[inline(always)]
    fn shift(slot: usize) -> u32 {
        (RACK_SIZE - 1 - slot) as u32 * SLOT_BITS
    }

    /// Raw byte in `slot` (0 = empty)
    pub fn raw(self, slot: usize) -> u8 {
        if slot >= RACK_SIZE {
            return 0;
        }
        ((self.0 >> Self::shift(slot)) & SLOT_MASK) as u8
    }

    pub fn get(self, slot: usize) -> Cell {
        TileCode::from_raw(self.raw(slot))
    }

    pub fn set(&mut self, slot: usize, cell: Cell) {
        if slot >= RACK_SIZE {
            return;
        }
        let shift = Self::shift(slot);
        let raw = cell.map_or(0, TileCode::raw) as u64;
        self.0 = (self.0 & !(SLOT_MASK << shift)) | (raw << shift);
    }

    /// First slot holding exactly `code`
    pub fn find(self, code: TileCode) -> Option<usize> {
        (0..RACK_SIZE).find(|&slot| self.raw(slot) == code.raw())
    }

    pub fn first_empty(self) -> Option<usize> {
        (0..RACK_SIZE).find(|&slot| self.raw(slot) == 0)
    }

    pub fn count(self) -> usize {
        (0..RACK_SIZE).filter(|&slot| self.raw(slot) != 0).count()
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn is_full(self) -> bool {
        self.first_empty().is_none()
    }

    pub fn iter(self) -> impl Iterator<Item = Cell> {
        (0..RACK_SIZE).map(move |slot| self.get(slot))
    }

    /// Splice out `slot`: slots to its left shift one place right, slot 0 empties.
    pub fn remove(&mut self, slot: usize) -> Cell {
        if slot >= RACK_SIZE {
            return None;
        }
        let shift = Self::shift(slot);
        let removed = self.get(slot);
        let below = self.0 & ((1u64 << shift) - 1);
        let above = self.0 & !((1u64 << (shift + SLOT_BITS)) - 1);
        self.0 = ((above >> SLOT_BITS) | below) & RACK_MASK;
        removed
    }

    /// Inverse of [`remove`](Self::remove): slots `1..=slot` shift one place left and
    /// `code` lands in `slot`. Fails when slot 0 is occupied.
    pub fn insert(&mut self, slot: usize, code: TileCode) -> bool {
        if slot >= RACK_SIZE || self.raw(0) != 0 {
            return false;
        }
        let shift = Self::shift(slot);
        let below = self.0 & ((1u64 << shift) - 1);
        let moved = self.0 & !((1u64 << shift) - 1);
        self.0 = ((moved << SLOT_BITS) & RACK_MASK) | ((code.raw() as u64) << shift) | below;
        true
    }

    /// Relocate slot `i` to slot `perm[i]`.
    pub fn permuted(self, perm: &[u8; RACK_SIZE]) -> Self {
        let mut out = Self::EMPTY;
        for (slot, &dst) in perm.iter().enumerate() {
            out.set(dst as usize, self.get(slot));
        }
        out
    }

    /// Fill empty slots left to right from the bag, stopping early when it runs dry.
    /// Returns how many tiles were drawn.
    pub fn refill(&mut self, bag: &mut TileBag, rng: &mut TickRng) -> usize {
        if self.is_full() {
            return 0;
        }
        let mut drawn = 0;
        for slot in 0..RACK_SIZE {
            if self.raw(slot) != 0 {
                continue;
            }
            match bag.draw(rng) {
                Some(code) => {
                    self.set(slot, Some(code));
                    drawn += 1;
                }
                None => break,
            }
        }
        drawn
    }
}

/// One seat at the table
#[derive(Debug, Clone, Default)]
pub struct Player {
    pub kind: PlayerKind,
    /// Live rack in `cur`; `prev` is the rack before the last refill or shuffle
    pub rack: Animated<RackBits>,
    /// Letters lifted from the rack this turn, in pickup order
    pub turn_letters: ArrayVec<TileCode, RACK_SIZE>,
    /// Board index each held letter was committed to
    pub turn_positions: [Option<u8>; RACK_SIZE],
    pub turn_score: u32,
    pub total_score: u32,
    pub orientation: Animated<Orientation>,
    /// Skip counts before each held letter, 4 bits per letter, first letter most significant
    pub offsets: Animated<u32>,
}

impl Player {
    pub fn new(kind: PlayerKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn is_active(&self) -> bool {
        self.kind.is_active()
    }

    pub fn n_tiles_held(&self) -> usize {
        self.turn_letters.len()
    }

    pub fn rack_bits(&self) -> RackBits {
        self.rack.cur
    }

    /// Clear rack, hand and scores for a new match; the seat kind is kept.
    pub fn reset_for_match(&mut self) {
        let kind = self.kind;
        *self = Self::new(kind);
    }

    /// Lift `code` out of the rack into the hand. Falls back to a blank played as
    /// that letter when no exact tile is present.
    pub fn pick_up(&mut self, code: TileCode) -> bool {
        if self.turn_letters.is_full() {
            return false;
        }
        let mut rack = self.rack.cur;
        let held = if let Some(slot) = rack.find(code) {
            rack.remove(slot);
            code
        } else if let Some(slot) = rack.find(TileCode::BLANK) {
            rack.remove(slot);
            code.as_blank()
        } else {
            return false;
        };
        self.rack.snap(rack);
        self.turn_letters.push(held);
        true
    }

    /// Put the most recently lifted letter back into the first empty rack slot.
    pub fn return_last(&mut self) -> bool {
        let mut rack = self.rack.cur;
        let Some(slot) = rack.first_empty() else {
            return false;
        };
        let Some(letter) = self.turn_letters.pop() else {
            return false;
        };
        let back = if letter.is_blank() {
            TileCode::BLANK
        } else {
            letter
        };
        rack.set(slot, Some(back));
        self.rack.snap(rack);
        true
    }

    /// Return every held letter to the rack (most recent first).
    pub fn return_all(&mut self) {
        while self.return_last() {}
    }

    pub fn placed_count(&self) -> usize {
        self.turn_positions.iter().filter(|p| p.is_some()).count()
    }

    /// Forget the hand and placement of the finished turn.
    pub fn clear_turn(&mut self) {
        self.turn_letters.clear();
        self.turn_positions = [None; RACK_SIZE];
        self.turn_score = 0;
        self.offsets.snap(0);
    }
}

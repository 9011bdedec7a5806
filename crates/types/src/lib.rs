//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are plain data with no I/O, making them usable in any context
//! (simulation, input mapping, presentation).
//!
//! # Board and Rack
//!
//! - **Board**: 15x15 cells, indexed `y * 15 + x`
//! - **Rack**: 7 slots per player
//! - **Players**: up to 4 seats, each either inactive or active
//!
//! # Tile Codes
//!
//! A tile is identified by a small integer:
//!
//! | Code | Meaning |
//! |------|---------|
//! | `0` | empty / no tile |
//! | `1..=26` | letters `A..=Z` |
//! | `27` | blank (not yet assigned a letter) |
//! | `0x80 \| 1..=26` | blank played as a letter |
//!
//! # Timing Constants
//!
//! The simulation is tick-driven at 60 ticks per second. Durations are in ticks:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TURN_OPENING_TICKS` | 80 | Opening flourish of a player's turn |
//! | `ROTATE_TICKS` | 30 | Orientation toggle tween |
//! | `OFFSET_PREVIEW_TICKS` | 12 | Skip-offset preview tween |
//! | `REFILL_TICKS` | 40 | Rack refill tween |
//! | `SCORE_REVEAL_TICKS` | 8 | Per scoring command reveal cadence |
//! | `SHUFFLE_TICKS` | 30 | Shuffle cooldown |
//!
//! # Examples
//!
//! ```
//! use scrambles_types::{TileCode, Bonus, tile_bonus, TOTAL_TILES};
//!
//! let q = TileCode::from_char('q').unwrap();
//! assert_eq!(q.letter(), Some('Q'));
//! assert_eq!(q.points(), 10);
//!
//! assert_eq!(tile_bonus(7, 7), Bonus::DoubleWord);
//! assert_eq!(tile_bonus(0, 0), Bonus::TripleWord);
//! assert_eq!(TOTAL_TILES, 100);
//! ```

use arrayvec::ArrayVec;

/// Board side length in cells (15)
pub const BOARD_SIZE: u8 = 15;

/// Number of cells on the board (225)
pub const BOARD_CELLS: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Rack capacity (7 tiles)
pub const RACK_SIZE: usize = 7;

/// Player seats (4)
pub const MAX_PLAYERS: usize = 4;

/// Simulation rate
pub const TICKS_PER_SECOND: u32 = 60;

/// Opening flourish for a player's turn
pub const TURN_OPENING_TICKS: i32 = 80;

/// Orientation toggle tween
pub const ROTATE_TICKS: i32 = 30;

/// Placement offset preview tween
pub const OFFSET_PREVIEW_TICKS: i32 = 12;

/// Rack refill tween (each slot lags the previous one by 2 ticks)
pub const REFILL_TICKS: i32 = 40;

/// Reveal cadence per scoring command
pub const SCORE_REVEAL_TICKS: i32 = 8;

/// Shuffle cooldown; no rack input is processed while it runs
pub const SHUFFLE_TICKS: u32 = 30;

/// Pointer must travel this far (pixels) from where directional movement
/// stopped before the cursor follows it again.
pub const CURSOR_SNAP_DISTANCE: i32 = 12;

/// Directional movement speed is `window_width / CURSOR_SPEED_DIVISOR` pixels per tick.
pub const CURSOR_SPEED_DIVISOR: i32 = 120;

/// Flat bonus for placing every rack tile in one turn
pub const BINGO_BONUS: u32 = 50;

/// Largest skip that fits in a 4-bit placement offset
pub const MAX_SKIP: u32 = 15;

/// Catalog entry: letter, face value, and number of copies in a fresh bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub letter: u8,
    pub points: u32,
    pub count: u32,
}

/// The tile catalog (A-Z, then the blank).
pub const TILES: [Tile; 27] = [
    Tile { letter: b'A', points: 1, count: 9 },
    Tile { letter: b'B', points: 3, count: 2 },
    Tile { letter: b'C', points: 3, count: 2 },
    Tile { letter: b'D', points: 2, count: 4 },
    Tile { letter: b'E', points: 1, count: 12 },
    Tile { letter: b'F', points: 4, count: 2 },
    Tile { letter: b'G', points: 2, count: 3 },
    Tile { letter: b'H', points: 4, count: 2 },
    Tile { letter: b'I', points: 1, count: 9 },
    Tile { letter: b'J', points: 8, count: 1 },
    Tile { letter: b'K', points: 5, count: 1 },
    Tile { letter: b'L', points: 1, count: 4 },
    Tile { letter: b'M', points: 3, count: 2 },
    Tile { letter: b'N', points: 1, count: 6 },
    Tile { letter: b'O', points: 1, count: 8 },
    Tile { letter: b'P', points: 3, count: 2 },
    Tile { letter: b'Q', points: 10, count: 1 },
    Tile { letter: b'R', points: 1, count: 6 },
    Tile { letter: b'S', points: 1, count: 4 },
    Tile { letter: b'T', points: 1, count: 6 },
    Tile { letter: b'U', points: 1, count: 4 },
    Tile { letter: b'V', points: 4, count: 2 },
    Tile { letter: b'W', points: 4, count: 2 },
    Tile { letter: b'X', points: 8, count: 1 },
    Tile { letter: b'Y', points: 4, count: 2 },
    Tile { letter: b'Z', points: 10, count: 1 },
    Tile { letter: b' ', points: 0, count: 2 },
];

/// Total number of physical tiles in a fresh bag
pub const TOTAL_TILES: usize = total_tile_count();

const fn total_tile_count() -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < TILES.len() {
        total += TILES[i].count as usize;
        i += 1;
    }
    total
}

/// A tile identity as stored on the board, in racks and in hand.
///
/// Never zero; "no tile" is `Option<TileCode>::None` (or a `0` byte in packed form).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCode(u8);

impl TileCode {
    /// An unassigned blank tile
    pub const BLANK: TileCode = TileCode(27);

    /// Set on a letter code when the tile is a blank standing in for that letter
    pub const BLANK_FLAG: u8 = 0x80;

    /// Decode a raw byte; `0` and out-of-range values are `None`.
    pub fn from_raw(raw: u8) -> Option<Self> {
        let base = raw & !Self::BLANK_FLAG;
        match (base, raw & Self::BLANK_FLAG != 0) {
            (1..=26, _) => Some(Self(raw)),
            (27, false) => Some(Self(raw)),
            _ => None,
        }
    }

    /// Map a typed character to a letter code (case-insensitive).
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'a'..='z' => Some(Self(ch as u8 - b'a' + 1)),
            'A'..='Z' => Some(Self(ch as u8 - b'A' + 1)),
            _ => None,
        }
    }

    /// Map a tile-bag byte (`b'A'..=b'Z'` or `b' '`) to a code.
    pub fn from_bag_byte(byte: u8) -> Option<Self> {
        match byte {
            b' ' => Some(Self::BLANK),
            b'A'..=b'Z' => Some(Self(byte - b'A' + 1)),
            _ => None,
        }
    }

    pub fn raw(self) -> u8 {
        self.0
    }

    /// The same letter, marked as played from a blank.
    pub fn as_blank(self) -> Self {
        Self(self.0 | Self::BLANK_FLAG)
    }

    /// The code without the blank marker (an unassigned blank stays `BLANK`).
    pub fn base(self) -> Self {
        Self(self.0 & !Self::BLANK_FLAG)
    }

    /// True for an unassigned blank and for a blank played as a letter.
    pub fn is_blank(self) -> bool {
        self.0 == Self::BLANK.0 || self.0 & Self::BLANK_FLAG != 0
    }

    /// Uppercase letter shown on the tile, `None` for an unassigned blank.
    pub fn letter(self) -> Option<char> {
        match self.base().0 {
            n @ 1..=26 => Some((b'A' + n - 1) as char),
            _ => None,
        }
    }

    /// Face value; blanks score zero whatever letter they stand for.
    pub fn points(self) -> u32 {
        if self.is_blank() {
            0
        } else {
            TILES[(self.0 - 1) as usize].points
        }
    }
}

/// A cell on the board or a rack slot: `None` when empty.
pub type Cell = Option<TileCode>;

/// Bonus printed on a board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bonus {
    Normal,
    DoubleWord,
    TripleWord,
    DoubleLetter,
    TripleLetter,
}

impl Bonus {
    /// Multiplier applied to a single letter
    pub fn letter_factor(self) -> u32 {
        match self {
            Bonus::DoubleLetter => 2,
            Bonus::TripleLetter => 3,
            _ => 1,
        }
    }

    /// Multiplier applied to a whole word
    pub fn word_factor(self) -> u32 {
        match self {
            Bonus::DoubleWord => 2,
            Bonus::TripleWord => 3,
            _ => 1,
        }
    }
}

// One quadrant of the board, 8 columns by 7 rows. The other three quadrants are
// quarter-turn rotations of it around the centre cell.
const BONUS_QUADRANT: [Bonus; 56] = {
    use Bonus::{DoubleLetter as DL, DoubleWord as DW, Normal as N, TripleLetter as TL, TripleWord as TW};
    [
        TW, N, N, DL, N, N, N, TW, //
        N, DW, N, N, N, TL, N, N, //
        N, N, DW, N, N, N, DL, N, //
        DL, N, N, DW, N, N, N, DL, //
        N, N, N, N, DW, N, N, N, //
        N, TL, N, N, N, TL, N, N, //
        N, N, DL, N, N, N, DL, N, //
    ]
};

/// Bonus for the cell at (x, y). Out-of-range cells are `Normal`.
pub fn tile_bonus(x: i32, y: i32) -> Bonus {
    let size = BOARD_SIZE as i32;
    if x < 0 || y < 0 || x >= size || y >= size {
        return Bonus::Normal;
    }
    let mid = size / 2;
    if x == mid && y == mid {
        return Bonus::DoubleWord;
    }

    let last = size - 1;
    let (x, y) = if x >= mid && y > mid {
        (last - x, last - y)
    } else if x > mid && y <= mid {
        (y, last - x)
    } else if x <= mid && y >= mid {
        (last - y, x)
    } else {
        (x, y)
    };

    BONUS_QUADRANT[(x + 8 * y) as usize]
}

/// Seat occupancy. Only inactive vs. active is consulted by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayerKind {
    #[default]
    Inactive,
    Human,
    AiEasy,
    AiHard,
}

impl PlayerKind {
    /// Parse from a config token (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use scrambles_types::PlayerKind;
    ///
    /// assert_eq!(PlayerKind::from_str("real"), Some(PlayerKind::Human));
    /// assert_eq!(PlayerKind::from_str("NONE"), Some(PlayerKind::Inactive));
    /// assert_eq!(PlayerKind::from_str("robot"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "none" | "inactive" => Some(PlayerKind::Inactive),
            "real" | "human" => Some(PlayerKind::Human),
            "easy" => Some(PlayerKind::AiEasy),
            "hard" => Some(PlayerKind::AiHard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerKind::Inactive => "none",
            PlayerKind::Human => "human",
            PlayerKind::AiEasy => "easy",
            PlayerKind::AiHard => "hard",
        }
    }

    pub fn is_active(&self) -> bool {
        *self != PlayerKind::Inactive
    }
}

/// Direction held letters are laid out in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Unit step (dx, dy)
    pub fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }
}

/// Discrete keys the simulation reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Backspace,
    Enter,
    Tab,
    LeftShift,
    RightShift,
    LeftCtrl,
    RightCtrl,
    Up,
    Down,
    Left,
    Right,
}

/// Index into `Inputs::arrow_timers`
pub const ARROW_UP: usize = 0;
pub const ARROW_DOWN: usize = 1;
pub const ARROW_LEFT: usize = 2;
pub const ARROW_RIGHT: usize = 3;

/// Mouse button index for `Inputs::mouse_buttons`
pub const MOUSE_LEFT: usize = 0;
pub const MOUSE_RIGHT: usize = 1;

/// Edge/level/release flags for one mouse button during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    /// Went down this tick
    pub pressed: bool,
    /// Is down
    pub down: bool,
    /// Went up this tick
    pub released: bool,
}

/// Per-tick input snapshot.
///
/// Fixed capacity: anything beyond 16 presses in a single tick is dropped by the producer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inputs {
    /// Characters typed this tick, in order
    pub pressed_chars: ArrayVec<char, 16>,
    /// Keys pressed this tick, in order (not held-repeat)
    pub pressed_keys: ArrayVec<Key, 16>,
    pub mouse_buttons: [ButtonState; 2],
    /// Ticks each arrow has been held (0 when released)
    pub arrow_timers: [u32; 4],
    pub cursor_x: i32,
    pub cursor_y: i32,
}

impl Inputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the edge-triggered parts, keeping held state and the pointer.
    pub fn clear_edges(&mut self) {
        self.pressed_chars.clear();
        self.pressed_keys.clear();
        for button in &mut self.mouse_buttons {
            button.pressed = false;
            button.released = false;
        }
    }

    pub fn key_pressed(&self, key: Key) -> bool {
        self.pressed_keys.contains(&key)
    }

    pub fn any_arrow_held(&self) -> bool {
        self.arrow_timers.iter().any(|&t| t > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_totals() {
        assert_eq!(TILES.len(), 27);
        assert_eq!(TOTAL_TILES, 100);
        assert_eq!(TILES[26].letter, b' ');
        assert_eq!(TILES[26].points, 0);
    }

    #[test]
    fn tile_code_mapping() {
        assert_eq!(TileCode::from_char('a').map(TileCode::raw), Some(1));
        assert_eq!(TileCode::from_char('Z').map(TileCode::raw), Some(26));
        assert_eq!(TileCode::from_char(' '), None);
        assert_eq!(TileCode::from_char('1'), None);

        assert_eq!(TileCode::from_bag_byte(b' '), Some(TileCode::BLANK));
        assert_eq!(TileCode::from_bag_byte(b'E').map(TileCode::raw), Some(5));

        assert_eq!(TileCode::from_raw(0), None);
        assert_eq!(TileCode::from_raw(28), None);
        assert_eq!(TileCode::from_raw(27 | TileCode::BLANK_FLAG), None);
        assert_eq!(TileCode::from_raw(27), Some(TileCode::BLANK));
    }

    #[test]
    fn blank_scores_zero() {
        let z = TileCode::from_char('z').unwrap();
        assert_eq!(z.points(), 10);
        let blank_z = z.as_blank();
        assert!(blank_z.is_blank());
        assert_eq!(blank_z.points(), 0);
        assert_eq!(blank_z.letter(), Some('Z'));
        assert_eq!(blank_z.base(), z);
        assert_eq!(TileCode::BLANK.letter(), None);
        assert_eq!(TileCode::BLANK.points(), 0);
    }

    #[test]
    fn bonus_corners_and_center() {
        assert_eq!(tile_bonus(7, 7), Bonus::DoubleWord);
        assert_eq!(tile_bonus(0, 0), Bonus::TripleWord);
        assert_eq!(tile_bonus(14, 14), Bonus::TripleWord);
        assert_eq!(tile_bonus(7, 0), Bonus::TripleWord);
        assert_eq!(tile_bonus(3, 0), Bonus::DoubleLetter);
        assert_eq!(tile_bonus(5, 1), Bonus::TripleLetter);
        assert_eq!(tile_bonus(-1, 3), Bonus::Normal);
        assert_eq!(tile_bonus(3, 15), Bonus::Normal);
    }

    #[test]
    fn bonus_counts_match_classic_board() {
        let mut counts = [0usize; 5];
        for y in 0..15 {
            for x in 0..15 {
                let idx = match tile_bonus(x, y) {
                    Bonus::Normal => 0,
                    Bonus::DoubleWord => 1,
                    Bonus::TripleWord => 2,
                    Bonus::DoubleLetter => 3,
                    Bonus::TripleLetter => 4,
                };
                counts[idx] += 1;
            }
        }
        // 17 double word includes the centre.
        assert_eq!(counts, [164, 17, 8, 24, 12]);
    }

    #[test]
    fn player_kind_round_trip() {
        for kind in [
            PlayerKind::Inactive,
            PlayerKind::Human,
            PlayerKind::AiEasy,
            PlayerKind::AiHard,
        ] {
            assert_eq!(PlayerKind::from_str(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn inputs_clear_edges_keeps_held_state() {
        let mut inputs = Inputs::new();
        inputs.pressed_chars.push('a');
        inputs.pressed_keys.push(Key::Enter);
        inputs.mouse_buttons[MOUSE_LEFT] = ButtonState {
            pressed: true,
            down: true,
            released: false,
        };
        inputs.arrow_timers[ARROW_LEFT] = 3;
        inputs.cursor_x = 40;

        inputs.clear_edges();

        assert!(inputs.pressed_chars.is_empty());
        assert!(inputs.pressed_keys.is_empty());
        assert!(!inputs.mouse_buttons[MOUSE_LEFT].pressed);
        assert!(inputs.mouse_buttons[MOUSE_LEFT].down);
        assert_eq!(inputs.arrow_timers[ARROW_LEFT], 3);
        assert_eq!(inputs.cursor_x, 40);
        assert!(inputs.any_arrow_held());
    }
}

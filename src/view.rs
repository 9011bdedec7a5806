//! Plain text view of a [`GameSnapshot`].
//!
//! The core's [`Layout`] works in pointer units. The binary feeds it a viewport
//! of `COLUMN_UNITS` by `ROW_UNITS` units per terminal cell, and the view draws
//! one character per board tile at the terminal cell holding the tile centre,
//! so a click on a drawn tile maps back onto that tile.

use std::fmt::Write as _;

use crate::core::{GameSnapshot, Layout, TurnState};
use crate::types::{tile_bonus, Bonus, TileCode, BOARD_SIZE, MAX_PLAYERS, RACK_SIZE};

/// Rows of text, each exactly `width` characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFrame {
    width: usize,
    rows: Vec<Vec<char>>,
}

impl TextFrame {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width: width as usize,
            rows: vec![vec![' '; width as usize]; height as usize],
        }
    }

    /// Blank every cell, keeping the size.
    pub fn clear(&mut self) {
        for row in &mut self.rows {
            row.fill(' ');
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn put(&mut self, x: i32, y: i32, ch: char) {
        if x < 0 || y < 0 {
            return;
        }
        if let Some(slot) = self
            .rows
            .get_mut(y as usize)
            .and_then(|row| row.get_mut(x as usize))
        {
            *slot = ch;
        }
    }

    pub fn put_str(&mut self, x: i32, y: i32, s: &str) {
        for (i, ch) in s.chars().enumerate() {
            self.put(x + i as i32, y, ch);
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }

    pub fn line(&self, y: usize) -> String {
        self.rows.get(y).map(|row| row.iter().collect()).unwrap_or_default()
    }
}

/// Pointer units per terminal column
pub const COLUMN_UNITS: i32 = 8;
/// Pointer units per terminal row
pub const ROW_UNITS: i32 = 16;

/// Terminal cell holding pointer position (px, py)
pub fn terminal_cell(px: i32, py: i32) -> (i32, i32) {
    (px.div_euclid(COLUMN_UNITS), py.div_euclid(ROW_UNITS))
}

fn tile_char(raw: u8) -> char {
    match TileCode::from_raw(raw) {
        Some(code) => match code.letter() {
            Some(letter) if code.is_blank() => letter.to_ascii_lowercase(),
            Some(letter) => letter,
            None => '?',
        },
        None => ' ',
    }
}

fn bonus_char(x: i32, y: i32) -> char {
    match tile_bonus(x, y) {
        Bonus::Normal => '.',
        Bonus::DoubleLetter => '\'',
        Bonus::TripleLetter => '"',
        Bonus::DoubleWord => '-',
        Bonus::TripleWord => '=',
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    pub fn render(&self, snap: &GameSnapshot, layout: &Layout, frame: &mut TextFrame) {
        let size = BOARD_SIZE as i32;
        let tile_at = |x: i32, y: i32| {
            let (px, py) = layout.cell_center(x, y);
            terminal_cell(px, py)
        };

        for y in 0..size {
            for x in 0..size {
                let raw = snap.board[y as usize][x as usize];
                let ch = if raw == 0 { bonus_char(x, y) } else { tile_char(raw) };
                let (col, row) = tile_at(x, y);
                frame.put(col, row, ch);
            }
        }

        let current = snap.current_player();
        if let Some(p) = current {
            let player = &snap.players[p];
            if snap.playable() {
                for (i, &cell) in snap.preview.iter().enumerate() {
                    let (x, y) = ((cell % BOARD_SIZE) as i32, (cell / BOARD_SIZE) as i32);
                    let (col, row) = tile_at(x, y);
                    frame.put(col, row, tile_char(player.held[i]).to_ascii_lowercase());
                }
                if let (Some((cx, cy)), true) = (snap.cursor_cell, snap.preview.is_empty()) {
                    let (col, row) = tile_at(i32::from(cx), i32::from(cy));
                    frame.put(col, row, '+');
                }
            }

            let (rack_col, rack_row) = terminal_cell(
                layout.x_offset,
                layout.y_offset + layout.board_len() + layout.tile_size / 2,
            );
            let mut rack = String::with_capacity(RACK_SIZE * 2);
            for &raw in &player.rack {
                rack.push(if raw == 0 { '_' } else { tile_char(raw) });
                rack.push(' ');
            }
            frame.put_str(rack_col, rack_row, &rack);
        }

        let mut line = String::new();
        let mut row = 0;
        for seat in 0..MAX_PLAYERS {
            let player = &snap.players[seat];
            if !player.kind.is_active() {
                continue;
            }
            line.clear();
            let marker = if current == Some(seat) { '>' } else { ' ' };
            let _ = write!(line, "{marker}P{} {:>4}", seat + 1, player.total_score);
            frame.put_str(0, row, &line);
            row += 1;
        }

        line.clear();
        let _ = write!(line, "bag {}", snap.bag_len);
        frame.put_str(0, row + 1, &line);
        if let Some(left) = snap.turn_ticks_left {
            line.clear();
            let _ = write!(line, "time {}", left / 60);
            frame.put_str(0, row + 2, &line);
        }

        match snap.state {
            TurnState::ScoringTurn(p) => {
                line.clear();
                let _ = write!(line, "+{}", snap.players[p as usize].turn_score);
                for word in &snap.words {
                    let _ = write!(line, " {}", word.as_str());
                }
                frame.put_str(0, row + 4, &line);
            }
            TurnState::PlayerTurn(_) if snap.shuffle_timer > 0 => {
                frame.put_str(0, row + 4, "shuffling");
            }
            _ => {}
        }

        if snap.game_over {
            frame.put_str(0, row + 6, "game over - Esc to quit");
        }
    }
}

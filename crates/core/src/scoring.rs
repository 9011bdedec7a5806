//! Scoring module - word detection and crossword scoring
//!
//! Given the cells placed this turn (already written to the board), every line
//! touching a placed cell is found, deduplicated, and scored:
//!
//! - Letter bonuses (double/triple letter) only apply under newly placed tiles
//!   and multiply that letter immediately.
//! - Word bonuses under newly placed tiles are queued and applied once at the
//!   end of the line, in the order they were met. Several compound.
//! - Placing all seven rack tiles adds a flat [`BINGO_BONUS`].
//!
//! Alongside the total, a list of [`ScoringCommand`]s records every increment in
//! a fixed order so the presentation layer can replay the reveal.

use arrayvec::{ArrayString, ArrayVec};

use crate::board::Board;
use crate::types::{tile_bonus, BINGO_BONUS, BOARD_SIZE, RACK_SIZE};

/// Upper bound on distinct lines one placement can form (one main line plus one
/// cross line per placed tile, with headroom)
pub const MAX_LINES: usize = 16;

/// Upper bound on reveal commands for one placement
pub const MAX_COMMANDS: usize = 256;

/// A formed word; a line is at most one board side long.
pub type Word = ArrayString<{ BOARD_SIZE as usize }>;

/// Inclusive run of occupied cells along one axis, as flat board indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineSpan {
    pub start: u8,
    pub end: u8,
}

impl LineSpan {
    /// Packed `(start, end)` used for deduplication
    pub fn key(self) -> u16 {
        (u16::from(self.start) << 8) | u16::from(self.end)
    }

    pub fn is_horizontal(self) -> bool {
        let size = BOARD_SIZE as u8;
        self.start / size == self.end / size
    }

    /// Flat index stride between consecutive cells
    pub fn stride(self) -> usize {
        if self.is_horizontal() {
            1
        } else {
            BOARD_SIZE as usize
        }
    }

    pub fn len(self) -> usize {
        (self.end as usize - self.start as usize) / self.stride() + 1
    }

    pub fn cells(self) -> impl Iterator<Item = usize> {
        let stride = self.stride();
        (self.start as usize..=self.end as usize).step_by(stride)
    }
}

/// One step of the score reveal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoringCommand {
    /// A letter's contribution (after any letter bonus)
    Letter { cell: u8, points: u32 },
    /// A letter bonus applied at `cell`
    LetterMultiplier { cell: u8, factor: u32 },
    /// A word bonus from `cell` applied to the line just revealed
    WordMultiplier { cell: u8, factor: u32 },
    /// Full-rack bonus, tagged to the last placed cell
    Bingo { cell: u8, points: u32 },
}

impl ScoringCommand {
    pub fn cell(&self) -> u8 {
        match *self {
            ScoringCommand::Letter { cell, .. }
            | ScoringCommand::LetterMultiplier { cell, .. }
            | ScoringCommand::WordMultiplier { cell, .. }
            | ScoringCommand::Bingo { cell, .. } => cell,
        }
    }
}

/// Result buffers for one placement. Reused across turns; never reallocates.
#[derive(Debug, Clone, Default)]
pub struct TurnScoring {
    pub lines: ArrayVec<LineSpan, MAX_LINES>,
    pub words: ArrayVec<Word, MAX_LINES>,
    pub commands: ArrayVec<ScoringCommand, MAX_COMMANDS>,
    pub total: u32,
}

impl TurnScoring {
    pub fn clear(&mut self) {
        self.lines.clear();
        self.words.clear();
        self.commands.clear();
        self.total = 0;
    }
}

/// Walk from `index` along (dx, dy) both ways while cells are occupied.
fn span_through(board: &Board, index: usize, dx: i32, dy: i32) -> LineSpan {
    let (x0, y0) = Board::coords(index);

    let (mut sx, mut sy) = (x0, y0);
    while board.is_occupied(sx - dx, sy - dy) {
        sx -= dx;
        sy -= dy;
    }
    let (mut ex, mut ey) = (x0, y0);
    while board.is_occupied(ex + dx, ey + dy) {
        ex += dx;
        ey += dy;
    }

    let start = Board::index(sx, sy).unwrap_or(index);
    let end = Board::index(ex, ey).unwrap_or(index);
    LineSpan {
        start: start as u8,
        end: end as u8,
    }
}

/// Collect every distinct line that a placed cell has an occupied neighbour in.
///
/// Placed cells are visited in order; for each, horizontal neighbours (left,
/// right) are checked before vertical ones (up, down).
pub fn find_lines(board: &Board, placed: &[u8], out: &mut ArrayVec<LineSpan, MAX_LINES>) {
    const DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

    for &cell in placed {
        let (x, y) = Board::coords(cell as usize);
        for (dx, dy) in DIRECTIONS {
            if !board.is_occupied(x + dx, y + dy) {
                continue;
            }
            let span = span_through(board, cell as usize, dx.abs(), dy.abs());
            if out.iter().any(|s| s.key() == span.key()) {
                continue;
            }
            let _ = out.try_push(span);
        }
    }
}

/// Score one line, appending its word and reveal commands. Returns the line score.
pub fn score_line(board: &Board, span: LineSpan, placed: &[u8], out: &mut TurnScoring) -> u32 {
    let mut word = Word::new();
    let mut word_bonuses: ArrayVec<(u8, u32), RACK_SIZE> = ArrayVec::new();
    let mut line_score = 0u32;

    for index in span.cells() {
        let Some(tile) = board.tile_at(index) else {
            continue;
        };
        let cell = index as u8;
        let mut points = tile.points();

        if placed.contains(&cell) {
            let (x, y) = Board::coords(index);
            let bonus = tile_bonus(x, y);
            let letter_factor = bonus.letter_factor();
            if letter_factor > 1 {
                points *= letter_factor;
                let _ = out.commands.try_push(ScoringCommand::LetterMultiplier {
                    cell,
                    factor: letter_factor,
                });
            }
            let word_factor = bonus.word_factor();
            if word_factor > 1 {
                let _ = word_bonuses.try_push((cell, word_factor));
            }
        }

        let _ = out.commands.try_push(ScoringCommand::Letter { cell, points });
        line_score += points;
        let _ = word.try_push(tile.letter().unwrap_or('?'));
    }

    for (cell, factor) in word_bonuses {
        line_score *= factor;
        let _ = out.commands.try_push(ScoringCommand::WordMultiplier { cell, factor });
    }

    let _ = out.words.try_push(word);
    line_score
}

/// Find and score every line formed by `placed`. Clears `out` first; returns the total.
pub fn score_turn(board: &Board, placed: &[u8], out: &mut TurnScoring) -> u32 {
    out.clear();

    let mut lines = ArrayVec::new();
    find_lines(board, placed, &mut lines);

    let mut total = 0u32;
    for &span in &lines {
        total += score_line(board, span, placed, out);
    }
    out.lines = lines;

    if placed.len() == RACK_SIZE {
        if let Some(&last) = placed.last() {
            total += BINGO_BONUS;
            let _ = out.commands.try_push(ScoringCommand::Bingo {
                cell: last,
                points: BINGO_BONUS,
            });
        }
    }

    out.total = total;
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TileCode;

    fn place(board: &mut Board, x: i32, y: i32, word: &str, horizontal: bool) -> ArrayVec<u8, 15> {
        let mut placed = ArrayVec::new();
        for (i, ch) in word.chars().enumerate() {
            let (cx, cy) = if horizontal {
                (x + i as i32, y)
            } else {
                (x, y + i as i32)
            };
            board.set(cx, cy, TileCode::from_char(ch));
            placed.push(Board::index(cx, cy).unwrap() as u8);
        }
        placed
    }

    #[test]
    fn test_span_key_and_orientation() {
        let span = LineSpan { start: 16, end: 19 };
        assert!(span.is_horizontal());
        assert_eq!(span.len(), 4);
        assert_eq!(span.key(), (16 << 8) | 19);

        let span = LineSpan { start: 16, end: 46 };
        assert!(!span.is_horizontal());
        assert_eq!(span.len(), 3);
        assert_eq!(span.cells().collect::<Vec<_>>(), vec![16, 31, 46]);
    }

    #[test]
    fn test_plain_word() {
        let mut board = Board::new();
        // Row 4 from x=5: no bonus cells at (5,4), (6,4), (7,4).
        let placed = place(&mut board, 5, 4, "cat", true);
        let mut out = TurnScoring::default();
        assert_eq!(score_turn(&board, &placed, &mut out), 5);
        assert_eq!(out.lines.len(), 1);
        assert_eq!(out.words[0].as_str(), "CAT");
    }

    #[test]
    fn test_existing_bonus_not_reused() {
        let mut board = Board::new();
        // (3,0) is a double letter; pre-existing tile there gets no bonus.
        board.set(3, 0, TileCode::from_char('c'));
        let placed = place(&mut board, 4, 0, "at", true);
        let mut out = TurnScoring::default();
        assert_eq!(score_turn(&board, &placed, &mut out), 5);
        assert_eq!(out.words[0].as_str(), "CAT");
    }

    #[test]
    fn test_word_multipliers_compound() {
        let mut board = Board::new();
        // (0,0) and (7,0) are both triple word.
        let placed = place(&mut board, 0, 0, "abcdefgh", true);
        let mut out = TurnScoring::default();
        let raw: u32 = "abcdefgh"
            .chars()
            .map(|c| TileCode::from_char(c).unwrap().points())
            .sum();
        // (3,0) double letter under 'd' (2 points) adds 2.
        assert_eq!(score_turn(&board, &placed, &mut out), (raw + 2) * 9);
        let word_cmds: Vec<_> = out
            .commands
            .iter()
            .filter(|c| matches!(c, ScoringCommand::WordMultiplier { .. }))
            .collect();
        assert_eq!(word_cmds.len(), 2);
        assert_eq!(word_cmds[0].cell(), 0);
        assert_eq!(word_cmds[1].cell(), 7);
    }

    #[test]
    fn test_cross_words_deduplicated() {
        let mut board = Board::new();
        place(&mut board, 5, 4, "cat", true);
        // "an" downward from the A at (6,4): only (6,5) is new.
        board.set(6, 5, TileCode::from_char('n'));
        let placed = [Board::index(6, 5).unwrap() as u8];
        let mut out = TurnScoring::default();
        let total = score_turn(&board, &placed, &mut out);
        assert_eq!(out.lines.len(), 1);
        assert_eq!(out.words[0].as_str(), "AN");
        assert_eq!(total, 2);
    }

    #[test]
    fn test_isolated_tile_forms_no_line() {
        let mut board = Board::new();
        let placed = place(&mut board, 5, 4, "q", true);
        let mut out = TurnScoring::default();
        assert_eq!(score_turn(&board, &placed, &mut out), 0);
        assert!(out.lines.is_empty());
        assert!(out.commands.is_empty());
    }
}

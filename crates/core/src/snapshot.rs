use arrayvec::ArrayVec;

use crate::animation::Tween;
use crate::game_state::TurnState;
use crate::scoring::{ScoringCommand, Word, MAX_COMMANDS, MAX_LINES};
use crate::types::{Orientation, PlayerKind, BOARD_SIZE, MAX_PLAYERS, RACK_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PlayerSnapshot {
    pub kind: PlayerKind,
    /// Raw tile codes per slot, 0 = empty
    pub rack: [u8; RACK_SIZE],
    /// Rack before the running refill or shuffle
    pub prev_rack: [u8; RACK_SIZE],
    pub rack_tween: Tween,
    /// Held letters in pickup order, 0 past `n_held`
    pub held: [u8; RACK_SIZE],
    pub n_held: u8,
    pub turn_positions: [Option<u8>; RACK_SIZE],
    pub turn_score: u32,
    pub total_score: u32,
    pub orientation: Orientation,
    pub orientation_tween: Tween,
    pub offsets: u32,
    pub prev_offsets: u32,
    pub offsets_tween: Tween,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_SIZE as usize]; BOARD_SIZE as usize],
    pub state: TurnState,
    pub prev_state: TurnState,
    pub state_tween: Tween,
    pub players: [PlayerSnapshot; MAX_PLAYERS],
    pub bag_len: u8,
    pub cursor_x: i32,
    pub cursor_y: i32,
    pub cursor_cell: Option<(u8, u8)>,
    /// Cells the held letters would land on
    pub preview: ArrayVec<u8, RACK_SIZE>,
    pub shuffle_timer: u32,
    pub turn_ticks_left: Option<u32>,
    pub words: ArrayVec<Word, MAX_LINES>,
    pub commands: ArrayVec<ScoringCommand, MAX_COMMANDS>,
    pub game_over: bool,
    pub frame: u64,
}

impl GameSnapshot {
    pub fn new() -> Self {
        Self {
            board: [[0u8; BOARD_SIZE as usize]; BOARD_SIZE as usize],
            state: TurnState::Idle,
            prev_state: TurnState::Idle,
            state_tween: Tween::default(),
            players: [PlayerSnapshot::default(); MAX_PLAYERS],
            bag_len: 0,
            cursor_x: 0,
            cursor_y: 0,
            cursor_cell: None,
            preview: ArrayVec::new(),
            shuffle_timer: 0,
            turn_ticks_left: None,
            words: ArrayVec::new(),
            commands: ArrayVec::new(),
            game_over: false,
            frame: 0,
        }
    }

    pub fn clear(&mut self) {
        self.board = [[0u8; BOARD_SIZE as usize]; BOARD_SIZE as usize];
        self.state = TurnState::Idle;
        self.prev_state = TurnState::Idle;
        self.state_tween = Tween::default();
        self.players = [PlayerSnapshot::default(); MAX_PLAYERS];
        self.bag_len = 0;
        self.cursor_x = 0;
        self.cursor_y = 0;
        self.cursor_cell = None;
        self.preview.clear();
        self.shuffle_timer = 0;
        self.turn_ticks_left = None;
        self.words.clear();
        self.commands.clear();
        self.game_over = false;
        self.frame = 0;
    }

    /// Seat whose turn it is (or whose placement is being scored)
    pub fn current_player(&self) -> Option<usize> {
        self.state.player()
    }

    pub fn playable(&self) -> bool {
        !self.game_over && matches!(self.state, TurnState::PlayerTurn(_))
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

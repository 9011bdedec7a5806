//! Game state module - the turn state machine and per-tick simulation
//!
//! [`Game`] owns every piece of match state: board, bag, the four seats, the
//! shared turn-state animation, the RNG, and the scoring buffers of the turn
//! being revealed. [`Game::simulate`] is called exactly once per tick with that
//! tick's [`Inputs`] and performs, in order:
//!
//! 1. Step the turn-state animation.
//! 2. Dispatch on the turn state (player turn or scoring turn).
//! 3. Step every active seat's own animations.
//! 4. Advance the RNG frame.
//!
//! Nothing here returns errors: an impossible placement, an unknown word or an
//! exhausted bag are all handled by declining the action for that tick.

use arrayvec::ArrayVec;
use tracing::debug;

use crate::animation::Animated;
use crate::bag::TileBag;
use crate::board::Board;
use crate::dictionary::{Dictionary, WordList};
use crate::layout::Layout;
use crate::rack::Player;
use crate::rng::TickRng;
use crate::scoring::{score_turn, TurnScoring};
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Which handler runs each tick, and for whom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TurnState {
    /// Before the first `start`, or with nobody seated
    #[default]
    Idle,
    /// Reserved for choosing the initial turn order; never entered yet
    PickOrder,
    PlayerTurn(u8),
    ScoringTurn(u8),
}

impl TurnState {
    /// Seat this state belongs to
    pub fn player(self) -> Option<usize> {
        match self {
            TurnState::PlayerTurn(p) | TurnState::ScoringTurn(p) => Some(p as usize),
            TurnState::Idle | TurnState::PickOrder => None,
        }
    }
}

/// Rule switches fixed for a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RulesConfig {
    /// Reject placements forming any word missing from the dictionary
    pub validate_every_word: bool,
    /// Ticks a player may take before the turn is passed; 0 disables
    pub turn_time_limit_ticks: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            validate_every_word: true,
            turn_time_limit_ticks: 120 * TICKS_PER_SECOND,
        }
    }
}

/// State-animation length for a scoring turn with `commands` reveal steps
fn reveal_len(commands: usize) -> i32 {
    (commands as i32 * SCORE_REVEAL_TICKS).max(REFILL_TICKS)
}

/// Complete match state
#[derive(Debug, Clone)]
pub struct Game<D = WordList> {
    board: Board,
    bag: TileBag,
    rng: TickRng,
    players: [Player; MAX_PLAYERS],
    state: Animated<TurnState>,
    rules: RulesConfig,
    dictionary: D,
    layout: Layout,
    cursor_x: i32,
    cursor_y: i32,
    /// Pointer position when directional movement last ran
    cursor_anchor: (i32, i32),
    /// Cursor follows the pointer (false after directional movement until the pointer moves away)
    mouse_tracking: bool,
    shuffle_timer: u32,
    turn_timer: u32,
    /// Board cells the held letters would land on, in pickup order; empty when
    /// the placement is impossible
    preview_cells: ArrayVec<u8, RACK_SIZE>,
    scoring: TurnScoring,
    game_over: bool,
}

impl<D: Dictionary> Game<D> {
    /// Create a game with every seat inactive. Call [`start`](Self::start) to deal.
    pub fn new(dictionary: D, seed: u64, rules: RulesConfig) -> Self {
        Self {
            board: Board::new(),
            bag: TileBag::new(),
            rng: TickRng::new(seed),
            players: Default::default(),
            state: Animated::new(TurnState::Idle),
            rules,
            dictionary,
            layout: Layout::default(),
            cursor_x: 0,
            cursor_y: 0,
            cursor_anchor: (0, 0),
            mouse_tracking: true,
            shuffle_timer: 0,
            turn_timer: 0,
            preview_cells: ArrayVec::new(),
            scoring: TurnScoring::default(),
            game_over: false,
        }
    }

    /// Seat kinds take effect at the next `start`.
    pub fn set_player_kind(&mut self, seat: usize, kind: PlayerKind) {
        if let Some(player) = self.players.get_mut(seat) {
            player.kind = kind;
        }
    }

    pub fn set_viewport(&mut self, width: i32, height: i32) {
        self.layout = Layout::new(width, height);
    }

    /// Reset board, bag, racks and scores, deal seven tiles to each active seat
    /// in seat order, and open the first active seat's turn.
    pub fn start(&mut self) {
        self.board.clear();
        self.bag.reset();
        self.scoring.clear();
        self.preview_cells.clear();
        self.shuffle_timer = 0;
        self.turn_timer = 0;
        self.game_over = false;

        for player in &mut self.players {
            player.reset_for_match();
            if player.is_active() {
                let mut rack = player.rack.cur;
                rack.refill(&mut self.bag, &mut self.rng);
                player.rack.snap(rack);
            }
        }

        self.state.snap(TurnState::Idle);
        match self.players.iter().position(Player::is_active) {
            Some(first) => {
                self.state
                    .animate_to(TurnState::PlayerTurn(first as u8), TURN_OPENING_TICKS);
                debug!(
                    seed = self.rng.startup_seed(),
                    first_player = first,
                    bag = self.bag.len(),
                    "match started"
                );
            }
            None => {
                self.game_over = true;
                debug!("match started with no active players");
            }
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable access for setting up positions directly
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn bag(&self) -> &TileBag {
        &self.bag
    }

    pub fn rng(&self) -> &TickRng {
        &self.rng
    }

    pub fn players(&self) -> &[Player; MAX_PLAYERS] {
        &self.players
    }

    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    /// Mutable access for setting up racks directly
    pub fn player_mut(&mut self, seat: usize) -> Option<&mut Player> {
        self.players.get_mut(seat)
    }

    pub fn state(&self) -> TurnState {
        self.state.cur
    }

    pub fn current_player(&self) -> Option<usize> {
        self.state.cur.player()
    }

    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn cursor(&self) -> (i32, i32) {
        (self.cursor_x, self.cursor_y)
    }

    /// Board cell under the placement cursor
    pub fn cursor_cell(&self) -> Option<(i32, i32)> {
        self.layout.cell_at(self.cursor_x, self.cursor_y)
    }

    pub fn preview_cells(&self) -> &[u8] {
        &self.preview_cells
    }

    pub fn shuffle_timer(&self) -> u32 {
        self.shuffle_timer
    }

    /// Ticks left before the current turn is passed; `None` without a limit
    pub fn turn_ticks_left(&self) -> Option<u32> {
        match self.rules.turn_time_limit_ticks {
            0 => None,
            limit => Some(limit.saturating_sub(self.turn_timer)),
        }
    }

    /// Words, commands and total of the placement being revealed
    pub fn scoring(&self) -> &TurnScoring {
        &self.scoring
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Fill `out` with everything the presentation layer draws. Does not allocate.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.state = self.state.cur;
        out.prev_state = self.state.prev;
        out.state_tween = self.state.tween;

        for (dst, player) in out.players.iter_mut().zip(self.players.iter()) {
            dst.kind = player.kind;
            for slot in 0..RACK_SIZE {
                dst.rack[slot] = player.rack.cur.raw(slot);
                dst.prev_rack[slot] = player.rack.prev.raw(slot);
                dst.held[slot] = player.turn_letters.get(slot).map_or(0, |c| c.raw());
            }
            dst.rack_tween = player.rack.tween;
            dst.n_held = player.n_tiles_held() as u8;
            dst.turn_positions = player.turn_positions;
            dst.turn_score = player.turn_score;
            dst.total_score = player.total_score;
            dst.orientation = player.orientation.cur;
            dst.orientation_tween = player.orientation.tween;
            dst.offsets = player.offsets.cur;
            dst.prev_offsets = player.offsets.prev;
            dst.offsets_tween = player.offsets.tween;
        }

        out.bag_len = self.bag.len() as u8;
        out.cursor_x = self.cursor_x;
        out.cursor_y = self.cursor_y;
        out.cursor_cell = self.cursor_cell().map(|(x, y)| (x as u8, y as u8));
        out.preview.clear();
        out.preview.extend(self.preview_cells.iter().copied());
        out.shuffle_timer = self.shuffle_timer;
        out.turn_ticks_left = self.turn_ticks_left();
        out.words.clear();
        out.words.extend(self.scoring.words.iter().copied());
        out.commands.clear();
        out.commands.extend(self.scoring.commands.iter().copied());
        out.game_over = self.game_over;
        out.frame = self.rng.frame_counter();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::new();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Next active seat after `seat`, wrapping. Returns `seat` when nobody else is seated.
    pub fn next_active_player(&self, seat: usize) -> usize {
        (1..=MAX_PLAYERS)
            .map(|i| (seat + i) % MAX_PLAYERS)
            .find(|&q| self.players[q].is_active())
            .unwrap_or(seat)
    }

    /// Run one tick.
    pub fn simulate(&mut self, inputs: &Inputs) {
        if !self.game_over {
            self.state.step();
            match self.state.cur {
                TurnState::PlayerTurn(p) => self.simulate_player_turn(p as usize, inputs),
                TurnState::ScoringTurn(p) => self.simulate_scoring_turn(p as usize),
                TurnState::Idle | TurnState::PickOrder => {}
            }
            self.step_player_animations();
        }
        self.rng.advance_frame();
    }

    fn step_player_animations(&mut self) {
        // The scoring seat's rack is stepped by the scoring handler.
        let scorer = match self.state.cur {
            TurnState::ScoringTurn(p) => Some(p as usize),
            _ => None,
        };
        for (seat, player) in self.players.iter_mut().enumerate() {
            if !player.is_active() {
                continue;
            }
            player.orientation.step();
            player.offsets.step();
            if scorer != Some(seat) {
                player.rack.step();
            }
        }
    }

    fn simulate_player_turn(&mut self, p: usize, inputs: &Inputs) {
        if self.shuffle_timer > 0 {
            self.shuffle_timer -= 1;
            return;
        }

        if self.try_forced_refill(p) {
            return;
        }

        self.turn_timer += 1;
        let limit = self.rules.turn_time_limit_ticks;
        if limit > 0 && self.turn_timer >= limit {
            self.pass_turn(p);
            return;
        }

        let player = &mut self.players[p];
        for &ch in &inputs.pressed_chars {
            if let Some(code) = TileCode::from_char(ch) {
                player.pick_up(code);
            }
        }
        for _ in inputs.pressed_keys.iter().filter(|&&k| k == Key::Backspace) {
            player.return_last();
        }

        let rotate = inputs.key_pressed(Key::Tab) || inputs.mouse_buttons[MOUSE_RIGHT].pressed;
        if rotate {
            let next = player.orientation.cur.toggled();
            player.orientation.prev = player.orientation.cur;
            player.orientation.cur = next;
            player.orientation.tween.mirror_or_restart(ROTATE_TICKS);
            player.offsets.tween.mirror_or_restart(OFFSET_PREVIEW_TICKS);
        }

        self.update_cursor(inputs);
        let can_commit = self.update_preview(p);

        let commit = inputs.key_pressed(Key::Enter) || inputs.mouse_buttons[MOUSE_LEFT].pressed;
        if commit && can_commit && self.commit_placement(p) {
            return;
        }

        let shuffle = inputs.key_pressed(Key::LeftCtrl) || inputs.key_pressed(Key::RightCtrl);
        if shuffle {
            self.shuffle_rack(p);
        }
    }

    /// Refill an emptied rack and hand the turn to scoring with nothing scored.
    fn try_forced_refill(&mut self, p: usize) -> bool {
        let player = &mut self.players[p];
        if !player.rack.cur.is_empty() || player.n_tiles_held() > 0 || self.bag.is_empty() {
            return false;
        }
        let mut rack = player.rack.cur;
        let drawn = rack.refill(&mut self.bag, &mut self.rng);
        player.rack.animate_to(rack, REFILL_TICKS);
        player.turn_score = 0;
        self.scoring.clear();
        self.state
            .animate_to(TurnState::ScoringTurn(p as u8), reveal_len(0));
        debug!(player = p, drawn, "forced refill");
        true
    }

    /// Time ran out: return held letters and score nothing.
    fn pass_turn(&mut self, p: usize) {
        let player = &mut self.players[p];
        player.return_all();
        player.turn_positions = [None; RACK_SIZE];
        player.turn_score = 0;
        player.offsets.snap(0);
        self.preview_cells.clear();
        self.scoring.clear();
        self.state
            .animate_to(TurnState::ScoringTurn(p as u8), reveal_len(0));
        debug!(player = p, ticks = self.turn_timer, "turn time expired");
    }

    fn update_cursor(&mut self, inputs: &Inputs) {
        if inputs.any_arrow_held() {
            let speed = (self.layout.width / CURSOR_SPEED_DIVISOR).max(1);
            let held = |i: usize| i32::from(inputs.arrow_timers[i] > 0);
            let dx = held(ARROW_RIGHT) - held(ARROW_LEFT);
            let dy = held(ARROW_DOWN) - held(ARROW_UP);
            self.cursor_x = (self.cursor_x + dx * speed).clamp(0, (self.layout.width - 1).max(0));
            self.cursor_y = (self.cursor_y + dy * speed).clamp(0, (self.layout.height - 1).max(0));
            self.cursor_anchor = (inputs.cursor_x, inputs.cursor_y);
            self.mouse_tracking = false;
            return;
        }

        if !self.mouse_tracking {
            let dx = i64::from(inputs.cursor_x) - i64::from(self.cursor_anchor.0);
            let dy = i64::from(inputs.cursor_y) - i64::from(self.cursor_anchor.1);
            let snap = i64::from(CURSOR_SNAP_DISTANCE);
            if dx.saturating_mul(dx).saturating_add(dy.saturating_mul(dy)) > snap * snap {
                self.mouse_tracking = true;
            }
        }
        if self.mouse_tracking {
            self.cursor_x = inputs.cursor_x;
            self.cursor_y = inputs.cursor_y;
        }
    }

    /// Lay held letters out from the cursor cell, skipping occupied cells.
    /// Records skip offsets and target cells; returns whether the placement fits.
    fn update_preview(&mut self, p: usize) -> bool {
        self.preview_cells.clear();
        let player = &mut self.players[p];
        let held = player.n_tiles_held();
        if held == 0 {
            if player.offsets.cur != 0 {
                player.offsets.animate_to(0, OFFSET_PREVIEW_TICKS);
            }
            return false;
        }
        let Some((mut x, mut y)) = self.layout.cell_at(self.cursor_x, self.cursor_y) else {
            return false;
        };

        let (dx, dy) = player.orientation.cur.step();
        let mut offsets = 0u32;
        let mut fits = true;
        for i in 0..held {
            let mut skip = 0u32;
            while self.board.is_occupied(x, y) {
                x += dx;
                y += dy;
                skip += 1;
            }
            if skip > MAX_SKIP {
                fits = false;
            }
            offsets |= skip.min(MAX_SKIP) << (4 * (RACK_SIZE - 1 - i));
            match Board::index(x, y) {
                Some(index) if fits => self.preview_cells.push(index as u8),
                _ => fits = false,
            }
            x += dx;
            y += dy;
        }

        if offsets != player.offsets.cur {
            player.offsets.animate_to(offsets, OFFSET_PREVIEW_TICKS);
        }
        if !fits {
            self.preview_cells.clear();
        }
        fits
    }

    /// Write the held letters to the previewed cells, score them, and either
    /// move to the scoring turn or undo the board writes.
    fn commit_placement(&mut self, p: usize) -> bool {
        let player = &mut self.players[p];
        if player.n_tiles_held() == 0 || self.preview_cells.len() != player.n_tiles_held() {
            return false;
        }

        for (i, (&cell, &letter)) in self
            .preview_cells
            .iter()
            .zip(player.turn_letters.iter())
            .enumerate()
        {
            self.board.set_index(cell as usize, Some(letter));
            player.turn_positions[i] = Some(cell);
        }

        // The refill stands even when the words are rejected below.
        let mut rack = player.rack.cur;
        let drawn = rack.refill(&mut self.bag, &mut self.rng);
        player.rack.animate_to(rack, REFILL_TICKS);

        let total = score_turn(&self.board, &self.preview_cells, &mut self.scoring);

        if self.rules.validate_every_word {
            let rejected = self
                .scoring
                .words
                .iter()
                .find(|word| !self.dictionary.contains(word.as_str()));
            if let Some(word) = rejected {
                debug!(player = p, word = word.as_str(), drawn, "placement rejected");
                for &cell in &self.preview_cells {
                    self.board.set_index(cell as usize, None);
                }
                player.turn_positions = [None; RACK_SIZE];
                self.scoring.clear();
                return false;
            }
        }

        player.turn_score = total;
        player.offsets.snap(0);

        self.state.animate_to(
            TurnState::ScoringTurn(p as u8),
            reveal_len(self.scoring.commands.len()),
        );
        debug!(
            player = p,
            score = total,
            words = self.scoring.words.len(),
            placed = self.preview_cells.len(),
            drawn,
            "placement committed"
        );
        self.preview_cells.clear();
        true
    }

    fn shuffle_rack(&mut self, p: usize) {
        let mut perm: [u8; RACK_SIZE] = [0, 1, 2, 3, 4, 5, 6];
        self.rng.shuffle(&mut perm);
        let player = &mut self.players[p];
        let shuffled = player.rack.cur.permuted(&perm);
        player.rack.animate_to(shuffled, SHUFFLE_TICKS as i32);
        self.shuffle_timer = SHUFFLE_TICKS;
    }

    fn simulate_scoring_turn(&mut self, p: usize) {
        let player = &mut self.players[p];
        player.rack.step();
        if self.state.is_running() || player.rack.is_running() {
            return;
        }

        player.total_score += player.turn_score;
        let rack_empty = player.rack.cur.is_empty();
        debug!(
            player = p,
            turn = player.turn_score,
            total = player.total_score,
            "turn scored"
        );
        player.clear_turn();
        self.scoring.clear();

        if rack_empty && self.bag.is_empty() {
            self.game_over = true;
            debug!(player = p, "game over");
            return;
        }

        let next = self.next_active_player(p);
        self.turn_timer = 0;
        self.state
            .animate_to(TurnState::PlayerTurn(next as u8), TURN_OPENING_TICKS);
        debug!(from = p, to = next, "turn passed");
    }
}

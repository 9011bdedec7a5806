//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules, state management and per-tick simulation of
//! the word game. It has **zero dependencies** on rendering or device polling:
//!
//! - **Deterministic**: the same seed and the same sequence of [`Inputs`](types::Inputs)
//!   produce identical games, down to every RNG call
//! - **Testable**: every rule is reachable from plain values
//! - **Fast**: fixed-capacity buffers, no allocation on the tick path
//!
//! # Module Structure
//!
//! - [`rng`]: counter-based 128-bit mixer, consumed in call order within a tick
//! - [`bag`]: the 100 undrawn tiles and uniform random draws
//! - [`board`]: 15x15 grid of placed tiles
//! - [`rack`]: packed 7-slot racks and per-seat turn state
//! - [`animation`]: tween primitive and animated values
//! - [`scoring`]: line detection and crossword scoring
//! - [`dictionary`]: word lookup seam
//! - [`layout`]: window geometry and pointer-to-cell mapping
//! - [`game_state`]: the turn state machine
//! - [`snapshot`]: render feed
//!
//! # Game Rules
//!
//! - Players lift letters from their rack by typing them; a blank stands in for
//!   a letter that is not on the rack
//! - Held letters are laid out from the cursor cell along the current
//!   orientation, skipping cells that are already occupied
//! - Every line touching a placed tile is scored; letter bonuses and word
//!   bonuses only count under newly placed tiles
//! - Placing all seven tiles earns a 50 point bonus
//!
//! # Example
//!
//! ```
//! use scrambles_core::{Game, RulesConfig, TurnState, WordList};
//! use scrambles_types::{Inputs, PlayerKind};
//!
//! let words = WordList::from_lines(["CAT", "DOG"]);
//! let mut game = Game::new(words, 12345, RulesConfig::default());
//! game.set_player_kind(0, PlayerKind::Human);
//! game.set_player_kind(1, PlayerKind::Human);
//! game.start();
//!
//! assert_eq!(game.state(), TurnState::PlayerTurn(0));
//! assert_eq!(game.players()[0].rack_bits().count(), 7);
//!
//! game.simulate(&Inputs::new());
//! assert_eq!(game.rng().frame_counter(), 1);
//! ```
//!
//! # Timing
//!
//! The simulation runs at a fixed 60 ticks per second. Call
//! [`Game::simulate`](game_state::Game::simulate) once per tick.

pub mod animation;
pub mod bag;
pub mod board;
pub mod dictionary;
pub mod game_state;
pub mod layout;
pub mod rack;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use scrambles_types as types;

// Re-export commonly used types for convenience
pub use animation::{Animated, Tween};
pub use bag::TileBag;
pub use board::Board;
pub use dictionary::{Dictionary, WordList};
pub use game_state::{Game, RulesConfig, TurnState};
pub use layout::Layout;
pub use rack::{Player, RackBits};
pub use rng::TickRng;
pub use scoring::{score_turn, LineSpan, ScoringCommand, TurnScoring, Word};
pub use snapshot::{GameSnapshot, PlayerSnapshot};

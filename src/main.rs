//! Terminal word game runner (default binary).
//!
//! Loads the configuration and word list, then runs the simulation at a fixed
//! 60 Hz with crossterm for input and a plain text view for output.

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing_subscriber::EnvFilter;

use scrambles::config::{load_word_list, Config};
use scrambles::core::{Game, GameSnapshot};
use scrambles::input::{should_quit, InputCollector};
use scrambles::term::TerminalRenderer;
use scrambles::types::TICKS_PER_SECOND;
use scrambles::view::{GameView, TextFrame, COLUMN_UNITS, ROW_UNITS};

fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    // The terminal is in raw mode on the alternate screen, so logs go to a file.
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn main() -> Result<()> {
    let config = Config::from_env();
    init_logging(&config)?;

    let words = load_word_list(&config.words_path)?;
    tracing::info!(words = words.len(), seed = config.seed, "word list loaded");

    let mut game = Game::new(words, config.seed, config.rules());
    for (seat, &kind) in config.players.iter().enumerate() {
        game.set_player_kind(seat, kind);
    }

    let mut term = TerminalRenderer::new();
    term.enter().context("failed to set up terminal")?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// The game measures the terminal in pointer units, matching the input collector.
fn set_viewport(game: &mut Game, cols: u16, rows: u16) {
    game.set_viewport(i32::from(cols) * COLUMN_UNITS, i32::from(rows) * ROW_UNITS);
}

fn run(term: &mut TerminalRenderer, game: &mut Game) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    set_viewport(game, w, h);
    game.start();

    let view = GameView;
    let mut inputs = InputCollector::new().with_cell_size(COLUMN_UNITS, ROW_UNITS);
    let mut snap = GameSnapshot::new();
    let mut frame = TextFrame::new(w, h);

    let tick_duration = Duration::from_micros(1_000_000 / u64::from(TICKS_PER_SECOND));
    let mut last_tick = Instant::now();

    loop {
        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            let ev = event::read()?;
            match &ev {
                Event::Key(key) if key.kind == KeyEventKind::Press && should_quit(*key) => {
                    return Ok(());
                }
                Event::Resize(cols, rows) => {
                    set_viewport(game, *cols, *rows);
                    frame = TextFrame::new(*cols, *rows);
                    term.invalidate();
                }
                _ => {}
            }
            inputs.handle_event(&ev);
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.simulate(&inputs.next_tick());

            game.snapshot_into(&mut snap);
            frame.clear();
            view.render(&snap, game.layout(), &mut frame);
            term.draw(&frame)?;
        }
    }
}

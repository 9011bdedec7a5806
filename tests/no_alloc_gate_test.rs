use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use scrambles::core::{Game, GameSnapshot, RulesConfig, WordList};
use scrambles::types::{Inputs, Key, PlayerKind, TileCode};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = layout;
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = (layout, new_size);
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

/// Inputs for one tick: type two rack letters and commit every 150 ticks,
/// shuffle every 97, and wiggle the pointer otherwise.
fn scripted_inputs(game: &Game, tick: u32) -> Inputs {
    let mut inputs = Inputs::new();
    let (px, py) = game.layout().cell_center(7, 7);
    inputs.cursor_x = px + (tick % 3) as i32;
    inputs.cursor_y = py;
    if tick % 97 == 5 {
        inputs.pressed_keys.push(Key::LeftCtrl);
    }
    if tick % 150 == 70 {
        if let Some(p) = game.current_player() {
            let rack = game.players()[p].rack_bits();
            for ch in rack.iter().flatten().filter_map(TileCode::letter).take(2) {
                inputs.pressed_chars.push(ch);
            }
            if tick % 300 == 70 {
                inputs.pressed_keys.push(Key::Tab);
            }
            inputs.pressed_keys.push(Key::Enter);
        }
    }
    if tick % 211 == 100 {
        inputs.pressed_keys.push(Key::Backspace);
    }
    inputs
}

#[test]
fn simulate_and_snapshot_are_allocation_free() {
    let rules = RulesConfig {
        validate_every_word: true,
        turn_time_limit_ticks: 400,
    };
    let words = WordList::from_lines(["AA", "AE", "AT", "TA", "ET", "TE"]);
    let mut game = Game::new(words, 2024, rules);
    game.set_player_kind(0, PlayerKind::Human);
    game.set_player_kind(1, PlayerKind::AiEasy);
    game.start();

    // Record the script on a copy; this also warms up every log callsite the
    // measured run will reach.
    let mut pilot = game.clone();
    let mut snap = GameSnapshot::new();
    let mut script = Vec::with_capacity(3_000);
    for tick in 0..3_000 {
        let inputs = scripted_inputs(&pilot, tick);
        pilot.simulate(&inputs);
        pilot.snapshot_into(&mut snap);
        script.push(inputs);
    }

    let allocs = with_alloc_counting(|| {
        for inputs in &script {
            game.simulate(inputs);
            game.snapshot_into(&mut snap);
        }
    });

    assert_eq!(allocs, 0);
    assert_eq!(game.snapshot(), pilot.snapshot());
}

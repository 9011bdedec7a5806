//! Per-tick input collection for terminal environments.
//!
//! Events arrive between ticks; [`InputCollector::next_tick`] turns everything
//! seen since the previous tick into one [`Inputs`] snapshot. Supports terminals
//! that do not emit key release events by using a timeout on held arrows.

use std::time::Instant;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

use crate::map::{arrow_index, map_key_event, Mapped};
use crate::types::{Inputs, MOUSE_LEFT, MOUSE_RIGHT};

// Without release events, a tap must not leave an arrow held forever. Key repeat
// refreshes the timestamp well within this window.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Accumulates terminal events into the next tick's [`Inputs`].
#[derive(Debug, Clone)]
pub struct InputCollector {
    pending: Inputs,
    arrow_held: [bool; 4],
    arrow_last_seen: [Instant; 4],
    key_release_timeout_ms: u32,
    /// Pointer units per terminal column and row
    cell_width: i32,
    cell_height: i32,
}

impl InputCollector {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            pending: Inputs::new(),
            arrow_held: [false; 4],
            arrow_last_seen: [now; 4],
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
            cell_width: 1,
            cell_height: 1,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    /// Scale terminal cells to pointer units; the pointer sits at the cell centre.
    pub fn with_cell_size(mut self, width: i32, height: i32) -> Self {
        self.cell_width = width.max(1);
        self.cell_height = height.max(1);
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Key(key) => match key.kind {
                KeyEventKind::Press | KeyEventKind::Repeat => self.handle_key_press(*key),
                KeyEventKind::Release => self.handle_key_release(key.code),
            },
            Event::Mouse(mouse) => self.handle_mouse(*mouse),
            _ => {}
        }
    }

    pub fn handle_key_press(&mut self, key: KeyEvent) {
        if let Some(i) = arrow_index(key.code) {
            self.arrow_held[i] = true;
            self.arrow_last_seen[i] = Instant::now();
        }
        if key.kind == KeyEventKind::Repeat {
            return;
        }
        match map_key_event(key) {
            Some(Mapped::Char(c)) => {
                let _ = self.pending.pressed_chars.try_push(c);
            }
            Some(Mapped::Key(k)) => {
                let _ = self.pending.pressed_keys.try_push(k);
            }
            None => {}
        }
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        if let Some(i) = arrow_index(code) {
            self.arrow_held[i] = false;
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        self.pending.cursor_x = i32::from(mouse.column) * self.cell_width + self.cell_width / 2;
        self.pending.cursor_y = i32::from(mouse.row) * self.cell_height + self.cell_height / 2;

        let (button, down) = match mouse.kind {
            MouseEventKind::Down(b) => (b, true),
            MouseEventKind::Up(b) => (b, false),
            _ => return,
        };
        let index = match button {
            MouseButton::Left => MOUSE_LEFT,
            MouseButton::Right => MOUSE_RIGHT,
            MouseButton::Middle => return,
        };
        let state = &mut self.pending.mouse_buttons[index];
        if down {
            state.pressed = true;
            state.down = true;
        } else {
            state.released = true;
            state.down = false;
        }
    }

    /// Produce this tick's snapshot and start collecting the next one.
    pub fn next_tick(&mut self) -> Inputs {
        self.release_stale_arrows(Instant::now());
        for (timer, &held) in self.pending.arrow_timers.iter_mut().zip(&self.arrow_held) {
            *timer = if held { timer.saturating_add(1) } else { 0 };
        }
        let out = self.pending.clone();
        self.pending.clear_edges();
        out
    }

    fn release_stale_arrows(&mut self, now: Instant) {
        for (held, seen) in self.arrow_held.iter_mut().zip(&self.arrow_last_seen) {
            let since = now.saturating_duration_since(*seen).as_millis() as u32;
            if *held && since > self.key_release_timeout_ms {
                *held = false;
            }
        }
    }

    pub fn reset(&mut self) {
        self.pending = Inputs::new();
        self.arrow_held = [false; 4];
        self.arrow_last_seen = [Instant::now(); 4];
    }
}

impl Default for InputCollector {
    fn default() -> Self {
        Self::new()
    }
}

//! Tween primitive and animated values
//!
//! A [`Tween`] counts ticks from 0 up to its length. When it reaches the end it
//! resets to `(0, 0)`, so a finished tween always has `len == 0`.
//! [`Animated`] pairs a tween with a previous and current value of any `Copy`
//! payload; the previous value catches up with the current one when the tween
//! completes.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Tween {
    pos: i32,
    len: i32,
}

impl Tween {
    pub fn new(len: i32) -> Self {
        Self {
            pos: 0,
            len: len.max(0),
        }
    }

    pub fn pos(&self) -> i32 {
        self.pos
    }

    pub fn len(&self) -> i32 {
        self.len
    }

    pub fn is_running(&self) -> bool {
        self.len > 0
    }

    /// Restart from the beginning with a new length.
    pub fn restart(&mut self, len: i32) {
        *self = Self::new(len);
    }

    /// Reverse direction mid-flight: position becomes `len - pos`.
    /// A finished tween restarts with `len` instead.
    pub fn mirror_or_restart(&mut self, len: i32) {
        if self.is_running() {
            self.pos = self.len - self.pos;
        } else {
            self.restart(len);
        }
    }

    /// Advance one tick. Returns true on the tick the tween completes.
    pub fn step(&mut self) -> bool {
        if self.pos < self.len {
            self.pos += 1;
            if self.pos >= self.len {
                self.pos = 0;
                self.len = 0;
                return true;
            }
        }
        false
    }

    /// Progress in `[0, 1]`, or `None` when finished.
    pub fn progress(&self) -> Option<f32> {
        if self.len > 0 {
            Some(self.pos as f32 / self.len as f32)
        } else {
            None
        }
    }
}

/// A value moving from `prev` to `cur` over a tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Animated<T: Copy> {
    pub prev: T,
    pub cur: T,
    pub tween: Tween,
}

impl<T: Copy> Animated<T> {
    /// Settled at `value`.
    pub fn new(value: T) -> Self {
        Self {
            prev: value,
            cur: value,
            tween: Tween::default(),
        }
    }

    /// Jump to `value` with no transition.
    pub fn snap(&mut self, value: T) {
        self.prev = value;
        self.cur = value;
        self.tween = Tween::default();
    }

    /// Transition from the current value to `value` over `len` ticks.
    pub fn animate_to(&mut self, value: T, len: i32) {
        self.prev = self.cur;
        self.cur = value;
        self.tween.restart(len);
        if !self.tween.is_running() {
            self.prev = value;
        }
    }

    pub fn is_running(&self) -> bool {
        self.tween.is_running()
    }

    /// Advance one tick. Returns true on the tick the transition completes.
    pub fn step(&mut self) -> bool {
        let done = self.tween.step();
        if done {
            self.prev = self.cur;
        }
        done
    }
}

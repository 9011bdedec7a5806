//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework beyond the
//! `crossterm` event types. It maps key and mouse events into the per-tick
//! [`crate::types::Inputs`] snapshot the simulation consumes, including
//! directional-hold counters on terminals without key-release events.

pub mod handler;
pub mod map;

pub use scrambles_types as types;

pub use handler::InputCollector;
pub use map::{map_key_event, should_quit, Mapped};

//! Scrambles (workspace facade crate).
//!
//! Re-exports the member crates as `scrambles::{core, input, types}` and adds the
//! pieces only the terminal binary needs: configuration, a text view and the
//! terminal renderer.

pub use scrambles_core as core;
pub use scrambles_input as input;
pub use scrambles_types as types;

pub mod config;
pub mod term;
pub mod view;

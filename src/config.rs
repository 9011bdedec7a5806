//! Runtime configuration for the `scrambles` binary.
//!
//! Defaults can be overridden through environment variables:
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `SCRAMBLES_WORDS` | word list path | `assets/all-words.txt` |
//! | `SCRAMBLES_PLAYERS` | comma-separated seat kinds (`human`, `easy`, `hard`, `none`) | `human,human,none,none` |
//! | `SCRAMBLES_TIME_LIMIT` | seconds per turn, `0` disables | `120` |
//! | `SCRAMBLES_VALIDATE` | check every formed word (`1`/`true`/`0`/`false`) | `true` |
//! | `SCRAMBLES_SEED` | RNG seed | wall clock in milliseconds |
//! | `SCRAMBLES_LOG` | log file path | logging off |
//!
//! Unparseable values fall back to the default.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

use crate::core::{RulesConfig, WordList};
use crate::types::{PlayerKind, MAX_PLAYERS, TICKS_PER_SECOND};

pub const DEFAULT_WORDS_PATH: &str = "assets/all-words.txt";
pub const DEFAULT_TIME_LIMIT_SECS: u32 = 120;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub words_path: PathBuf,
    pub players: [PlayerKind; MAX_PLAYERS],
    pub time_limit_secs: u32,
    pub validate_every_word: bool,
    pub seed: u64,
    pub log_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            words_path: PathBuf::from(DEFAULT_WORDS_PATH),
            players: [
                PlayerKind::Human,
                PlayerKind::Human,
                PlayerKind::Inactive,
                PlayerKind::Inactive,
            ],
            time_limit_secs: DEFAULT_TIME_LIMIT_SECS,
            validate_every_word: true,
            seed: clock_seed(),
            log_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            get(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let words_path = non_empty("SCRAMBLES_WORDS")
            .map(PathBuf::from)
            .unwrap_or(defaults.words_path);
        let players = non_empty("SCRAMBLES_PLAYERS")
            .and_then(|s| parse_players(&s))
            .unwrap_or(defaults.players);
        let time_limit_secs = non_empty("SCRAMBLES_TIME_LIMIT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.time_limit_secs);
        let validate_every_word = non_empty("SCRAMBLES_VALIDATE")
            .and_then(|s| parse_bool(&s))
            .unwrap_or(defaults.validate_every_word);
        let seed = non_empty("SCRAMBLES_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.seed);
        let log_path = non_empty("SCRAMBLES_LOG").map(PathBuf::from);

        Self {
            words_path,
            players,
            time_limit_secs,
            validate_every_word,
            seed,
            log_path,
        }
    }

    pub fn rules(&self) -> RulesConfig {
        RulesConfig {
            validate_every_word: self.validate_every_word,
            turn_time_limit_ticks: self.time_limit_secs.saturating_mul(TICKS_PER_SECOND),
        }
    }
}

/// Up to four seat kinds; missing seats are inactive. Any unknown token rejects the list.
fn parse_players(s: &str) -> Option<[PlayerKind; MAX_PLAYERS]> {
    let mut out = [PlayerKind::Inactive; MAX_PLAYERS];
    for (i, token) in s.split(',').enumerate() {
        if i >= MAX_PLAYERS {
            return None;
        }
        out[i] = PlayerKind::from_str(token)?;
    }
    Some(out)
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Read a newline-separated word list.
pub fn load_word_list(path: &Path) -> Result<WordList> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;
    Ok(WordList::from_lines(text.lines()))
}

//! Keyboard input routing and word matching
//!
//! The host delivers pre-filtered key events between ticks; everything here
//! runs to completion before the next tick, so no partial update is ever
//! observable across a tick boundary.

use super::state::{GamePhase, GameState};
use crate::consts::INPUT_DEAD_END;

/// A key event the game consumes. Everything else is ignored at the
/// keyboard boundary and keeps its default browser handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A single letter, lowercased before matching
    Letter(char),
    Backspace,
}

impl Key {
    /// Map a DOM `KeyboardEvent::key` value to a game key. Only single
    /// ASCII letters and Backspace are consumed.
    pub fn parse(key: &str) -> Option<Key> {
        if key == "Backspace" {
            return Some(Key::Backspace);
        }
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => Some(Key::Letter(c)),
            _ => None,
        }
    }
}

/// Route one key event into the input buffer and the live asteroids.
/// Inactive outside the Running phase.
pub fn handle_key(state: &mut GameState, key: Key) {
    if state.phase != GamePhase::Running {
        return;
    }
    match key {
        Key::Backspace => {
            state.input.pop();
            if let Some(id) = state.target {
                // Shrink the target's typed prefix; drop the target if the
                // shortened buffer no longer leads into its word.
                let len = state.input.len();
                if let Some(a) = state.asteroids.iter_mut().find(|a| a.id == id) {
                    a.typed = len;
                    if !a.word.starts_with(state.input.as_str()) {
                        a.is_target = false;
                        state.target = None;
                    }
                } else {
                    state.target = None;
                }
            }
        }
        Key::Letter(c) => {
            let c = c.to_ascii_lowercase();
            if !c.is_ascii_lowercase() {
                return;
            }
            state.input.push(c);
            check_word_match(state);
        }
    }
}

/// Re-evaluate the buffer against the live asteroids.
///
/// Order matters: the current target is always tried first so a shared
/// prefix never steals the target mid-word. Only when the target is lost
/// (or was never set) does the scan fall back to the first prefix match in
/// insertion order - the sole tie-break rule when several words share a
/// prefix.
fn check_word_match(state: &mut GameState) {
    // Still typing the current target's word?
    if let Some(id) = state.target {
        let mut matched = false;
        let mut complete = false;
        if let Some(a) = state.asteroids.iter_mut().find(|a| a.id == id) {
            if a.word.starts_with(state.input.as_str()) {
                a.typed = state.input.len();
                matched = true;
                complete = state.input.len() == a.word.len();
            }
        }
        if matched {
            if complete {
                state.destroy_asteroid(id);
                state.input.clear();
            }
            return;
        }
    }

    // Target lost or never set: rescan from scratch.
    state.target = None;
    for a in &mut state.asteroids {
        a.is_target = false;
    }

    if let Some(idx) = state
        .asteroids
        .iter()
        .position(|a| a.word.starts_with(state.input.as_str()))
    {
        let a = &mut state.asteroids[idx];
        a.is_target = true;
        a.typed = state.input.len();
        let id = a.id;
        let complete = state.input.len() == a.word.len();
        state.target = Some(id);
        if complete {
            state.destroy_asteroid(id);
            state.input.clear();
        }
        return;
    }

    // Nothing matches. A short buffer stays put awaiting backspace; past
    // the dead-end limit it resets so input can't get permanently stuck.
    if state.input.len() > INPUT_DEAD_END {
        state.input.clear();
    }
}

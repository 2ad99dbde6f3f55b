//! Keyboard state for the user paddle

use serde::{Deserialize, Serialize};

/// Control keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowUp" | "Up" => Some(Key::Up),
            "ArrowDown" | "Down" => Some(Key::Down),
            _ => None,
        }
    }

    /// Map a legacy `KeyboardEvent.keyCode`
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            38 => Some(Key::Up),
            40 => Some(Key::Down),
            _ => None,
        }
    }

    /// Resolve by key name, falling back to the key code for hosts that
    /// report an empty or nonstandard name
    pub fn resolve(name: &str, code: u32) -> Option<Self> {
        Self::from_key_name(name).or_else(|| Self::from_key_code(code))
    }
}

/// Held-state of the up/down keys, sampled once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputTracker {
    pub move_up: bool,
    pub move_down: bool,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: Key, held: bool) {
        match key {
            Key::Up => self.move_up = held,
            Key::Down => self.move_down = held,
        }
    }

    /// Handle a key-down; returns `false` for keys the game ignores
    pub fn press(&mut self, name: &str, code: u32) -> bool {
        self.apply(name, code, true)
    }

    /// Handle a key-up; returns `false` for keys the game ignores
    pub fn release(&mut self, name: &str, code: u32) -> bool {
        self.apply(name, code, false)
    }

    fn apply(&mut self, name: &str, code: u32, held: bool) -> bool {
        match Key::resolve(name, code) {
            Some(key) => {
                self.set(key, held);
                true
            }
            None => false,
        }
    }
}

//! Keyboard input binding
//!
//! Key events arrive between frames and only ever touch the vertical intent.
//! The frame loop samples `tick_input()` once per frame.

use crate::sim::TickInput;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    /// Toggle idle/demo mode
    Idle,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" | "w" | "W" => Some(Key::Up),
            "ArrowDown" | "s" | "S" => Some(Key::Down),
            "i" | "I" => Some(Key::Idle),
            _ => None,
        }
    }
}

/// Latest keyboard state, written by event handlers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    /// -1 = up, 0 = hold, +1 = down
    pub vertical_intent: i8,
    pub idle_mode: bool,
}

impl InputState {
    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Up => self.vertical_intent = -1,
            Key::Down => self.vertical_intent = 1,
            Key::Idle => {
                self.idle_mode = !self.idle_mode;
                log::info!("Idle mode: {}", self.idle_mode);
            }
        }
    }

    /// Releasing either direction key stops the paddle, even if the other one
    /// is still held.
    pub fn key_up(&mut self, key: Key) {
        if matches!(key, Key::Up | Key::Down) {
            self.vertical_intent = 0;
        }
    }

    pub fn tick_input(&self) -> TickInput {
        TickInput {
            vertical_intent: self.vertical_intent,
            idle_mode: self.idle_mode,
        }
    }
}

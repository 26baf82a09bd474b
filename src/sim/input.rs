//! Keyboard/pointer input state
//!
//! Movement is level-triggered: the player reads which directions are held
//! every frame. Firing is edge-triggered: each press transition (or pointer
//! press) queues exactly one shot, which the next frame consumes.

use std::collections::HashSet;

/// Logical controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Up,
    Down,
    Left,
    Right,
    Fire,
}

/// Physical key bindings (arrows, WASD, space)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    W,
    A,
    S,
    D,
    Space,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value. Single characters are matched
    /// case-insensitively; anything unbound yields `None`.
    pub fn from_dom(key: &str) -> Option<Self> {
        let mut chars = key.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return match c.to_ascii_lowercase() {
                'w' => Some(Key::W),
                'a' => Some(Key::A),
                's' => Some(Key::S),
                'd' => Some(Key::D),
                ' ' => Some(Key::Space),
                _ => None,
            };
        }
        match key {
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowDown" => Some(Key::ArrowDown),
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            _ => None,
        }
    }

    pub fn control(self) -> Control {
        match self {
            Key::ArrowUp | Key::W => Control::Up,
            Key::ArrowDown | Key::S => Control::Down,
            Key::ArrowLeft | Key::A => Control::Left,
            Key::ArrowRight | Key::D => Control::Right,
            Key::Space => Control::Fire,
        }
    }
}

/// Snapshot of the controls for a single frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Fire currently held (restart trigger while game over)
    pub fire_held: bool,
    /// Shots requested since the previous frame
    pub shots: u32,
}

/// Held physical keys plus shots queued by press transitions
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<Key>,
    pending_shots: u32,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key-down event. Auto-repeat events for an already held key
    /// do not queue another shot.
    pub fn key_down(&mut self, key: &str) {
        let Some(key) = Key::from_dom(key) else {
            return;
        };
        let fresh = self.held.insert(key);
        if fresh && key.control() == Control::Fire {
            self.pending_shots += 1;
        }
    }

    pub fn key_up(&mut self, key: &str) {
        if let Some(key) = Key::from_dom(key) {
            self.held.remove(&key);
        }
    }

    /// A pointer press always queues one shot
    pub fn pointer_down(&mut self) {
        self.pending_shots += 1;
    }

    /// True while any binding of `control` is held
    pub fn is_held(&self, control: Control) -> bool {
        self.held.iter().any(|k| k.control() == control)
    }

    pub fn pending_shots(&self) -> u32 {
        self.pending_shots
    }

    /// Build this frame's snapshot and drain the shot queue
    pub fn take_tick_input(&mut self) -> TickInput {
        let input = TickInput {
            up: self.is_held(Control::Up),
            down: self.is_held(Control::Down),
            left: self.is_held(Control::Left),
            right: self.is_held(Control::Right),
            fire_held: self.is_held(Control::Fire),
            shots: self.pending_shots,
        };
        self.pending_shots = 0;
        input
    }

    /// Release everything (e.g. when the window loses focus)
    pub fn clear(&mut self) {
        self.held.clear();
        self.pending_shots = 0;
    }
}

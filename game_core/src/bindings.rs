//! Keyboard bindings

use std::collections::HashMap;

use crate::Side;

/// A discrete key press reported by the frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    S,
    Up,
    Down,
    T,
    /// Any other printable key. Never holds w, s or t in either case;
    /// `Key::from_char` and the bindings fold those into the named keys.
    Other(char),
}

impl Key {
    /// Map a host key name ("w", "ArrowUp", "Down", ...) to a key
    pub fn from_name(name: &str) -> Option<Key> {
        match name {
            "Up" | "ArrowUp" => Some(Key::Up),
            "Down" | "ArrowDown" => Some(Key::Down),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(Key::from_char(c)),
                    _ => None,
                }
            }
        }
    }

    pub fn from_char(c: char) -> Key {
        match c {
            'w' | 'W' => Key::W,
            's' | 'S' => Key::S,
            't' | 'T' => Key::T,
            _ => Key::Other(c),
        }
    }

    /// Fold a hand-built `Other('w')` and friends into the named key
    pub fn normalize(self) -> Key {
        match self {
            Key::Other(c) => Key::from_char(c),
            key => key,
        }
    }
}

/// What a bound key does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    PaddleUp(Side),
    PaddleDown(Side),
    /// Log both paddles' collision borders
    ReportBorders,
}

#[derive(Debug, Clone)]
pub struct KeyBindings {
    map: HashMap<Key, Action>,
}

impl KeyBindings {
    pub fn empty() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Bind `key`, returning the action it replaced
    pub fn bind(&mut self, key: Key, action: Action) -> Option<Action> {
        self.map.insert(key.normalize(), action)
    }

    pub fn unbind(&mut self, key: Key) -> Option<Action> {
        self.map.remove(&key.normalize())
    }

    pub fn action(&self, key: Key) -> Option<Action> {
        self.map.get(&key.normalize()).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for KeyBindings {
    /// w/s drive the left paddle, the arrow keys drive the right one
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings.bind(Key::W, Action::PaddleUp(Side::Left));
        bindings.bind(Key::S, Action::PaddleDown(Side::Left));
        bindings.bind(Key::Up, Action::PaddleUp(Side::Right));
        bindings.bind(Key::Down, Action::PaddleDown(Side::Right));
        bindings.bind(Key::T, Action::ReportBorders);
        bindings
    }
}

#![no_std]

//! # Input Types
//!
//! This crate defines the input-side types for the Draftpad editing engine.
//!
//! ## Philosophy
//!
//! - **Counters, not streams**: held keys are represented as per-key
//!   hold-duration counters advanced once per tick, not as event streams
//! - **Explicit, not ambient**: the hold map is a plain value owned by the
//!   caller; there is no global keyboard state
//! - **Testable**: all types are serializable and can be constructed directly
//!   in tests
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - Raw hardware scan codes (PS/2, USB HID)
//! - A windowing or event system (hosts feed presses and releases in)
//! - Repeat-timing policy (that lives with the scheduler that consumes
//!   the counters)

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Key code
///
/// Logical key identifiers, not hardware scan codes. Only the keys the
/// editing engine reacts to are listed; anything else a host sees should be
/// reported as `Unknown` (which never resolves to an action).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    // Letters
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,

    // Digits
    Num0,
    Num1,
    Num2,
    Num3,
    Num4,
    Num5,
    Num6,
    Num7,
    Num8,
    Num9,

    // Punctuation and symbols
    Minus,
    Equal,
    LeftBracket,
    RightBracket,
    Backslash,
    Semicolon,
    Quote,
    Comma,
    Period,
    Slash,
    Grave,

    // Whitespace and control
    Space,
    Tab,
    Enter,
    Backspace,

    // Arrow keys
    Left,
    Right,
    Up,
    Down,

    // Unknown/unmapped key
    Unknown,
}

impl KeyCode {
    /// Edit-channel keys in tie-break priority order.
    ///
    /// When several edit keys are due to fire on the same tick with equal
    /// hold counters, the one listed earliest here wins. The order follows
    /// the ASCII codes of the unshifted characters, with Tab, Enter and
    /// Backspace last; it is part of the engine's observable contract and
    /// is covered by scheduler tests.
    pub const EDIT_KEYS: &'static [KeyCode] = &[
        KeyCode::Space,
        KeyCode::Quote,
        KeyCode::Comma,
        KeyCode::Minus,
        KeyCode::Period,
        KeyCode::Slash,
        KeyCode::Num0,
        KeyCode::Num1,
        KeyCode::Num2,
        KeyCode::Num3,
        KeyCode::Num4,
        KeyCode::Num5,
        KeyCode::Num6,
        KeyCode::Num7,
        KeyCode::Num8,
        KeyCode::Num9,
        KeyCode::Semicolon,
        KeyCode::Equal,
        KeyCode::LeftBracket,
        KeyCode::Backslash,
        KeyCode::RightBracket,
        KeyCode::Grave,
        KeyCode::A,
        KeyCode::B,
        KeyCode::C,
        KeyCode::D,
        KeyCode::E,
        KeyCode::F,
        KeyCode::G,
        KeyCode::H,
        KeyCode::I,
        KeyCode::J,
        KeyCode::K,
        KeyCode::L,
        KeyCode::M,
        KeyCode::N,
        KeyCode::O,
        KeyCode::P,
        KeyCode::Q,
        KeyCode::R,
        KeyCode::S,
        KeyCode::T,
        KeyCode::U,
        KeyCode::V,
        KeyCode::W,
        KeyCode::X,
        KeyCode::Y,
        KeyCode::Z,
        KeyCode::Tab,
        KeyCode::Enter,
        KeyCode::Backspace,
    ];

    /// Returns true for the four arrow keys
    pub fn is_directional(&self) -> bool {
        matches!(
            self,
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down
        )
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Modifier keys
///
/// Bitflags representing the modifier state sampled once per tick.
/// Caps-lock is carried here as a latched flag rather than a held key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifiers {
    bits: u8,
}

impl Modifiers {
    /// No modifiers
    pub const NONE: Self = Self { bits: 0 };
    /// Shift key held
    pub const SHIFT: Self = Self { bits: 1 << 0 };
    /// Caps-lock latched on
    pub const CAPS_LOCK: Self = Self { bits: 1 << 1 };

    /// Creates a new modifier set with no modifiers
    pub fn none() -> Self {
        Self::NONE
    }

    /// Creates a new modifier set from bits
    pub fn from_bits(bits: u8) -> Self {
        Self { bits }
    }

    /// Returns the raw bits
    pub fn bits(&self) -> u8 {
        self.bits
    }

    /// Adds a modifier
    pub fn with(mut self, other: Modifiers) -> Self {
        self.bits |= other.bits;
        self
    }

    /// Checks if a modifier is present
    pub fn contains(&self, other: Modifiers) -> bool {
        (self.bits & other.bits) == other.bits
    }

    /// Checks if Shift is held
    pub fn is_shift(&self) -> bool {
        self.contains(Self::SHIFT)
    }

    /// Checks if Caps-lock is latched
    pub fn is_caps_lock(&self) -> bool {
        self.contains(Self::CAPS_LOCK)
    }

    /// Returns true if no modifiers are active
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }

        let mut parts = Vec::new();
        if self.is_shift() {
            parts.push("Shift");
        }
        if self.is_caps_lock() {
            parts.push("CapsLock");
        }
        write!(f, "{}", parts.join("+"))
    }
}

/// Per-key hold-duration counters
///
/// Maps each key to the number of consecutive ticks it has been held.
/// 0 (absent) means released; a fresh press starts at 1; `advance` bumps
/// every held key once per tick. The map is an explicit value owned by the
/// session driving it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyHolds {
    held: BTreeMap<KeyCode, u32>,
}

impl KeyHolds {
    /// Creates an empty hold map (no keys held)
    pub fn new() -> Self {
        Self {
            held: BTreeMap::new(),
        }
    }

    /// Records a key press.
    ///
    /// A press for a key that is already held is ignored: auto-repeat is
    /// derived from the hold duration, not from repeated press events.
    pub fn press(&mut self, key: KeyCode) {
        self.held.entry(key).or_insert(1);
    }

    /// Records a key release, resetting its counter to 0
    pub fn release(&mut self, key: KeyCode) {
        self.held.remove(&key);
    }

    /// Increments every held key's counter by one tick
    pub fn advance(&mut self) {
        for counter in self.held.values_mut() {
            *counter += 1;
        }
    }

    /// Returns the hold counter for a key (0 = released)
    pub fn counter(&self, key: KeyCode) -> u32 {
        self.held.get(&key).copied().unwrap_or(0)
    }

    /// Returns true if the key is currently held
    pub fn is_held(&self, key: KeyCode) -> bool {
        self.counter(key) > 0
    }

    /// Returns true if no key is held
    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    /// Iterates over held keys and their counters in key order
    pub fn iter(&self) -> impl Iterator<Item = (KeyCode, u32)> + '_ {
        self.held.iter().map(|(key, counter)| (*key, *counter))
    }
}

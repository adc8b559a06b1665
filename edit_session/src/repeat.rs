//! Key-repeat timing and per-tick channel resolution
//!
//! Raw input arrives as per-key hold-duration counters. This module decides
//! which keys produce an action on the current tick: every directional key
//! is evaluated independently (several may move the cursor in one tick),
//! while the edit channel admits at most one winner per tick.

use document_core::Direction;
use input_types::{KeyCode, KeyHolds};

/// Ticks a key must be held before auto-repeat begins
pub const INITIAL_DELAY: u32 = 30;

/// Ticks between repeats once auto-repeat has begun
pub const REPEAT_INTERVAL: u32 = 2;

/// Movement keys in the order they are applied each tick
pub const MOVEMENT_ORDER: [(KeyCode, Direction); 4] = [
    (KeyCode::Left, Direction::Left),
    (KeyCode::Right, Direction::Right),
    (KeyCode::Up, Direction::Up),
    (KeyCode::Down, Direction::Down),
];

/// Repeat predicate over a hold counter.
///
/// A key fires on the tick it is first pressed (counter 1), then again once
/// the counter reaches `INITIAL_DELAY` and every `REPEAT_INTERVAL` ticks
/// after that. A released key (counter 0) never fires.
pub fn fires(counter: u32) -> bool {
    if counter == 1 {
        return true;
    }
    counter >= INITIAL_DELAY && (counter - INITIAL_DELAY) % REPEAT_INTERVAL == 0
}

/// Resolves the movement channel: every directional key due to fire this
/// tick, in application order.
pub fn movement(holds: &KeyHolds) -> Vec<Direction> {
    MOVEMENT_ORDER
        .iter()
        .filter(|(key, _)| fires(holds.counter(*key)))
        .map(|(_, direction)| *direction)
        .collect()
}

/// Resolves the edit channel: the single non-directional key that wins this
/// tick, if any.
///
/// Among the keys due to fire, the smallest positive counter wins — the key
/// most recently pressed. Equal counters break by the fixed priority order
/// of [`KeyCode::EDIT_KEYS`], earlier entry first.
pub fn winning_edit_key(holds: &KeyHolds) -> Option<KeyCode> {
    let mut best: Option<(KeyCode, u32)> = None;
    for &key in KeyCode::EDIT_KEYS {
        let counter = holds.counter(key);
        if counter == 0 || !fires(counter) {
            continue;
        }
        match best {
            Some((_, held)) if held <= counter => {}
            _ => best = Some((key, counter)),
        }
    }
    best.map(|(key, _)| key)
}

//! # Edit Session
//!
//! The tick-driven orchestration layer of the Draftpad editing engine.
//!
//! ## Philosophy
//!
//! - **Deterministic**: each tick runs Advance -> Sample -> Resolve -> Apply
//!   to completion; the same press/release trace produces the same document
//! - **Explicit state**: hold counters live in a value owned by the session,
//!   never in a global
//! - **No failure modes**: translation and scheduling degrade to "nothing
//!   happens"; a missing initial file degrades to an empty document with an
//!   observable status
//!
//! ## Design
//!
//! - `repeat`: the key-repeat predicate and per-tick channel resolution
//! - `keymap`: stateless (key, modifiers) -> edit action translation
//! - `load`: initial document loading from a path
//! - `session`: the per-tick pipeline gluing the above to a `TextBuffer`

pub mod keymap;
pub mod load;
pub mod repeat;
pub mod session;

pub use keymap::{resolve, EditAction, TAB_WIDTH};
pub use load::{load_document, LoadError, LoadedDocument};
pub use repeat::{fires, movement, winning_edit_key, INITIAL_DELAY, REPEAT_INTERVAL};
pub use session::{EditSession, TickReport};

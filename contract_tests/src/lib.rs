//! # Engine Contract Tests
//!
//! This crate provides "golden" tests for the editing engine's observable
//! contracts to ensure they don't drift accidentally over time.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: timing constants, tie-break order and wire
//!   encodings are written down as code
//! - **Testability first**: contract tests fail when observable behavior
//!   changes
//! - **Whole-engine scenarios**: the per-crate unit tests cover components
//!   in isolation; these tests drive full sessions across crate boundaries
//!
//! ## Structure
//!
//! - `timing`: the repeat-policy contract (constants and fire pattern)
//! - `scenarios`: end-to-end editing sessions over several ticks
//! - `encoding`: stable serde encodings of the input and report types

pub mod encoding;
pub mod scenarios;
pub mod timing;

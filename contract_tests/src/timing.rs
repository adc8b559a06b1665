//! Repeat-policy contract
//!
//! The repeat timing is part of the engine's observable feel; these tests
//! pin the constants and the exact fire pattern so neither drifts.

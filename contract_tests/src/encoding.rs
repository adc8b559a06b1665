//! Stable serde encodings
//!
//! Hosts that persist traces or ship events across a process boundary rely
//! on these encodings; the golden strings here pin them down.

//! End-to-end editing scenarios
//!
//! Each test drives a full session through press/release edges and ticks,
//! then checks the document and cursor the way a rendering host would see
//! them.

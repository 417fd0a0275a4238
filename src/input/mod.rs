//! Terminal input module.
//!
//! Maps `crossterm` key events into direction changes and the quit request.
//! This is the defensive input boundary: anything that is not one of the four
//! directions (or quit) maps to `None` and never reaches the core.

pub mod map;

pub use map::{handle_key_event, should_quit};

//! Terminal snake.
//!
//! The crate splits into a pure simulation core and thin terminal layers:
//!
//! - [`core`]: grid, snake, food, and the tick state machine (no I/O)
//! - [`input`]: crossterm key events mapped to direction changes
//! - [`term`]: framebuffer, game view, and terminal backend
//! - [`types`]: shared constants and value types

pub mod core;
pub mod input;
pub mod term;
pub mod types;

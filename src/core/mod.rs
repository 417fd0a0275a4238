//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules and state management. It has zero
//! dependencies on UI, timers, or I/O, making it:
//!
//! - **Deterministic**: the same seed replays the identical game
//! - **Testable**: every rule is exercised without a terminal
//! - **Fast**: fixed-capacity storage, no allocation on the tick path
//!
//! # Module Structure
//!
//! - [`grid`]: play-field geometry and random cell selection
//! - [`rng`]: seeded LCG random source
//! - [`snake`]: ordered cell sequence with grow/shrink operations
//! - [`food`]: the food cell and its relocation
//! - [`game_state`]: the tick state machine (movement, eating, collisions)
//! - [`snapshot`]: plain-data per-tick output for observers
//!
//! # Example
//!
//! ```
//! use tui_snake::core::{GameState, TickOutcome};
//! use tui_snake::types::Direction;
//!
//! let mut game = GameState::new(12345);
//! game.change_direction(Direction::Right);
//!
//! match game.tick() {
//!     TickOutcome::GameOver => {}
//!     _ => assert!(!game.game_over()),
//! }
//! ```

pub mod food;
pub mod game_state;
pub mod grid;
pub mod rng;
pub mod snake;
pub mod snapshot;

// Re-export commonly used types for convenience
pub use food::Food;
pub use game_state::{detect_collision, GameState, TickOutcome};
pub use rng::SimpleRng;
pub use snake::{Snake, SNAKE_MAX_CELLS};
pub use snapshot::GameSnapshot;

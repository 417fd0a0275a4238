//! Plain-data view of the game state for observers.
//!
//! The core never calls into rendering code; each tick the host copies the
//! state into a `GameSnapshot` and hands that to whatever wants to draw it.

use arrayvec::ArrayVec;

use crate::core::snake::SNAKE_MAX_CELLS;
use crate::types::{Cell, Direction};

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Snake cells, head first.
    pub snake: ArrayVec<Cell, SNAKE_MAX_CELLS>,
    /// Current food cell.
    pub food: Cell,
    /// Score (1 per food eaten).
    pub score: u32,
    /// Direction the snake is currently heading.
    pub direction: Direction,
    /// Terminal flag; once true the state is frozen.
    pub game_over: bool,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            snake: ArrayVec::new(),
            food: Cell::new(0, 0),
            score: 0,
            direction: Direction::Down,
            game_over: false,
        }
    }
}

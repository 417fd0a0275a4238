//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, tests).
//!
//! # Play field
//!
//! The field is a fixed pixel-style plane subdivided into square cells:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GAME_WIDTH` | 700 | Field width |
//! | `GAME_HEIGHT` | 700 | Field height |
//! | `CELL_SIZE` | 50 | Side of one grid cell |
//! | `TICK_MS` | 100 | Fixed simulation interval |
//! | `INITIAL_BODY_PARTS` | 3 | Snake length at game start |
//!
//! Cell coordinates are always integer multiples of `CELL_SIZE` within
//! `[0, GAME_WIDTH) x [0, GAME_HEIGHT)`, so the field holds 14x14 cells.
//!
//! # Examples
//!
//! ```
//! use tui_snake::types::{Cell, Direction};
//!
//! let head = Cell::new(100, 150);
//! let next = head.step(Direction::Right);
//! assert_eq!(next, Cell::new(150, 150));
//!
//! assert_eq!(Direction::Up.opposite(), Direction::Down);
//! assert_eq!(Direction::from_str("left"), Some(Direction::Left));
//! ```

/// Field width (14 cells of 50)
pub const GAME_WIDTH: i32 = 700;

/// Field height (14 cells of 50)
pub const GAME_HEIGHT: i32 = 700;

/// Side length of one grid cell
pub const CELL_SIZE: i32 = 50;

/// Fixed simulation interval in milliseconds (one snake step per tick)
pub const TICK_MS: u64 = 100;

/// Snake length at game start (all segments stacked on the origin)
pub const INITIAL_BODY_PARTS: usize = 3;

/// Number of cell columns on the field
pub const GRID_COLS: i32 = GAME_WIDTH / CELL_SIZE;

/// Number of cell rows on the field
pub const GRID_ROWS: i32 = GAME_HEIGHT / CELL_SIZE;

/// Total number of cells on the field
pub const GRID_CELLS: usize = (GRID_COLS * GRID_ROWS) as usize;

// The grid only works if the field divides evenly into cells.
const _: () = assert!(GAME_WIDTH % CELL_SIZE == 0);
const _: () = assert!(GAME_HEIGHT % CELL_SIZE == 0);
const _: () = assert!(CELL_SIZE > 0);

/// One grid-aligned position on the field.
///
/// Coordinates are multiples of [`CELL_SIZE`]; `(0, 0)` is the top-left
/// corner, `x` grows rightwards and `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighboring cell one step away in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x + dx * CELL_SIZE,
            y: self.y + dy * CELL_SIZE,
        }
    }
}

/// The four movement directions. No diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit cell offset `(dx, dy)` for this direction.
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The reverse direction (the one the snake may never turn into).
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake::types::Direction;
    ///
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// assert_eq!(Direction::Down.opposite(), Direction::Up);
    /// ```
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Parse direction from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Core-side event emitted after a tick (consumed by observers).
///
/// Observers use this to update the score label and show the end screen
/// without the core calling into rendering code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickEvent {
    /// The head landed on the food cell this tick.
    pub ate: bool,
    /// Score after the tick.
    pub score: u32,
    /// The tick ended the game.
    pub game_over: bool,
}

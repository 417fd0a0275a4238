//! Snake module - the ordered cell sequence
//!
//! The snake is a passive container: head at index 0, tail last. It knows how
//! to grow at the head and shed its tail, nothing else. Movement validity and
//! collisions are the game loop's business.
//!
//! Storage is a fixed-capacity array: the snake can never occupy more cells
//! than the grid holds, so the tick hot path never allocates.

use arrayvec::ArrayVec;

use crate::types::{Cell, GRID_CELLS, INITIAL_BODY_PARTS};

/// Capacity for the cell sequence.
///
/// One above the grid size: `advance` runs before `shrink` within a tick, so
/// the sequence is transiently one longer than the cells it covers.
pub const SNAKE_MAX_CELLS: usize = GRID_CELLS + 1;

/// Ordered sequence of occupied cells, head first.
///
/// Invariant: length >= 1. Duplicate cells can exist transiently (all initial
/// segments stack on the origin; a self-overlapping head survives for the
/// game-over tick) - detecting the overlap is the collision check's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    cells: ArrayVec<Cell, SNAKE_MAX_CELLS>,
}

impl Snake {
    /// Create the starting snake: [`INITIAL_BODY_PARTS`] segments, all at the
    /// origin.
    pub fn new() -> Self {
        let mut cells = ArrayVec::new();
        for _ in 0..INITIAL_BODY_PARTS {
            cells.push(Cell::new(0, 0));
        }
        Self { cells }
    }

    /// Prepend a new head cell.
    ///
    /// Always succeeds; the caller computes `new_head` one cell-size step from
    /// the current head, so no adjacency check happens here.
    pub fn advance(&mut self, new_head: Cell) {
        self.cells.insert(0, new_head);
    }

    /// Remove the tail cell.
    ///
    /// Called every tick except when food was eaten.
    pub fn shrink(&mut self) {
        self.cells.pop();
    }

    /// The head cell (index 0).
    pub fn head(&self) -> Cell {
        self.cells[0]
    }

    /// All cells except the head, for self-collision checks.
    pub fn body(&self) -> &[Cell] {
        &self.cells[1..]
    }

    /// The full cell sequence, head first.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[cfg(test)]
    pub fn set_cells(&mut self, cells: &[Cell]) {
        self.cells.clear();
        self.cells.try_extend_from_slice(cells).unwrap();
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_snake_stacks_on_origin() {
        let snake = Snake::new();
        assert_eq!(snake.len(), INITIAL_BODY_PARTS);
        assert!(snake.cells().iter().all(|&c| c == Cell::new(0, 0)));
        assert_eq!(snake.head(), Cell::new(0, 0));
    }

    #[test]
    fn test_advance_prepends_head() {
        let mut snake = Snake::new();
        snake.advance(Cell::new(0, 50));

        assert_eq!(snake.len(), INITIAL_BODY_PARTS + 1);
        assert_eq!(snake.head(), Cell::new(0, 50));
        // Old head is now the first body cell.
        assert_eq!(snake.body()[0], Cell::new(0, 0));
    }

    #[test]
    fn test_shrink_drops_tail() {
        let mut snake = Snake::new();
        snake.advance(Cell::new(0, 50));
        snake.shrink();

        assert_eq!(snake.len(), INITIAL_BODY_PARTS);
        assert_eq!(snake.head(), Cell::new(0, 50));
    }

    #[test]
    fn test_body_excludes_head() {
        let mut snake = Snake::new();
        snake.set_cells(&[Cell::new(100, 100), Cell::new(100, 150), Cell::new(100, 200)]);

        assert_eq!(snake.body(), &[Cell::new(100, 150), Cell::new(100, 200)]);
    }

    #[test]
    fn test_advance_then_shrink_keeps_length() {
        let mut snake = Snake::new();
        let before = snake.len();
        snake.advance(Cell::new(50, 0));
        snake.shrink();
        assert_eq!(snake.len(), before);
    }
}

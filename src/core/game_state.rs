//! Game state module - the tick state machine
//!
//! Ties together snake, food, direction, and score. The host scheduler calls
//! [`GameState::tick`] once per fixed interval; everything in here is pure
//! state manipulation with no I/O and no timers.

use crate::core::food::Food;
use crate::core::rng::SimpleRng;
use crate::core::snake::Snake;
use crate::core::snapshot::GameSnapshot;
use crate::types::{Cell, Direction, TickEvent, GAME_HEIGHT, GAME_WIDTH};

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Normal move: head advanced, tail shed, length unchanged.
    Moved,
    /// Head landed on food: score and length grew by one.
    Ate,
    /// The tick hit a wall or the body; no further ticks will run.
    GameOver,
}

/// Complete game state owned by the loop.
///
/// States: running (`game_over == false`) and the terminal game-over state.
/// The terminal flag flips false to true exactly once and never resets.
#[derive(Debug, Clone)]
pub struct GameState {
    snake: Snake,
    food: Food,
    rng: SimpleRng,
    direction: Direction,
    score: u32,
    game_over: bool,
    /// Last tick's event (consumed by observers).
    last_event: Option<TickEvent>,
}

impl GameState {
    /// Create a new game with the given RNG seed.
    ///
    /// Initial direction is down, score 0, snake stacked on the origin.
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let food = Food::new(&mut rng);
        Self {
            snake: Snake::new(),
            food,
            rng,
            direction: Direction::Down,
            score: 0,
            game_over: false,
            last_event: None,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food_position(&self) -> Cell {
        self.food.position()
    }

    #[cfg(test)]
    pub fn food_mut(&mut self) -> &mut Food {
        &mut self.food
    }

    #[cfg(test)]
    pub fn snake_mut(&mut self) -> &mut Snake {
        &mut self.snake
    }

    /// Advance the simulation by one step.
    ///
    /// Order matters and is observable:
    /// 1. compute the new head from the current direction,
    /// 2. prepend it,
    /// 3. eat (score +1, relocate food) or shed the tail,
    /// 4. collision check on the post-advance head.
    ///
    /// The check runs after the overlapping move is already applied, so the
    /// final snapshot shows the head on the cell it collided with.
    ///
    /// Once the game is over this is a no-op; the state stays frozen.
    pub fn tick(&mut self) -> TickOutcome {
        if self.game_over {
            return TickOutcome::GameOver;
        }

        let new_head = self.snake.head().step(self.direction);
        self.snake.advance(new_head);

        let ate = new_head == self.food.position();
        if ate {
            self.score += 1;
            self.food.relocate(&mut self.rng);
        } else {
            self.snake.shrink();
        }

        if detect_collision(self.snake.cells(), GAME_WIDTH, GAME_HEIGHT) {
            self.game_over = true;
        }

        self.last_event = Some(TickEvent {
            ate,
            score: self.score,
            game_over: self.game_over,
        });

        if self.game_over {
            TickOutcome::GameOver
        } else if ate {
            TickOutcome::Ate
        } else {
            TickOutcome::Moved
        }
    }

    /// Request a direction change.
    ///
    /// Reversals (left<->right, up<->down) are silently ignored so the snake
    /// cannot be steered into its own neck. Requests between ticks overwrite
    /// each other; whatever is current when the next tick runs takes effect.
    pub fn change_direction(&mut self, requested: Direction) {
        if self.game_over {
            return;
        }
        if requested != self.direction.opposite() {
            self.direction = requested;
        }
    }

    /// Take and clear the last tick event.
    pub fn take_last_event(&mut self) -> Option<TickEvent> {
        self.last_event.take()
    }

    /// Copy the current state into a reusable snapshot buffer.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.snake.clear();
        out.snake
            .try_extend_from_slice(self.snake.cells())
            .expect("snapshot capacity matches snake capacity");
        out.food = self.food.position();
        out.score = self.score;
        out.direction = self.direction;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Pure collision predicate over a cell sequence (head first).
///
/// True iff the head is outside `[0, width) x [0, height)` or coincides with
/// any non-head cell. Deterministic; depends on nothing but its arguments.
pub fn detect_collision(cells: &[Cell], width: i32, height: i32) -> bool {
    let Some(&head) = cells.first() else {
        return false;
    };

    if head.x < 0 || head.x >= width || head.y < 0 || head.y >= height {
        return true;
    }

    cells[1..].iter().any(|&body| body == head)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CELL_SIZE, INITIAL_BODY_PARTS};

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert!(!state.game_over());
        assert_eq!(state.score(), 0);
        assert_eq!(state.direction(), Direction::Down);
        assert_eq!(state.snake().len(), INITIAL_BODY_PARTS);
        assert_eq!(state.snake().head(), Cell::new(0, 0));
    }

    #[test]
    fn test_first_tick_moves_down_and_keeps_length() {
        let mut state = GameState::new(12345);
        // Keep the food away from the path.
        state.food_mut().set_position(Cell::new(500, 500));

        let outcome = state.tick();

        assert_eq!(outcome, TickOutcome::Moved);
        assert_eq!(state.snake().head(), Cell::new(0, CELL_SIZE));
        assert_eq!(state.snake().len(), INITIAL_BODY_PARTS);
        assert_eq!(
            state.snake().cells(),
            &[Cell::new(0, 50), Cell::new(0, 0), Cell::new(0, 0)]
        );
    }

    #[test]
    fn test_eating_grows_scores_and_relocates() {
        let mut state = GameState::new(12345);
        state.food_mut().set_position(Cell::new(0, CELL_SIZE));

        let len_before = state.snake().len();
        let outcome = state.tick();

        assert_eq!(outcome, TickOutcome::Ate);
        assert_eq!(state.score(), 1);
        assert_eq!(state.snake().len(), len_before + 1);
        // relocate() was invoked; the new cell came from the RNG and may be
        // anywhere on the grid, including on the snake.
        assert!(crate::core::grid::in_bounds(state.food_position()));
    }

    #[test]
    fn test_miss_keeps_score_and_length() {
        let mut state = GameState::new(12345);
        state.food_mut().set_position(Cell::new(500, 500));

        for _ in 0..3 {
            state.tick();
        }

        assert_eq!(state.score(), 0);
        assert_eq!(state.snake().len(), INITIAL_BODY_PARTS);
    }

    #[test]
    fn test_wall_collision_at_right_edge() {
        let mut state = GameState::new(12345);
        state.food_mut().set_position(Cell::new(0, 0));
        state
            .snake_mut()
            .set_cells(&[Cell::new(650, 0), Cell::new(600, 0), Cell::new(550, 0)]);
        state.change_direction(Direction::Right);

        let outcome = state.tick();

        assert_eq!(outcome, TickOutcome::GameOver);
        assert!(state.game_over());
        // Post-advance ordering: the out-of-bounds head is in the data.
        assert_eq!(state.snake().head(), Cell::new(700, 0));
    }

    #[test]
    fn test_self_collision() {
        // A square path: head about to re-enter a body cell.
        let mut state = GameState::new(12345);
        state.food_mut().set_position(Cell::new(650, 650));
        state.snake_mut().set_cells(&[
            Cell::new(100, 100),
            Cell::new(150, 100),
            Cell::new(150, 150),
            Cell::new(100, 150),
            Cell::new(100, 100),
        ]);
        // Heading down from (100,100) into (100,150), which the body holds.
        state.change_direction(Direction::Down);

        let outcome = state.tick();

        assert_eq!(outcome, TickOutcome::GameOver);
        assert!(state.game_over());
    }

    #[test]
    fn test_reversal_is_silently_ignored() {
        let mut state = GameState::new(12345);
        assert_eq!(state.direction(), Direction::Down);

        state.change_direction(Direction::Up);
        assert_eq!(state.direction(), Direction::Down);

        state.change_direction(Direction::Left);
        assert_eq!(state.direction(), Direction::Left);

        state.change_direction(Direction::Right);
        assert_eq!(state.direction(), Direction::Left);
    }

    #[test]
    fn test_latest_direction_wins_between_ticks() {
        let mut state = GameState::new(12345);
        state.food_mut().set_position(Cell::new(500, 500));

        // Two requests before the tick; only the last accepted one applies.
        state.change_direction(Direction::Left);
        state.change_direction(Direction::Down);
        state.tick();

        assert_eq!(state.snake().head(), Cell::new(0, CELL_SIZE));
    }

    #[test]
    fn test_game_over_freezes_state() {
        let mut state = GameState::new(12345);
        state.food_mut().set_position(Cell::new(0, 0));
        state
            .snake_mut()
            .set_cells(&[Cell::new(650, 0), Cell::new(600, 0), Cell::new(550, 0)]);
        state.change_direction(Direction::Right);
        state.tick();
        assert!(state.game_over());

        let cells = state.snake().cells().to_vec();
        let score = state.score();

        assert_eq!(state.tick(), TickOutcome::GameOver);
        state.change_direction(Direction::Down);
        assert_eq!(state.tick(), TickOutcome::GameOver);

        assert_eq!(state.snake().cells(), cells.as_slice());
        assert_eq!(state.score(), score);
        assert_eq!(state.direction(), Direction::Right);
    }

    #[test]
    fn test_tick_event_reports_eat_and_game_over() {
        let mut state = GameState::new(12345);
        state.food_mut().set_position(Cell::new(0, CELL_SIZE));

        state.tick();
        let ev = state.take_last_event().unwrap();
        assert!(ev.ate);
        assert_eq!(ev.score, 1);
        assert!(!ev.game_over);

        // Event is consumed.
        assert!(state.take_last_event().is_none());

        state.food_mut().set_position(Cell::new(650, 650));
        state
            .snake_mut()
            .set_cells(&[Cell::new(0, 650), Cell::new(0, 600), Cell::new(0, 550)]);
        state.tick();
        let ev = state.take_last_event().unwrap();
        assert!(!ev.ate);
        assert!(ev.game_over);
    }

    #[test]
    fn test_detect_collision_out_of_bounds() {
        let body = [Cell::new(650, 0), Cell::new(600, 0)];

        assert!(!detect_collision(&body, GAME_WIDTH, GAME_HEIGHT));
        assert!(detect_collision(
            &[Cell::new(700, 0), Cell::new(650, 0)],
            GAME_WIDTH,
            GAME_HEIGHT
        ));
        assert!(detect_collision(
            &[Cell::new(-50, 0)],
            GAME_WIDTH,
            GAME_HEIGHT
        ));
        assert!(detect_collision(
            &[Cell::new(0, 700)],
            GAME_WIDTH,
            GAME_HEIGHT
        ));
        assert!(detect_collision(
            &[Cell::new(0, -50)],
            GAME_WIDTH,
            GAME_HEIGHT
        ));
    }

    #[test]
    fn test_detect_collision_self_overlap() {
        // Head duplicates a non-head cell.
        let cells = [Cell::new(100, 100), Cell::new(100, 150), Cell::new(100, 100)];
        assert!(detect_collision(&cells, GAME_WIDTH, GAME_HEIGHT));

        // Duplicates within the body alone do not count.
        let cells = [Cell::new(0, 50), Cell::new(0, 0), Cell::new(0, 0)];
        assert!(!detect_collision(&cells, GAME_WIDTH, GAME_HEIGHT));
    }

    #[test]
    fn test_same_seed_replays_identically() {
        let mut a = GameState::new(4242);
        let mut b = GameState::new(4242);

        let turns = [
            Direction::Right,
            Direction::Down,
            Direction::Left,
            Direction::Down,
            Direction::Right,
        ];
        for dir in turns {
            a.change_direction(dir);
            b.change_direction(dir);
            assert_eq!(a.tick(), b.tick());
            assert_eq!(a.snake().cells(), b.snake().cells());
            assert_eq!(a.food_position(), b.food_position());
            assert_eq!(a.score(), b.score());
        }
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut state = GameState::new(12345);
        state.food_mut().set_position(Cell::new(300, 300));
        state.tick();

        let snap = state.snapshot();
        assert_eq!(snap.snake.as_slice(), state.snake().cells());
        assert_eq!(snap.food, state.food_position());
        assert_eq!(snap.score, state.score());
        assert_eq!(snap.direction, state.direction());
        assert_eq!(snap.game_over, state.game_over());
    }
}

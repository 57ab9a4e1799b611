use crate::games::SessionRng;
use super::settings::{
    FOOD_REWARD, GRID_SIZE, INITIAL_FOOD_POSITION, INITIAL_HEADING, INITIAL_SNAKE_POSITION,
};
use super::snake::Snake;
use super::snapshot::GameSnapshot;
use super::types::{DeathReason, Direction, Point, RunState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    Ate { score: u32, next_food: Point },
    Collided(DeathReason),
    /// The run is already over; nothing changed.
    Idle,
}

/// Single-player snake simulation on a `GRID_SIZE` square grid.
///
/// `heading` is the direction the snake last moved in and is the only value
/// turn requests are validated against. A request lands in `pending_heading`
/// and takes effect on the next tick, so several key presses between two
/// ticks can never add up to a reversal.
#[derive(Clone, Debug)]
pub struct SnakeGameState {
    snake: Snake,
    food: Point,
    heading: Direction,
    pending_heading: Option<Direction>,
    score: u32,
    run_state: RunState,
    game_over_reason: Option<DeathReason>,
    tick: u64,
}

impl Default for SnakeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl SnakeGameState {
    pub fn new() -> Self {
        Self {
            snake: Snake::new(INITIAL_SNAKE_POSITION),
            food: INITIAL_FOOD_POSITION,
            heading: INITIAL_HEADING,
            pending_heading: None,
            score: 0,
            run_state: RunState::Running,
            game_over_reason: None,
            tick: 0,
        }
    }

    pub fn restart(&mut self) {
        *self = Self::new();
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Point {
        self.food
    }

    /// Direction the next tick will move in.
    pub fn heading(&self) -> Direction {
        self.pending_heading.unwrap_or(self.heading)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_game_over(&self) -> bool {
        self.run_state == RunState::GameOver
    }

    pub fn game_over_reason(&self) -> Option<DeathReason> {
        self.game_over_reason
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn set_heading(&mut self, requested: Direction) -> Result<(), String> {
        if self.is_game_over() {
            return Err("Game is over".to_string());
        }
        if requested.is_opposite(&self.heading) {
            return Err(format!("Cannot reverse from {} to {}", self.heading, requested));
        }
        self.pending_heading = Some(requested);
        Ok(())
    }

    pub fn advance(&mut self, rng: &mut SessionRng) -> TickOutcome {
        if self.is_game_over() {
            return TickOutcome::Idle;
        }

        let heading = self.heading();
        let next_head = match self.next_head_position(heading) {
            Ok(point) => point,
            Err(reason) => {
                self.run_state = RunState::GameOver;
                self.game_over_reason = Some(reason);
                return TickOutcome::Collided(reason);
            }
        };

        self.heading = heading;
        self.pending_heading = None;
        self.tick += 1;
        self.snake.push_head(next_head);

        if next_head == self.food {
            self.score += FOOD_REWARD;
            self.food = Self::random_food_position(rng);
            TickOutcome::Ate {
                score: self.score,
                next_food: self.food,
            }
        } else {
            self.snake.pop_tail();
            TickOutcome::Moved
        }
    }

    pub fn snapshot(&self, share_in_flight: bool) -> GameSnapshot {
        GameSnapshot {
            body: self.snake.cells().copied().collect(),
            food: self.food,
            heading: self.heading(),
            score: self.score,
            run_state: self.run_state,
            game_over_reason: self.game_over_reason,
            tick: self.tick,
            share_in_flight,
        }
    }

    /// The whole body counts, tail included: it has not moved yet when the
    /// check runs.
    fn next_head_position(&self, heading: Direction) -> Result<Point, DeathReason> {
        let head = self.snake.head();

        let next_head = match heading {
            Direction::Up => {
                if head.y == 0 {
                    return Err(DeathReason::WallCollision);
                }
                Point::new(head.x, head.y - 1)
            }
            Direction::Down => {
                if head.y + 1 >= GRID_SIZE {
                    return Err(DeathReason::WallCollision);
                }
                Point::new(head.x, head.y + 1)
            }
            Direction::Left => {
                if head.x == 0 {
                    return Err(DeathReason::WallCollision);
                }
                Point::new(head.x - 1, head.y)
            }
            Direction::Right => {
                if head.x + 1 >= GRID_SIZE {
                    return Err(DeathReason::WallCollision);
                }
                Point::new(head.x + 1, head.y)
            }
        };

        if self.snake.contains(&next_head) {
            return Err(DeathReason::SelfCollision);
        }

        Ok(next_head)
    }

    // Occupied cells are not excluded; food may land under the body.
    fn random_food_position(rng: &mut SessionRng) -> Point {
        let x = rng.random_range(0..GRID_SIZE);
        let y = rng.random_range(0..GRID_SIZE);
        Point::new(x, y)
    }

    #[cfg(test)]
    pub(crate) fn set_layout(&mut self, body: &[Point], food: Point, heading: Direction) {
        self.snake = Snake::from_cells(body).expect("test layout must be a valid snake");
        self.food = food;
        self.heading = heading;
        self.pending_heading = None;
    }

    #[cfg(test)]
    pub(crate) fn set_score(&mut self, score: u32) {
        self.score = score;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn body(state: &SnakeGameState) -> Vec<Point> {
        state.snake().cells().copied().collect()
    }

    #[test]
    fn test_initial_state() {
        let state = SnakeGameState::new();
        assert_eq!(body(&state), vec![Point::new(10, 10)]);
        assert_eq!(state.food(), Point::new(15, 15));
        assert_eq!(state.heading(), Direction::Right);
        assert_eq!(state.score(), 0);
        assert_eq!(state.run_state(), RunState::Running);
        assert_eq!(state.tick(), 0);
    }

    #[test]
    fn test_five_ticks_without_input_moves_right() {
        let mut rng = SessionRng::new(42);
        let mut state = SnakeGameState::new();

        for _ in 0..5 {
            assert_eq!(state.advance(&mut rng), TickOutcome::Moved);
        }

        assert_eq!(state.snake().head(), Point::new(15, 10));
        assert_eq!(state.snake().len(), 1);
        assert_eq!(state.score(), 0);
        assert_eq!(state.food(), Point::new(15, 15));
    }

    #[test]
    fn test_eating_food_grows_and_scores() {
        let mut rng = SessionRng::new(42);
        let mut state = SnakeGameState::new();
        state.set_layout(&[Point::new(15, 14)], Point::new(15, 15), Direction::Down);

        let outcome = state.advance(&mut rng);

        let TickOutcome::Ate { score, next_food } = outcome else {
            panic!("expected food to be eaten, got {:?}", outcome);
        };
        assert_eq!(score, 10);
        assert_eq!(state.score(), 10);
        assert_eq!(state.snake().len(), 2);
        assert_eq!(body(&state), vec![Point::new(15, 15), Point::new(15, 14)]);
        assert!(next_food.x < GRID_SIZE && next_food.y < GRID_SIZE);
        assert_eq!(state.food(), next_food);
    }

    #[test]
    fn test_reaching_food_from_start_position() {
        let mut rng = SessionRng::new(3);
        let mut state = SnakeGameState::new();

        for _ in 0..5 {
            state.advance(&mut rng);
        }
        state.set_heading(Direction::Down).unwrap();
        for _ in 0..4 {
            assert_eq!(state.advance(&mut rng), TickOutcome::Moved);
        }
        assert_eq!(state.snake().head(), Point::new(15, 14));

        assert!(matches!(state.advance(&mut rng), TickOutcome::Ate { score: 10, .. }));
        assert_eq!(state.snake().head(), Point::new(15, 15));
        assert_eq!(state.snake().len(), 2);
    }

    #[test]
    fn test_right_wall_collision_ends_game_without_moving() {
        let mut rng = SessionRng::new(42);
        let mut state = SnakeGameState::new();
        let layout = [Point::new(19, 10), Point::new(18, 10)];
        state.set_layout(&layout, Point::new(0, 0), Direction::Right);

        assert_eq!(
            state.advance(&mut rng),
            TickOutcome::Collided(DeathReason::WallCollision)
        );
        assert_eq!(state.run_state(), RunState::GameOver);
        assert_eq!(state.game_over_reason(), Some(DeathReason::WallCollision));
        assert_eq!(body(&state), layout.to_vec());
    }

    #[test]
    fn test_top_and_left_walls_collide() {
        let mut rng = SessionRng::new(42);

        let mut state = SnakeGameState::new();
        state.set_layout(&[Point::new(5, 0)], Point::new(0, 5), Direction::Up);
        assert_eq!(state.advance(&mut rng), TickOutcome::Collided(DeathReason::WallCollision));

        let mut state = SnakeGameState::new();
        state.set_layout(&[Point::new(0, 5)], Point::new(5, 0), Direction::Left);
        assert_eq!(state.advance(&mut rng), TickOutcome::Collided(DeathReason::WallCollision));

        let mut state = SnakeGameState::new();
        state.set_layout(&[Point::new(5, 19)], Point::new(0, 0), Direction::Down);
        assert_eq!(state.advance(&mut rng), TickOutcome::Collided(DeathReason::WallCollision));
    }

    #[test]
    fn test_self_collision_ends_game() {
        let mut rng = SessionRng::new(42);
        let mut state = SnakeGameState::new();
        // Head at (5,5) moving up into (5,4), which is part of the body.
        let layout = [
            Point::new(5, 5),
            Point::new(6, 5),
            Point::new(6, 4),
            Point::new(5, 4),
            Point::new(4, 4),
        ];
        state.set_layout(&layout, Point::new(0, 0), Direction::Left);
        state.set_heading(Direction::Up).unwrap();

        assert_eq!(
            state.advance(&mut rng),
            TickOutcome::Collided(DeathReason::SelfCollision)
        );
        assert!(state.is_game_over());
        assert_eq!(body(&state), layout.to_vec());
    }

    #[test]
    fn test_moving_into_current_tail_collides() {
        let mut rng = SessionRng::new(42);
        let mut state = SnakeGameState::new();
        let layout = [
            Point::new(5, 5),
            Point::new(5, 6),
            Point::new(4, 6),
            Point::new(4, 5),
        ];
        state.set_layout(&layout, Point::new(0, 0), Direction::Up);
        state.set_heading(Direction::Left).unwrap();

        assert_eq!(
            state.advance(&mut rng),
            TickOutcome::Collided(DeathReason::SelfCollision)
        );
    }

    #[test]
    fn test_game_over_is_terminal_until_restart() {
        let mut rng = SessionRng::new(42);
        let mut state = SnakeGameState::new();
        state.set_layout(&[Point::new(19, 3)], Point::new(0, 0), Direction::Right);
        state.advance(&mut rng);
        let tick = state.tick();

        assert_eq!(state.advance(&mut rng), TickOutcome::Idle);
        assert!(state.set_heading(Direction::Up).is_err());
        assert_eq!(state.tick(), tick);
        assert_eq!(state.snake().head(), Point::new(19, 3));
    }

    #[test]
    fn test_reversal_is_rejected_for_every_pair() {
        for heading in Direction::ALL {
            let mut state = SnakeGameState::new();
            state.set_layout(
                &[Point::new(10, 10), Point::new(11, 11)],
                Point::new(0, 0),
                heading,
            );
            assert!(state.set_heading(heading.opposite()).is_err());
            assert_eq!(state.heading(), heading);
        }
    }

    #[test]
    fn test_rapid_turns_cannot_chain_into_reversal() {
        let mut rng = SessionRng::new(42);
        let mut state = SnakeGameState::new();
        state.set_layout(
            &[Point::new(10, 10), Point::new(9, 10), Point::new(8, 10)],
            Point::new(0, 0),
            Direction::Right,
        );

        assert!(state.set_heading(Direction::Up).is_ok());
        // Still moving right until the next tick, so left is a reversal.
        assert!(state.set_heading(Direction::Left).is_err());
        assert_eq!(state.heading(), Direction::Up);

        assert_eq!(state.advance(&mut rng), TickOutcome::Moved);
        assert_eq!(state.snake().head(), Point::new(10, 9));
        assert!(state.set_heading(Direction::Left).is_ok());
    }

    #[test]
    fn test_last_accepted_turn_wins_within_a_tick() {
        let mut rng = SessionRng::new(42);
        let mut state = SnakeGameState::new();

        state.set_heading(Direction::Up).unwrap();
        state.set_heading(Direction::Down).unwrap();
        state.advance(&mut rng);

        assert_eq!(state.snake().head(), Point::new(10, 11));
    }

    #[test]
    fn test_restart_returns_to_initial_state() {
        let mut rng = SessionRng::new(42);
        let mut state = SnakeGameState::new();
        state.set_layout(&[Point::new(15, 14)], Point::new(15, 15), Direction::Down);
        state.advance(&mut rng);
        state.set_layout(&[Point::new(19, 3)], Point::new(0, 0), Direction::Right);
        state.advance(&mut rng);
        assert!(state.is_game_over());

        state.restart();

        let fresh = SnakeGameState::new();
        assert_eq!(state.snapshot(false), fresh.snapshot(false));
    }

    #[test]
    fn test_long_run_keeps_invariants() {
        let mut rng = SessionRng::new(1234);
        let mut state = SnakeGameState::new();
        let turns = [Direction::Down, Direction::Left, Direction::Up, Direction::Right];
        let mut previous_score = 0;

        for step in 0..400 {
            if step % 7 == 0 {
                let _ = state.set_heading(turns[(step / 7) % turns.len()]);
            }
            let len_before = state.snake().len();
            match state.advance(&mut rng) {
                TickOutcome::Moved => assert_eq!(state.snake().len(), len_before),
                TickOutcome::Ate { .. } => assert_eq!(state.snake().len(), len_before + 1),
                TickOutcome::Collided(_) | TickOutcome::Idle => {
                    assert_eq!(state.snake().len(), len_before);
                    state.restart();
                    previous_score = 0;
                    continue;
                }
            }

            let cells: Vec<Point> = body(&state);
            let unique: HashSet<Point> = cells.iter().copied().collect();
            assert_eq!(unique.len(), cells.len());
            assert!(cells.iter().all(|p| p.x < GRID_SIZE && p.y < GRID_SIZE));
            assert_eq!(state.score() % FOOD_REWARD, 0);
            assert!(state.score() >= previous_score);
            previous_score = state.score();
        }
    }
}

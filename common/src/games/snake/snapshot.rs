use super::types::{DeathReason, Direction, Point, RunState};

/// Immutable copy of everything the frame needs to draw one game state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Head first.
    pub body: Vec<Point>,
    pub food: Point,
    pub heading: Direction,
    pub score: u32,
    pub run_state: RunState,
    pub game_over_reason: Option<DeathReason>,
    pub tick: u64,
    pub share_in_flight: bool,
}

impl GameSnapshot {
    pub fn head(&self) -> Option<Point> {
        self.body.first().copied()
    }

    pub fn is_game_over(&self) -> bool {
        self.run_state == RunState::GameOver
    }

    pub fn can_share(&self) -> bool {
        self.score > 0 && !self.share_in_flight
    }

    pub fn can_restart(&self) -> bool {
        !self.share_in_flight
    }
}

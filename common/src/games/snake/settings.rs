use std::time::Duration;

use crate::config::Validate;
use super::share::ShareTemplate;
use super::types::{Direction, Point};

pub const GRID_SIZE: usize = 20;
pub const TILE_SIZE: u32 = 20;
pub const CANVAS_SIZE: u32 = GRID_SIZE as u32 * TILE_SIZE;
pub const TILE_INSET: u32 = 2;
pub const FOOD_REWARD: u32 = 10;

pub const INITIAL_SNAKE_POSITION: Point = Point::new(10, 10);
pub const INITIAL_FOOD_POSITION: Point = Point::new(15, 15);
pub const INITIAL_HEADING: Direction = Direction::Right;

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(100);
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(50);
pub const MAX_TICK_INTERVAL: Duration = Duration::from_millis(1000);

#[derive(Clone, Debug, PartialEq)]
pub struct SnakeSessionSettings {
    pub tick_interval: Duration,
    pub share: ShareTemplate,
}

impl Default for SnakeSessionSettings {
    fn default() -> Self {
        Self {
            tick_interval: DEFAULT_TICK_INTERVAL,
            share: ShareTemplate::default(),
        }
    }
}

impl Validate for SnakeSessionSettings {
    fn validate(&self) -> Result<(), String> {
        if self.tick_interval < MIN_TICK_INTERVAL || self.tick_interval > MAX_TICK_INTERVAL {
            return Err(format!(
                "Tick interval must be between {}ms and {}ms",
                MIN_TICK_INTERVAL.as_millis(),
                MAX_TICK_INTERVAL.as_millis()
            ));
        }
        self.share.validate()
    }
}

mod game_state;
mod render;
mod session;
mod settings;
mod share;
mod snake;
mod snapshot;
mod types;

pub use game_state::{SnakeGameState, TickOutcome};
pub use render::{Palette, RenderStyle, RenderSurface, Rgb, render};
pub use session::{SessionBroadcaster, SessionCommand, SnakeSession, SnakeSessionState};
pub use settings::{
    CANVAS_SIZE, DEFAULT_TICK_INTERVAL, FOOD_REWARD, GRID_SIZE, INITIAL_FOOD_POSITION,
    INITIAL_HEADING, INITIAL_SNAKE_POSITION, MAX_TICK_INTERVAL, MIN_TICK_INTERVAL,
    SnakeSessionSettings, TILE_INSET, TILE_SIZE,
};
pub use share::{
    DEFAULT_SHARE_MESSAGE, DEFAULT_SHARE_TARGET, SCORE_PLACEHOLDER, ShareGate, ShareNotice,
    ShareTemplate,
};
pub use snake::Snake;
pub use snapshot::GameSnapshot;
pub use types::{DeathReason, Direction, Point, RunState};

mod app;
mod button;
mod canvas;
mod colors;

pub use app::{APP_TITLE, SnakeApp, board_side};

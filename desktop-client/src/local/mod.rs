mod broadcaster;
mod frame_host;
mod game_runner;

pub use broadcaster::LocalBroadcaster;
pub use frame_host::LocalFrameHost;
pub use game_runner::local_game_task;

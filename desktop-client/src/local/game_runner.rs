use chrono::Local;
use common::games::snake::{SessionCommand, SnakeSession, SnakeSessionSettings, SnakeSessionState};
use common::log;
use tokio::sync::mpsc;

use crate::state::SharedState;
use super::{LocalBroadcaster, LocalFrameHost};

pub async fn local_game_task(
    shared_state: SharedState,
    command_rx: mpsc::UnboundedReceiver<SessionCommand>,
    settings: SnakeSessionSettings,
    seed: u64,
    host: LocalFrameHost,
) {
    let session_id = format!("local_{}", Local::now().format("%Y%m%d_%H%M%S"));
    let session_state = SnakeSessionState::create(session_id, settings, seed);
    let broadcaster = LocalBroadcaster::new(shared_state.clone());

    let last = SnakeSession::run(session_state, host, broadcaster, command_rx).await;
    log!("Last score: {} after {} ticks", last.score, last.tick);

    shared_state.mark_session_finished();
}

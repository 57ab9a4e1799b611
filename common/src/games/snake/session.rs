use std::future::Future;
use tokio::sync::mpsc;

use crate::host::{FrameHost, HostError};
use crate::games::{SessionRng, TickTimer};
use crate::log;
use super::game_state::{SnakeGameState, TickOutcome};
use super::settings::SnakeSessionSettings;
use super::share::{ShareGate, ShareNotice};
use super::snapshot::GameSnapshot;
use super::types::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    Turn(Direction),
    Restart,
    Share,
    Shutdown,
}

pub trait SessionBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, snapshot: GameSnapshot) -> impl Future<Output = ()> + Send;

    fn broadcast_notice(&self, notice: ShareNotice) -> impl Future<Output = ()> + Send;
}

pub struct SnakeSessionState {
    pub session_id: String,
    pub game_state: SnakeGameState,
    pub rng: SessionRng,
    pub settings: SnakeSessionSettings,
}

impl SnakeSessionState {
    pub fn create(session_id: String, settings: SnakeSessionSettings, seed: u64) -> Self {
        Self {
            session_id,
            game_state: SnakeGameState::new(),
            rng: SessionRng::new(seed),
            settings,
        }
    }
}

pub struct SnakeSession;

impl SnakeSession {
    /// Drives one game session until `Shutdown` arrives or every command sender
    /// is dropped. Returns the last published snapshot.
    ///
    /// The loop is the only writer of the game state and of the share gate.
    /// Share calls run on their own task and report back through a channel.
    pub async fn run(
        mut session_state: SnakeSessionState,
        host: impl FrameHost,
        broadcaster: impl SessionBroadcaster,
        mut command_rx: mpsc::UnboundedReceiver<SessionCommand>,
    ) -> GameSnapshot {
        let session_id = session_state.session_id.clone();
        let tick_interval = session_state.settings.tick_interval;
        let mut share_gate = ShareGate::new();
        let mut timer = TickTimer::new();
        let (share_tx, mut share_rx) = mpsc::unbounded_channel::<Result<(), HostError>>();

        if !host.is_frame_ready() {
            host.set_frame_ready();
            log!("[session:{}] Frame marked ready", session_id);
        }

        log!(
            "[session:{}] Started (seed {}, tick {}ms)",
            session_id,
            session_state.rng.seed(),
            tick_interval.as_millis()
        );

        timer.start(tick_interval);
        broadcaster
            .broadcast_state(session_state.game_state.snapshot(share_gate.is_in_flight()))
            .await;

        loop {
            tokio::select! {
                _ = timer.tick() => {
                    let SnakeSessionState { game_state, rng, .. } = &mut session_state;
                    match game_state.advance(rng) {
                        TickOutcome::Moved | TickOutcome::Idle => {}
                        TickOutcome::Ate { score, next_food } => {
                            log!(
                                "[session:{}] Ate food, score {}; next food at ({}, {})",
                                session_id,
                                score,
                                next_food.x,
                                next_food.y
                            );
                        }
                        TickOutcome::Collided(reason) => {
                            timer.stop();
                            log!(
                                "[session:{}] Game over: snake {} (final score {})",
                                session_id,
                                reason,
                                game_state.score()
                            );
                        }
                    }
                    broadcaster
                        .broadcast_state(game_state.snapshot(share_gate.is_in_flight()))
                        .await;
                }
                command = command_rx.recv() => {
                    let Some(command) = command else {
                        log!("[session:{}] Command channel closed", session_id);
                        break;
                    };

                    match command {
                        SessionCommand::Turn(direction) => {
                            if session_state.game_state.set_heading(direction).is_err() {
                                continue;
                            }
                        }
                        SessionCommand::Restart => {
                            session_state.game_state.restart();
                            timer.start(tick_interval);
                            log!("[session:{}] Restarted", session_id);
                        }
                        SessionCommand::Share => {
                            let score = session_state.game_state.score();
                            let Some(interaction) =
                                share_gate.try_begin(score, &session_state.settings.share)
                            else {
                                continue;
                            };
                            log!("[session:{}] Sharing score {}", session_id, score);

                            let host = host.clone();
                            let share_tx = share_tx.clone();
                            tokio::spawn(async move {
                                let result = host.send_frame_interaction(interaction).await;
                                let _ = share_tx.send(result);
                            });
                        }
                        SessionCommand::Shutdown => {
                            break;
                        }
                    }

                    broadcaster
                        .broadcast_state(session_state.game_state.snapshot(share_gate.is_in_flight()))
                        .await;
                }
                Some(result) = share_rx.recv() => {
                    match &result {
                        Ok(()) => log!("[session:{}] Score shared", session_id),
                        Err(e) => log!("[session:{}] Error sharing score: {}", session_id, e),
                    }
                    let notice = share_gate.finish(&result);
                    broadcaster.broadcast_notice(notice).await;
                    broadcaster
                        .broadcast_state(session_state.game_state.snapshot(share_gate.is_in_flight()))
                        .await;
                }
            }
        }

        timer.stop();
        log!("[session:{}] Stopped", session_id);

        session_state.game_state.snapshot(share_gate.is_in_flight())
    }
}

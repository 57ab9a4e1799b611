use common::host::{FrameHost, FrameInteraction, HostError};
use common::log;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

const SHARE_LATENCY: Duration = Duration::from_millis(400);

/// Desktop stand-in for the social platform frame. Posts land in an in-memory
/// feed shown next to the board; in offline mode every post is rejected.
#[derive(Clone)]
pub struct LocalFrameHost {
    ready: Arc<AtomicBool>,
    offline: bool,
    feed: Arc<Mutex<Vec<FrameInteraction>>>,
}

impl LocalFrameHost {
    pub fn new(offline: bool) -> Self {
        Self {
            ready: Arc::new(AtomicBool::new(false)),
            offline,
            feed: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn feed(&self) -> Vec<FrameInteraction> {
        self.feed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl FrameHost for LocalFrameHost {
    fn is_frame_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    fn set_frame_ready(&self) {
        self.ready.store(true, Ordering::SeqCst);
    }

    async fn send_frame_interaction(&self, interaction: FrameInteraction) -> Result<(), HostError> {
        tokio::time::sleep(SHARE_LATENCY).await;

        if self.offline {
            return Err(HostError::Unavailable);
        }

        log!(
            "Posted to feed: action={} target={} content={}",
            interaction.action,
            interaction.target,
            interaction.content
        );
        self.feed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(interaction);
        Ok(())
    }
}

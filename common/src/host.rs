use std::fmt;
use std::future::Future;

pub const SHARE_ACTION_POST: &str = "post";

/// Payload published to the host feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameInteraction {
    pub action: String,
    pub content: String,
    pub target: String,
}

impl FrameInteraction {
    pub fn post(content: String, target: String) -> Self {
        Self {
            action: SHARE_ACTION_POST.to_string(),
            content,
            target,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    Rejected(String),
    Unavailable,
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::Rejected(reason) => write!(f, "host rejected interaction: {}", reason),
            HostError::Unavailable => write!(f, "host is unavailable"),
        }
    }
}

impl std::error::Error for HostError {}

/// The platform embedding the game.
pub trait FrameHost: Send + Sync + Clone + 'static {
    fn is_frame_ready(&self) -> bool;

    /// Idempotent readiness acknowledgement.
    fn set_frame_ready(&self);

    fn send_frame_interaction(
        &self,
        interaction: FrameInteraction,
    ) -> impl Future<Output = Result<(), HostError>> + Send;
}

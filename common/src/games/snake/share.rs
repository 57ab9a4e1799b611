use crate::config::Validate;
use crate::host::{FrameInteraction, HostError};

pub const SCORE_PLACEHOLDER: &str = "{score}";
pub const DEFAULT_SHARE_MESSAGE: &str = "I scored {score} in Farcaster Snake Run! 🐍 Play now!";
pub const DEFAULT_SHARE_TARGET: &str = "https://farcaster-snake-run.vercel.app";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareTemplate {
    pub message_template: String,
    pub target_url: String,
}

impl Default for ShareTemplate {
    fn default() -> Self {
        Self {
            message_template: DEFAULT_SHARE_MESSAGE.to_string(),
            target_url: DEFAULT_SHARE_TARGET.to_string(),
        }
    }
}

impl ShareTemplate {
    pub fn interaction_for(&self, score: u32) -> FrameInteraction {
        let content = self
            .message_template
            .replace(SCORE_PLACEHOLDER, &score.to_string());
        FrameInteraction::post(content, self.target_url.clone())
    }
}

impl Validate for ShareTemplate {
    fn validate(&self) -> Result<(), String> {
        if !self.message_template.contains(SCORE_PLACEHOLDER) {
            return Err(format!("share message must contain {}", SCORE_PLACEHOLDER));
        }
        if !(self.target_url.starts_with("https://") || self.target_url.starts_with("http://")) {
            return Err("share target must be an http(s) URL".to_string());
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareNotice {
    Shared,
    Failed,
}

impl ShareNotice {
    pub fn message(&self) -> &'static str {
        match self {
            ShareNotice::Shared => "Score shared on Farcaster!",
            ShareNotice::Failed => "Failed to share score. Please try again.",
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ShareNotice::Failed)
    }
}

/// Busy flag around the share call. At most one share is in flight, and none is
/// issued for a zero score.
#[derive(Debug, Default)]
pub struct ShareGate {
    in_flight: bool,
}

impl ShareGate {
    pub fn new() -> Self {
        Self { in_flight: false }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn try_begin(&mut self, score: u32, template: &ShareTemplate) -> Option<FrameInteraction> {
        if score == 0 || self.in_flight {
            return None;
        }
        self.in_flight = true;
        Some(template.interaction_for(score))
    }

    pub fn finish(&mut self, result: &Result<(), HostError>) -> ShareNotice {
        self.in_flight = false;
        match result {
            Ok(()) => ShareNotice::Shared,
            Err(_) => ShareNotice::Failed,
        }
    }
}

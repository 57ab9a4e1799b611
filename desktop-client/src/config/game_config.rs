use common::config::Validate;
use common::games::snake::{DEFAULT_TICK_INTERVAL, MAX_TICK_INTERVAL, MIN_TICK_INTERVAL};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GameConfig {
    pub tick_interval_ms: u32,
    /// Fixed food seed; a random one is drawn per launch when absent.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL.as_millis() as u32,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms as u64)
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        let interval = self.tick_interval();
        if interval < MIN_TICK_INTERVAL {
            return Err(format!(
                "tick_interval_ms must be at least {}",
                MIN_TICK_INTERVAL.as_millis()
            ));
        }
        if interval > MAX_TICK_INTERVAL {
            return Err(format!(
                "tick_interval_ms must not exceed {}",
                MAX_TICK_INTERVAL.as_millis()
            ));
        }
        Ok(())
    }
}

use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

/// The one repeating timer of a game session.
///
/// Holds at most one interval; starting again drops the previous one. While
/// stopped, [`TickTimer::tick`] never completes, so it can sit in a `select!`
/// next to other branches.
#[derive(Default)]
pub struct TickTimer {
    interval: Option<Interval>,
}

impl TickTimer {
    pub fn new() -> Self {
        Self { interval: None }
    }

    /// First tick fires one full period after the call; missed ticks are skipped
    /// rather than delivered in a burst.
    pub fn start(&mut self, period: Duration) {
        let period = period.max(Duration::from_millis(1));
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        self.interval = Some(interval);
    }

    pub fn stop(&mut self) {
        self.interval = None;
    }

    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    pub async fn tick(&mut self) -> Instant {
        match self.interval.as_mut() {
            Some(interval) => interval.tick().await,
            None => std::future::pending().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    #[tokio::test]
    async fn test_started_timer_ticks_after_one_period() {
        let mut timer = TickTimer::new();
        let started = Instant::now();
        timer.start(Duration::from_millis(20));

        timer.tick().await;
        assert!(started.elapsed() >= Duration::from_millis(20));
        assert!(timer.is_running());
    }

    #[tokio::test]
    async fn test_stopped_timer_never_ticks() {
        let mut timer = TickTimer::new();
        timer.start(Duration::from_millis(5));
        timer.stop();

        assert!(!timer.is_running());
        let result = timeout(Duration::from_millis(50), timer.tick()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_restart_replaces_previous_schedule() {
        let mut timer = TickTimer::new();
        timer.start(Duration::from_millis(5));
        timer.start(Duration::from_millis(200));

        // The 5ms schedule was dropped with its interval.
        let result = timeout(Duration::from_millis(50), timer.tick()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_never_started_timer_pends() {
        let mut timer = TickTimer::default();
        let result = timeout(Duration::from_millis(20), timer.tick()).await;
        assert!(result.is_err());
    }
}

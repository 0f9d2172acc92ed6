//! # Auto-refresh Timer
//!
//! Periodic refresh of the orders view, decoupled from input handling. The
//! shell waits on [`AutoRefresh::tick`] alongside stdin inside `tokio::select!`,
//! so a pending refresh never blocks a keystroke and a keystroke never delays
//! the next refresh.

use std::time::Duration;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};
use tracing::debug;

pub struct AutoRefresh {
    period: Duration,
    interval: Option<Interval>,
}

impl AutoRefresh {
    /// Creates a disabled timer with the given period.
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            interval: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_enabled(&self) -> bool {
        self.interval.is_some()
    }

    /// Starts ticking one full period from now. Enabling twice keeps the
    /// running schedule.
    pub fn enable(&mut self) {
        if self.interval.is_none() {
            let mut interval = interval_at(Instant::now() + self.period, self.period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            self.interval = Some(interval);
            debug!(period_ms = self.period.as_millis() as u64, "Auto-refresh enabled");
        }
    }

    pub fn disable(&mut self) {
        if self.interval.take().is_some() {
            debug!("Auto-refresh disabled");
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if enabled {
            self.enable();
        } else {
            self.disable();
        }
    }

    /// Resolves at the next refresh; never resolves while disabled.
    ///
    /// Cancel safe, for use as a `select!` branch.
    pub async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    #[tokio::test(start_paused = true)]
    async fn test_disabled_never_ticks() {
        let mut refresh = AutoRefresh::new(Duration::from_secs(3));
        assert!(!refresh.is_enabled());
        assert!(timeout(Duration::from_secs(60), refresh.tick()).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_enabled_ticks_once_per_period() {
        let mut refresh = AutoRefresh::new(Duration::from_secs(3));
        refresh.enable();
        let start = Instant::now();

        // Nothing before the first full period
        assert!(timeout(Duration::from_secs(2), refresh.tick()).await.is_err());

        refresh.tick().await;
        assert_eq!(start.elapsed(), Duration::from_secs(3));
        refresh.tick().await;
        assert_eq!(start.elapsed(), Duration::from_secs(6));
    }

    #[tokio::test(start_paused = true)]
    async fn test_disable_stops_ticks() {
        let mut refresh = AutoRefresh::new(Duration::from_secs(3));
        refresh.set_enabled(true);
        refresh.tick().await;
        refresh.set_enabled(false);
        assert!(!refresh.is_enabled());
        assert!(timeout(Duration::from_secs(30), refresh.tick()).await.is_err());
    }
}

//! Live clock for the attendance header.
//!
//! A tokio task publishes a fresh [`ClockReading`] on a fixed cadence through a
//! `watch` channel. The task belongs to the [`LiveClock`] handle and is aborted
//! when the handle is stopped or dropped.

use std::time::Duration;

use chrono::{DateTime, Local};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

/// Default tick interval
pub const DEFAULT_TICK: Duration = Duration::from_secs(1);

/// Latest clock value for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReading {
    pub now: DateTime<Local>,
    /// Ticks since the clock started
    pub ticks: u64,
}

impl ClockReading {
    fn at(now: DateTime<Local>, ticks: u64) -> Self {
        Self { now, ticks }
    }

    /// "Monday, January 15, 2024"
    pub fn date_line(&self) -> String {
        self.now.format("%A, %B %-d, %Y").to_string()
    }

    /// "09:05:03 AM"
    pub fn time_line(&self) -> String {
        self.now.format("%I:%M:%S %p").to_string()
    }
}

/// Handle to a running clock task
#[derive(Debug)]
pub struct LiveClock {
    rx: watch::Receiver<ClockReading>,
    task: Option<JoinHandle<()>>,
}

impl LiveClock {
    /// Start ticking every `tick`. Must be called inside a tokio runtime.
    pub fn start(tick: Duration) -> Self {
        let (tx, rx) = watch::channel(ClockReading::at(Local::now(), 0));

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(tick);
            // first tick completes immediately; the initial reading covers it
            interval.tick().await;
            let mut ticks = 0u64;
            loop {
                interval.tick().await;
                ticks += 1;
                if tx.send(ClockReading::at(Local::now(), ticks)).is_err() {
                    break;
                }
            }
        });

        debug!(tick_ms = tick.as_millis() as u64, "clock started");
        Self {
            rx,
            task: Some(task),
        }
    }

    /// Latest reading
    pub fn reading(&self) -> ClockReading {
        *self.rx.borrow()
    }

    /// Another receiver for the same clock
    pub fn subscribe(&self) -> watch::Receiver<ClockReading> {
        self.rx.clone()
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Stop the ticker. Readings freeze at the last value.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("clock stopped");
        }
    }
}

impl Drop for LiveClock {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_ticks_once_per_interval() {
        let clock = LiveClock::start(DEFAULT_TICK);
        let mut rx = clock.subscribe();
        assert_eq!(clock.reading().ticks, 0);

        for expected in 1..=3 {
            rx.changed().await.unwrap();
            assert_eq!(rx.borrow().ticks, expected);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_freezes_reading() {
        let mut clock = LiveClock::start(DEFAULT_TICK);
        let mut rx = clock.subscribe();
        rx.changed().await.unwrap();
        clock.stop();
        assert!(clock.task.is_none());

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(clock.reading().ticks, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_closes_channel() {
        let clock = LiveClock::start(DEFAULT_TICK);
        let mut rx = clock.subscribe();
        drop(clock);
        // sender lives in the aborted task, so the channel closes
        assert!(rx.changed().await.is_err());
    }

    #[test]
    fn test_formatting() {
        use chrono::TimeZone;
        let now = Local.with_ymd_and_hms(2024, 1, 15, 9, 5, 3).unwrap();
        let reading = ClockReading::at(now, 0);
        assert_eq!(reading.date_line(), "Monday, January 15, 2024");
        assert_eq!(reading.time_line(), "09:05:03 AM");
    }
}

//! Periodic greeting job.
//!
//! A detached task that logs a fixed message on a recurring schedule. No
//! inputs, no outputs, no interface back to request handling.

use std::time::Duration;

use tokio::time::{self, MissedTickBehavior};

/// Log `message` every `interval_ms` until the process exits.
pub async fn run(interval_ms: u64, message: String) {
    let mut ticker = time::interval(Duration::from_millis(interval_ms));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // An interval's first tick completes immediately; skip it so the
    // greeting starts one full period after startup.
    ticker.tick().await;
    loop {
        ticker.tick().await;
        tracing::info!("{message}");
    }
}

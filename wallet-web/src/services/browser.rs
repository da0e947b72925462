//! Browser event loop and alert adapters.

use std::time::Duration;

use futures::future::LocalBoxFuture;
use gloo_timers::callback::Interval;
use lib_session::timer::Tick;
use lib_session::{AlertSink, Scheduler, TimerHandle};

/// `setInterval`-backed timers and `spawn_local` tasks.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn every(&self, period: Duration, tick: Tick) -> TimerHandle {
        let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
        let interval = Interval::new(millis, move || tick());
        // Dropping the Interval clears it
        TimerHandle::new(move || drop(interval))
    }

    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        leptos::task::spawn_local(task);
    }
}

/// `window.alert`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserAlerts;

impl AlertSink for BrowserAlerts {
    fn alert(&self, message: &str) {
        if let Err(e) = gloo_utils::window().alert_with_message(message) {
            log::warn!("Failed to show alert: {:?}", e);
        }
    }
}

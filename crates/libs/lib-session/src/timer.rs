//! # Scoped Timers and Task Spawning
//!
//! Recurring timers are a resource: [`Scheduler::every`] hands back a
//! [`TimerHandle`], and dropping the handle cancels the timer. The controller
//! keeps the handles of a connected session in one struct, so every exit from
//! `Connected` releases them deterministically.

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use futures::future::LocalBoxFuture;

/// Timer callback.
pub type Tick = Rc<dyn Fn()>;

/// Event-loop services for the single-threaded controller.
pub trait Scheduler {
    /// Call `tick` every `period` until the returned handle is dropped.
    fn every(&self, period: Duration, tick: Tick) -> TimerHandle;

    /// Run `task` to completion on the local event loop.
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
}

/// Owner of a running timer. Cancels it on drop.
pub struct TimerHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TimerHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)) }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerHandle")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_handle_cancels_once_on_drop() {
        let cancelled = Rc::new(Cell::new(0));
        let counter = Rc::clone(&cancelled);
        let handle = TimerHandle::new(move || counter.set(counter.get() + 1));
        drop(handle);
        assert_eq!(cancelled.get(), 1);
    }
}

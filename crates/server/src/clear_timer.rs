use crate::state::SharedTracker;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Cancellable task driving the clear-all countdown.
///
/// Arming spawns an interval task that ticks the tracker's countdown once
/// per second until the countdown stops running; every disarm path aborts
/// the task, so it can never tick after a cancel or confirm. Cancelling is
/// idempotent.
pub struct ClearTimer {
    handle: Option<JoinHandle<()>>,
}

impl ClearTimer {
    pub fn new() -> Self {
        Self { handle: None }
    }

    pub fn arm(&mut self, tracker: SharedTracker) {
        self.cancel();

        let handle = tokio::spawn(async move {
            let mut ticks = tokio::time::interval(Duration::from_secs(1));
            // The first tick resolves immediately
            ticks.tick().await;

            loop {
                ticks.tick().await;
                let still_running = match tracker.lock() {
                    Ok(mut tracker) => tracker.tick_clear_countdown(),
                    Err(_) => false,
                };
                if !still_running {
                    break;
                }
            }
        });

        self.handle = Some(handle);
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for ClearTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use persistence::MemoryStore;
    use std::sync::{Arc, Mutex};
    use tracker::{CLEAR_COUNTDOWN_SECS, Tracker};

    fn shared_tracker() -> SharedTracker {
        Arc::new(Mutex::new(Tracker::load(Box::new(MemoryStore::new()))))
    }

    #[tokio::test(start_paused = true)]
    async fn test_countdown_elapses_after_ten_seconds() {
        let tracker = shared_tracker();
        tracker.lock().unwrap().begin_clear_all();

        let mut timer = ClearTimer::new();
        timer.arm(Arc::clone(&tracker));
        // Let the spawned task start its interval before the clock moves
        tokio::task::yield_now().await;

        // Advance one tick at a time so the spawned task observes each one
        for _ in 0..CLEAR_COUNTDOWN_SECS {
            tokio::time::advance(Duration::from_secs(1)).await;
            tokio::task::yield_now().await;
        }

        assert!(tracker.lock().unwrap().clear_countdown().is_ready());
        timer.cancel();
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_ticking() {
        let tracker = shared_tracker();
        tracker.lock().unwrap().begin_clear_all();

        let mut timer = ClearTimer::new();
        timer.arm(Arc::clone(&tracker));

        for _ in 0..2 {
            tokio::time::advance(Duration::from_secs(1)).await;
            tokio::task::yield_now().await;
        }
        let remaining_at_cancel = tracker.lock().unwrap().clear_countdown().remaining();
        timer.cancel();
        timer.cancel(); // idempotent

        for _ in 0..30 {
            tokio::time::advance(Duration::from_secs(1)).await;
            tokio::task::yield_now().await;
        }

        assert_eq!(
            tracker.lock().unwrap().clear_countdown().remaining(),
            remaining_at_cancel
        );
    }
}

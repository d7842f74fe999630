use crate::clear_timer::ClearTimer;
use std::sync::{Arc, Mutex};
use tracker::Tracker;

pub type SharedTracker = Arc<Mutex<Tracker>>;

/// Shared handles behind every route: the course tracker and the clear-all
/// countdown timer
#[derive(Clone)]
pub struct AppState {
    pub tracker: SharedTracker,
    pub clear_timer: Arc<Mutex<ClearTimer>>,
}

impl AppState {
    pub fn new(tracker: Tracker) -> Self {
        Self {
            tracker: Arc::new(Mutex::new(tracker)),
            clear_timer: Arc::new(Mutex::new(ClearTimer::new())),
        }
    }
}

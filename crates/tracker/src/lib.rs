pub mod clear;
pub mod error;
pub mod store;
pub mod views;

pub use clear::{CLEAR_COUNTDOWN_SECS, ClearCountdown};
pub use error::TrackerError;
pub use store::Tracker;
pub use views::{FacetCounts, FilterSelection, Page, facet_counts, filtered, paginate};

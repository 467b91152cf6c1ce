//! Terminal progress reporting for downloads.

mod tracker;

pub use tracker::{
    BarTracker, BarTrackerBuilder, LineTracker, LineTrackerBuilder, Reporting, Silent, Tracker,
    TrackerBuilder,
};

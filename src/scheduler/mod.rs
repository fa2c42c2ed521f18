//! Time-placement engine.
//!
//! Answers "when exactly should this job be scheduled?" for one worker.
//!
//! # Pipeline
//!
//! 1. [`compute_free_intervals`]: subtract buffered bookings from the
//!    day's availability window.
//! 2. [`find_optimal_placement`]: place the job inside the client's
//!    preferred windows, packing it against existing work.
//! 3. [`find_best_placement_across_dates`]: repeat over a date range,
//!    honouring the daily job cap and preferring lighter days.
//!
//! All functions are pure and allocation-light; callers may evaluate
//! many workers in parallel.

mod free_intervals;
mod multi_day;
mod placement;

pub use free_intervals::compute_free_intervals;
pub use multi_day::{date_score, find_best_placement_across_dates};
pub use placement::find_optimal_placement;

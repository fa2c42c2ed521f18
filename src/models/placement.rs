//! Placement results.
//!
//! A missing placement is `None` rather than an error: a fully booked
//! worker is an expected, common outcome.

use serde::{Deserialize, Serialize};

/// The chosen position of a job within one day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Placement {
    /// Job start (µs since midnight).
    pub start_us: i64,
    /// Job end (µs since midnight).
    pub end_us: i64,
    /// Index of the client slot used (0-based).
    pub slot_index: usize,
    /// Idle time flanking the job inside its free interval (hours).
    /// Lower = tighter packing.
    pub gap_score_h: f64,
}

impl Placement {
    /// Job duration (µs).
    #[inline]
    pub fn duration_us(&self) -> i64 {
        self.end_us - self.start_us
    }

    /// Whether the job fills its free interval exactly.
    #[inline]
    pub fn is_exact_fit(&self) -> bool {
        self.gap_score_h == 0.0
    }
}

/// The chosen date and position of a job across a date range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatedPlacement {
    /// Calendar date key.
    pub date: String,
    /// Job start (µs since midnight).
    pub start_us: i64,
    /// Job end (µs since midnight).
    pub end_us: i64,
    /// The caller's original slot index.
    pub slot_index: usize,
    /// Gap score of the placement on that date (hours).
    pub gap_score_h: f64,
}

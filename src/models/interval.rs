//! Time-of-day interval models.
//!
//! Three interval types share the same shape but carry different meaning:
//!
//! | Type | Meaning | Source |
//! |------|---------|--------|
//! | [`TimeSlot`] | Client's preferred window | Booking request |
//! | [`BookingSlot`] | Committed job on the worker's day | Existing bookings |
//! | [`FreeInterval`] | Buffer-respecting idle block | Computed |
//!
//! # Time Model
//! All times are microseconds since midnight (see [`crate::time`]).
//! Intervals are half-open: `[start, end)`.

use serde::{Deserialize, Serialize};

/// A client-provided preferred time window.
///
/// Invariant: `start_us < end_us` (checked by
/// [`validate_match_request`](crate::validation::validate_match_request)).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeSlot {
    /// Window start (µs, inclusive).
    pub start_us: i64,
    /// Window end (µs, exclusive).
    pub end_us: i64,
}

impl TimeSlot {
    /// Creates a new time slot.
    pub fn new(start_us: i64, end_us: i64) -> Self {
        Self { start_us, end_us }
    }
}

/// An existing booking occupying part of a worker's day.
///
/// May be supplied unsorted and overlapping.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingSlot {
    /// Booking start (µs).
    pub start_us: i64,
    /// Booking end (µs).
    pub end_us: i64,
}

impl BookingSlot {
    /// Creates a new booking slot.
    pub fn new(start_us: i64, end_us: i64) -> Self {
        Self { start_us, end_us }
    }

    /// The busy zone of this booking: inflated by `buffer_us` on both
    /// sides, then clamped to `[window_start, window_end]`.
    ///
    /// Returns `(busy_start, busy_end)`, both within the window. The pair
    /// is empty (`busy_start >= busy_end`) only when the inflated booking
    /// misses the window; a booking just outside still blocks the part of
    /// its buffer that reaches in.
    pub fn busy_zone(&self, buffer_us: i64, window_start: i64, window_end: i64) -> (i64, i64) {
        let clamp = |t: i64| t.max(window_start).min(window_end);
        (
            clamp(self.start_us - buffer_us),
            clamp(self.end_us + buffer_us),
        )
    }
}

/// A maximal block of time in which the worker is free.
///
/// Invariant: `start_us < end_us`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FreeInterval {
    /// Interval start (µs, inclusive).
    pub start_us: i64,
    /// Interval end (µs, exclusive).
    pub end_us: i64,
}

impl FreeInterval {
    /// Creates a new free interval.
    pub fn new(start_us: i64, end_us: i64) -> Self {
        Self { start_us, end_us }
    }

    /// Length of this interval (µs).
    #[inline]
    pub fn duration_us(&self) -> i64 {
        self.end_us - self.start_us
    }

    /// Whether `[start_us, end_us)` lies entirely within this interval.
    #[inline]
    pub fn contains_range(&self, start_us: i64, end_us: i64) -> bool {
        start_us >= self.start_us && end_us <= self.end_us
    }

    /// Intersection with a client slot as `(start, end)`.
    ///
    /// Returns `None` if the two do not overlap.
    pub fn intersect(&self, slot: &TimeSlot) -> Option<(i64, i64)> {
        let start = self.start_us.max(slot.start_us);
        let end = self.end_us.min(slot.end_us);
        if end > start {
            Some((start, end))
        } else {
            None
        }
    }
}

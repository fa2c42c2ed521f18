//! Per-date inputs to the multi-day search.

use serde::{Deserialize, Serialize};

use super::{BookingSlot, FreeInterval, TimeSlot};
use crate::scheduler::compute_free_intervals;

/// A client time slot bound to a calendar date.
///
/// `slot_index` is the caller's original index for this slot. Grouping
/// by date discards date-local positions, so results report this index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DatedTimeSlot {
    /// Calendar date key (e.g. `"2026-03-02"`).
    pub date: String,
    /// Day of week, 0 = Sunday.
    pub day_of_week: u8,
    /// Window start (µs since midnight).
    pub start_us: i64,
    /// Window end (µs since midnight).
    pub end_us: i64,
    /// Original slot index in the request.
    pub slot_index: usize,
}

impl DatedTimeSlot {
    /// Creates a new dated slot.
    pub fn new(
        date: impl Into<String>,
        day_of_week: u8,
        start_us: i64,
        end_us: i64,
        slot_index: usize,
    ) -> Self {
        Self {
            date: date.into(),
            day_of_week,
            start_us,
            end_us,
            slot_index,
        }
    }

    /// The time window without the date.
    pub fn time_slot(&self) -> TimeSlot {
        TimeSlot::new(self.start_us, self.end_us)
    }
}

/// A worker's pre-computed availability on one date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DateAvailability {
    /// Calendar date key.
    pub date: String,
    /// Availability window start (µs).
    pub avail_start_us: i64,
    /// Availability window end (µs).
    pub avail_end_us: i64,
    /// Free blocks within the window, ordered by start.
    pub free_intervals: Vec<FreeInterval>,
    /// Jobs already booked on this date.
    pub booking_count: usize,
}

impl DateAvailability {
    /// Creates an availability with pre-computed free intervals.
    pub fn new(
        date: impl Into<String>,
        avail_start_us: i64,
        avail_end_us: i64,
        free_intervals: Vec<FreeInterval>,
        booking_count: usize,
    ) -> Self {
        Self {
            date: date.into(),
            avail_start_us,
            avail_end_us,
            free_intervals,
            booking_count,
        }
    }

    /// Builds the availability of one date from the worker's bookings.
    ///
    /// Free intervals are computed with `buffer_us` spacing around each
    /// booking; the booking count is the number of bookings supplied.
    pub fn from_bookings(
        date: impl Into<String>,
        avail_start_us: i64,
        avail_end_us: i64,
        bookings: &[BookingSlot],
        buffer_us: i64,
    ) -> Self {
        let free_intervals =
            compute_free_intervals(avail_start_us, avail_end_us, bookings, buffer_us);
        Self::new(
            date,
            avail_start_us,
            avail_end_us,
            free_intervals,
            bookings.len(),
        )
    }

    /// Total free time on this date (µs).
    pub fn total_free_us(&self) -> i64 {
        self.free_intervals.iter().map(FreeInterval::duration_us).sum()
    }
}

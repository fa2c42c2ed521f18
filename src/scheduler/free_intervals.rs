//! Free-interval computation.
//!
//! # Algorithm
//!
//! 1. Sort bookings by start time (skipped when already sorted).
//! 2. Sweep a cursor from the window start. For each booking, inflate it
//!    by the buffer and clamp it to the window.
//! 3. Emit `[cursor, busy_start)` when the cursor is before the busy zone,
//!    then advance the cursor to `max(cursor, busy_end)`.
//! 4. Emit the trailing `[cursor, window_end)`.
//!
//! The max-based advance absorbs overlapping bookings.
//!
//! # Complexity
//! O(b log b) for b bookings; O(b) when pre-sorted.

use std::borrow::Cow;

use tracing::trace;

use crate::models::{BookingSlot, FreeInterval};

/// Computes the free blocks of one availability window.
///
/// Subtracts every booking, inflated by `buffer_us` on both sides, from
/// `[avail_start_us, avail_end_us)`. An inverted or empty window has no
/// capacity and yields no intervals.
///
/// The result is ordered by start, pairwise non-overlapping, and lies
/// within the window.
///
/// # Example
///
/// ```
/// use u_matchmaking::models::{BookingSlot, FreeInterval};
/// use u_matchmaking::scheduler::compute_free_intervals;
/// use u_matchmaking::time::{parse_hhmm, DEFAULT_BUFFER_US};
///
/// let free = compute_free_intervals(
///     parse_hhmm("08:00"),
///     parse_hhmm("17:00"),
///     &[BookingSlot::new(parse_hhmm("10:00"), parse_hhmm("12:00"))],
///     DEFAULT_BUFFER_US,
/// );
/// assert_eq!(free, vec![
///     FreeInterval::new(parse_hhmm("08:00"), parse_hhmm("09:45")),
///     FreeInterval::new(parse_hhmm("12:15"), parse_hhmm("17:00")),
/// ]);
/// ```
pub fn compute_free_intervals(
    avail_start_us: i64,
    avail_end_us: i64,
    bookings: &[BookingSlot],
    buffer_us: i64,
) -> Vec<FreeInterval> {
    if avail_start_us >= avail_end_us {
        trace!(avail_start_us, avail_end_us, "Inverted availability window");
        return Vec::new();
    }

    let bookings = sorted_by_start(bookings);
    let mut intervals = Vec::new();
    let mut cursor = avail_start_us;

    for booking in bookings.iter() {
        let (busy_start, busy_end) = booking.busy_zone(buffer_us, avail_start_us, avail_end_us);
        if busy_start >= busy_end {
            // Outside the window or zero-length: occupies nothing.
            continue;
        }

        if cursor < busy_start {
            intervals.push(FreeInterval::new(cursor, busy_start));
        }
        cursor = cursor.max(busy_end);
    }

    if cursor < avail_end_us {
        intervals.push(FreeInterval::new(cursor, avail_end_us));
    }

    intervals
}

/// Borrows `bookings` when already ordered by start, otherwise sorts a copy.
fn sorted_by_start(bookings: &[BookingSlot]) -> Cow<'_, [BookingSlot]> {
    if bookings.windows(2).all(|w| w[0].start_us <= w[1].start_us) {
        Cow::Borrowed(bookings)
    } else {
        let mut owned = bookings.to_vec();
        owned.sort_by_key(|b| b.start_us);
        Cow::Owned(owned)
    }
}

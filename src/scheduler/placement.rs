//! Single-day placement optimizer.
//!
//! # Algorithm
//!
//! For every (client slot × free interval) pair whose intersection fits
//! the job, two candidates are evaluated:
//!
//! - **left-pack**: job starts at the intersection start;
//! - **right-pack**: job ends at the intersection end (skipped on an
//!   exact fit, where it equals left-pack).
//!
//! Gaps are measured against the containing free interval, not the
//! intersection, so a job flush with a neighbouring booking wins.
//!
//! # Ordering
//!
//! Lexicographic, first differing criterion wins:
//! 1. smaller min gap (flush with an edge of the free interval)
//! 2. smaller total gap (tighter interval)
//! 3. smaller slot index (earlier client preference)
//!
//! # Complexity
//! O(s × f) for s client slots and f free intervals.

use crate::models::{FreeInterval, Placement, TimeSlot};
use crate::time::micros_to_hours;

/// A job position under evaluation.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    start_us: i64,
    end_us: i64,
    slot_index: usize,
    min_gap_us: i64,
    total_gap_us: i64,
}

impl Candidate {
    fn within(free: &FreeInterval, start_us: i64, end_us: i64, slot_index: usize) -> Self {
        let gap_before = start_us - free.start_us;
        let gap_after = free.end_us - end_us;
        Self {
            start_us,
            end_us,
            slot_index,
            min_gap_us: gap_before.min(gap_after),
            total_gap_us: gap_before + gap_after,
        }
    }

    fn rank_key(&self) -> (i64, i64, usize) {
        (self.min_gap_us, self.total_gap_us, self.slot_index)
    }

    /// Strictly better; equal candidates keep the one found first.
    fn is_better_than(&self, other: &Self) -> bool {
        self.rank_key() < other.rank_key()
    }

    fn into_placement(self) -> Placement {
        Placement {
            start_us: self.start_us,
            end_us: self.end_us,
            slot_index: self.slot_index,
            gap_score_h: micros_to_hours(self.total_gap_us),
        }
    }
}

/// Finds the tightest-packing position of a job within one day.
///
/// Returns `None` when no client slot overlaps a free interval for at
/// least `job_duration_us`, or when the duration is not positive.
///
/// # Example
///
/// ```
/// use u_matchmaking::models::{FreeInterval, TimeSlot};
/// use u_matchmaking::scheduler::find_optimal_placement;
/// use u_matchmaking::time::HOUR_US;
///
/// let free = [
///     FreeInterval::new(8 * HOUR_US, 14 * HOUR_US),
///     FreeInterval::new(15 * HOUR_US, 17 * HOUR_US),
/// ];
/// let slots = [TimeSlot::new(8 * HOUR_US, 17 * HOUR_US)];
///
/// // The exact-fit afternoon block beats the looser morning block.
/// let placement = find_optimal_placement(&free, &slots, 2 * HOUR_US).unwrap();
/// assert_eq!(placement.start_us, 15 * HOUR_US);
/// assert_eq!(placement.end_us, 17 * HOUR_US);
/// assert_eq!(placement.gap_score_h, 0.0);
/// ```
pub fn find_optimal_placement(
    free_intervals: &[FreeInterval],
    client_slots: &[TimeSlot],
    job_duration_us: i64,
) -> Option<Placement> {
    if job_duration_us <= 0 {
        return None;
    }

    let mut best: Option<Candidate> = None;
    let mut consider = |candidate: Candidate| {
        if best.is_none_or(|b| candidate.is_better_than(&b)) {
            best = Some(candidate);
        }
    };

    for (slot_index, slot) in client_slots.iter().enumerate() {
        for free in free_intervals {
            let Some((int_start, int_end)) = free.intersect(slot) else {
                continue;
            };
            if int_end - int_start < job_duration_us {
                continue;
            }

            consider(Candidate::within(
                free,
                int_start,
                int_start + job_duration_us,
                slot_index,
            ));

            let right_start = int_end - job_duration_us;
            if right_start != int_start {
                consider(Candidate::within(free, right_start, int_end, slot_index));
            }
        }
    }

    best.map(Candidate::into_placement)
}

//! Multi-day placement search.
//!
//! # Algorithm
//!
//! 1. Group the dated client slots by date, keeping declaration order.
//! 2. For each date in availability order:
//!    - skip it when the worker already has `max_jobs_per_day` jobs;
//!    - skip it when no client slot falls on it;
//!    - otherwise run [`find_optimal_placement`] on its free intervals.
//! 3. Score each placed date with [`date_score`] and keep the strictly
//!    greatest (first date wins ties).
//!
//! # Complexity
//! O(d × s × f) for d dates, s slots per date, f free intervals per date.

use std::collections::HashMap;

use tracing::debug;

use super::find_optimal_placement;
use crate::config::MatchConfig;
use crate::models::{DateAvailability, DatedPlacement, DatedTimeSlot, TimeSlot};

/// Per-booking load penalty in the date score.
const DATE_LOAD_PENALTY: f64 = 0.5;

/// Desirability of placing a job on a date. Higher is better.
///
/// `100 − gap_score_h − 0.5 × booking_count`: tight packing first, then
/// lighter days.
#[inline]
pub fn date_score(gap_score_h: f64, booking_count: usize) -> f64 {
    100.0 - gap_score_h - DATE_LOAD_PENALTY * booking_count as f64
}

/// Finds the best date and time for a job across a date range.
///
/// Returns `None` if no date under the daily job cap has a viable
/// placement. The returned `slot_index` is the matching slot's own
/// [`DatedTimeSlot::slot_index`].
///
/// # Example
///
/// ```
/// use u_matchmaking::config::MatchConfig;
/// use u_matchmaking::models::{DateAvailability, DatedTimeSlot, FreeInterval};
/// use u_matchmaking::scheduler::find_best_placement_across_dates;
/// use u_matchmaking::time::HOUR_US;
///
/// let h = |n: i64| n * HOUR_US;
/// let availabilities = vec![
///     DateAvailability::new("2026-03-02", h(14), h(18), vec![FreeInterval::new(h(14), h(18))], 3),
///     DateAvailability::new("2026-03-03", h(14), h(18), vec![FreeInterval::new(h(14), h(18))], 0),
/// ];
/// let slots = vec![
///     DatedTimeSlot::new("2026-03-02", 1, h(14), h(18), 0),
///     DatedTimeSlot::new("2026-03-03", 2, h(14), h(18), 1),
/// ];
///
/// let best = find_best_placement_across_dates(&availabilities, &slots, h(4), &MatchConfig::default())
///     .unwrap();
/// assert_eq!(best.date, "2026-03-03"); // lighter day
/// assert_eq!(best.slot_index, 1);
/// ```
pub fn find_best_placement_across_dates(
    availabilities: &[DateAvailability],
    dated_slots: &[DatedTimeSlot],
    job_duration_us: i64,
    config: &MatchConfig,
) -> Option<DatedPlacement> {
    let mut slots_by_date: HashMap<&str, Vec<&DatedTimeSlot>> = HashMap::new();
    for slot in dated_slots {
        slots_by_date.entry(slot.date.as_str()).or_default().push(slot);
    }

    let mut best: Option<(f64, DatedPlacement)> = None;

    for avail in availabilities {
        if config.max_jobs_per_day > 0 && avail.booking_count >= config.max_jobs_per_day {
            debug!(
                date = %avail.date,
                booking_count = avail.booking_count,
                max_jobs_per_day = config.max_jobs_per_day,
                "Skipping date at daily job cap"
            );
            continue;
        }

        if avail.total_free_us() < job_duration_us {
            debug!(date = %avail.date, "Skipping date without enough free time");
            continue;
        }

        let Some(day_slots) = slots_by_date.get(avail.date.as_str()) else {
            debug!(date = %avail.date, "Skipping date without client slots");
            continue;
        };

        let time_slots: Vec<TimeSlot> = day_slots.iter().map(|s| s.time_slot()).collect();
        let Some(placement) =
            find_optimal_placement(&avail.free_intervals, &time_slots, job_duration_us)
        else {
            continue;
        };

        let score = date_score(placement.gap_score_h, avail.booking_count);
        if best.as_ref().is_none_or(|(best_score, _)| score > *best_score) {
            best = Some((
                score,
                DatedPlacement {
                    date: avail.date.clone(),
                    start_us: placement.start_us,
                    end_us: placement.end_us,
                    slot_index: day_slots[placement.slot_index].slot_index,
                    gap_score_h: placement.gap_score_h,
                },
            ));
        }
    }

    if let Some((score, placement)) = &best {
        debug!(
            date = %placement.date,
            start_us = placement.start_us,
            slot_index = placement.slot_index,
            score,
            "Selected placement"
        );
    }

    best.map(|(_, placement)| placement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FreeInterval;
    use crate::time::{format_hhmm, HOUR_US};

    fn h(hours: i64) -> i64 {
        hours * HOUR_US
    }

    fn avail(date: &str, start: i64, end: i64, free: &[(i64, i64)], count: usize) -> DateAvailability {
        let free = free.iter().map(|&(s, e)| FreeInterval::new(s, e)).collect();
        DateAvailability::new(date, start, end, free, count)
    }

    #[test]
    fn test_single_date() {
        let avails = vec![avail("2026-03-02", h(8), h(17), &[(h(8), h(17))], 0)];
        let slots = vec![DatedTimeSlot::new("2026-03-02", 1, h(8), h(14), 0)];

        let got = find_best_placement_across_dates(&avails, &slots, h(4), &MatchConfig::default())
            .expect("expected placement");
        assert_eq!(got.date, "2026-03-02");
        assert_eq!(format_hhmm(got.start_us), "08:00");
        assert_eq!(format_hhmm(got.end_us), "12:00");
        assert_eq!(got.slot_index, 0);
    }

    #[test]
    fn test_skips_date_without_free_time() {
        let avails = vec![
            avail("2026-02-28", h(8), h(14), &[], 0),
            avail("2026-03-02", h(8), h(20), &[(h(8), h(20))], 0),
        ];
        let slots = vec![
            DatedTimeSlot::new("2026-02-28", 6, h(8), h(14), 0),
            DatedTimeSlot::new("2026-03-02", 1, h(8), h(20), 1),
        ];

        let got = find_best_placement_across_dates(&avails, &slots, h(4), &MatchConfig::default())
            .expect("expected placement");
        assert_eq!(got.date, "2026-03-02");
        assert_eq!(got.slot_index, 1);
    }

    #[test]
    fn test_fragmented_free_time_not_enough() {
        let avails = vec![
            // 3h free in total, job needs 4h
            avail("2026-03-02", h(8), h(17), &[(h(8), h(9)), (h(12), h(14))], 0),
            // 4h free in total but no single 4h block
            avail("2026-03-03", h(8), h(17), &[(h(8), h(10)), (h(13), h(15))], 0),
        ];
        let slots = vec![
            DatedTimeSlot::new("2026-03-02", 1, h(8), h(17), 0),
            DatedTimeSlot::new("2026-03-03", 2, h(8), h(17), 1),
        ];

        assert!(find_best_placement_across_dates(&avails, &slots, h(4), &MatchConfig::default()).is_none());
    }

    #[test]
    fn test_all_dates_at_cap() {
        let config = MatchConfig {
            max_jobs_per_day: 3,
            ..Default::default()
        };
        let avails = vec![
            avail("2026-02-28", h(8), h(17), &[(h(14), h(17))], 3),
            avail("2026-03-01", h(8), h(17), &[(h(14), h(17))], 4),
        ];
        let slots = vec![
            DatedTimeSlot::new("2026-02-28", 6, h(14), h(17), 0),
            DatedTimeSlot::new("2026-03-01", 0, h(14), h(17), 1),
        ];

        assert!(find_best_placement_across_dates(&avails, &slots, h(2), &config).is_none());
    }

    #[test]
    fn test_only_under_cap_date_selected() {
        let config = MatchConfig {
            max_jobs_per_day: 3,
            ..Default::default()
        };
        // The capped date would otherwise win on packing (exact fit).
        let avails = vec![
            avail("2026-03-02", h(8), h(17), &[(h(14), h(16))], 3),
            avail("2026-03-03", h(8), h(17), &[(h(8), h(17))], 1),
        ];
        let slots = vec![
            DatedTimeSlot::new("2026-03-02", 1, h(8), h(17), 0),
            DatedTimeSlot::new("2026-03-03", 2, h(8), h(17), 1),
        ];

        let got = find_best_placement_across_dates(&avails, &slots, h(2), &config)
            .expect("expected placement");
        assert_eq!(got.date, "2026-03-03");
        assert_eq!(got.slot_index, 1);
    }

    #[test]
    fn test_zero_cap_disables_limit() {
        let config = MatchConfig {
            max_jobs_per_day: 0,
            ..Default::default()
        };
        let avails = vec![avail("2026-03-02", h(8), h(17), &[(h(8), h(17))], 12)];
        let slots = vec![DatedTimeSlot::new("2026-03-02", 1, h(8), h(17), 0)];

        assert!(find_best_placement_across_dates(&avails, &slots, h(2), &config).is_some());
    }

    #[test]
    fn test_prefers_tighter_packing() {
        let avails = vec![
            avail("2026-03-02", h(8), h(17), &[(h(8), h(12))], 0),
            avail("2026-03-03", h(8), h(17), &[(h(8), h(17))], 0),
        ];
        let slots = vec![
            DatedTimeSlot::new("2026-03-02", 1, h(8), h(12), 0),
            DatedTimeSlot::new("2026-03-03", 2, h(8), h(17), 1),
        ];

        let got = find_best_placement_across_dates(&avails, &slots, h(4), &MatchConfig::default())
            .expect("expected placement");
        assert_eq!(got.date, "2026-03-02");
        assert_eq!(got.gap_score_h, 0.0);
    }

    #[test]
    fn test_prefers_lower_load() {
        let avails = vec![
            avail("2026-03-02", h(14), h(18), &[(h(14), h(18))], 3),
            avail("2026-03-03", h(14), h(18), &[(h(14), h(18))], 0),
        ];
        let slots = vec![
            DatedTimeSlot::new("2026-03-02", 1, h(14), h(18), 0),
            DatedTimeSlot::new("2026-03-03", 2, h(14), h(18), 1),
        ];

        let got = find_best_placement_across_dates(&avails, &slots, h(4), &MatchConfig::default())
            .expect("expected placement");
        assert_eq!(got.date, "2026-03-03");
    }

    #[test]
    fn test_first_date_wins_ties() {
        let avails = vec![
            avail("2026-03-02", h(8), h(12), &[(h(8), h(12))], 1),
            avail("2026-03-03", h(8), h(12), &[(h(8), h(12))], 1),
        ];
        let slots = vec![
            DatedTimeSlot::new("2026-03-03", 2, h(8), h(12), 0),
            DatedTimeSlot::new("2026-03-02", 1, h(8), h(12), 1),
        ];

        let got = find_best_placement_across_dates(&avails, &slots, h(4), &MatchConfig::default())
            .expect("expected placement");
        assert_eq!(got.date, "2026-03-02");
        assert_eq!(got.slot_index, 1);
    }

    #[test]
    fn test_no_matching_slots() {
        let avails = vec![avail("2026-03-02", h(8), h(17), &[(h(8), h(17))], 0)];
        let slots = vec![DatedTimeSlot::new("2026-03-03", 2, h(8), h(14), 0)];

        assert!(
            find_best_placement_across_dates(&avails, &slots, h(4), &MatchConfig::default())
                .is_none()
        );
    }

    #[test]
    fn test_slot_index_maps_to_original() {
        // Two slots on the same date, declared with non-contiguous indices.
        let avails = vec![avail("2026-03-02", h(8), h(17), &[(h(13), h(15))], 0)];
        let slots = vec![
            DatedTimeSlot::new("2026-03-01", 0, h(8), h(17), 0),
            DatedTimeSlot::new("2026-03-02", 1, h(8), h(10), 4),
            DatedTimeSlot::new("2026-03-02", 1, h(13), h(15), 7),
        ];

        let got = find_best_placement_across_dates(&avails, &slots, h(2), &MatchConfig::default())
            .expect("expected placement");
        assert_eq!(got.slot_index, 7);
        assert_eq!(got.start_us, h(13));
    }

    #[test]
    fn test_date_score() {
        assert!((date_score(0.0, 0) - 100.0).abs() < 1e-10);
        assert!((date_score(1.5, 3) - 97.0).abs() < 1e-10);
    }
}

//! Candidate ranking.
//!
//! Runs the multi-day search and the match score for every worker on a
//! roster, then orders workers by score. Candidates are independent, so
//! callers holding large rosters may split them across threads and merge
//! the suggestions.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{compute_match_score, ScoreInput};
use crate::config::MatchConfig;
use crate::models::{DateAvailability, DatedPlacement, DatedTimeSlot};
use crate::scheduler::find_best_placement_across_dates;

/// A worker considered for a booking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CandidateProfile {
    /// Worker identifier.
    pub worker_id: String,
    /// Average rating (0.0..=5.0).
    pub rating_avg: f64,
    /// Lifetime completed jobs.
    pub total_jobs_done: u32,
    /// Whether the worker serves the booking's area.
    pub is_area_match: bool,
    /// Availability per candidate date.
    pub availabilities: Vec<DateAvailability>,
    /// Bookings in the requested week.
    pub week_booking_count: usize,
}

impl CandidateProfile {
    /// Creates a profile with no history and no availability.
    pub fn new(worker_id: impl Into<String>) -> Self {
        Self {
            worker_id: worker_id.into(),
            rating_avg: 0.0,
            total_jobs_done: 0,
            is_area_match: false,
            availabilities: Vec::new(),
            week_booking_count: 0,
        }
    }

    /// Sets rating and completed job count.
    pub fn with_profile(mut self, rating_avg: f64, total_jobs_done: u32) -> Self {
        self.rating_avg = rating_avg;
        self.total_jobs_done = total_jobs_done;
        self
    }

    /// Sets the area match flag.
    pub fn with_area_match(mut self, is_area_match: bool) -> Self {
        self.is_area_match = is_area_match;
        self
    }

    /// Adds one date of availability.
    pub fn with_availability(mut self, availability: DateAvailability) -> Self {
        self.availabilities.push(availability);
        self
    }

    /// Sets the weekly booking count.
    pub fn with_week_bookings(mut self, count: usize) -> Self {
        self.week_booking_count = count;
        self
    }

    /// Booking count on `date`, or 0 if the date is unknown.
    fn booking_count_on(&self, date: &str) -> usize {
        self.availabilities
            .iter()
            .find(|a| a.date == date)
            .map_or(0, |a| a.booking_count)
    }
}

/// One ranked worker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchSuggestion {
    /// Worker identifier.
    pub worker_id: String,
    /// Suitability score (0..=100).
    pub score: f64,
    /// Best placement, if the worker is available.
    pub placement: Option<DatedPlacement>,
}

impl MatchSuggestion {
    /// Whether the worker can take the job.
    #[inline]
    pub fn is_available(&self) -> bool {
        self.placement.is_some()
    }
}

/// Outcome of ranking a roster.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MatchRanking {
    /// Suggestions by descending score, truncated to `max_results`.
    pub suggestions: Vec<MatchSuggestion>,
    /// Candidates with a viable placement (before truncation).
    pub available_count: usize,
    /// Candidates evaluated.
    pub evaluated_count: usize,
}

impl MatchRanking {
    /// Highest-scoring suggestion with a placement, for auto-assignment.
    pub fn best_available(&self) -> Option<&MatchSuggestion> {
        self.suggestions.iter().find(|s| s.is_available())
    }

    /// Whether too few workers are available and the caller should widen
    /// its date range.
    pub fn needs_wider_search(&self, config: &MatchConfig) -> bool {
        self.available_count < config.min_available_count
    }
}

/// Ranks workers for a booking request.
///
/// Each candidate is placed with [`find_best_placement_across_dates`]
/// and scored with [`compute_match_score`], using the booking count of
/// the chosen date as the daily workload. Suggestions are sorted by
/// descending score; equal scores keep roster order.
///
/// # Example
///
/// ```
/// use u_matchmaking::config::MatchConfig;
/// use u_matchmaking::models::{BookingSlot, DateAvailability, DatedTimeSlot};
/// use u_matchmaking::scoring::{rank_candidates, CandidateProfile};
/// use u_matchmaking::time::HOUR_US;
///
/// let h = |n: i64| n * HOUR_US;
/// let config = MatchConfig::default();
/// let slots = vec![DatedTimeSlot::new("2026-03-02", 1, h(8), h(17), 0)];
///
/// let busy = CandidateProfile::new("busy")
///     .with_profile(5.0, 300)
///     .with_availability(DateAvailability::from_bookings(
///         "2026-03-02", h(8), h(17), &[BookingSlot::new(h(8), h(17))], config.buffer_us(),
///     ));
/// let free = CandidateProfile::new("free")
///     .with_profile(4.0, 20)
///     .with_availability(DateAvailability::from_bookings(
///         "2026-03-02", h(8), h(17), &[], config.buffer_us(),
///     ));
///
/// let ranking = rank_candidates(&[busy, free], &slots, h(3), &config);
/// assert_eq!(ranking.best_available().unwrap().worker_id, "free");
/// ```
pub fn rank_candidates(
    candidates: &[CandidateProfile],
    dated_slots: &[DatedTimeSlot],
    job_duration_us: i64,
    config: &MatchConfig,
) -> MatchRanking {
    let mut suggestions: Vec<MatchSuggestion> = candidates
        .iter()
        .map(|candidate| {
            let placement = find_best_placement_across_dates(
                &candidate.availabilities,
                dated_slots,
                job_duration_us,
                config,
            );
            let day_booking_count = placement
                .as_ref()
                .map_or(0, |p| candidate.booking_count_on(&p.date));

            let input = ScoreInput::new(config.clone())
                .with_profile(candidate.rating_avg, candidate.total_jobs_done)
                .with_area_match(candidate.is_area_match)
                .with_placement(placement.as_ref())
                .with_workload(day_booking_count, candidate.week_booking_count);
            let score = compute_match_score(&input);

            debug!(
                worker_id = %candidate.worker_id,
                score,
                available = placement.is_some(),
                "Scored candidate"
            );

            MatchSuggestion {
                worker_id: candidate.worker_id.clone(),
                score,
                placement,
            }
        })
        .collect();

    let available_count = suggestions.iter().filter(|s| s.is_available()).count();

    suggestions.sort_by(|a, b| b.score.total_cmp(&a.score));
    if config.max_results > 0 {
        suggestions.truncate(config.max_results);
    }

    MatchRanking {
        suggestions,
        available_count,
        evaluated_count: candidates.len(),
    }
}

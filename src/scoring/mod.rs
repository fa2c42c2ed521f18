//! Match scoring and candidate ranking.
//!
//! # Score
//!
//! A bounded 0–100 suitability score per worker:
//!
//! | Component | Contribution |
//! |-----------|-------------|
//! | Base | +50 |
//! | Rating (0..5) | +5 per star, up to +25 |
//! | Experience | +15 per 100 completed jobs, up to +15 |
//! | Area match | +10 |
//! | Exact-fit placement (gap 0) | +5 |
//! | No placement | −40 |
//! | Same-day load | −weight/2 per booking |
//! | Same-week load | −weight/10 per booking |
//!
//! Load terms apply only when `load_balance_weight > 0`. The sum is
//! clamped to `[0, 100]`.

mod ranking;

pub use ranking::{rank_candidates, CandidateProfile, MatchRanking, MatchSuggestion};

use serde::{Deserialize, Serialize};

use crate::config::MatchConfig;
use crate::models::DatedPlacement;

const BASE_SCORE: f64 = 50.0;
const POINTS_PER_STAR: f64 = 5.0;
const EXPERIENCE_CAP: f64 = 15.0;
const AREA_MATCH_BONUS: f64 = 10.0;
const EXACT_FIT_BONUS: f64 = 5.0;
const UNAVAILABLE_PENALTY: f64 = 40.0;

/// Inputs to [`compute_match_score`] for one candidate.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ScoreInput {
    /// Average rating (0.0..=5.0).
    pub rating_avg: f64,
    /// Lifetime completed jobs.
    pub total_jobs_done: u32,
    /// Whether the worker serves the booking's area.
    pub is_area_match: bool,
    /// Whether a placement was found.
    pub placement_found: bool,
    /// Gap score of the placement (hours). Ignored without a placement.
    pub gap_score_h: f64,
    /// Bookings on the placement date.
    pub day_booking_count: usize,
    /// Bookings in the placement week.
    pub week_booking_count: usize,
    /// Run configuration.
    pub config: MatchConfig,
}

impl ScoreInput {
    /// Creates an input with the given configuration and no history.
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            ..Default::default()
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

    /// Sets the placement outcome.
    pub fn with_placement(mut self, placement: Option<&DatedPlacement>) -> Self {
        self.placement_found = placement.is_some();
        self.gap_score_h = placement.map_or(0.0, |p| p.gap_score_h);
        self
    }

    /// Sets the existing daily and weekly booking counts.
    pub fn with_workload(mut self, day_booking_count: usize, week_booking_count: usize) -> Self {
        self.day_booking_count = day_booking_count;
        self.week_booking_count = week_booking_count;
        self
    }
}

/// Computes a worker's 0–100 suitability score for a booking.
///
/// Pure: identical inputs always yield identical output. NaN inputs
/// score 0.
///
/// # Example
///
/// ```
/// use u_matchmaking::config::MatchConfig;
/// use u_matchmaking::scoring::{compute_match_score, ScoreInput};
///
/// let input = ScoreInput {
///     rating_avg: 4.5,
///     total_jobs_done: 50,
///     is_area_match: true,
///     placement_found: true,
///     gap_score_h: 0.0,
///     ..ScoreInput::new(MatchConfig::default())
/// };
/// assert_eq!(compute_match_score(&input), 95.0);
/// ```
pub fn compute_match_score(input: &ScoreInput) -> f64 {
    let mut score = BASE_SCORE;

    score += input.rating_avg * POINTS_PER_STAR;
    score += (input.total_jobs_done as f64 / 100.0 * EXPERIENCE_CAP).min(EXPERIENCE_CAP);

    if input.is_area_match {
        score += AREA_MATCH_BONUS;
    }

    if input.placement_found {
        if input.gap_score_h == 0.0 {
            score += EXACT_FIT_BONUS;
        }
    } else {
        score -= UNAVAILABLE_PENALTY;
    }

    let weight = input.config.load_balance_weight;
    if weight > 0.0 {
        score -= input.day_booking_count as f64 * weight / 2.0;
        score -= input.week_booking_count as f64 * weight / 10.0;
    }

    if score.is_nan() {
        return 0.0;
    }
    score.clamp(0.0, 100.0)
}

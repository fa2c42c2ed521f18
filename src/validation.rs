//! Input validation for matching requests.
//!
//! The engine itself never fails: malformed input degrades to "no
//! placement". Callers that want to reject bad requests up front run
//! [`validate_match_request`] first. Detects:
//! - Non-positive job durations
//! - Inverted or empty client slots
//! - Duplicate availability dates and slot indices
//! - Slots on dates with no availability entry
//! - Free intervals that are unordered or overlapping
//!
//! An inverted availability window is not an error: it means the worker
//! has no capacity that day.

use std::collections::HashSet;

use crate::models::{DateAvailability, DatedTimeSlot};
use crate::time::format_hhmm;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Job duration is zero or negative.
    NonPositiveDuration,
    /// A client slot has `start >= end`.
    InvalidTimeSlot,
    /// Two availabilities share a date.
    DuplicateDate,
    /// Two client slots share an original index.
    DuplicateSlotIndex,
    /// A client slot names a date with no availability.
    UnknownDate,
    /// Free intervals are not ordered and disjoint.
    UnsortedFreeIntervals,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a multi-day matching request.
///
/// Checks:
/// 1. Job duration is positive
/// 2. No duplicate availability dates
/// 3. Free intervals of each date are non-empty, ordered and disjoint
/// 4. Every client slot has `start < end`
/// 5. No duplicate slot indices
/// 6. Every client slot's date has an availability entry
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_match_request(
    availabilities: &[DateAvailability],
    dated_slots: &[DatedTimeSlot],
    job_duration_us: i64,
) -> ValidationResult {
    let mut errors = Vec::new();

    if job_duration_us <= 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveDuration,
            format!("Job duration must be positive, got {job_duration_us} µs"),
        ));
    }

    let mut dates = HashSet::new();
    for avail in availabilities {
        if !dates.insert(avail.date.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateDate,
                format!("Duplicate availability date: {}", avail.date),
            ));
        }

        let empty = avail.free_intervals.iter().any(|f| f.start_us >= f.end_us);
        let unordered = avail
            .free_intervals
            .windows(2)
            .any(|w| w[0].end_us > w[1].start_us);
        if empty || unordered {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnsortedFreeIntervals,
                format!(
                    "Free intervals on {} are not ordered, disjoint and non-empty",
                    avail.date
                ),
            ));
        }
    }

    let mut slot_indices = HashSet::new();
    for slot in dated_slots {
        if slot.start_us >= slot.end_us {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTimeSlot,
                format!(
                    "Slot {} on {} has start {} not before end {}",
                    slot.slot_index,
                    slot.date,
                    format_hhmm(slot.start_us),
                    format_hhmm(slot.end_us)
                ),
            ));
        }

        if !slot_indices.insert(slot.slot_index) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateSlotIndex,
                format!("Duplicate slot index: {}", slot.slot_index),
            ));
        }

        if !dates.contains(slot.date.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownDate,
                format!(
                    "Slot {} references date '{}' with no availability",
                    slot.slot_index, slot.date
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FreeInterval;
    use crate::time::HOUR_US;

    fn h(hours: i64) -> i64 {
        hours * HOUR_US
    }

    fn sample_availabilities() -> Vec<DateAvailability> {
        vec![
            DateAvailability::new("2026-03-02", h(8), h(17), vec![FreeInterval::new(h(8), h(17))], 0),
            DateAvailability::new(
                "2026-03-03",
                h(8),
                h(17),
                vec![FreeInterval::new(h(8), h(10)), FreeInterval::new(h(12), h(17))],
                1,
            ),
        ]
    }

    fn sample_slots() -> Vec<DatedTimeSlot> {
        vec![
            DatedTimeSlot::new("2026-03-02", 1, h(8), h(12), 0),
            DatedTimeSlot::new("2026-03-03", 2, h(13), h(17), 1),
        ]
    }

    fn has_kind(result: ValidationResult, kind: ValidationErrorKind) -> bool {
        result.unwrap_err().iter().any(|e| e.kind == kind)
    }

    #[test]
    fn test_valid_request() {
        assert!(validate_match_request(&sample_availabilities(), &sample_slots(), h(2)).is_ok());
    }

    #[test]
    fn test_non_positive_duration() {
        let result = validate_match_request(&sample_availabilities(), &sample_slots(), 0);
        assert!(has_kind(result, ValidationErrorKind::NonPositiveDuration));
    }

    #[test]
    fn test_invalid_time_slot() {
        let slots = vec![DatedTimeSlot::new("2026-03-02", 1, h(12), h(8), 0)];
        let result = validate_match_request(&sample_availabilities(), &slots, h(2));
        assert!(has_kind(result, ValidationErrorKind::InvalidTimeSlot));
    }

    #[test]
    fn test_duplicate_date() {
        let mut avails = sample_availabilities();
        avails.push(avails[0].clone());
        let result = validate_match_request(&avails, &sample_slots(), h(2));
        assert!(has_kind(result, ValidationErrorKind::DuplicateDate));
    }

    #[test]
    fn test_duplicate_slot_index() {
        let slots = vec![
            DatedTimeSlot::new("2026-03-02", 1, h(8), h(12), 0),
            DatedTimeSlot::new("2026-03-03", 2, h(8), h(12), 0),
        ];
        let result = validate_match_request(&sample_availabilities(), &slots, h(2));
        assert!(has_kind(result, ValidationErrorKind::DuplicateSlotIndex));
    }

    #[test]
    fn test_unknown_date() {
        let slots = vec![DatedTimeSlot::new("2026-03-09", 1, h(8), h(12), 0)];
        let result = validate_match_request(&sample_availabilities(), &slots, h(2));
        assert!(has_kind(result, ValidationErrorKind::UnknownDate));
    }

    #[test]
    fn test_unsorted_free_intervals() {
        let avails = vec![DateAvailability::new(
            "2026-03-02",
            h(8),
            h(17),
            vec![FreeInterval::new(h(12), h(17)), FreeInterval::new(h(8), h(10))],
            0,
        )];
        let slots = vec![DatedTimeSlot::new("2026-03-02", 1, h(8), h(12), 0)];
        let result = validate_match_request(&avails, &slots, h(2));
        assert!(has_kind(result, ValidationErrorKind::UnsortedFreeIntervals));
    }

    #[test]
    fn test_inverted_window_is_not_an_error() {
        let avails = vec![DateAvailability::new("2026-03-02", h(17), h(8), Vec::new(), 0)];
        let slots = vec![DatedTimeSlot::new("2026-03-02", 1, h(8), h(12), 0)];
        assert!(validate_match_request(&avails, &slots, h(2)).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let slots = vec![
            DatedTimeSlot::new("2026-03-02", 1, h(12), h(8), 0), // inverted
            DatedTimeSlot::new("2026-04-01", 3, h(8), h(12), 1), // unknown date
        ];
        let errors = validate_match_request(&sample_availabilities(), &slots, -1).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}

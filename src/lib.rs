//! Matchmaking and time-placement engine for booking marketplaces.
//!
//! Given a worker's existing commitments and a client's requested time
//! windows, answers two questions: *when exactly should this job be
//! scheduled*, and *how good a match is this worker*.
//!
//! # Modules
//!
//! - **`time`**: `"HH:MM"` ⇄ microseconds-since-midnight codec
//! - **`models`**: Domain types: `TimeSlot`, `BookingSlot`, `FreeInterval`,
//!   `DatedTimeSlot`, `DateAvailability`, `Placement`, `DatedPlacement`
//! - **`config`**: `MatchConfig` and loading from a settings store
//! - **`scheduler`**: Free-interval computation, single-day placement,
//!   multi-day search
//! - **`scoring`**: 0–100 match score and roster ranking
//! - **`validation`**: Optional request integrity checks
//!
//! # Architecture
//!
//! Every operation is a pure, synchronous function over borrowed inputs.
//! Nothing is persisted, no I/O is performed, and "no viable placement"
//! is `None` rather than an error. Loading bookings, availability and
//! settings is the caller's job.
//!
//! # Example
//!
//! ```
//! use u_matchmaking::config::MatchConfig;
//! use u_matchmaking::models::{BookingSlot, DateAvailability, DatedTimeSlot};
//! use u_matchmaking::scheduler::find_best_placement_across_dates;
//! use u_matchmaking::time::{format_hhmm, parse_hhmm};
//!
//! let config = MatchConfig::default();
//! let monday = DateAvailability::from_bookings(
//!     "2026-03-02",
//!     parse_hhmm("08:00"),
//!     parse_hhmm("17:00"),
//!     &[BookingSlot::new(parse_hhmm("08:00"), parse_hhmm("10:00"))],
//!     config.buffer_us(),
//! );
//! let slots = [DatedTimeSlot::new("2026-03-02", 1, parse_hhmm("10:00"), parse_hhmm("13:00"), 0)];
//!
//! let placement =
//!     find_best_placement_across_dates(&[monday], &slots, parse_hhmm("02:00"), &config).unwrap();
//! assert_eq!(format_hhmm(placement.start_us), "10:15");
//! assert_eq!(format_hhmm(placement.end_us), "12:15");
//! ```

pub mod config;
pub mod models;
pub mod scheduler;
pub mod scoring;
pub mod time;
pub mod validation;

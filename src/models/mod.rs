//! Matchmaking domain models.
//!
//! Transient value types built per matching request and discarded once
//! the caller consumes the result. Nothing here is persisted.
//!
//! # Domain Mappings
//!
//! | u-matchmaking | Cleaning marketplace | Field service |
//! |---------------|----------------------|---------------|
//! | TimeSlot | Client's preferred window | Customer appointment window |
//! | BookingSlot | Existing cleaning job | Existing visit |
//! | DateAvailability | Cleaner's working day | Technician shift |
//! | DatedPlacement | Assigned start time | Dispatched visit |

mod availability;
mod interval;
mod placement;

pub use availability::{DateAvailability, DatedTimeSlot};
pub use interval::{BookingSlot, FreeInterval, TimeSlot};
pub use placement::{DatedPlacement, Placement};

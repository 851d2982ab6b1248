//! Core engine for goca booking pages.
//!
//! Turns a host's weekly availability and an event type's duration into the
//! start times a guest can book on a given date:
//! - `availability`: the weekly `AvailabilityModel` and its `DayRule`s
//! - `resolver`: snapping a picked date off a blocked weekend
//! - `slots`: enumerating start times with the event duration as step
//! - `filter`: the day-level and slot-level past-time gates
//! - `session`: the above composed for one event type, plus booking submission
//!
//! Times of day are HHMM integers throughout (see `time`).

pub mod availability;
pub mod booking;
pub mod client;
pub mod config;
pub mod error;
pub mod event_type;
pub mod filter;
pub mod protocol;
pub mod resolver;
pub mod session;
pub mod slots;
pub mod time;

pub use availability::{AvailabilityModel, DayRule};
pub use booking::{BookingConfirmation, BookingRequest, BookingSubmitter, GuestDetails};
pub use error::{GocaError, GocaResult};
pub use event_type::{EventType, MeetingLocation};
pub use session::{BookingSession, DaySchedule, DayStatus};
pub use slots::Slot;
pub use time::Hhmm;

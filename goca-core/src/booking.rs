//! Booking requests and the submission boundary.

use std::fmt;
use std::future::Future;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::GocaResult;
use crate::event_type::MeetingLocation;
use crate::slots::Slot;
use crate::time::Hhmm;

/// Contact details a guest fills in before confirming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestDetails {
    pub name: String,
    pub email: String,
    pub notes: Option<String>,
}

/// Body of `POST /booking`.
///
/// `date` is midnight of the booking date in the guest's timezone, as epoch
/// seconds, and `time` the chosen start as an HHMM integer. The backend reads
/// `date` back in the host's timezone, so it must be the guest's midnight and
/// not UTC's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub username: String,
    pub event_type_id: i64,
    pub date: i64,
    pub time: Hhmm,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_location: Option<MeetingLocation>,
}

impl BookingRequest {
    pub fn new(
        username: impl Into<String>,
        event_type_id: i64,
        slot: &Slot,
        guest: GuestDetails,
        meeting_location: Option<MeetingLocation>,
        guest_offset: FixedOffset,
    ) -> Self {
        BookingRequest {
            username: username.into(),
            event_type_id,
            date: date_marker(slot.date, guest_offset),
            time: slot.start,
            name: guest.name,
            email: guest.email,
            notes: guest.notes.filter(|n| !n.trim().is_empty()),
            meeting_location,
        }
    }

    /// The calendar date encoded in `date`, read at `offset`.
    pub fn booking_date(&self, offset: FixedOffset) -> Option<NaiveDate> {
        DateTime::from_timestamp(self.date, 0)
            .map(|dt| dt.with_timezone(&offset).date_naive())
    }
}

/// Midnight of `date` at `offset`, as epoch seconds.
pub fn date_marker(date: NaiveDate, offset: FixedOffset) -> i64 {
    let utc_midnight = date.and_time(NaiveTime::default()).and_utc().timestamp();
    utc_midnight - i64::from(offset.local_minus_utc())
}

/// Identifier the backend hands back for a created booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BookingId {
    Number(i64),
    Text(String),
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingId::Number(n) => write!(f, "{n}"),
            BookingId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub id: BookingId,
}

/// Delivers a booking to whatever creates the meeting.
///
/// Called once per confirmation. Implementations report failures as
/// [`GocaError::SubmissionFailed`](crate::error::GocaError::SubmissionFailed)
/// and must not retry, since a retry can create the meeting twice.
pub trait BookingSubmitter {
    fn submit(
        &self,
        request: &BookingRequest,
    ) -> impl Future<Output = GocaResult<BookingConfirmation>> + Send;
}

//! One guest's booking session for one event type.
//!
//! Composes the resolver, generator and both past-time gates over an
//! immutable snapshot of the host's event type. Every call takes the caller's
//! `now` so the day gate and the slot gate agree within a request.

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, Offset, Utc};
use tracing::debug;

use crate::booking::{BookingConfirmation, BookingRequest, BookingSubmitter, GuestDetails};
use crate::error::GocaResult;
use crate::event_type::{EventType, MeetingLocation};
use crate::filter::{is_bookable, is_slot_open};
use crate::protocol::HostProfile;
use crate::resolver::{ResolvedDay, resolve};
use crate::slots::{Slot, slots_for};
use crate::time::Hhmm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    /// Slots can be booked.
    Open,
    /// The resolved date is before today.
    PastDay,
    /// Today, but the window has already closed.
    ClosedForToday,
    /// The resolved weekday accepts no bookings.
    Blocked,
}

/// What a guest sees after picking a date.
#[derive(Debug, Clone)]
pub struct DaySchedule {
    /// The date the guest picked.
    pub requested: NaiveDate,
    pub day: ResolvedDay,
    pub status: DayStatus,
    /// Every start time in the window, before past-time filtering.
    pub grid: Vec<Slot>,
    /// Start times that can still be booked.
    pub slots: Vec<Slot>,
}

impl DaySchedule {
    pub fn is_available(&self) -> bool {
        self.status == DayStatus::Open
    }

    pub fn was_snapped(&self) -> bool {
        self.requested != self.day.date
    }

    pub fn labels(&self) -> Vec<String> {
        self.slots.iter().map(|s| s.start.to_string()).collect()
    }

    pub fn find(&self, start: Hhmm) -> Option<&Slot> {
        self.slots.iter().find(|s| s.start == start)
    }
}

#[derive(Debug, Clone)]
pub struct BookingSession {
    username: String,
    event_type: EventType,
    guest_offset: FixedOffset,
}

impl BookingSession {
    /// A session for a guest at UTC. See [`BookingSession::with_guest_offset`].
    pub fn new(username: impl Into<String>, event_type: EventType) -> Self {
        BookingSession {
            username: username.into(),
            event_type,
            guest_offset: Utc.fix(),
        }
    }

    /// The guest's UTC offset on the booking date. Booking dates are sent as
    /// the guest's local midnight.
    pub fn with_guest_offset(mut self, offset: FixedOffset) -> Self {
        self.guest_offset = offset;
        self
    }

    pub fn from_profile(profile: &HostProfile, event_type_id: i64) -> GocaResult<Self> {
        let event_type = profile.event_type(event_type_id)?;
        Ok(Self::new(&profile.username, event_type))
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn event_type(&self) -> &EventType {
        &self.event_type
    }

    pub fn guest_offset(&self) -> FixedOffset {
        self.guest_offset
    }

    /// Resolve `candidate` and list the slots that are still bookable.
    pub fn open_day(&self, candidate: NaiveDate, now: NaiveDateTime) -> GocaResult<DaySchedule> {
        let day = resolve(candidate, self.event_type.availability());
        if day.date != candidate {
            debug!(from = %candidate, to = %day.date, "Snapped blocked date");
        }

        let Some((start, end)) = day.rule.window() else {
            debug!(date = %day.date, weekday = %day.rule.weekday, "Resolved day is blocked");
            return Ok(DaySchedule {
                requested: candidate,
                day,
                status: DayStatus::Blocked,
                grid: Vec::new(),
                slots: Vec::new(),
            });
        };

        let grid = slots_for(day.date, start, end, self.event_type.duration_minutes())?;

        let status = if day.date < now.date() {
            DayStatus::PastDay
        } else if !is_bookable(day.date, end, now) {
            DayStatus::ClosedForToday
        } else {
            DayStatus::Open
        };

        let slots = match status {
            DayStatus::Open => grid.iter().copied().filter(|s| is_slot_open(s, now)).collect(),
            _ => Vec::new(),
        };

        debug!(
            date = %day.date,
            ?status,
            grid = grid.len(),
            open = slots.len(),
            "Opened day"
        );

        Ok(DaySchedule {
            requested: candidate,
            day,
            status,
            grid,
            slots,
        })
    }

    /// Assemble the request for a chosen slot.
    pub fn confirm(
        &self,
        slot: &Slot,
        guest: GuestDetails,
        meeting_location: Option<MeetingLocation>,
    ) -> BookingRequest {
        BookingRequest::new(
            &self.username,
            self.event_type.id,
            slot,
            guest,
            meeting_location,
            self.guest_offset,
        )
    }

    /// Hand the request to `submitter` exactly once.
    pub async fn submit<S: BookingSubmitter>(
        &self,
        submitter: &S,
        request: BookingRequest,
    ) -> GocaResult<BookingConfirmation> {
        debug!(
            username = %request.username,
            event_type_id = request.event_type_id,
            time = %request.time,
            "Submitting booking"
        );
        submitter.submit(&request).await
    }

    /// The time a meeting starting at `slot` ends, for display.
    pub fn meeting_end(&self, slot: &Slot) -> Hhmm {
        slot.end(self.event_type.duration_minutes())
    }
}

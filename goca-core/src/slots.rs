//! Candidate start times within a day's window.
//!
//! The step between slots is the event's own duration, so a 45 minute event
//! and a 30 minute event on the same window produce different grids.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::error::{GocaError, GocaResult};
use crate::time::Hhmm;

/// One bookable start time on a specific date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Slot {
    pub date: NaiveDate,
    pub start: Hhmm,
}

impl Slot {
    pub fn new(date: NaiveDate, start: Hhmm) -> Self {
        Slot { date, start }
    }

    /// When a meeting of `duration_minutes` booked on this slot ends.
    pub fn end(&self, duration_minutes: i64) -> Hhmm {
        self.start.add_minutes(duration_minutes)
    }

    pub fn starts_at(&self) -> NaiveDateTime {
        let time = NaiveTime::from_hms_opt(self.start.hours(), self.start.minutes(), 0)
            .unwrap_or_default();
        self.date.and_time(time)
    }
}

/// Iterator over start times from `start` to `end` inclusive.
#[derive(Debug, Clone)]
pub struct SlotTimes {
    next: Option<u32>,
    end: u32,
    step: u32,
}

impl Iterator for SlotTimes {
    type Item = Hhmm;

    fn next(&mut self) -> Option<Hhmm> {
        let current = self.next.filter(|minutes| *minutes <= self.end)?;
        let time = Hhmm::from_minutes_of_day(current)?;
        self.next = current.checked_add(self.step);
        Some(time)
    }
}

/// Enumerate start times from `window_start`, advancing by `step_minutes`,
/// for as long as the time is not past `window_end`.
pub fn generate(window_start: Hhmm, window_end: Hhmm, step_minutes: i64) -> GocaResult<SlotTimes> {
    if step_minutes <= 0 {
        return Err(GocaError::InvalidDuration(step_minutes));
    }

    Ok(SlotTimes {
        next: Some(window_start.minutes_of_day()),
        end: window_end.minutes_of_day(),
        step: u32::try_from(step_minutes).unwrap_or(u32::MAX),
    })
}

/// [`generate`] rendered as `HH:MM` labels.
pub fn generate_labels(
    window_start: Hhmm,
    window_end: Hhmm,
    step_minutes: i64,
) -> GocaResult<Vec<String>> {
    Ok(generate(window_start, window_end, step_minutes)?
        .map(|time| time.to_string())
        .collect())
}

/// [`generate`] attached to a date.
pub fn slots_for(
    date: NaiveDate,
    window_start: Hhmm,
    window_end: Hhmm,
    step_minutes: i64,
) -> GocaResult<Vec<Slot>> {
    Ok(generate(window_start, window_end, step_minutes)?
        .map(|start| Slot::new(date, start))
        .collect())
}

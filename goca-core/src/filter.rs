//! Past-time gates.
//!
//! Two separate checks, both against an explicit `now`:
//! - [`is_bookable`] gates the whole day against the window's close time.
//! - [`is_slot_open`] gates a single start time on today's date.
//!
//! A day can pass the first check while some of its slots fail the second.

use chrono::{NaiveDate, NaiveDateTime};

use crate::slots::Slot;
use crate::time::Hhmm;

/// Whether `date` still has capacity as of `now`.
///
/// Past days are never bookable and future days always are. Today is
/// bookable until `now` passes `window_end`.
pub fn is_bookable(date: NaiveDate, window_end: Hhmm, now: NaiveDateTime) -> bool {
    let today = now.date();
    if date < today {
        return false;
    }
    if date != today {
        return true;
    }
    Hhmm::from_time(&now) <= window_end
}

/// Whether a single slot has not started yet as of `now`.
pub fn is_slot_open(slot: &Slot, now: NaiveDateTime) -> bool {
    let today = now.date();
    if slot.date != today {
        return slot.date > today;
    }
    Hhmm::from_time(&now) <= slot.start
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(encoded: u16) -> Hhmm {
        Hhmm::new(encoded).unwrap()
    }

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn day(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, day).unwrap()
    }

    #[test]
    fn test_yesterday_never_bookable() {
        let now = at(20, 0, 1);
        for end in [0, 900, 1700, 2359] {
            assert!(!is_bookable(day(19), t(end), now));
        }
    }

    #[test]
    fn test_future_day_always_bookable() {
        let now = at(20, 23, 59);
        assert!(is_bookable(day(21), t(0), now));
        assert!(is_bookable(day(27), t(900), now));
    }

    #[test]
    fn test_today_gated_by_window_end() {
        let now = at(20, 18, 30);
        assert!(!is_bookable(day(20), t(1700), now));
        assert!(is_bookable(day(20), t(2000), now));
        assert!(is_bookable(day(20), t(1830), now));
    }

    #[test]
    fn test_day_gate_ignores_individual_slots() {
        // Most of the window has passed but the day is still open
        let now = at(20, 16, 45);
        assert!(is_bookable(day(20), t(1700), now));

        let early = Slot::new(day(20), t(900));
        assert!(!is_slot_open(&early, now));
    }

    #[test]
    fn test_slot_gate() {
        let now = at(20, 10, 15);
        assert!(!is_slot_open(&Slot::new(day(20), t(1000)), now));
        assert!(is_slot_open(&Slot::new(day(20), t(1015)), now));
        assert!(is_slot_open(&Slot::new(day(20), t(1030)), now));
        assert!(is_slot_open(&Slot::new(day(21), t(0)), now));
        assert!(!is_slot_open(&Slot::new(day(19), t(2359)), now));
    }
}

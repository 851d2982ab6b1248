//! Picking the effective booking date for a guest's selection.
//!
//! A disabled Saturday or Sunday is snapped forward to Monday. Any other
//! disabled weekday is left where it is and resolves to its closed rule, so
//! models are expected to disable at most the weekend.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::availability::{AvailabilityModel, DayRule};

/// The date a booking will actually be made on, with that day's rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedDay {
    pub date: NaiveDate,
    pub rule: DayRule,
}

impl ResolvedDay {
    pub fn is_open(&self) -> bool {
        self.rule.enabled
    }
}

pub fn resolve(candidate: NaiveDate, availability: &AvailabilityModel) -> ResolvedDay {
    let date = if availability.rule_for_date(candidate).enabled {
        candidate
    } else {
        snap_weekend(candidate)
    };

    ResolvedDay {
        date,
        rule: *availability.rule_for_date(date),
    }
}

/// Where the date picker opens: today, or Monday if today is on a weekend.
/// Applied before any availability is known.
pub fn initial_date(today: NaiveDate) -> NaiveDate {
    snap_weekend(today)
}

/// Whether the date picker should let a guest choose `date`.
pub fn is_selectable(date: NaiveDate, today: NaiveDate, availability: &AvailabilityModel) -> bool {
    date >= today && availability.rule_for_date(date).enabled
}

fn snap_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sun => date + Duration::days(1),
        Weekday::Sat => date + Duration::days(2),
        _ => date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{Hhmm, weekday_from_index};

    fn t(encoded: u16) -> Hhmm {
        Hhmm::new(encoded).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn model_with(disabled: &[Weekday]) -> AvailabilityModel {
        let rules = (0..7u8).map(|i| {
            let weekday = weekday_from_index(i).unwrap();
            if disabled.contains(&weekday) {
                DayRule::closed(weekday)
            } else {
                DayRule::new(weekday, true, t(900), t(1700)).unwrap()
            }
        });
        AvailabilityModel::new("Work", "UTC", rules).unwrap()
    }

    #[test]
    fn test_all_enabled_is_identity() {
        let model = model_with(&[]);
        let start = date(2026, 10, 12);
        for offset in 0..14 {
            let day = start + Duration::days(offset);
            let resolved = resolve(day, &model);
            assert_eq!(resolved.date, day);
            assert!(resolved.is_open());
        }
    }

    #[test]
    fn test_weekend_snaps_to_monday() {
        let model = model_with(&[Weekday::Sat, Weekday::Sun]);
        let monday = date(2026, 10, 19);

        let saturday = resolve(date(2026, 10, 17), &model);
        assert_eq!(saturday.date, monday);
        assert!(saturday.rule.enabled);
        assert_eq!(saturday.rule.weekday, Weekday::Mon);

        let sunday = resolve(date(2026, 10, 18), &model);
        assert_eq!(sunday.date, monday);
        assert!(sunday.rule.enabled);
    }

    #[test]
    fn test_enabled_weekend_is_kept() {
        let model = model_with(&[Weekday::Sun]);
        let saturday = date(2026, 10, 17);
        assert_eq!(resolve(saturday, &model).date, saturday);
    }

    #[test]
    fn test_other_disabled_weekday_is_not_moved() {
        let model = model_with(&[Weekday::Wed]);
        let wednesday = date(2026, 10, 21);
        let resolved = resolve(wednesday, &model);
        assert_eq!(resolved.date, wednesday);
        assert!(!resolved.is_open());
    }

    #[test]
    fn test_snap_lands_on_disabled_monday() {
        let model = model_with(&[Weekday::Sat, Weekday::Sun, Weekday::Mon]);
        let resolved = resolve(date(2026, 10, 17), &model);
        assert_eq!(resolved.date, date(2026, 10, 19));
        assert!(!resolved.is_open());
    }

    #[test]
    fn test_initial_date_skips_weekend() {
        assert_eq!(initial_date(date(2026, 10, 17)), date(2026, 10, 19));
        assert_eq!(initial_date(date(2026, 10, 18)), date(2026, 10, 19));
        assert_eq!(initial_date(date(2026, 10, 20)), date(2026, 10, 20));
    }

    #[test]
    fn test_is_selectable() {
        let model = model_with(&[Weekday::Sat, Weekday::Sun]);
        let today = date(2026, 10, 20);
        assert!(is_selectable(today, today, &model));
        assert!(!is_selectable(date(2026, 10, 19), today, &model));
        assert!(!is_selectable(date(2026, 10, 24), today, &model));
        assert!(is_selectable(date(2026, 10, 26), today, &model));
    }
}

//! A host's recurring weekly availability.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{GocaError, GocaResult};
use crate::time::{Hhmm, weekday_from_index, weekday_index};

/// The open window for one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRule {
    pub weekday: Weekday,
    pub enabled: bool,
    pub start_time: Hhmm,
    pub end_time: Hhmm,
}

impl DayRule {
    pub fn new(
        weekday: Weekday,
        enabled: bool,
        start_time: Hhmm,
        end_time: Hhmm,
    ) -> GocaResult<Self> {
        if enabled && start_time > end_time {
            return Err(GocaError::InvalidModel(format!(
                "{weekday} window starts at {start_time} but ends at {end_time}"
            )));
        }
        Ok(DayRule {
            weekday,
            enabled,
            start_time,
            end_time,
        })
    }

    /// A disabled day. The window is kept at midnight and never read.
    pub fn closed(weekday: Weekday) -> Self {
        DayRule {
            weekday,
            enabled: false,
            start_time: Hhmm::MIDNIGHT,
            end_time: Hhmm::MIDNIGHT,
        }
    }

    /// `(start, end)` when the day accepts bookings.
    pub fn window(&self) -> Option<(Hhmm, Hhmm)> {
        self.enabled.then_some((self.start_time, self.end_time))
    }
}

/// Weekly schedule, one rule per weekday, indexed 0=Sunday..6=Saturday.
///
/// The timezone is carried for display only; no conversion is ever done with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityModel {
    label: String,
    timezone: String,
    days: [DayRule; 7],
}

impl AvailabilityModel {
    /// Build a model from exactly seven rules covering every weekday once.
    pub fn new(
        label: impl Into<String>,
        timezone: impl Into<String>,
        rules: impl IntoIterator<Item = DayRule>,
    ) -> GocaResult<Self> {
        let mut slots: [Option<DayRule>; 7] = [None; 7];

        for rule in rules {
            let idx = usize::from(weekday_index(rule.weekday));
            if slots[idx].replace(rule).is_some() {
                return Err(GocaError::InvalidModel(format!(
                    "duplicate rule for {}",
                    rule.weekday
                )));
            }
        }

        let mut days = [DayRule::closed(Weekday::Sun); 7];
        for (idx, slot) in slots.into_iter().enumerate() {
            days[idx] = slot.ok_or_else(|| {
                let weekday = weekday_from_index(idx as u8).unwrap_or(Weekday::Sun);
                GocaError::InvalidModel(format!("missing rule for {weekday}"))
            })?;
        }

        Ok(AvailabilityModel {
            label: label.into(),
            timezone: timezone.into(),
            days,
        })
    }

    /// Monday to Friday open between `start` and `end`, weekends closed.
    pub fn working_week(
        label: impl Into<String>,
        timezone: impl Into<String>,
        start: Hhmm,
        end: Hhmm,
    ) -> GocaResult<Self> {
        let mut rules = Vec::with_capacity(7);
        for idx in 0..7u8 {
            let Some(weekday) = weekday_from_index(idx) else {
                continue;
            };
            let rule = match weekday {
                Weekday::Sat | Weekday::Sun => DayRule::closed(weekday),
                _ => DayRule::new(weekday, true, start, end)?,
            };
            rules.push(rule);
        }
        Self::new(label, timezone, rules)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    pub fn days(&self) -> &[DayRule; 7] {
        &self.days
    }

    pub fn rule_for(&self, weekday: Weekday) -> &DayRule {
        &self.days[usize::from(weekday_index(weekday))]
    }

    pub fn rule_for_date(&self, date: NaiveDate) -> &DayRule {
        self.rule_for(date.weekday())
    }

    /// Weekdays that accept no bookings, Sunday first.
    pub fn blocked_weekdays(&self) -> Vec<Weekday> {
        self.days
            .iter()
            .filter(|rule| !rule.enabled)
            .map(|rule| rule.weekday)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(encoded: u16) -> Hhmm {
        Hhmm::new(encoded).unwrap()
    }

    fn week() -> Vec<DayRule> {
        (0..7u8)
            .map(|i| DayRule::new(weekday_from_index(i).unwrap(), true, t(900), t(1700)).unwrap())
            .collect()
    }

    #[test]
    fn test_lookup_by_weekday() {
        let mut rules = week();
        rules[3] = DayRule::new(Weekday::Wed, true, t(1000), t(1430)).unwrap();
        let model = AvailabilityModel::new("Work", "Asia/Makassar", rules).unwrap();

        let wednesday = NaiveDate::from_ymd_opt(2026, 10, 21).unwrap();
        let rule = model.rule_for_date(wednesday);
        assert_eq!(rule.weekday, Weekday::Wed);
        assert_eq!(rule.window(), Some((t(1000), t(1430))));
        assert_eq!(model.rule_for(Weekday::Mon).start_time, t(900));
    }

    #[test]
    fn test_rules_in_any_order() {
        let mut rules = week();
        rules.reverse();
        let model = AvailabilityModel::new("Work", "UTC", rules).unwrap();
        for (idx, rule) in model.days().iter().enumerate() {
            assert_eq!(usize::from(weekday_index(rule.weekday)), idx);
        }
    }

    #[test]
    fn test_missing_weekday_is_invalid() {
        let mut rules = week();
        rules.remove(2);
        let err = AvailabilityModel::new("Work", "UTC", rules).unwrap_err();
        assert!(matches!(err, GocaError::InvalidModel(msg) if msg.contains("Tue")));
    }

    #[test]
    fn test_duplicate_weekday_is_invalid() {
        let mut rules = week();
        rules[2] = DayRule::closed(Weekday::Mon);
        let err = AvailabilityModel::new("Work", "UTC", rules).unwrap_err();
        assert!(matches!(err, GocaError::InvalidModel(_)));
    }

    #[test]
    fn test_inverted_window_is_invalid_only_when_enabled() {
        assert!(DayRule::new(Weekday::Mon, true, t(1700), t(900)).is_err());
        assert!(DayRule::new(Weekday::Mon, false, t(1700), t(900)).is_ok());
        assert!(DayRule::new(Weekday::Mon, true, t(900), t(900)).is_ok());
    }

    #[test]
    fn test_working_week_blocks_weekend() {
        let model = AvailabilityModel::working_week("Work", "UTC", t(900), t(1700)).unwrap();
        assert_eq!(model.blocked_weekdays(), vec![Weekday::Sun, Weekday::Sat]);
        assert_eq!(model.rule_for(Weekday::Sat).window(), None);
        assert_eq!(model.label(), "Work");
        assert_eq!(model.timezone(), "UTC");
    }
}

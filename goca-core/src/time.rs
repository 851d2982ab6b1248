//! HHMM time-of-day encoding.
//!
//! Times of day travel between the booking page and the backend as plain
//! integers where the last two digits are minutes and the rest is hours
//! (`1705` is 17:05). `Hhmm` wraps that integer so the rest of the crate can
//! do minutes-of-day arithmetic without ever sending a raw minute count over
//! the wire.

use std::fmt;
use std::str::FromStr;

use chrono::{Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{GocaError, GocaResult};

const MINUTES_PER_DAY: u32 = 24 * 60;

/// A validated `HHMM` time of day in the range `0000..=2359`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Hhmm(u16);

impl Hhmm {
    pub const MIDNIGHT: Hhmm = Hhmm(0);

    /// Validate an encoded value. Hours must be below 24 and minutes below 60.
    pub fn new(encoded: u16) -> GocaResult<Self> {
        let (hours, minutes) = (encoded / 100, encoded % 100);
        if hours > 23 || minutes > 59 {
            return Err(GocaError::InvalidModel(format!(
                "'{encoded}' is not a valid HHMM time"
            )));
        }
        Ok(Hhmm(encoded))
    }

    pub fn from_hm(hours: u32, minutes: u32) -> Option<Self> {
        if hours > 23 || minutes > 59 {
            return None;
        }
        Some(Hhmm((hours * 100 + minutes) as u16))
    }

    pub fn from_minutes_of_day(minutes: u32) -> Option<Self> {
        if minutes >= MINUTES_PER_DAY {
            return None;
        }
        Self::from_hm(minutes / 60, minutes % 60)
    }

    /// Encode the wall-clock time of any chrono time value, dropping seconds.
    pub fn from_time<T: Timelike>(time: &T) -> Self {
        Hhmm((time.hour() * 100 + time.minute()) as u16)
    }

    pub fn encoded(&self) -> u16 {
        self.0
    }

    pub fn hours(&self) -> u32 {
        u32::from(self.0 / 100)
    }

    pub fn minutes(&self) -> u32 {
        u32::from(self.0 % 100)
    }

    pub fn minutes_of_day(&self) -> u32 {
        self.hours() * 60 + self.minutes()
    }

    /// Add a (possibly negative) number of minutes, wrapping around midnight.
    pub fn add_minutes(&self, minutes: i64) -> Self {
        let day = i64::from(MINUTES_PER_DAY);
        let shifted = i64::from(self.minutes_of_day()) + minutes.rem_euclid(day);
        let total = shifted.rem_euclid(day) as u32;
        Hhmm((total / 60 * 100 + total % 60) as u16)
    }

    /// 12-hour rendering used on the availability editor, e.g. `09:30am`, `12:00pm`.
    pub fn to_12h(&self) -> String {
        let hours = self.hours();
        let period = if hours < 12 { "am" } else { "pm" };
        let display_hour = match hours % 12 {
            0 => 12,
            h => h,
        };
        format!("{:02}:{:02}{}", display_hour, self.minutes(), period)
    }

    /// Parse the 12-hour rendering produced by [`Hhmm::to_12h`].
    pub fn parse_12h(s: &str) -> GocaResult<Self> {
        let lower = s.trim().to_ascii_lowercase();
        let (clock, afternoon) = if let Some(clock) = lower.strip_suffix("am") {
            (clock, false)
        } else if let Some(clock) = lower.strip_suffix("pm") {
            (clock, true)
        } else {
            return Err(invalid_time(s));
        };

        let (hours, minutes) = split_clock(clock.trim()).ok_or_else(|| invalid_time(s))?;
        if !(1..=12).contains(&hours) {
            return Err(invalid_time(s));
        }

        let hours = match (hours, afternoon) {
            (12, false) => 0,
            (12, true) => 12,
            (h, false) => h,
            (h, true) => h + 12,
        };
        Self::from_hm(hours, minutes).ok_or_else(|| invalid_time(s))
    }
}

impl TryFrom<u16> for Hhmm {
    type Error = GocaError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Hhmm::new(value)
    }
}

impl From<Hhmm> for u16 {
    fn from(value: Hhmm) -> Self {
        value.0
    }
}

/// 24-hour `HH:MM`, the format slots are displayed and submitted in.
impl fmt::Display for Hhmm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours(), self.minutes())
    }
}

/// Parses `HH:MM` by joining the hour and minute digits, so `"09:30"` becomes `930`.
impl FromStr for Hhmm {
    type Err = GocaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hours, minutes) = split_clock(s.trim()).ok_or_else(|| invalid_time(s))?;
        let encoded = u16::try_from(hours * 100 + minutes).map_err(|_| invalid_time(s))?;
        Hhmm::new(encoded).map_err(|_| invalid_time(s))
    }
}

fn split_clock(s: &str) -> Option<(u32, u32)> {
    let (hours, minutes) = s.split_once(':')?;
    if hours.is_empty() || hours.len() > 2 || minutes.len() != 2 {
        return None;
    }
    if !hours.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((hours.parse().ok()?, minutes.parse().ok()?))
}

fn invalid_time(s: &str) -> GocaError {
    GocaError::InvalidModel(format!("'{s}' is not a valid time of day"))
}

/// The 15-minute grid offered when a host edits an availability window.
pub fn quarter_hours() -> impl Iterator<Item = Hhmm> {
    (0..MINUTES_PER_DAY / 15).filter_map(|i| Hhmm::from_minutes_of_day(i * 15))
}

/// Map the 0=Sunday weekday numbering used by availability records to chrono.
pub fn weekday_from_index(index: u8) -> Option<Weekday> {
    let weekday = match index {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        6 => Weekday::Sat,
        _ => return None,
    };
    Some(weekday)
}

pub fn weekday_index(weekday: Weekday) -> u8 {
    weekday.num_days_from_sunday() as u8
}

pub fn weekday_name(index: u8) -> Option<&'static str> {
    let name = match weekday_from_index(index)? {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    };
    Some(name)
}

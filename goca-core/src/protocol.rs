//! JSON records exchanged with the goca backend.
//!
//! These mirror the backend's payloads field for field. Nothing here is
//! validated; convert into the domain types before computing slots.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::availability::{AvailabilityModel, DayRule};
use crate::error::{GocaError, GocaResult};
use crate::event_type::{EventType, MeetingLocation};
use crate::time::{Hhmm, weekday_from_index};

// ============================================================================
// Host profile
// ============================================================================

/// Response of `GET /booking/{username}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostProfile {
    pub id: i64,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<AvailabilityRecord>,
    #[serde(default)]
    pub event_types: Vec<EventTypeRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityRecord {
    #[serde(default)]
    pub id: i64,
    pub label: String,
    pub timezone: String,
    #[serde(default)]
    pub days: Vec<DayRecord>,
}

/// One weekday. `enable` is 0 or 1, times are HHMM integers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayRecord {
    #[serde(default)]
    pub id: i64,
    pub enable: i32,
    pub day: i32,
    pub start_time: i32,
    pub end_time: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventTypeRecord {
    pub id: i64,
    #[serde(default)]
    pub enable: i32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Minutes
    pub duration: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<AvailabilityRecord>,
    #[serde(default)]
    pub is_google_available: bool,
    #[serde(default)]
    pub is_microsoft_available: bool,
}

// ============================================================================
// Bookings
// ============================================================================

/// Response of `GET /schedule/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRecord {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub notes: String,
    pub name: String,
    pub email: String,
    pub date: i64,
    pub time: i32,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub event_detail: serde_json::Value,
}

/// Error body returned by the backend. `error` is a message string or, for
/// form validation failures, an object of field messages.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: serde_json::Value,
}

impl ErrorBody {
    pub fn message(&self) -> String {
        match &self.error {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// Best-effort error text from a response body: `{"error": ...}`, a bare JSON
/// string, or the raw text.
pub fn error_message(body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.message();
    }
    if let Ok(serde_json::Value::String(s)) = serde_json::from_str::<serde_json::Value>(body) {
        return s;
    }
    body.trim().to_string()
}

// ============================================================================
// Conversions
// ============================================================================

impl TryFrom<&DayRecord> for DayRule {
    type Error = GocaError;

    fn try_from(record: &DayRecord) -> GocaResult<Self> {
        let weekday = u8::try_from(record.day)
            .ok()
            .and_then(weekday_from_index)
            .ok_or_else(|| {
                GocaError::InvalidModel(format!("weekday {} is not in 0..6", record.day))
            })?;

        let start = hhmm_field(record.start_time, "start_time", weekday)?;
        let end = hhmm_field(record.end_time, "end_time", weekday)?;

        DayRule::new(weekday, record.enable != 0, start, end)
    }
}

fn hhmm_field(value: i32, field: &str, weekday: chrono::Weekday) -> GocaResult<Hhmm> {
    u16::try_from(value)
        .ok()
        .and_then(|v| Hhmm::new(v).ok())
        .ok_or_else(|| {
            GocaError::InvalidModel(format!(
                "{weekday} {field} {value} is not a valid HHMM time"
            ))
        })
}

impl TryFrom<&AvailabilityRecord> for AvailabilityModel {
    type Error = GocaError;

    fn try_from(record: &AvailabilityRecord) -> GocaResult<Self> {
        let rules = record
            .days
            .iter()
            .map(DayRule::try_from)
            .collect::<GocaResult<Vec<_>>>()?;
        AvailabilityModel::new(&record.label, &record.timezone, rules)
    }
}

impl EventTypeRecord {
    /// Build the domain event type. The event's own availability wins; the
    /// host-wide one is used when the record carries none.
    pub fn to_event_type(
        &self,
        host_availability: Option<&Arc<AvailabilityModel>>,
    ) -> GocaResult<EventType> {
        let availability = match (&self.availability, host_availability) {
            (Some(record), _) => Arc::new(AvailabilityModel::try_from(record)?),
            (None, Some(shared)) => Arc::clone(shared),
            (None, None) => {
                return Err(GocaError::InvalidModel(format!(
                    "event type {} has no availability",
                    self.id
                )));
            }
        };

        let mut locations = Vec::new();
        if self.is_google_available {
            locations.push(MeetingLocation::Google);
        }
        if self.is_microsoft_available {
            locations.push(MeetingLocation::Microsoft);
        }

        let mut event = EventType::new(self.id, &self.title, self.duration, availability)?
            .with_description(&self.description)
            .with_locations(locations);
        event.enabled = self.enable != 0;
        Ok(event)
    }
}

impl HostProfile {
    pub fn event_type(&self, id: i64) -> GocaResult<EventType> {
        let record = self
            .event_types
            .iter()
            .find(|e| e.id == id)
            .ok_or(GocaError::EventTypeNotFound(id))?;

        let host_availability = self
            .availability
            .as_ref()
            .map(AvailabilityModel::try_from)
            .transpose()?
            .map(Arc::new);

        record.to_event_type(host_availability.as_ref())
    }
}

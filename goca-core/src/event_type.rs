//! Bookable event types.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::availability::AvailabilityModel;
use crate::error::{GocaError, GocaResult};

/// Where a booked meeting takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeetingLocation {
    /// Google Meet
    Google,
    /// Microsoft Teams
    Microsoft,
}

impl MeetingLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeetingLocation::Google => "google",
            MeetingLocation::Microsoft => "microsoft",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MeetingLocation::Google => "Google Meet",
            MeetingLocation::Microsoft => "Microsoft Teams",
        }
    }
}

impl fmt::Display for MeetingLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MeetingLocation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "google" => Ok(MeetingLocation::Google),
            "microsoft" => Ok(MeetingLocation::Microsoft),
            other => Err(format!(
                "Unknown meeting location '{other}'. Expected 'google' or 'microsoft'"
            )),
        }
    }
}

/// A meeting template a guest can book.
///
/// The availability is shared between every event type of a host and is never
/// modified through this type.
#[derive(Debug, Clone)]
pub struct EventType {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub enabled: bool,
    pub locations: Vec<MeetingLocation>,
    duration_minutes: i64,
    availability: Arc<AvailabilityModel>,
}

impl EventType {
    pub fn new(
        id: i64,
        title: impl Into<String>,
        duration_minutes: i64,
        availability: Arc<AvailabilityModel>,
    ) -> GocaResult<Self> {
        if duration_minutes <= 0 {
            return Err(GocaError::InvalidDuration(duration_minutes));
        }
        Ok(EventType {
            id,
            title: title.into(),
            description: String::new(),
            enabled: true,
            locations: Vec::new(),
            duration_minutes,
            availability,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_locations(mut self, locations: impl IntoIterator<Item = MeetingLocation>) -> Self {
        self.locations = locations.into_iter().collect();
        self
    }

    pub fn duration_minutes(&self) -> i64 {
        self.duration_minutes
    }

    pub fn availability(&self) -> &AvailabilityModel {
        &self.availability
    }

    pub fn shared_availability(&self) -> Arc<AvailabilityModel> {
        Arc::clone(&self.availability)
    }

    pub fn offers(&self, location: MeetingLocation) -> bool {
        self.locations.contains(&location)
    }
}

//! TUI rendering traits for goca types.
//!
//! Extension traits that add colored terminal rendering to goca-core types
//! using owo_colors.

use chrono::NaiveDate;
use goca_core::protocol::BookingRecord;
use goca_core::time::weekday_index;
use goca_core::{AvailabilityModel, DaySchedule, DayStatus, EventType, Slot};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for EventType {
    fn render(&self) -> String {
        let id = format!("[{}]", self.id);
        let duration = format!("{} mins", self.duration_minutes());
        let mut line = format!("{} {} {}", id.dimmed(), self.title.bold(), duration.cyan());

        if !self.locations.is_empty() {
            let names: Vec<_> = self.locations.iter().map(|l| l.display_name()).collect();
            line.push_str(&format!(" {}", names.join(", ").dimmed()));
        }
        if !self.enabled {
            line.push_str(&format!(" {}", "(disabled)".yellow()));
        }
        line
    }
}

impl Render for AvailabilityModel {
    fn render(&self) -> String {
        let mut lines = vec![format!(
            "{} {}",
            self.label().bold(),
            format!("({})", self.timezone()).dimmed()
        )];

        for rule in self.days() {
            let name = goca_core::time::weekday_name(weekday_index(rule.weekday)).unwrap_or("?");
            let hours = match rule.window() {
                Some((start, end)) => format!("{} - {}", start.to_12h(), end.to_12h()),
                None => "unavailable".dimmed().to_string(),
            };
            lines.push(format!("   {:<10} {}", name, hours));
        }

        lines.join("\n")
    }
}

/// Render a slot as its start and end time, e.g. `09:30 - 10:15`.
pub fn render_slot(slot: &Slot, duration_minutes: i64) -> String {
    format!("{} - {}", slot.start, slot.end(duration_minutes))
}

pub fn render_day_header(date: NaiveDate) -> String {
    format!("📅 {}", date.format("%a %-d %b %Y"))
}

impl Render for DaySchedule {
    fn render(&self) -> String {
        let mut lines = vec![render_day_header(self.day.date)];

        if self.was_snapped() {
            lines.push(
                format!("   {} is unavailable, showing the next open day", self.requested)
                    .dimmed()
                    .to_string(),
            );
        }

        let message = match self.status {
            DayStatus::Open if self.slots.is_empty() => Some("No slots left today"),
            DayStatus::Open => None,
            DayStatus::PastDay => Some("This date is in the past"),
            DayStatus::ClosedForToday => Some("Currently not available"),
            DayStatus::Blocked => Some("No bookings on this day"),
        };
        if let Some(message) = message {
            lines.push(format!("   {}", message.yellow()));
        }

        lines.join("\n")
    }
}

impl Render for BookingRecord {
    fn render(&self) -> String {
        let date = chrono::DateTime::from_timestamp(self.date, 0)
            .map(|dt| dt.date_naive().to_string())
            .unwrap_or_else(|| self.date.to_string());
        let time = goca_core::Hhmm::new(u16::try_from(self.time).unwrap_or(u16::MAX))
            .map(|t| t.to_string())
            .unwrap_or_else(|_| self.time.to_string());

        let mut lines = vec![
            format!("{} {}", self.title.bold(), format!("#{}", self.id).dimmed()),
            format!("   When:  {} {}", date, time),
            format!("   Guest: {} <{}>", self.name, self.email),
        ];
        if !self.location.is_empty() {
            lines.push(format!("   Where: {}", self.location));
        }
        if !self.notes.is_empty() {
            lines.push(format!("   Notes: {}", self.notes));
        }
        lines.join("\n")
    }
}

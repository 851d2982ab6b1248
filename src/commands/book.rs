use anyhow::{Context, Result};
use chrono::{FixedOffset, Local, NaiveDate, NaiveTime};
use dialoguer::{Confirm, Input, Select};
use goca_core::client::GocaClient;
use goca_core::config::GocaConfig;
use goca_core::{BookingSession, EventType, GuestDetails, Hhmm, MeetingLocation};
use owo_colors::OwoColorize;

use super::{create_spinner, fetch_host, parse_date};
use crate::render::{Render, render_day_header, render_slot};

pub struct BookArgs {
    pub event: i64,
    pub date: String,
    pub time: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub notes: Option<String>,
    pub location: Option<MeetingLocation>,
    pub yes: bool,
}

pub async fn run(config: &GocaConfig, username: &str, args: BookArgs) -> Result<()> {
    let now = Local::now().naive_local();
    let date = parse_date(&args.date)?;
    let start: Hhmm = args
        .time
        .parse()
        .with_context(|| format!("Invalid time \"{}\". Expected HH:MM", args.time))?;

    let client = GocaClient::from_config(config)?;
    let profile = fetch_host(&client, username).await?;
    let session = BookingSession::from_profile(&profile, args.event)?
        .with_guest_offset(local_offset(date));
    let event = session.event_type();

    let schedule = session.open_day(date, now)?;
    if !schedule.is_available() {
        println!("{}", schedule.render());
        anyhow::bail!("Cannot book {} on {}", event.title, schedule.day.date);
    }
    if schedule.was_snapped() {
        anyhow::bail!(
            "{} is unavailable. The next open day is {}",
            date,
            schedule.day.date
        );
    }

    let Some(slot) = schedule.find(start).copied() else {
        let available = schedule.labels();
        anyhow::bail!(
            "{} is not an open slot on {}. Available: {}",
            start,
            schedule.day.date,
            if available.is_empty() {
                "none".to_string()
            } else {
                available.join(", ")
            }
        );
    };

    let location = resolve_location(event, args.location)?;
    let guest = GuestDetails {
        name: prompt_required(args.name, "  Name")?,
        email: prompt_required(args.email, "  Email")?,
        notes: match args.notes {
            Some(notes) => Some(notes),
            None if args.yes => None,
            None => {
                let notes: String = Input::new()
                    .with_prompt("  Notes (skip)")
                    .default(String::new())
                    .show_default(false)
                    .interact_text()?;
                Some(notes)
            }
        },
    };

    println!();
    println!("{}", event.render());
    println!(
        "{} {}",
        render_day_header(slot.date),
        render_slot(&slot, event.duration_minutes())
    );
    if let Some(location) = location {
        println!("   {}", location.display_name());
    }

    if !args.yes {
        let confirmed = Confirm::new()
            .with_prompt("Book this meeting?")
            .default(true)
            .interact()?;
        if !confirmed {
            return Ok(());
        }
    }

    let request = session.confirm(&slot, guest, location);

    let spinner = create_spinner("Booking".to_string());
    let result = session.submit(&client, request).await;
    spinner.finish_and_clear();

    let confirmation = result?;
    println!(
        "{}",
        format!(
            "  Booked {} at {} on {} (#{})",
            event.title, slot.start, slot.date, confirmation.id
        )
        .green()
    );

    Ok(())
}

/// This machine's UTC offset at midnight on `date`, falling back to the
/// current offset when midnight is skipped by a DST change.
fn local_offset(date: NaiveDate) -> FixedOffset {
    date.and_time(NaiveTime::default())
        .and_local_timezone(Local)
        .earliest()
        .map(|midnight| *midnight.offset())
        .unwrap_or_else(|| *Local::now().offset())
}

/// Use the requested location if the event offers it; otherwise pick the only
/// one offered, or ask.
fn resolve_location(
    event: &EventType,
    requested: Option<MeetingLocation>,
) -> Result<Option<MeetingLocation>> {
    if let Some(location) = requested {
        if !event.offers(location) {
            anyhow::bail!(
                "{} is not offered for {}",
                location.display_name(),
                event.title
            );
        }
        return Ok(Some(location));
    }

    match event.locations.as_slice() {
        [] => Ok(None),
        [only] => Ok(Some(*only)),
        many => {
            let names: Vec<_> = many.iter().map(|l| l.display_name()).collect();
            let idx = Select::new()
                .with_prompt("  Where?")
                .items(&names)
                .default(0)
                .interact()?;
            Ok(many.get(idx).copied())
        }
    }
}

fn prompt_required(value: Option<String>, prompt: &str) -> Result<String> {
    if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
        return Ok(value);
    }
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;
        if !input.trim().is_empty() {
            return Ok(input);
        }
        eprintln!("  {}", "Required".red());
    }
}

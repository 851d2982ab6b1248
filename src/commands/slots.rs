use anyhow::Result;
use chrono::Local;
use goca_core::BookingSession;
use goca_core::client::GocaClient;
use goca_core::config::GocaConfig;
use goca_core::filter::is_slot_open;
use goca_core::resolver::initial_date;
use owo_colors::OwoColorize;

use super::{fetch_host, parse_date};
use crate::render::{Render, render_slot};

pub async fn run(
    config: &GocaConfig,
    username: &str,
    event_type_id: i64,
    date: Option<&str>,
    all: bool,
) -> Result<()> {
    // One snapshot of the clock for the whole listing
    let now = Local::now().naive_local();

    let date = match date {
        Some(input) => parse_date(input)?,
        None => initial_date(now.date()),
    };

    let client = GocaClient::from_config(config)?;
    let profile = fetch_host(&client, username).await?;
    let session = BookingSession::from_profile(&profile, event_type_id)?;
    let event = session.event_type();

    println!("{}", event.render());
    println!(
        "   {}",
        format!("Timezone: {}", event.availability().timezone()).dimmed()
    );
    println!();

    let schedule = session.open_day(date, now)?;
    println!("{}", schedule.render());

    let duration = event.duration_minutes();
    if all {
        for slot in &schedule.grid {
            let line = render_slot(slot, duration);
            if schedule.is_available() && is_slot_open(slot, now) {
                println!("   {}", line.green());
            } else {
                println!("   {}", line.dimmed());
            }
        }
    } else {
        for slot in &schedule.slots {
            println!("   {}", render_slot(slot, duration).green());
        }
    }

    Ok(())
}

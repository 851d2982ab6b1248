use anyhow::Result;
use goca_core::AvailabilityModel;
use goca_core::client::GocaClient;
use goca_core::config::GocaConfig;
use owo_colors::OwoColorize;

use super::fetch_host;
use crate::render::Render;

pub async fn run(config: &GocaConfig, username: &str) -> Result<()> {
    let client = GocaClient::from_config(config)?;
    let profile = fetch_host(&client, username).await?;

    println!("👤 {}", profile.username.bold());

    if let Some(record) = &profile.availability {
        match AvailabilityModel::try_from(record) {
            Ok(model) => println!("{}", model.render()),
            Err(e) => println!("   {}", e.to_string().red()),
        }
    }

    if profile.event_types.is_empty() {
        println!("\n   {}", "No event types".dimmed());
        return Ok(());
    }

    for record in &profile.event_types {
        println!();
        match profile.event_type(record.id) {
            Ok(event) => {
                println!("{}", event.render());
                if !event.description.is_empty() {
                    println!("   {}", event.description.dimmed());
                }
                if profile.availability.is_none() || record.availability.is_some() {
                    println!("{}", event.availability().render());
                }
            }
            Err(e) => println!("[{}] {} {}", record.id, record.title, e.to_string().red()),
        }
    }

    Ok(())
}

pub mod book;
pub mod config;
pub mod host;
pub mod schedule;
pub mod slots;

use anyhow::Result;
use chrono::NaiveDate;

pub use crate::utils::tui::create_spinner;

/// Parse a date given on the command line: YYYY-MM-DD, or natural language
/// such as "tomorrow" or "next friday".
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d") {
        return Ok(date);
    }
    let dt = fuzzydate::parse(input)
        .map_err(|_| anyhow::anyhow!("Could not parse date: \"{}\". Expected YYYY-MM-DD", input))?;
    Ok(dt.date())
}

/// Fetch a host's profile behind a spinner.
pub async fn fetch_host(
    client: &goca_core::client::GocaClient,
    username: &str,
) -> Result<goca_core::protocol::HostProfile> {
    let spinner = create_spinner(format!("Loading {username}"));
    let result = client.host(username).await;
    spinner.finish_and_clear();
    Ok(result?)
}

use anyhow::Result;
use goca_core::config::GocaConfig;
use owo_colors::OwoColorize;

pub fn run(config: &GocaConfig) -> Result<()> {
    println!("{}", GocaConfig::config_path()?.display().to_string().dimmed());
    println!("api_url = {}", config.api_url);
    println!(
        "default_host = {}",
        config.default_host.as_deref().unwrap_or("(not set)")
    );
    println!("request_timeout_secs = {}", config.request_timeout_secs);
    Ok(())
}

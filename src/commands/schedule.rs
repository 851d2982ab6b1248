use anyhow::Result;
use goca_core::client::GocaClient;
use goca_core::config::GocaConfig;

use super::create_spinner;
use crate::render::Render;

pub async fn run(config: &GocaConfig, id: &str) -> Result<()> {
    let client = GocaClient::from_config(config)?;

    let spinner = create_spinner(format!("Loading booking {id}"));
    let result = client.schedule(id).await;
    spinner.finish_and_clear();

    println!("{}", result?.render());
    Ok(())
}

//! Count subcommand - query the live total without harvesting

use anyhow::{Context, Result};
use teamline_spaceapps::fetch_total;

use crate::config::Config;

pub fn run(config: &Config) -> Result<()> {
    let harvest = config.to_harvest_config();
    let total = fetch_total(&harvest).context("failed to fetch total count")?;
    println!("{total}");
    log::info!("{total} teams match event \"{}\"", harvest.event);
    Ok(())
}

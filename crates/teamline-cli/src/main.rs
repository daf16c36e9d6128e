//! teamline - harvester for Space Apps Challenge team data
//!
//! Fetches every team of an event from the source's cursor-paginated
//! GraphQL API and persists them into a SQLite store with deduplication.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod cmd;
mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "teamline")]
#[command(about = "Harvester for Space Apps Challenge team data")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Config file path (default: ./teamline.toml or ~/.config/teamline/config.toml)
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Harvest all teams into the store
    Harvest(cmd::harvest::HarvestArgs),
    /// Print the live total team count for the configured event
    Count,
    /// Show current configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    teamline_core::init_logging(false, cli.debug);

    let config = if let Some(path) = cli.config {
        Config::from_file(&path)?
    } else {
        Config::load()?
    };

    match cli.command {
        Command::Harvest(args) => cmd::harvest::run(args, &config),
        Command::Count => cmd::count::run(&config),
        Command::Config => {
            use comfy_table::{
                Cell, Color, Table, modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL,
            };

            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .apply_modifier(UTF8_ROUND_CORNERS)
                .set_header(vec![
                    Cell::new("Setting").fg(Color::Cyan),
                    Cell::new("Value").fg(Color::Cyan),
                ]);

            table.add_row(vec!["Endpoint", &config.source.endpoint]);
            table.add_row(vec!["Event", &config.source.event]);
            table.add_row(vec!["Page size", &config.harvest.page_size.to_string()]);
            table.add_row(vec!["Workers", &config.harvest.workers.to_string()]);
            table.add_row(vec![
                "Fallback total",
                &config.harvest.fallback_total.to_string(),
            ]);
            table.add_row(vec![
                "Request timeout",
                &format!("{}s", config.http.timeout_secs),
            ]);
            table.add_row(vec![
                "Jitter",
                &format!(
                    "{}-{}ms",
                    config.http.jitter_min_ms, config.http.jitter_max_ms
                ),
            ]);
            table.add_row(vec![
                "Store",
                &config.store.db_path.display().to_string(),
            ]);

            eprintln!("\n{table}");
            Ok(())
        }
    }
}

mod cli;
mod config;
mod curve;
mod models;
mod tui;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{Cli, Commands};
use cli::handlers;
use config::AppConfig;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = AppConfig::load().context("Loading config")?;

    match cli.command {
        Some(Commands::Curve { scenario, json }) => {
            handlers::handle_curve(&scenario, json, &config)?;
        }
        Some(Commands::Stats { scenario }) => {
            handlers::handle_stats(&scenario, &config)?;
        }
        Some(Commands::Moments { scenario }) => {
            handlers::handle_moments(&scenario, &config)?;
        }
        Some(Commands::Verdict { scenario }) => {
            handlers::handle_verdict(&scenario, &config)?;
        }
        Some(Commands::Export { scenario }) => {
            handlers::handle_export(&scenario, &config)?;
        }
        Some(Commands::Config { reset }) => {
            handlers::handle_config(&mut config, reset)?;
        }

        // No subcommand → launch TUI
        None => {
            tui::app::run(config)?;
        }
    }

    Ok(())
}

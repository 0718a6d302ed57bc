use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use std::io;

use khet_bondhu::config::AppConfig;
use khet_bondhu::io::{execute, Cli, Commands};
use khet_bondhu::initialize_backend;

fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    let state = initialize_backend(config, cli.data_dir)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&state, cli.command.unwrap_or(Commands::Browse), &mut out)
}

fn main() -> Result<()> {
    // Quiet by default; RUST_LOG raises the level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    info!("Starting khet-bondhu");

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        return Err(e);
    }
    Ok(())
}

mod cli;
mod commands;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Command};
use digiurban::domain::config::PlatformConfig;
use digiurban::kernel::config::load_config;
use digiurban::store::MemoryStore;
use digiurban_logger::Logger;
use std::process::ExitCode;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config: PlatformConfig =
        load_config(cli.config.as_ref()).context("Critical: Configuration is malformed")?;
    let _log = Logger::from_config(env!("CARGO_PKG_NAME"), &config.logging)?;

    let mut out = std::io::stdout().lock();
    match cli.command {
        Command::Modules {} => commands::modules(&registry(&config)?, &mut out)?,
        Command::Stats {} => commands::stats(&registry(&config)?, &mut out)?,
        Command::Validate { module_type, file } => {
            if !commands::validate(&registry(&config)?, &module_type, &file, &mut out)? {
                return Ok(ExitCode::FAILURE);
            }
        },
        Command::Simulate { module_type, file, citizen, protocol } => {
            commands::simulate(&config, &module_type, &file, &citizen, &protocol, &mut out).await?;
        },
    }

    Ok(ExitCode::SUCCESS)
}

/// Registry over an empty in-memory store; enough for inspection and validation.
fn registry(config: &PlatformConfig) -> anyhow::Result<digiurban::kernel::registry::Registry> {
    Ok(digiurban::init(config, Arc::new(MemoryStore::default()))?)
}

pub mod commands;
pub mod logging;
pub mod types;

use clap::Parser;
use log::error;
use std::path::PathBuf;

use crate::config;

/// Run the command-line interface and return the process exit code
pub fn run() -> i32 {
    let cli = types::Cli::parse();

    logging::init_logging(logging::log_level(cli.debug, cli.quiet));

    let source = cli.source.clone().unwrap_or_else(|| PathBuf::from("."));
    let config = match config::load_config(&source, cli.config.clone()) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load config: {}", e);
            return 1;
        }
    };

    match commands::dispatch(&cli.command, &config) {
        Ok(()) => 0,
        Err(e) => {
            error!("{}", e);
            1
        }
    }
}

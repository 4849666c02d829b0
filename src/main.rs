// src/main.rs

use anyhow::Result;
use clap::Parser;
use uplist::cli::Cli;
use uplist::config::ConfigBuilder;
use uplist::errors::Error;

fn main() -> Result<()> {
    // Initialize logging to stderr so stdout stays clean for the JSON
    // result. Default to 'warn' if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    log::debug!("Starting uplist v{}...", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();

    let config = match ConfigBuilder::from_cli(cli).build() {
        Ok(config) => config,
        Err(e @ Error::InvalidRoot { .. }) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    log::debug!("Configuration built: {:?}", config);

    if let Err(e) = uplist::run(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

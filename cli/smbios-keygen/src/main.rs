//! smbios-keygen - decode and generate Mac serial numbers and board serials.
//!
//! Diagnostics go to stderr through `tracing`; command output goes to stdout.

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod error;
mod output;

use commands::Cli;
use config::Config;

fn main() {
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error::print_error(&e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = cli.run(config) {
        error::print_error(&e);
        std::process::exit(1);
    }
}

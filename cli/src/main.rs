//! gdvn - read, reformat, check, and convert GDVN files.

mod cli;
mod commands;
mod common;

use clap::Parser;
use cli::{Cli, Command};

fn main() {
    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Fmt(args) => commands::fmt::run(args),
        Command::ToJson(args) => commands::to_json::run(args),
        Command::FromJson(args) => commands::from_json::run(args),
        Command::Check(args) => commands::check::run(args, cli.no_color),
    };

    if let Err(e) = result {
        common::error::render_and_exit(e, cli.no_color);
    }
}

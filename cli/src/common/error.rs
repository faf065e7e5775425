//! Error handling utilities for the CLI.

use gdv::{RenderConfig, render_error_to};

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Why a command failed.
#[derive(Debug)]
pub enum CliError {
    /// The input could not be read; the message names the path.
    Input(String),

    /// The input was read but could not be parsed.
    Gdv {
        error: gdv::Error,
        name: String,
        source: String,
    },

    /// Writing the output failed.
    Output(std::io::Error),
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Output(e)
    }
}

/// Render an error to stderr.
pub fn render(error: &CliError, no_color: bool) {
    match error {
        CliError::Input(message) => eprintln!("error: {}", message),
        CliError::Output(e) => eprintln!("error: <stdout>: {}", e),
        CliError::Gdv {
            error,
            name,
            source,
        } => {
            let config = RenderConfig {
                color: !no_color,
                filename: Some(name),
                ..Default::default()
            };
            render_error_to(error, source, &mut std::io::stderr(), &config).ok();
        }
    }
}

/// Render an error to stderr and exit with code 1.
pub fn render_and_exit(error: CliError, no_color: bool) -> ! {
    render(&error, no_color);
    std::process::exit(1);
}

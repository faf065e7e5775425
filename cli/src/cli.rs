//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions - no business logic.
//! All command implementations are in the `commands` module.

use clap::{Args, Parser, Subcommand};

/// gdvn - read, reformat, check, and convert GDVN files
#[derive(Parser, Debug)]
#[command(name = "gdvn", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Read one value and write it back out in canonical form
    Fmt(FmtArgs),

    /// Convert GDVN to JSON
    ToJson(ToJsonArgs),

    /// Convert JSON to GDVN
    FromJson(FromJsonArgs),

    /// Check that files contain exactly one well-formed value
    Check(CheckArgs),
}

/// Arguments for the `fmt` command.
#[derive(Args, Debug)]
pub struct FmtArgs {
    /// File to read, or "-" for stdin
    #[arg(default_value = "-")]
    pub file: String,

    /// Write everything on one line
    #[arg(long)]
    pub compact: bool,

    /// Target line width in indentation mode
    #[arg(long, default_value_t = gdv::WriteOptions::DEFAULT_TARGET_LINE_WIDTH)]
    pub width: usize,

    /// Spaces per indentation level
    #[arg(long, default_value_t = gdv::WriteOptions::DEFAULT_SPACES_PER_INDENT_LEVEL)]
    pub indent: usize,

    /// Write large integers in decimal rather than hexadecimal
    #[arg(long)]
    pub decimal: bool,
}

/// Arguments for the `to-json` command.
#[derive(Args, Debug)]
pub struct ToJsonArgs {
    /// File to read, or "-" for stdin
    #[arg(default_value = "-")]
    pub file: String,

    /// Indent the JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for the `from-json` command.
#[derive(Args, Debug)]
pub struct FromJsonArgs {
    /// File to read, or "-" for stdin
    #[arg(default_value = "-")]
    pub file: String,

    /// Write the GDVN on one line
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the `check` command.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Files to check
    #[arg(required = true)]
    pub files: Vec<String>,

    /// Only report failures through the exit code
    #[arg(short, long)]
    pub quiet: bool,
}

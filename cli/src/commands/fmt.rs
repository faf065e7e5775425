//! The `fmt` command - rewrite one value in canonical form.

use std::io::Write;

use gdv::WriteOptions;

use crate::cli::FmtArgs;
use crate::common::CliResult;
use crate::common::input::read_input;

/// Run the fmt command.
pub fn run(args: FmtArgs) -> CliResult<()> {
    let input = read_input(&args.file)?;
    let value = input.read_gdvn()?;

    let options = write_options(&args);
    tracing::debug!(?options, "formatting {}", input.name);

    let mut out = std::io::stdout().lock();
    value.write_to_io(&mut out, &options)?;
    writeln!(out)?;
    Ok(())
}

/// Writer settings selected by the command-line flags.
pub fn write_options(args: &FmtArgs) -> WriteOptions {
    WriteOptions::default()
        .with_indentation(!args.compact)
        .with_target_line_width(args.width)
        .with_spaces_per_indent_level(args.indent)
        .with_large_integers_as_decimal(args.decimal)
}

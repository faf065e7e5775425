//! The `from-json` command - convert JSON to GDVN.

use std::io::Write;

use gdv::WriteOptions;

use crate::cli::FromJsonArgs;
use crate::common::CliResult;
use crate::common::input::read_input;

/// Run the from-json command.
pub fn run(args: FromJsonArgs) -> CliResult<()> {
    let input = read_input(&args.file)?;
    let value = input.read_json()?;

    let options = WriteOptions::default().with_indentation(!args.compact);
    let mut out = std::io::stdout().lock();
    value.write_to_io(&mut out, &options)?;
    writeln!(out)?;
    Ok(())
}

//! The `to-json` command - convert GDVN to JSON.

use std::io::Write;

use gdv::json::{to_json_string, to_json_string_pretty};

use crate::cli::ToJsonArgs;
use crate::common::CliResult;
use crate::common::input::read_input;

/// Run the to-json command.
pub fn run(args: ToJsonArgs) -> CliResult<()> {
    let input = read_input(&args.file)?;
    let value = input.read_gdvn()?;

    let json = if args.pretty {
        to_json_string_pretty(&value)
    } else {
        to_json_string(&value)
    };
    writeln!(std::io::stdout().lock(), "{}", json)?;
    Ok(())
}

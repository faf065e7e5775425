//! The `check` command - confirm files hold exactly one valid value.

use crate::cli::CheckArgs;
use crate::common::CliResult;
use crate::common::error::render;
use crate::common::input::read_input;

/// Run the check command.
pub fn run(args: CheckArgs, no_color: bool) -> CliResult<()> {
    let mut has_errors = false;

    for file in &args.files {
        if !check_file(file, args.quiet, no_color) {
            has_errors = true;
        }
    }

    if has_errors {
        std::process::exit(1);
    }

    Ok(())
}

/// Check a single file. Returns true if OK, false if errors.
fn check_file(path: &str, quiet: bool, no_color: bool) -> bool {
    let result = read_input(path).and_then(|input| {
        input.read_gdvn()?;
        Ok(input.name)
    });

    match result {
        Ok(name) => {
            if !quiet {
                println!("{}: OK", name);
            }
            true
        }
        Err(e) => {
            if !quiet {
                render(&e, no_color);
            }
            false
        }
    }
}

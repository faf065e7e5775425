//! File input utilities.

use std::io::Read;

use gdv::{ReadOptions, Reader, Value};

use crate::common::{CliError, CliResult};

/// Input text along with the name to show in messages.
pub struct Input {
    pub name: String,
    pub text: String,
}

/// Read input from a file path or stdin if path is "-".
pub fn read_input(path: &str) -> CliResult<Input> {
    if is_stdin(path) {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| CliError::Input(format!("<stdin>: {}", e)))?;
        Ok(Input {
            name: "<stdin>".to_string(),
            text,
        })
    } else {
        let text =
            std::fs::read_to_string(path).map_err(|e| CliError::Input(format!("{}: {}", path, e)))?;
        Ok(Input {
            name: path.to_string(),
            text,
        })
    }
}

/// Check if the path represents stdin.
pub fn is_stdin(path: &str) -> bool {
    path == "-"
}

impl Input {
    /// Parse the text as exactly one GDVN value.
    pub fn read_gdvn(&self) -> CliResult<Value> {
        let options = ReadOptions::default().with_file_name(self.name.clone());
        Reader::new(self.text.as_bytes(), options)
            .read_exactly_one_value()
            .map_err(|error| self.failure(error))
    }

    /// Parse the text as JSON.
    pub fn read_json(&self) -> CliResult<Value> {
        gdv::json::from_json_str(&self.text).map_err(|error| self.failure(error))
    }

    fn failure(&self, error: gdv::Error) -> CliError {
        tracing::debug!(input = %self.name, "input rejected");
        CliError::Gdv {
            error,
            name: self.name.clone(),
            source: self.text.clone(),
        }
    }
}

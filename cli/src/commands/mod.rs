//! Command implementations.
//!
//! Each subcommand has its own module with a `run` function.

pub mod check;
pub mod fmt;
pub mod from_json;
pub mod to_json;

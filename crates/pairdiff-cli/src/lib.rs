//! Command-line surface for `pairdiff`.
//!
//! [`commands::run`] computes the total distance of a file, prints it and
//! returns the process exit code.

pub mod cli;
pub mod commands;

pub use commands::{run, run_command, Status};

use std::io::{self, IsTerminal, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use colored::Colorize;
use pairdiff_core::{measure_path, Measurement, PairDiffConfig};

use crate::cli::{Cli, OutputFormat};

/// Outcome of a run, mapped to the process exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::Failure => ExitCode::FAILURE,
        }
    }
}

/// Colour diagnostics only when stderr itself is a terminal.
pub fn init_color() {
    colored::control::set_override(io::stderr().is_terminal());
}

/// Compute the total distance of the file at `input_path` and print it.
pub fn run<P: AsRef<Path>>(input_path: P) -> ExitCode {
    let config = PairDiffConfig {
        input: input_path.as_ref().to_path_buf(),
        ..PairDiffConfig::default()
    };
    run_config(&config, OutputFormat::Text)
}

/// Entry point for parsed command-line arguments.
pub fn run_command(cli: Cli) -> ExitCode {
    match cli.resolve_config() {
        Ok(config) => run_config(&config, cli.format),
        Err(e) => {
            print_error(&mut io::stderr().lock(), &e);
            Status::Failure.into()
        }
    }
}

fn run_config(config: &PairDiffConfig, format: OutputFormat) -> ExitCode {
    report(config, format, &mut io::stdout().lock(), &mut io::stderr().lock()).into()
}

/// Compute the configured metric, writing the result to `out` or a single
/// diagnostic to `err`. Nothing is written to `out` on failure.
pub fn report<O: Write, E: Write>(
    config: &PairDiffConfig,
    format: OutputFormat,
    out: &mut O,
    err: &mut E,
) -> Status {
    let result = execute(config)
        .and_then(|m| render(&m, format))
        .and_then(|text| out.write_all(text.as_bytes()).context("writing result"));
    match result {
        Ok(()) => Status::Success,
        Err(e) => {
            print_error(err, &e);
            Status::Failure
        }
    }
}

pub fn execute(config: &PairDiffConfig) -> anyhow::Result<Measurement> {
    measure_path(&config.input, config.metric)
        .with_context(|| format!("computing {} of {}", config.metric, config.input.display()))
}

fn render(measurement: &Measurement, format: OutputFormat) -> anyhow::Result<String> {
    let body = match format {
        OutputFormat::Text => measurement.to_string(),
        OutputFormat::Json => serde_json::to_string(measurement)?,
    };
    Ok(format!("{body}\n"))
}

fn print_error<E: Write>(err: &mut E, error: &anyhow::Error) {
    // Nothing useful can be done if stderr itself is gone.
    let _ = writeln!(err, "{} {:#}", "error:".red().bold(), error);
}

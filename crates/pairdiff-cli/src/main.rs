use std::process::ExitCode;

use clap::Parser;
use pairdiff_cli::{cli::Cli, commands::init_color, run_command};
use tracing::Level;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    init_color();
    run_command(cli)
}

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use pairdiff_core::{Metric, PairDiffConfig};

#[derive(Parser, Debug)]
#[command(
    name = "pairdiff",
    about = "Distance and similarity between two columns of integers",
    version,
)]
pub struct Cli {
    /// Two-column input file [default: input1.txt]
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Metric to compute [default: distance]
    #[arg(short, long, value_enum)]
    pub metric: Option<Metric>,

    /// TOML file providing `input` and `metric`
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    /// Merge flags over the config file (if any) over the defaults.
    pub fn resolve_config(&self) -> anyhow::Result<PairDiffConfig> {
        let mut config = match &self.config {
            Some(path) => PairDiffConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => PairDiffConfig::default(),
        };
        if let Some(input) = &self.input {
            config.input = input.clone();
        }
        if let Some(metric) = self.metric {
            config.metric = metric;
        }
        Ok(config)
    }
}

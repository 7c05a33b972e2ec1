use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PairDiffError, Result};
use crate::metric::Metric;

/// Default input file, relative to the working directory.
pub const DEFAULT_INPUT: &str = "input1.txt";

/// Settings for a single run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PairDiffConfig {
    /// Two-column input file.
    pub input: PathBuf,
    /// Metric to compute.
    pub metric: Metric,
}

impl Default for PairDiffConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            metric: Metric::default(),
        }
    }
}

impl PairDiffConfig {
    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| PairDiffError::Config(e.to_string()))
    }

    /// Load a TOML config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| PairDiffError::OpenInput {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

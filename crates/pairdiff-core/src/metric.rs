//! Metric selection and the resulting measurement.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::columns::Columns;
use crate::distance::total_distance;
use crate::error::Result;
use crate::similarity::similarity_score;

/// Which quantity to compute from the columns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Sum of absolute differences of the sorted columns.
    #[default]
    Distance,
    /// Left values weighted by their count in the right column.
    Similarity,
}

impl Metric {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Distance => "distance",
            Self::Similarity => "similarity",
        }
    }

    /// Compute this metric over `columns`.
    pub fn evaluate(self, mut columns: Columns) -> Result<Measurement> {
        let pairs = columns.len();
        let value = match self {
            Self::Distance => MetricValue::Distance(total_distance(&mut columns)?),
            Self::Similarity => MetricValue::Similarity(similarity_score(&columns)?),
        };
        Ok(Measurement {
            metric: self,
            pairs,
            value,
        })
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The numeric result of a metric.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    Distance(u64),
    Similarity(i64),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Distance(v) => write!(f, "{v}"),
            Self::Similarity(v) => write!(f, "{v}"),
        }
    }
}

/// A computed metric together with the number of pairs it covered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Measurement {
    pub metric: Metric,
    pub pairs: usize,
    pub value: MetricValue,
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

/// Read the file at `input` and compute `metric` over it.
#[tracing::instrument(skip(input), fields(input = %input.as_ref().display()))]
pub fn measure_path<P: AsRef<Path>>(input: P, metric: Metric) -> Result<Measurement> {
    let columns = Columns::from_path(input)?;
    metric.evaluate(columns)
}

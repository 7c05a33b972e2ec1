//! Pairwise metrics over two columns of integers.
//!
//! Input is text with two whitespace-separated integers per line. The first
//! value of each line forms the left column, the second the right column.
//!
//! # Key Types
//!
//! - [`Columns`] -- Parsed left/right columns (always equal length)
//! - [`Metric`] / [`Measurement`] -- Metric selection and its result
//! - [`PairDiffConfig`] -- Run settings, loadable from TOML
//! - [`PairDiffError`] -- I/O, malformed-line and overflow failures

pub mod columns;
pub mod config;
pub mod distance;
pub mod error;
pub mod metric;
pub mod similarity;

pub use columns::{parse_pair, Columns};
pub use config::{PairDiffConfig, DEFAULT_INPUT};
pub use distance::{compute_total_distance, total_distance, total_distance_from_path};
pub use error::{MalformedReason, PairDiffError, Result};
pub use metric::{measure_path, Measurement, Metric, MetricValue};
pub use similarity::{compute_similarity_score, similarity_score};

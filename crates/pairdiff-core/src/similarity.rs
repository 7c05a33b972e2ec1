//! Similarity score between two columns.
//!
//! Every left value is weighted by how often it occurs in the right column.

use std::collections::HashMap;

use tracing::debug;

use crate::columns::Columns;
use crate::error::{PairDiffError, Result};

/// Sum of `left[i] * count(right == left[i])` over the left column.
///
/// Column order does not matter, so nothing is sorted.
pub fn similarity_score(columns: &Columns) -> Result<i64> {
    let mut counts: HashMap<i64, i64> = HashMap::with_capacity(columns.len());
    for &value in columns.right() {
        *counts.entry(value).or_insert(0) += 1;
    }

    let overflow = || PairDiffError::Overflow {
        metric: "similarity score",
    };
    let mut score = 0i64;
    for &value in columns.left() {
        let count = counts.get(&value).copied().unwrap_or(0);
        let weighted = value.checked_mul(count).ok_or_else(overflow)?;
        score = score.checked_add(weighted).ok_or_else(overflow)?;
    }
    debug!(pairs = columns.len(), score, "computed similarity score");
    Ok(score)
}

/// Parse `lines` and return their similarity score.
pub fn compute_similarity_score<I, S>(lines: I) -> Result<i64>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let columns = Columns::from_lines(lines)?;
    similarity_score(&columns)
}

//! Total distance between two columns.
//!
//! Both columns are sorted ascending on their own, then paired by position.
//! The distance is the sum of the absolute differences of those pairs.

use std::fmt::Debug;
use std::path::Path;

use tracing::debug;

use crate::columns::Columns;
use crate::error::{PairDiffError, Result};

/// Sort `columns` in place and sum `|left[i] - right[i]|` over every position.
///
/// Empty columns have a distance of 0.
pub fn total_distance(columns: &mut Columns) -> Result<u64> {
    columns.sort();
    let total = columns
        .left()
        .iter()
        .zip(columns.right())
        .try_fold(0u64, |acc, (&l, &r)| acc.checked_add(l.abs_diff(r)))
        .ok_or(PairDiffError::Overflow { metric: "distance" })?;
    debug!(pairs = columns.len(), total, "computed total distance");
    Ok(total)
}

/// Parse `lines` and return their total distance.
pub fn compute_total_distance<I, S>(lines: I) -> Result<u64>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut columns = Columns::from_lines(lines)?;
    total_distance(&mut columns)
}

/// Read the file at `input` and return its total distance.
#[tracing::instrument]
pub fn total_distance_from_path<P: AsRef<Path> + Debug>(input: P) -> Result<u64> {
    let mut columns = Columns::from_path(input)?;
    total_distance(&mut columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::io::Write;

    const SAMPLE: [&str; 6] = ["3   4", "4   3", "2   5", "1   3", "3   9", "3   3"];

    #[test]
    fn sample_distance() {
        assert_eq!(compute_total_distance(SAMPLE).unwrap(), 11);
    }

    #[test]
    fn sample_sorts_in_place() {
        let mut columns = Columns::from_lines(SAMPLE).unwrap();
        total_distance(&mut columns).unwrap();
        assert_eq!(columns.left(), &[1, 2, 3, 3, 3, 4]);
        assert_eq!(columns.right(), &[3, 3, 3, 4, 5, 9]);
    }

    #[test]
    fn empty_input_is_zero() {
        assert_eq!(compute_total_distance(Vec::<&str>::new()).unwrap(), 0);
    }

    #[test]
    fn identical_columns_are_zero() {
        assert_eq!(compute_total_distance(["1 3", "2 1", "3 2"]).unwrap(), 0);
    }

    #[test]
    fn negative_values() {
        // sorted: [-5, 2] vs [-1, 4] -> 4 + 2
        assert_eq!(compute_total_distance(["2 -1", "-5 4"]).unwrap(), 6);
    }

    #[test]
    fn extreme_values_do_not_wrap() {
        let lines = [format!("{} {}", i64::MIN, i64::MAX)];
        assert_eq!(compute_total_distance(&lines).unwrap(), u64::MAX);
    }

    #[test]
    fn overflow_is_reported() {
        let line = format!("{} {}", i64::MIN, i64::MAX);
        let err = compute_total_distance([line.as_str(), "0 1"]).unwrap_err();
        assert!(matches!(err, PairDiffError::Overflow { .. }));
    }

    #[test]
    fn single_token_line_fails() {
        let err = compute_total_distance(["3 4", "5"]).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn from_path_matches_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input1.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(SAMPLE.join("\n").as_bytes()).unwrap();

        assert_eq!(total_distance_from_path(&path).unwrap(), 11);
        // Unmodified input yields the same answer again.
        assert_eq!(total_distance_from_path(&path).unwrap(), 11);
    }

    #[test]
    fn missing_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = total_distance_from_path(dir.path().join("absent.txt")).unwrap_err();
        assert!(err.is_io());
    }

    fn pairs() -> impl Strategy<Value = Vec<(i64, i64)>> {
        prop::collection::vec((-100_000i64..100_000, -100_000i64..100_000), 0..64)
    }

    fn columns_of(pairs: &[(i64, i64)]) -> Columns {
        let mut columns = Columns::new();
        for &(l, r) in pairs {
            columns.push_pair(l, r);
        }
        columns
    }

    proptest! {
        #[test]
        fn swapping_columns_is_symmetric(pairs in pairs()) {
            let mut forward = columns_of(&pairs);
            let flipped: Vec<(i64, i64)> = pairs.iter().map(|&(l, r)| (r, l)).collect();
            let mut backward = columns_of(&flipped);
            prop_assert_eq!(
                total_distance(&mut forward).unwrap(),
                total_distance(&mut backward).unwrap()
            );
        }

        #[test]
        fn reordering_right_column_is_invariant(pairs in pairs(), shift in 0usize..64) {
            let mut original = columns_of(&pairs);
            let mut rotated_right: Vec<i64> = pairs.iter().map(|p| p.1).collect();
            if !rotated_right.is_empty() {
                let k = shift % rotated_right.len();
                rotated_right.rotate_left(k);
            }
            let mut rotated = Columns::new();
            for (&(l, _), &r) in pairs.iter().zip(&rotated_right) {
                rotated.push_pair(l, r);
            }
            prop_assert_eq!(
                total_distance(&mut original).unwrap(),
                total_distance(&mut rotated).unwrap()
            );
        }

        #[test]
        fn same_multiset_is_zero(values in prop::collection::vec(-1000i64..1000, 0..64)) {
            let mut reversed = values.clone();
            reversed.reverse();
            let mut columns = Columns::new();
            for (&l, &r) in values.iter().zip(&reversed) {
                columns.push_pair(l, r);
            }
            prop_assert_eq!(total_distance(&mut columns).unwrap(), 0);
        }
    }
}

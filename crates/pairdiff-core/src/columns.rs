//! Two-column integer input.
//!
//! Each non-blank line holds exactly two whitespace-separated integers. The
//! first goes to the left column, the second to the right column, so both
//! columns always have the same length.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{MalformedReason, PairDiffError, Result};

/// The left and right columns of a parsed input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Columns {
    left: Vec<i64>,
    right: Vec<i64>,
}

impl Columns {
    /// Create empty columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one record.
    pub fn push_pair(&mut self, left: i64, right: i64) {
        self.left.push(left);
        self.right.push(right);
    }

    pub fn left(&self) -> &[i64] {
        &self.left
    }

    pub fn right(&self) -> &[i64] {
        &self.right
    }

    /// Number of records (the length of either column).
    pub fn len(&self) -> usize {
        self.left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Sort both columns ascending, independently of each other.
    pub fn sort(&mut self) {
        self.left.sort_unstable();
        self.right.sort_unstable();
    }

    /// Parse columns from in-memory lines.
    ///
    /// Blank lines are skipped. Line numbers in errors are 1-based and count
    /// blank lines too.
    pub fn from_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut columns = Self::new();
        for (index, line) in lines.into_iter().enumerate() {
            columns.push_line(index + 1, line.as_ref())?;
        }
        debug!(pairs = columns.len(), "parsed columns");
        Ok(columns)
    }

    /// Parse columns from a buffered reader, failing on the first read or
    /// parse error.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut columns = Self::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            columns.push_line(index + 1, &line)?;
        }
        debug!(pairs = columns.len(), "parsed columns");
        Ok(columns)
    }

    /// Open `path` and parse its contents.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| PairDiffError::OpenInput {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    fn push_line(&mut self, line_no: usize, line: &str) -> Result<()> {
        if let Some((left, right)) = parse_pair(line_no, line)? {
            self.push_pair(left, right);
        }
        Ok(())
    }
}

/// Parse a single line into a pair. Returns `Ok(None)` for blank lines.
pub fn parse_pair(line_no: usize, line: &str) -> Result<Option<(i64, i64)>> {
    let malformed = |reason: MalformedReason| PairDiffError::Malformed {
        line: line_no,
        content: line.to_string(),
        reason,
    };

    let mut tokens = line.split_whitespace();
    let Some(first) = tokens.next() else {
        return Ok(None);
    };
    let second = tokens
        .next()
        .ok_or_else(|| malformed(MalformedReason::MissingRightValue))?;
    if let Some(extra) = tokens.next() {
        return Err(malformed(MalformedReason::UnexpectedToken(extra.to_string())));
    }

    let left = parse_value(first).map_err(&malformed)?;
    let right = parse_value(second).map_err(&malformed)?;
    Ok(Some((left, right)))
}

fn parse_value(token: &str) -> std::result::Result<i64, MalformedReason> {
    token
        .parse::<i64>()
        .map_err(|source| MalformedReason::InvalidInteger {
            token: token.to_string(),
            source,
        })
}

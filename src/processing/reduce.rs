//! Single-pass rating aggregation.

use crate::error::{ReportError, ReportResult};
use crate::types::Record;

/// Running totals over a pass of records: the match count and the rating sum.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Aggregate {
    matches: usize,
    rating: f64,
}

impl Aggregate {
    /// An empty aggregate (no matches, zero sum).
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one record into the totals.
    pub fn push(&mut self, record: &Record) {
        self.matches += 1;
        self.rating += record.rating;
    }

    /// Number of records folded in so far.
    pub fn matches(&self) -> usize {
        self.matches
    }

    /// Sum of all ratings folded in so far.
    pub fn total(&self) -> f64 {
        self.rating
    }

    /// Arithmetic mean of the ratings.
    ///
    /// Returns [`ReportError::EmptyInput`] when no records were folded in, instead of a
    /// `NaN` from `0.0 / 0`.
    pub fn average(&self) -> ReportResult<f64> {
        if self.matches == 0 {
            return Err(ReportError::EmptyInput);
        }
        Ok(self.rating / self.matches as f64)
    }
}

/// Aggregate a slice of records in order.
pub fn aggregate(records: &[Record]) -> Aggregate {
    records.iter().fold(Aggregate::new(), |mut acc, r| {
        acc.push(r);
        acc
    })
}

//! Core data model types for rating reports.
//!
//! A ratings file is parsed once into a [`Document`]; each element is turned into a typed
//! [`Record`] as the report walks the document, and a completed pass yields a [`Summary`].

use serde::Deserialize;

use crate::error::{ReportError, ReportResult};

/// A single rated record.
///
/// Only `rating` is read; any other fields in the JSON object are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Record {
    /// Floating-point score for this record.
    pub rating: f64,
}

impl Record {
    /// Create a record with the given rating.
    pub fn new(rating: f64) -> Self {
        Self { rating }
    }

    /// Extract a record from the JSON element at position `index` (zero-based).
    ///
    /// Fails with [`ReportError::Field`] when the element is not an object, or when `rating`
    /// is missing, `null`, or not a number.
    pub fn from_json(index: usize, value: &serde_json::Value) -> ReportResult<Self> {
        if !value.is_object() {
            return Err(ReportError::Field {
                index,
                message: format!("expected a json object, found {}", json_kind(value)),
            });
        }

        Self::deserialize(value).map_err(|e| ReportError::Field {
            index,
            message: e.to_string(),
        })
    }
}

/// The parsed input document: every array element, in file order.
///
/// Elements stay as raw JSON until the report reaches them, so a malformed record only
/// fails once everything before it has been reported.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    /// Raw array elements.
    pub items: Vec<serde_json::Value>,
}

impl Document {
    /// Create a document from raw elements.
    pub fn new(items: Vec<serde_json::Value>) -> Self {
        Self { items }
    }

    /// Number of elements in the document.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the document has no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate the elements as typed records, in order.
    ///
    /// Each item is converted lazily; iteration yields the [`ReportError::Field`] for the first
    /// malformed element when it is reached.
    pub fn records(&self) -> impl Iterator<Item = ReportResult<Record>> + '_ {
        self.items
            .iter()
            .enumerate()
            .map(|(index, value)| Record::from_json(index, value))
    }
}

/// Outcome of a full pass over a document.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Ratings in input order.
    pub ratings: Vec<f64>,
    /// Number of records processed.
    pub matches: usize,
    /// Arithmetic mean of all ratings.
    pub average: f64,
}

impl Summary {
    /// Render the report exactly as it is printed: one line per rating, then the summary line.
    pub fn lines(&self) -> Vec<String> {
        self.ratings
            .iter()
            .map(|r| format_rating_line(*r))
            .chain(std::iter::once(format_summary_line(self.matches, self.average)))
            .collect()
    }
}

/// Per-record line: `rating = <value>`, fixed-point with six decimals.
pub fn format_rating_line(rating: f64) -> String {
    format!("rating = {rating:.6}")
}

/// Summary line: `<matches> matches with avg rating of <average>`.
pub fn format_summary_line(matches: usize, average: f64) -> String {
    format!("{matches} matches with avg rating of {average:.6}")
}

/// Human-readable name of a JSON value's kind, used in error messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

//! JSON ingestion implementation.
//!
//! Supported input: a single JSON array whose elements are objects carrying a numeric
//! `rating`, e.g. `[{"rating": 3.0}, {"rating": 5.0, "name": "x"}]`.
//!
//! Parsing only checks that the document is an array; elements are validated as records
//! later, one at a time (see [`crate::types::Document::records`]).

use std::fs;
use std::path::Path;

use crate::error::{ReportError, ReportResult};
use crate::types::{json_kind, Document};

/// Read the whole file at `path` and parse it into a [`Document`].
///
/// The file is closed before parsing starts. Only open/read failures are
/// [`ReportError::Io`]; bytes that are not valid UTF-8 JSON are [`ReportError::Json`].
pub fn read_document_from_path(path: impl AsRef<Path>) -> ReportResult<Document> {
    let bytes = fs::read(path)?;
    parse_document_bytes(&bytes)
}

/// Parse a JSON string into a [`Document`].
pub fn parse_document(input: &str) -> ReportResult<Document> {
    parse_document_bytes(input.as_bytes())
}

/// Parse raw file contents into a [`Document`].
pub fn parse_document_bytes(input: &[u8]) -> ReportResult<Document> {
    match serde_json::from_slice::<serde_json::Value>(input)? {
        serde_json::Value::Array(items) => Ok(Document::new(items)),
        other => Err(ReportError::NotAnArray {
            found: json_kind(&other),
        }),
    }
}

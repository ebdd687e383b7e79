//! Input loading and report observability.
//!
//! - [`json`]: read a ratings file into a [`crate::types::Document`]
//! - [`observability`]: per-record and outcome events for logging/alerts

pub mod json;
pub mod observability;

pub use json::{parse_document, parse_document_bytes, read_document_from_path};
pub use observability::{FileObserver, ReportEvent, ReportObserver, ReportSeverity, StdErrObserver};

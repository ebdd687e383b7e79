//! `rating-report` reads a JSON array of rated records, prints each record's rating, and
//! prints the number of records together with their average rating.
//!
//! The primary entrypoint is [`report::report_from_path`], which streams the output lines to
//! any [`std::io::Write`]. [`report::summarize`] computes the same [`types::Summary`] without
//! printing.
//!
//! ## Input
//!
//! A single JSON array of objects, each with a numeric `rating`. Other fields are ignored:
//!
//! ```json
//! [{"rating": 3.0, "title": "a"}, {"rating": 5}]
//! ```
//!
//! ## Output
//!
//! ```text
//! rating = 3.000000
//! rating = 5.000000
//! 2 matches with avg rating of 4.000000
//! ```
//!
//! ## Errors
//!
//! All failures are terminal and reported as a [`ReportError`]:
//!
//! - [`ReportError::Io`]: the file cannot be read
//! - [`ReportError::Json`] / [`ReportError::NotAnArray`]: the file is not a JSON array
//! - [`ReportError::Field`]: a record has no numeric `rating`
//! - [`ReportError::EmptyInput`]: the array is empty, so the average is undefined
//!
//! ## Example
//!
//! ```rust
//! use rating_report::ingestion::parse_document;
//! use rating_report::report::report_document;
//!
//! let doc = parse_document(r#"[{"rating": 3.0}, {"rating": 5.0}]"#).unwrap();
//! let mut out = Vec::new();
//! let summary = report_document(&doc, &mut out).unwrap();
//! assert_eq!(summary.matches, 2);
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "rating = 3.000000\nrating = 5.000000\n2 matches with avg rating of 4.000000\n"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: JSON loading and observer hooks
//! - [`types`]: record, document and summary types
//! - [`processing`]: rating aggregation
//! - [`report`]: report entrypoints and line formatting
//! - [`error`]: error types

pub mod error;
pub mod ingestion;
pub mod processing;
pub mod report;
pub mod types;

pub use error::{ReportError, ReportResult};
pub use report::{report_from_path, summarize, ReportOptions};

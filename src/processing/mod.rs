//! In-memory rating computations.
//!
//! Currently implemented:
//!
//! - [`Aggregate`]: running match count and rating sum, with a checked average
//! - [`aggregate()`]: fold a slice of records into an [`Aggregate`]
//!
//! ```rust
//! use rating_report::processing::aggregate;
//! use rating_report::types::Record;
//!
//! let agg = aggregate(&[Record::new(3.0), Record::new(5.0)]);
//! assert_eq!(agg.matches(), 2);
//! assert_eq!(agg.average().unwrap(), 4.0);
//! ```

pub mod reduce;

pub use reduce::{aggregate, Aggregate};

//! Report entrypoints.
//!
//! Most callers should use [`report_from_path`], which reads a ratings file, writes one
//! `rating = ...` line per record followed by the summary line, and returns the [`Summary`].
//!
//! - Lines are written as each record is reached. When a record is malformed, the lines for
//!   the records before it have already been written and no summary line follows.
//! - Each configured [`ReportObserver`] receives a [`ReportEvent`] per printed line, plus one
//!   [`ReportEvent::Failed`] if the report stops early.

use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use crate::error::ReportResult;
use crate::ingestion::json::read_document_from_path;
use crate::ingestion::observability::{ReportEvent, ReportObserver, ReportSeverity};
use crate::processing::Aggregate;
use crate::types::{Document, Summary};

pub use crate::types::{format_rating_line, format_summary_line};

/// Options controlling report behavior. Use [`Default`] for a silent report.
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// Observers notified of every report event, in order.
    pub observers: Vec<Arc<dyn ReportObserver>>,
    /// Failures at or above this severity are flagged as alerts. Defaults to `Critical`.
    pub alert_at_or_above: ReportSeverity,
}

/// Walk `document` in order, writing each rating line to `out`, then the summary line.
///
/// Stops at the first malformed record or on an empty document; lines already written stay
/// in `out`.
pub fn report_document<W: Write>(document: &Document, out: &mut W) -> ReportResult<Summary> {
    write_report(document, out, |_| {})
}

fn write_report<W, F>(document: &Document, out: &mut W, mut notify: F) -> ReportResult<Summary>
where
    W: Write,
    F: FnMut(ReportEvent<'_>),
{
    let mut agg = Aggregate::new();
    let mut ratings = Vec::with_capacity(document.len());

    for (index, record) in document.records().enumerate() {
        let record = record?;
        agg.push(&record);
        ratings.push(record.rating);
        writeln!(out, "{}", format_rating_line(record.rating))?;
        notify(ReportEvent::Rating {
            index,
            rating: record.rating,
        });
    }

    let average = agg.average()?;
    writeln!(out, "{}", format_summary_line(agg.matches(), average))?;
    out.flush()?;
    notify(ReportEvent::Summary {
        matches: agg.matches(),
        average,
    });

    Ok(Summary {
        ratings,
        matches: agg.matches(),
        average,
    })
}

/// Report on the ratings file at `path`, writing the output lines to `out`.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
///
/// use rating_report::ingestion::StdErrObserver;
/// use rating_report::report::{report_from_path, ReportOptions};
///
/// # fn main() -> Result<(), rating_report::ReportError> {
/// let opts = ReportOptions {
///     observers: vec![Arc::new(StdErrObserver)],
///     ..Default::default()
/// };
/// let stdout = std::io::stdout();
/// let summary = report_from_path("ratings.json", &mut stdout.lock(), &opts)?;
/// assert_eq!(summary.matches, summary.ratings.len());
/// # Ok(())
/// # }
/// ```
pub fn report_from_path<W: Write>(
    path: impl AsRef<Path>,
    out: &mut W,
    options: &ReportOptions,
) -> ReportResult<Summary> {
    let path = path.as_ref();
    let observers = options.observers.as_slice();

    let mut reported = 0;
    let result = read_document_from_path(path).and_then(|doc| {
        write_report(&doc, out, |event| {
            if let ReportEvent::Rating { .. } = event {
                reported += 1;
            }
            emit(observers, path, &event);
        })
    });

    if let Err(error) = &result {
        let severity = ReportSeverity::for_error(error);
        let event = ReportEvent::Failed {
            reported,
            severity,
            alert: severity >= options.alert_at_or_above,
            error,
        };
        emit(observers, path, &event);
    }

    result
}

fn emit(observers: &[Arc<dyn ReportObserver>], path: &Path, event: &ReportEvent<'_>) {
    for o in observers {
        o.on_event(path, event);
    }
}

/// Compute the [`Summary`] for the ratings file at `path` without printing anything.
///
/// Use [`Summary::lines`] to get the lines a report would print.
pub fn summarize(path: impl AsRef<Path>) -> ReportResult<Summary> {
    report_from_path(path, &mut io::sink(), &ReportOptions::default())
}

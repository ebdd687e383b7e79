//! Report event hooks.
//!
//! A report emits one [`ReportEvent::Rating`] per record it prints, then either a
//! [`ReportEvent::Summary`] or a single [`ReportEvent::Failed`]. Observers see the same events
//! in the same order as the lines on stdout.

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::ReportError;

/// How bad a failed report is. Ordered so it can be compared against an alert threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum ReportSeverity {
    /// The input file was readable but its contents are unusable.
    Error,
    /// The input file (or the output) could not be read or written.
    #[default]
    Critical,
}

impl ReportSeverity {
    /// Severity assigned to a failed report.
    pub fn for_error(e: &ReportError) -> Self {
        match e {
            ReportError::Io(_) => Self::Critical,
            ReportError::Json(_)
            | ReportError::NotAnArray { .. }
            | ReportError::Field { .. }
            | ReportError::EmptyInput => Self::Error,
        }
    }
}

/// One step of a report.
#[derive(Debug, Clone, Copy)]
pub enum ReportEvent<'a> {
    /// The rating line for record `index` (zero-based) was printed.
    Rating { index: usize, rating: f64 },
    /// The summary line was printed; the report is complete.
    Summary { matches: usize, average: f64 },
    /// The report stopped after printing `reported` rating lines.
    Failed {
        reported: usize,
        severity: ReportSeverity,
        /// `severity` is at or above the configured alert threshold.
        alert: bool,
        error: &'a ReportError,
    },
}

impl fmt::Display for ReportEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rating { index, rating } => write!(f, "record={index} rating={rating:.6}"),
            Self::Summary { matches, average } => write!(f, "ok matches={matches} avg={average:.6}"),
            Self::Failed {
                reported,
                severity,
                alert,
                error,
            } => {
                if *alert {
                    f.write_str("ALERT ")?;
                }
                write!(f, "fail severity={severity:?} reported={reported} err={error}")
            }
        }
    }
}

/// Receives report events.
pub trait ReportObserver: fmt::Debug + Send + Sync {
    fn on_event(&self, path: &Path, event: &ReportEvent<'_>);
}

/// Logs report events to stderr, keeping stdout for the report itself.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl ReportObserver for StdErrObserver {
    fn on_event(&self, path: &Path, event: &ReportEvent<'_>) {
        eprintln!("[report] path={} {event}", path.display());
    }
}

/// Appends report events to a log file, one timestamped line each.
///
/// Writes are best-effort; a log file that cannot be opened or written is skipped.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }
}

impl ReportObserver for FileObserver {
    fn on_event(&self, path: &Path, event: &ReportEvent<'_>) {
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        let _guard = self.lock.lock().ok();
        if let Ok(mut log) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(log, "{ts} path={} {event}", path.display());
        }
    }
}

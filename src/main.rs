use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use rating_report::ingestion::{FileObserver, ReportObserver, StdErrObserver};
use rating_report::report::{report_from_path, ReportOptions};

#[derive(Parser, Debug)]
#[command(
    name = "rating-report",
    version,
    about = "Print each record's rating and the average rating of a JSON file"
)]
struct Cli {
    /// Log report outcomes to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Append report outcomes to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// JSON file holding an array of objects with a numeric `rating`.
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let Some(file) = cli.file.as_deref() else {
        println!("Missing filename");
        return ExitCode::FAILURE;
    };

    match run(file, cli.verbose, cli.log_file) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(file: &Path, verbose: bool, log_file: Option<PathBuf>) -> Result<()> {
    let mut observers: Vec<Arc<dyn ReportObserver>> = Vec::new();
    if verbose {
        observers.push(Arc::new(StdErrObserver));
    }
    if let Some(path) = log_file {
        observers.push(Arc::new(FileObserver::new(path)));
    }

    let options = ReportOptions {
        observers,
        ..Default::default()
    };

    let stdout = io::stdout();
    report_from_path(file, &mut stdout.lock(), &options)
        .with_context(|| format!("report {}", file.display()))?;
    Ok(())
}

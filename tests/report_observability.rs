use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use rating_report::ingestion::{FileObserver, ReportEvent, ReportObserver, ReportSeverity};
use rating_report::report::{report_from_path, ReportOptions};

/// Keeps every event as its log text, plus the failure fields for direct assertions.
#[derive(Debug, Default)]
struct RecordingObserver {
    events: Mutex<Vec<String>>,
    failures: Mutex<Vec<(usize, ReportSeverity, bool)>>,
}

impl ReportObserver for RecordingObserver {
    fn on_event(&self, _path: &Path, event: &ReportEvent<'_>) {
        if let ReportEvent::Failed {
            reported,
            severity,
            alert,
            ..
        } = event
        {
            self.failures.lock().unwrap().push((*reported, *severity, *alert));
        }
        self.events.lock().unwrap().push(event.to_string());
    }
}

fn tmp_log() -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("rating-report-observer-{nanos}.log"))
}

fn options(obs: Arc<dyn ReportObserver>, threshold: ReportSeverity) -> ReportOptions {
    ReportOptions {
        observers: vec![obs],
        alert_at_or_above: threshold,
    }
}

#[test]
fn observer_sees_each_rating_then_summary() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = options(obs.clone(), ReportSeverity::Critical);

    report_from_path("tests/fixtures/ratings.json", &mut Vec::<u8>::new(), &opts).unwrap();

    assert_eq!(
        *obs.events.lock().unwrap(),
        vec![
            "record=0 rating=3.000000",
            "record=1 rating=5.000000",
            "ok matches=2 avg=4.000000",
        ]
    );
    assert!(obs.failures.lock().unwrap().is_empty());
}

#[test]
fn missing_file_is_a_critical_alert() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = options(obs.clone(), ReportSeverity::Critical);

    report_from_path("tests/fixtures/does_not_exist.json", &mut Vec::<u8>::new(), &opts).unwrap_err();

    assert_eq!(
        *obs.failures.lock().unwrap(),
        vec![(0, ReportSeverity::Critical, true)]
    );
}

#[test]
fn field_error_reports_lines_reached_without_alert() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = options(obs.clone(), ReportSeverity::Critical);

    report_from_path("tests/fixtures/missing_rating.json", &mut Vec::<u8>::new(), &opts).unwrap_err();

    assert_eq!(*obs.failures.lock().unwrap(), vec![(1, ReportSeverity::Error, false)]);
    let events = obs.events.lock().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0], "record=0 rating=2.000000");
    assert!(events[1].contains("record 1: missing field `rating`"));
}

#[test]
fn invalid_utf8_is_bad_input_not_an_io_failure() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = options(obs.clone(), ReportSeverity::Critical);

    report_from_path("tests/fixtures/invalid_utf8.json", &mut Vec::<u8>::new(), &opts).unwrap_err();

    assert_eq!(*obs.failures.lock().unwrap(), vec![(0, ReportSeverity::Error, false)]);
}

#[test]
fn lower_threshold_alerts_on_empty_input() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = options(obs.clone(), ReportSeverity::Error);

    report_from_path("tests/fixtures/empty.json", &mut Vec::<u8>::new(), &opts).unwrap_err();

    assert_eq!(*obs.failures.lock().unwrap(), vec![(0, ReportSeverity::Error, true)]);
}

#[test]
fn every_observer_gets_events_and_file_observer_appends() {
    let log = tmp_log();
    let recorder = Arc::new(RecordingObserver::default());
    let opts = ReportOptions {
        observers: vec![
            recorder.clone() as Arc<dyn ReportObserver>,
            Arc::new(FileObserver::new(&log)),
        ],
        ..Default::default()
    };

    report_from_path("tests/fixtures/ratings.json", &mut Vec::<u8>::new(), &opts).unwrap();
    report_from_path("tests/fixtures/not_an_array.json", &mut Vec::<u8>::new(), &opts).unwrap_err();

    assert_eq!(recorder.events.lock().unwrap().len(), 4);

    let text = std::fs::read_to_string(&log).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].ends_with(" path=tests/fixtures/ratings.json record=0 rating=3.000000"));
    assert!(lines[2].ends_with(" path=tests/fixtures/ratings.json ok matches=2 avg=4.000000"));
    assert!(lines[3].contains(" fail severity=Error reported=0 "));
    assert!(lines[3].contains("expected a json array of records, found an object"));

    let _ = std::fs::remove_file(&log);
}

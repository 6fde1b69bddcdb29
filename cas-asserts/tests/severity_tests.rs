//! Routing of failures to the reporting sink at each severity.

use std::io::Write;
use std::sync::{Arc, Mutex};

use cas_asserts::{
    Assert, CapturingReporter, Config, Report, ReportKind, Severity, TestReporter,
    TracingReporter,
};
use pretty_assertions::assert_eq;

#[test]
fn error_severity_records_hard_failures() {
    let reporter = CapturingReporter::new();
    let a = Assert::with_level(&reporter, 0);

    assert!(!a.equals(1, 2));
    assert_eq!(
        reporter.reports(),
        vec![Report {
            kind: ReportKind::Error,
            message: String::from("Expected: 1 (i32), Actual: 2 (i32)"),
        }]
    );
}

#[test]
fn log_severity_records_log_lines() {
    let reporter = CapturingReporter::new();
    let a = Assert::with_level(&reporter, 1);

    assert!(!a.equals("x", "y"));
    assert!(!a.equals(vec![1], vec![1, 2]));
    assert!(reporter.errors().is_empty());
    assert_eq!(reporter.logs().len(), 2);
}

#[test]
fn other_levels_are_silent() {
    let reporter = CapturingReporter::new();

    for level in [2, 42, -1] {
        let a = Assert::with_level(&reporter, level);
        assert!(!a.equals(1, 2));
        assert!(!a.is_nil(1));
        assert!(!a.has_error("boom", None::<&std::io::Error>));
        assert!(a.equals(1, 1));
    }

    assert!(reporter.is_empty());
}

#[test]
fn successful_assertions_never_report() {
    let reporter = CapturingReporter::new();

    for severity in [Severity::Error, Severity::Log, Severity::Silent] {
        let a = Assert::new(&reporter, severity);
        assert!(a.equals("same", "same"));
        assert!(a.is_nil(None::<i32>));
    }

    assert!(reporter.is_empty());
}

#[test]
fn colored_config_still_reports_every_failure() {
    let reporter = CapturingReporter::new();
    let config = Config::with_severity(Severity::Log).color(true);
    let a = Assert::from_config(&reporter, &config);

    assert!(!a.equals("abc", "abd"));

    let logs = reporter.logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].starts_with("Expected: abc, Actual: abd, Diff: "));
}

#[test]
fn test_reporter_passes_when_only_logging() {
    let reporter = TestReporter::named("soft");
    let a = Assert::new(&reporter, Severity::Log);

    assert!(!a.equals(1, 2));
    assert!(!reporter.failed());
}

#[test]
#[should_panic(expected = "[hard] 2 assertion(s) failed")]
fn test_reporter_fails_test_after_all_assertions_run() {
    let reporter = TestReporter::named("hard");
    let a = Assert::new(&reporter, Severity::Error);

    assert!(!a.equals(1, 2));
    assert!(!a.equals("a", "b"));
    assert!(a.equals(3, 3));
    assert_eq!(reporter.failure_count(), 2);
}

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        let bytes = self.0.lock().map(|b| b.clone()).unwrap_or_default();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if let Ok(mut inner) = self.0.lock() {
            inner.extend_from_slice(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn tracing_reporter_emits_events() {
    let buffer = SharedBuffer::default();
    let writer = buffer.clone();

    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .without_time()
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let a = Assert::new(&TracingReporter, Severity::Error);
        assert!(!a.equals(10_u64, 11_u64));

        let soft = Assert::new(&TracingReporter, Severity::Log);
        assert!(!soft.is_nil(Some(1)));
    });

    let output = buffer.contents();
    assert!(output.contains("ERROR"), "output: {output}");
    assert!(
        output.contains("Expected: 10 (u64), Actual: 11 (u64)"),
        "output: {output}"
    );
    assert!(output.contains("INFO"), "output: {output}");
    assert!(
        output.contains("Expected: <nil> (nil), Actual: 1 (i32)"),
        "output: {output}"
    );
}

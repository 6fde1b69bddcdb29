//! Reporting sinks for assertion failures.

use std::cell::{Cell, RefCell};

use colored::Colorize;

use crate::trace_categories;

/// Destination for assertion failure messages.
///
/// A sink is typically a handle onto the host test framework. Both methods
/// take `&self`; sinks that need to record state use interior mutability.
pub trait Reporter {
    /// Records a hard failure. The test should be marked failed, but the
    /// sink decides whether execution continues.
    fn error(&self, message: &str);

    /// Records an informational message.
    fn log(&self, message: &str);
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn error(&self, message: &str) {
        (**self).error(message);
    }

    fn log(&self, message: &str) {
        (**self).log(message);
    }
}

/// Sink bridging to Rust's built-in test harness.
///
/// Errors are written to stderr and mark the test as failed without stopping
/// it. If any error was recorded, the reporter panics when dropped so the
/// enclosing `#[test]` fails once all of its assertions have run.
#[derive(Debug, Default)]
pub struct TestReporter {
    name: Option<String>,
    failures: Cell<usize>,
}

impl TestReporter {
    /// Creates a reporter for an unnamed test.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a reporter whose messages are prefixed with a test name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            failures: Cell::new(0),
        }
    }

    /// Returns whether any hard failure has been recorded.
    pub fn failed(&self) -> bool {
        self.failures.get() > 0
    }

    /// Returns the number of hard failures recorded so far.
    pub fn failure_count(&self) -> usize {
        self.failures.get()
    }

    fn prefix(&self) -> String {
        self.name
            .as_ref()
            .map_or_else(String::new, |n| std::format!("[{n}] "))
    }
}

impl Reporter for TestReporter {
    fn error(&self, message: &str) {
        self.failures.set(self.failures.get() + 1);
        eprintln!("{}{} {message}", self.prefix(), "FAILED:".bright_red());
    }

    fn log(&self, message: &str) {
        println!("{}{message}", self.prefix());
    }
}

impl Drop for TestReporter {
    #[expect(clippy::panic)]
    fn drop(&mut self) {
        if self.failed() && !std::thread::panicking() {
            panic!(
                "{}{} assertion(s) failed",
                self.prefix(),
                self.failures.get()
            );
        }
    }
}

/// Which reporter method a [`Report`] was delivered through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReportKind {
    /// Delivered via [`Reporter::error`].
    Error,
    /// Delivered via [`Reporter::log`].
    Log,
}

/// A single recorded report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    /// How the report was delivered.
    pub kind: ReportKind,
    /// The formatted message.
    pub message: String,
}

/// Sink that records every report for later inspection.
#[derive(Debug, Default)]
pub struct CapturingReporter {
    reports: RefCell<Vec<Report>>,
}

impl CapturingReporter {
    /// Creates an empty capturing reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every report, in delivery order.
    pub fn reports(&self) -> Vec<Report> {
        self.reports.borrow().clone()
    }

    /// Returns the messages delivered as hard failures.
    pub fn errors(&self) -> Vec<String> {
        self.messages(ReportKind::Error)
    }

    /// Returns the messages delivered as log lines.
    pub fn logs(&self) -> Vec<String> {
        self.messages(ReportKind::Log)
    }

    /// Returns whether nothing has been reported.
    pub fn is_empty(&self) -> bool {
        self.reports.borrow().is_empty()
    }

    /// Discards every recorded report.
    pub fn clear(&self) {
        self.reports.borrow_mut().clear();
    }

    fn messages(&self, kind: ReportKind) -> Vec<String> {
        self.reports
            .borrow()
            .iter()
            .filter(|r| r.kind == kind)
            .map(|r| r.message.clone())
            .collect()
    }

    fn push(&self, kind: ReportKind, message: &str) {
        self.reports.borrow_mut().push(Report {
            kind,
            message: message.to_owned(),
        });
    }
}

impl Reporter for CapturingReporter {
    fn error(&self, message: &str) {
        self.push(ReportKind::Error, message);
    }

    fn log(&self, message: &str) {
        self.push(ReportKind::Log, message);
    }
}

/// Sink that forwards reports to `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn error(&self, message: &str) {
        tracing::error!(target: trace_categories::REPORT, "{message}");
    }

    fn log(&self, message: &str) {
        tracing::info!(target: trace_categories::REPORT, "{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn capturing_reporter_keeps_order_and_kind() {
        let reporter = CapturingReporter::new();
        assert!(reporter.is_empty());

        reporter.log("first");
        reporter.error("second");
        reporter.log("third");

        assert_eq!(reporter.errors(), vec![String::from("second")]);
        assert_eq!(
            reporter.logs(),
            vec![String::from("first"), String::from("third")]
        );
        assert_eq!(reporter.reports().len(), 3);

        reporter.clear();
        assert!(reporter.is_empty());
    }

    #[test]
    fn reporter_through_reference() {
        let reporter = CapturingReporter::new();
        let by_ref = &reporter;
        Reporter::error(&by_ref, "via ref");
        assert_eq!(reporter.errors(), vec![String::from("via ref")]);
    }

    #[test]
    fn test_reporter_log_does_not_fail() {
        let reporter = TestReporter::named("logs_only");
        reporter.log("just a note");
        assert!(!reporter.failed());
    }

    #[test]
    #[should_panic(expected = "1 assertion(s) failed")]
    fn test_reporter_panics_on_drop_after_error() {
        let reporter = TestReporter::new();
        reporter.error("boom");
        assert_eq!(reporter.failure_count(), 1);
    }
}

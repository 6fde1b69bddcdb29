//! The assertion context.

use std::fmt::Display;

use crate::config::{Config, Severity};
use crate::format;
use crate::reporter::Reporter;
use crate::trace_categories;
use crate::value::{Comparable, Nil, Value};

/// Performs assertions for a single test and reports failures to a sink.
///
/// Every assertion returns `true` on success and `false` on failure. Failures
/// are delivered to the [`Reporter`] according to the configured
/// [`Severity`]; no assertion panics by itself.
///
/// ```
/// use cas_asserts::{Assert, CapturingReporter, Severity};
///
/// let reporter = CapturingReporter::new();
/// let a = Assert::new(&reporter, Severity::Error);
///
/// assert!(a.equals(vec![1, 2, 3], vec![1, 2, 3]));
/// assert!(!a.equals("abc", "abd"));
/// assert_eq!(reporter.errors().len(), 1);
/// ```
#[derive(Debug)]
pub struct Assert<'r, R: Reporter + ?Sized> {
    reporter: &'r R,
    severity: Severity,
    color: bool,
}

impl<'r, R: Reporter + ?Sized> Assert<'r, R> {
    /// Creates an assertion context reporting to `reporter` at `severity`.
    pub const fn new(reporter: &'r R, severity: Severity) -> Self {
        Self {
            reporter,
            severity,
            color: false,
        }
    }

    /// Creates an assertion context from an integer level.
    ///
    /// See [`Severity::from_level`] for the mapping.
    pub const fn with_level(reporter: &'r R, level: i64) -> Self {
        Self::new(reporter, Severity::from_level(level))
    }

    /// Creates an assertion context from a [`Config`].
    pub const fn from_config(reporter: &'r R, config: &Config) -> Self {
        Self {
            reporter,
            severity: config.severity,
            color: config.color,
        }
    }

    /// Returns the severity at which failures are reported.
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Checks that `expected` and `actual` are deeply equal.
    ///
    /// Both operands must have the same concrete type; no numeric or string
    /// coercion is performed. Sequences are compared element by element,
    /// stopping at the first difference.
    pub fn equals<E, A>(&self, expected: E, actual: A) -> bool
    where
        E: Comparable,
        A: Comparable,
    {
        let expected = expected.to_value();
        let actual = actual.to_value();
        self.check(expected.as_ref(), actual.as_ref())
    }

    /// Checks that `actual` is absent.
    pub fn is_nil<A: Comparable>(&self, actual: A) -> bool {
        self.equals(Nil, actual)
    }

    /// Checks that `actual` is present and its message equals `expected`.
    ///
    /// ```
    /// use cas_asserts::{Assert, CapturingReporter, Severity};
    ///
    /// let reporter = CapturingReporter::new();
    /// let a = Assert::new(&reporter, Severity::Error);
    /// let result: Result<(), std::io::Error> = Err(std::io::Error::other("boom"));
    ///
    /// assert!(a.has_error("boom", result.as_ref().err()));
    /// ```
    pub fn has_error<E>(&self, expected: &str, actual: Option<&E>) -> bool
    where
        E: Display + ?Sized,
    {
        match actual {
            Some(err) => self.equals(expected, err.to_string()),
            None => {
                let expected = Value::Str(expected.to_owned());
                self.report(&format::mismatch(Some(&expected), None, self.color));
                false
            }
        }
    }

    fn check(&self, expected: Option<&Value>, actual: Option<&Value>) -> bool {
        let (expected, actual) = match (expected, actual) {
            (None, None) => return true,
            (Some(e), Some(a)) => (e, a),
            (e, a) => {
                self.report(&format::mismatch(e, a, self.color));
                return false;
            }
        };

        let (expected_kind, actual_kind) = (expected.kind(), actual.kind());
        if !expected_kind.is_supported() || !actual_kind.is_supported() {
            self.report(&format::unsupported(expected_kind, actual_kind));
            return false;
        }

        let (expected_type, actual_type) = (expected.type_label(), actual.type_label());
        tracing::debug!(target: trace_categories::COMPARE, "comparing {expected_type} with {actual_type}");

        if expected_type != actual_type {
            self.report(&format::mismatch(Some(expected), Some(actual), self.color));
            return false;
        }

        if let (Value::Seq { items: e, .. }, Value::Seq { items: a, .. }) = (expected, actual) {
            return self.check_sequence(e, a);
        }

        if expected != actual {
            self.report(&format::mismatch(Some(expected), Some(actual), self.color));
            return false;
        }

        true
    }

    fn check_sequence(&self, expected: &[Option<Value>], actual: &[Option<Value>]) -> bool {
        if expected.len() != actual.len() {
            self.report(&format::length_mismatch(expected.len(), actual.len()));
            return false;
        }

        expected
            .iter()
            .zip(actual)
            .all(|(e, a)| self.check(e.as_ref(), a.as_ref()))
    }

    fn report(&self, message: &str) {
        tracing::trace!(target: trace_categories::REPORT, severity = %self.severity, "assertion failed");

        match self.severity {
            Severity::Error => self.reporter.error(message),
            Severity::Log => self.reporter.log(message),
            Severity::Silent => (),
        }
    }
}

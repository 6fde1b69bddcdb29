//! Lightweight assertions for unit tests.
//!
//! This crate provides an [`Assert`] context with three checks:
//!
//! * [`Assert::equals`] compares two values deeply. Scalars, strings, and
//!   one-dimensional sequences are supported; operands must share the same
//!   concrete type.
//! * [`Assert::is_nil`] checks that a value is absent.
//! * [`Assert::has_error`] checks that an error is present and carries the
//!   expected message.
//!
//! # Reporting
//!
//! Assertions never panic. A failed check is formatted and delivered to a
//! [`Reporter`] at the context's [`Severity`]:
//!
//! 1. **Error**: the failure is recorded as a hard test failure.
//! 2. **Log**: the failure is recorded as an informational message.
//! 3. **Silent**: nothing is recorded; only the return value signals failure.
//!
//! [`TestReporter`] bridges to Rust's built-in test harness, failing the test
//! once it goes out of scope if any hard failure was recorded.

mod assert;
mod config;
pub mod error;
mod format;
mod reporter;
pub mod trace_categories;
mod value;

pub use assert::Assert;
pub use config::{Config, Severity};
pub use error::Error;
pub use reporter::{CapturingReporter, Report, ReportKind, Reporter, TestReporter, TracingReporter};
pub use value::{Comparable, Complex, Kind, Nil, Opaque, Value};

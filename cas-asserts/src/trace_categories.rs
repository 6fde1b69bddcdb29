//! Trace utilities

/// Trace category for value comparisons.
pub const COMPARE: &str = "compare";
/// Trace category for failure reports.
pub const REPORT: &str = "report";

//! Failure message formatting.

use crate::value::{Kind, Value};
use colored::Colorize;

const NIL_DISPLAY: &str = "<nil>";
const NIL_TYPE: &str = "nil";

/// Formats a mismatch between two operands, either of which may be absent.
///
/// String pairs get a character-level diff; everything else is annotated with
/// its type label.
pub(crate) fn mismatch(expected: Option<&Value>, actual: Option<&Value>, color: bool) -> String {
    if let (Some(Value::Str(e)), Some(Value::Str(a))) = (expected, actual) {
        return std::format!(
            "Expected: {e}, Actual: {a}, Diff: {}",
            character_diff(e, a, color)
        );
    }

    std::format!(
        "Expected: {} ({}), Actual: {} ({})",
        display_or_nil(expected),
        type_or_nil(expected),
        display_or_nil(actual),
        type_or_nil(actual),
    )
}

pub(crate) fn unsupported(expected: Kind, actual: Kind) -> String {
    std::format!("Unsupported type in comparison: {expected}, {actual}")
}

pub(crate) fn length_mismatch(expected: usize, actual: usize) -> String {
    std::format!("Expected and actual sequences are of a different length: {expected} vs. {actual}")
}

fn display_or_nil(value: Option<&Value>) -> String {
    value.map_or_else(|| NIL_DISPLAY.to_owned(), ToString::to_string)
}

fn type_or_nil(value: Option<&Value>) -> String {
    value.map_or_else(|| NIL_TYPE.to_owned(), |v| v.type_label().into_owned())
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Run {
    Same,
    Deleted,
    Inserted,
}

/// Renders a character-level diff of `left` against `right`.
///
/// Unchanged runs are copied verbatim, removed runs are wrapped as
/// `(~~text~~)` and added runs as `(++text++)`.
pub(crate) fn character_diff(left: &str, right: &str, color: bool) -> String {
    let mut out = String::new();
    let mut pending = String::new();
    let mut current = Run::Same;

    for d in diff::chars(left, right) {
        let (run, c) = match d {
            diff::Result::Left(c) => (Run::Deleted, c),
            diff::Result::Both(c, _) => (Run::Same, c),
            diff::Result::Right(c) => (Run::Inserted, c),
        };

        if run != current {
            flush_run(&mut out, current, &pending, color);
            pending.clear();
            current = run;
        }

        pending.push(c);
    }

    flush_run(&mut out, current, &pending, color);
    out
}

fn flush_run(out: &mut String, run: Run, text: &str, color: bool) {
    if text.is_empty() {
        return;
    }

    let formatted = match run {
        Run::Same => text.to_owned(),
        Run::Deleted => {
            let marked = std::format!("(~~{text}~~)");
            if color { marked.red().to_string() } else { marked }
        }
        Run::Inserted => {
            let marked = std::format!("(++{text}++)");
            if color { marked.green().to_string() } else { marked }
        }
    };

    out.push_str(&formatted);
}

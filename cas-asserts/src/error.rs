//! Error types for the crate.

use std::path::PathBuf;

/// Errors raised while configuring an assertion context.
///
/// Assertion failures themselves are never surfaced as errors; they are
/// delivered to a [`Reporter`](crate::Reporter).
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The configuration file could not be read.
    #[error("failed to read config file {0}: {1}")]
    ReadConfig(PathBuf, #[source] std::io::Error),

    /// The configuration text is not valid TOML for this crate.
    #[error("failed to parse config: {0}")]
    ParseConfig(#[from] toml::de::Error),

    /// A severity name was not recognized.
    #[error("unknown severity: {0}")]
    UnknownSeverity(String),
}

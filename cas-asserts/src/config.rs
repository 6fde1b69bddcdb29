//! Configuration for assertion contexts.
//!
//! Configuration may be built in code or loaded from TOML. Loading is
//! forward-compatible: unknown keys are ignored and missing keys take their
//! defaults.
//!
//! ```toml
//! severity = "log"
//! color = true
//! ```

use std::path::Path;
use std::str::FromStr;

use crate::error::Error;

/// How a failed assertion is reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(try_from = "String")]
pub enum Severity {
    /// Report failures as hard test failures.
    #[default]
    Error,
    /// Report failures as informational log lines.
    Log,
    /// Report nothing; only the return value signals failure.
    Silent,
}

impl Severity {
    /// Maps an integer level to a severity.
    ///
    /// `0` is [`Severity::Error`], `1` is [`Severity::Log`], and every other
    /// level is [`Severity::Silent`].
    pub const fn from_level(level: i64) -> Self {
        match level {
            0 => Self::Error,
            1 => Self::Log,
            _ => Self::Silent,
        }
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "log" => Ok(Self::Log),
            "silent" => Ok(Self::Silent),
            _ => Err(Error::UnknownSeverity(s.to_owned())),
        }
    }
}

impl TryFrom<String> for Severity {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, <Self as TryFrom<String>>::Error> {
        value.parse()
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Log => write!(f, "log"),
            Self::Silent => write!(f, "silent"),
        }
    }
}

/// Settings for an [`Assert`](crate::Assert).
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// How failures are reported.
    pub severity: Severity,

    /// Whether string diffs are colorized.
    pub color: bool,
}

impl Config {
    /// Returns a configuration with the given severity and no color.
    pub const fn with_severity(severity: Severity) -> Self {
        Self {
            severity,
            color: false,
        }
    }

    /// Sets whether string diffs are colorized.
    #[must_use]
    pub const fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Parses configuration from TOML text.
    ///
    /// An unrecognized severity name is reported as
    /// [`Error::UnknownSeverity`]; any other malformed input as
    /// [`Error::ParseConfig`].
    pub fn from_toml_str(content: &str) -> Result<Self, Error> {
        let file: ConfigFile = toml::from_str(content)?;

        let mut config = Self::default();
        if let Some(severity) = file.severity {
            config.severity = severity.parse()?;
        }
        if let Some(color) = file.color {
            config.color = color;
        }

        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::ReadConfig(path.to_path_buf(), e))?;

        let config = Self::from_toml_str(&content)?;
        tracing::debug!("loaded assertion config from {}: {config:?}", path.display());

        Ok(config)
    }
}

/// On-disk layout of a configuration file, before validation.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ConfigFile {
    severity: Option<String>,
    color: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn levels_map_to_severities() {
        assert_eq!(Severity::from_level(0), Severity::Error);
        assert_eq!(Severity::from_level(1), Severity::Log);
        assert_eq!(Severity::from_level(2), Severity::Silent);
        assert_eq!(Severity::from_level(-1), Severity::Silent);
    }

    #[test]
    fn severity_parses_case_insensitively() {
        assert_eq!("LOG".parse::<Severity>().ok(), Some(Severity::Log));
        assert_eq!("silent".parse::<Severity>().ok(), Some(Severity::Silent));
        assert!(matches!(
            "loud".parse::<Severity>(),
            Err(Error::UnknownSeverity(s)) if s == "loud"
        ));
    }

    #[test]
    fn severity_display_round_trips() {
        for severity in [Severity::Error, Severity::Log, Severity::Silent] {
            assert_eq!(severity.to_string().parse::<Severity>().ok(), Some(severity));
        }
    }

    #[test]
    fn deserializes_severity_like_from_str() {
        let config: Config = toml::from_str("severity = \"LOG\"").unwrap();
        assert_eq!(config.severity, Severity::Log);

        let err = toml::from_str::<Config>("severity = \"loud\"").unwrap_err();
        assert!(err.to_string().contains("unknown severity: loud"), "{err}");
    }

    #[test]
    fn defaults_to_hard_failures() {
        let config = Config::default();
        assert_eq!(config.severity, Severity::Error);
        assert!(!config.color);
    }

    #[test]
    fn builder_sets_fields() {
        let config = Config::with_severity(Severity::Log).color(true);
        assert_eq!(config.severity, Severity::Log);
        assert!(config.color);
    }
}

//! Centralized configuration for garage-cli.
//!
//! Environment variables are loaded and validated at startup to fail fast on
//! misconfiguration. Command-line flags override whatever is read here.

use std::env;
use std::fmt;

use garage_domain::sample::SampleSet;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    fn from_str(s: &str) -> Self {
        if s.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Pretty
        }
    }
}

/// How command results are printed on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Configuration error.
#[derive(Debug)]
pub struct ConfigError {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Configuration error for {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// CLI configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log format (default: pretty)
    pub log_format: LogFormat,
    /// Parts the garage is seeded with before running a command (default: basic)
    pub samples: SampleSet,
    /// Result format on stdout (default: text)
    pub output: OutputFormat,
}

impl Config {
    /// Load and validate configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Log format
        let log_format =
            LogFormat::from_str(&lookup("LOG_FORMAT").unwrap_or_else(|| "pretty".into()));

        // Sample set seeded before each command

        let samples = match lookup("GARAGE_SAMPLES").filter(|s| !s.is_empty()) {
            Some(raw) => SampleSet::parse(&raw).map_err(|e| ConfigError {
                field: "GARAGE_SAMPLES",
                message: e.to_string(),
            })?,
            None => SampleSet::default(),
        };

        // Output format
        let output = match lookup("GARAGE_OUTPUT").filter(|s| !s.is_empty()) {
            Some(raw) => OutputFormat::parse(&raw).ok_or_else(|| ConfigError {
                field: "GARAGE_OUTPUT",
                message: format!("expected 'text' or 'json', got '{}'", raw),
            })?,
            None => OutputFormat::Text,
        };

        Ok(Self {
            log_format,
            samples,
            output,
        })
    }
}

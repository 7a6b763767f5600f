use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Input file read when nothing else is configured.
pub const DEFAULT_INPUT: &str = "./results.json";
/// Number of phrases reported when nothing else is configured.
pub const DEFAULT_TOP: usize = 50;

/// Errors encountered while loading configuration from environment variables.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable contained a value that could not be parsed.
    #[error("Invalid value for environment variable {key}: {value:?}")]
    InvalidValue {
        /// Name of the offending variable.
        key: String,
        /// Raw value as found in the environment.
        value: String,
    },
}

/// Runtime configuration for a single analysis pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON document holding the scraped job records.
    pub input: PathBuf,
    /// Maximum number of phrases to report.
    pub top: usize,
    /// Rendering used for the report on stdout.
    pub format: OutputFormat,
    /// Keep the original casing of extracted phrases instead of lower-casing them.
    pub preserve_case: bool,
}

/// Supported report renderings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Interpreter-style list of `(phrase, count)` tuples.
    #[default]
    Repr,
    /// One `count<TAB>phrase` line per entry.
    Lines,
    /// JSON object with phrases and run statistics.
    Json,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            top: DEFAULT_TOP,
            format: OutputFormat::default(),
            preserve_case: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults.
    ///
    /// A `.env` file in the working directory is honoured when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let load = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let top = match load("JOBPHRASE_TOP") {
            Some(value) => parse_top(&value).ok_or_else(|| invalid("JOBPHRASE_TOP", &value))?,
            None => defaults.top,
        };
        let format = match load("JOBPHRASE_FORMAT") {
            Some(value) => value
                .parse::<OutputFormat>()
                .map_err(|()| invalid("JOBPHRASE_FORMAT", &value))?,
            None => defaults.format,
        };
        let preserve_case = match load("JOBPHRASE_PRESERVE_CASE") {
            Some(value) => {
                parse_flag(&value).ok_or_else(|| invalid("JOBPHRASE_PRESERVE_CASE", &value))?
            }
            None => defaults.preserve_case,
        };

        let config = Self {
            input: load("JOBPHRASE_INPUT").map_or(defaults.input, PathBuf::from),
            top,
            format,
            preserve_case,
        };
        tracing::debug!(
            input = %config.input.display(),
            top = config.top,
            format = ?config.format,
            preserve_case = config.preserve_case,
            "Loaded configuration"
        );
        Ok(config)
    }
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn parse_top(value: &str) -> Option<usize> {
    value.trim().parse().ok().filter(|top| *top > 0)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "repr" => Ok(Self::Repr),
            "lines" => Ok(Self::Lines),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

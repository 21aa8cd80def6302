//! Harness configuration loaded from environment variables.

use std::path::PathBuf;

use domain::DayNumber;

use crate::error::CliError;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Harness configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `RELAY_CATALOG`: catalog JSON path (default: `"catalog.json"`)
/// - `RELAY_DATA_DIR`: where documents are written (default: `"."`)
/// - `RELAY_ALLOWED_DAYS`: comma-separated day numbers (default: `"1,2,4,5,6"`)
/// - `RELAY_MAX_ITEMS`: products per simulated order (default: `5`)
/// - `RELAY_HOME_PLANT`: plant whose products need no inbound trailer (default: `191`)
/// - `RELAY_LOG_FORMAT`: `json` for JSON logs, anything else for text
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
#[derive(Debug, Clone)]
pub struct Config {
    pub catalog_path: PathBuf,
    pub data_dir: PathBuf,
    pub allowed_days: Vec<DayNumber>,
    pub max_items: usize,
    pub home_plant: u32,
    pub log_level: String,
    pub log_format: LogFormat,
}

const DEFAULT_ALLOWED_DAYS: [u8; 5] = [1, 2, 4, 5, 6];

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    ///
    /// Unparseable numbers fall back to their default; a malformed day list
    /// is an error.
    pub fn from_env() -> Result<Self, CliError> {
        let defaults = Self::default();

        let allowed_days = match std::env::var("RELAY_ALLOWED_DAYS") {
            Ok(days) => parse_days(&days)?,
            Err(_) => defaults.allowed_days,
        };

        Ok(Self {
            catalog_path: std::env::var("RELAY_CATALOG")
                .map(PathBuf::from)
                .unwrap_or(defaults.catalog_path),
            data_dir: std::env::var("RELAY_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            allowed_days,
            max_items: std::env::var("RELAY_MAX_ITEMS")
                .ok()
                .and_then(|n| n.parse().ok())
                .filter(|&n| n > 0)
                .unwrap_or(defaults.max_items),
            home_plant: std::env::var("RELAY_HOME_PLANT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.home_plant),
            log_level: std::env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: match std::env::var("RELAY_LOG_FORMAT") {
                Ok(format) if format.eq_ignore_ascii_case("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        })
    }

    /// Checks a day number against the deployment's allowed days.
    ///
    /// Days outside 1..=6 are never allowed.
    pub fn check_day(&self, day: u8) -> Result<DayNumber, CliError> {
        match DayNumber::new(day) {
            Ok(day) if self.allowed_days.contains(&day) => Ok(day),
            _ => Err(CliError::DayNotAllowed {
                day,
                allowed: self
                    .allowed_days
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(","),
            }),
        }
    }
}

fn parse_days(value: &str) -> Result<Vec<DayNumber>, CliError> {
    let mut days = Vec::new();
    for part in value.split(',').map(str::trim).filter(|part| !part.is_empty()) {
        let day = part
            .parse::<u8>()
            .ok()
            .and_then(|day| DayNumber::new(day).ok())
            .ok_or_else(|| CliError::Config(format!("invalid day in RELAY_ALLOWED_DAYS: {part}")))?;
        if !days.contains(&day) {
            days.push(day);
        }
    }

    if days.is_empty() {
        return Err(CliError::Config("RELAY_ALLOWED_DAYS is empty".to_string()));
    }
    days.sort();
    Ok(days)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("catalog.json"),
            data_dir: PathBuf::from("."),
            allowed_days: DEFAULT_ALLOWED_DAYS
                .iter()
                .filter_map(|&day| DayNumber::new(day).ok())
                .collect(),
            max_items: 5,
            home_plant: 191,
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

//! Runtime settings read from the environment.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `CLUBROSTER_SEARCH_DEBOUNCE_MS` | `300` | Quiet period before a search is applied |
//! | `CLUBROSTER_SEED_FILE` | unset | JSON array of club seeds to load at start-up |
//! | `CLUBROSTER_LOAD_DEMO` | `true` | Load the demo clubs when no seed file is set |

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

pub const SEARCH_DEBOUNCE_MS_VAR: &str = "CLUBROSTER_SEARCH_DEBOUNCE_MS";
pub const SEED_FILE_VAR: &str = "CLUBROSTER_SEED_FILE";
pub const LOAD_DEMO_VAR: &str = "CLUBROSTER_LOAD_DEMO";

const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("{var} must be a whole number of milliseconds, got {value:?}")]
    InvalidDuration { var: &'static str, value: String },

    #[error("{var} must be true or false, got {value:?}")]
    InvalidFlag { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    pub search_debounce: Duration,
    pub seed_file: Option<PathBuf>,
    pub load_demo: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            search_debounce: Duration::from_millis(DEFAULT_SEARCH_DEBOUNCE_MS),
            seed_file: None,
            load_demo: true,
        }
    }
}

impl AppSettings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read settings through `lookup`; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let get = |var: &str| {
            lookup(var)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        let defaults = Self::default();

        let search_debounce = match get(SEARCH_DEBOUNCE_MS_VAR) {
            Some(value) => value
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| SettingsError::InvalidDuration {
                    var: SEARCH_DEBOUNCE_MS_VAR,
                    value,
                })?,
            None => defaults.search_debounce,
        };

        let load_demo = match get(LOAD_DEMO_VAR) {
            Some(value) => parse_flag(&value).ok_or(SettingsError::InvalidFlag {
                var: LOAD_DEMO_VAR,
                value,
            })?,
            None => defaults.load_demo,
        };

        Ok(Self {
            search_debounce,
            seed_file: get(SEED_FILE_VAR).map(PathBuf::from),
            load_demo,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

//! Unified application error type.

use std::path::PathBuf;

use clubroster_domain::DomainError;
use thiserror::Error;

use super::settings::SettingsError;

/// Everything that can fail while starting or driving the application.
#[derive(Debug, Error)]
pub enum AppError {
    /// A roster rule rejected the operation.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Environment configuration is invalid.
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    /// Seed file could not be read.
    #[error("Failed to read seed file {path}: {source}")]
    SeedRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Seed file is not a JSON array of club seeds.
    #[error("Invalid seed file {path}: {source}")]
    SeedFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl AppError {
    /// Returns the domain error, if this is one.
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            AppError::Domain(err) => Some(err),
            _ => None,
        }
    }
}

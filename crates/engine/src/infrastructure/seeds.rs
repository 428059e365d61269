//! Start-up roster loading.

use std::path::Path;

use clubroster_domain::{demo_seeds, ClubSeed, Roster};

use super::error::AppError;
use super::settings::AppSettings;

/// Read a JSON array of club seeds.
pub fn read_seed_file(path: &Path) -> Result<Vec<ClubSeed>, AppError> {
    let raw = std::fs::read_to_string(path).map_err(|source| AppError::SeedRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| AppError::SeedFormat {
        path: path.to_path_buf(),
        source,
    })
}

/// Build the initial roster: seed file if configured, else demo clubs if enabled, else empty.
pub fn initial_roster(settings: &AppSettings) -> Result<Roster, AppError> {
    let seeds = match &settings.seed_file {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading clubs from seed file");
            read_seed_file(path)?
        }
        None if settings.load_demo => {
            tracing::info!("Loading demo clubs");
            demo_seeds()
        }
        None => Vec::new(),
    };

    let roster = Roster::from_seeds(&seeds)?;
    tracing::info!(clubs = roster.len(), "Roster ready");
    Ok(roster)
}

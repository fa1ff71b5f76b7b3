//! Loading an initial patient list from a JSON file.

use std::path::Path;

use thiserror::Error;
use vet_tracker_core::models::PatientRecord;
use vet_tracker_core::store::{PatientStore, PreloadError};

/// Seed file errors.
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid seed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Rejected seed: {0}")]
    Rejected(#[from] PreloadError),
}

pub type SeedResult<T> = Result<T, SeedError>;

/// Read a JSON array of patient records into a store.
pub fn load_seed<P: AsRef<Path>>(path: P) -> SeedResult<PatientStore> {
    let json = std::fs::read_to_string(path)?;
    parse_seed(&json)
}

/// Parse seed JSON, holding records to the same completeness rule as the form.
pub fn parse_seed(json: &str) -> SeedResult<PatientStore> {
    let records: Vec<PatientRecord> = serde_json::from_str(json)?;
    let store = PatientStore::try_with_records(records)?;

    tracing::info!(count = store.len(), "loaded seed patients");
    Ok(store)
}

//! File reading utilities
//!
//! Snapshots arrive as JSON or YAML files; both readers fail with a
//! not-found error for missing files rather than inventing an empty budget.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::BalanceError;

/// Serialization format of a file on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Yaml,
}

impl FileFormat {
    /// Pick the format from the file extension; anything but `.yaml`/`.yml` is JSON
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

fn open_required(path: &Path) -> Result<BufReader<File>, BalanceError> {
    if !path.exists() {
        return Err(BalanceError::snapshot_not_found(path.display().to_string()));
    }

    let file = File::open(path)
        .map_err(|e| BalanceError::Io(format!("Failed to open {}: {}", path.display(), e)))?;
    Ok(BufReader::new(file))
}

/// Read JSON from a file, returning an error if the file doesn't exist
pub fn read_json_required<T, P>(path: P) -> Result<T, BalanceError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let reader = open_required(path)?;
    serde_json::from_reader(reader)
        .map_err(|e| BalanceError::Json(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Read YAML from a file, returning an error if the file doesn't exist
pub fn read_yaml_required<T, P>(path: P) -> Result<T, BalanceError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let reader = open_required(path)?;
    serde_yaml::from_reader(reader)
        .map_err(|e| BalanceError::Yaml(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Read a file in the format implied by its extension
pub fn read_required<T, P>(path: P) -> Result<T, BalanceError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    match FileFormat::from_path(path) {
        FileFormat::Json => read_json_required(path),
        FileFormat::Yaml => read_yaml_required(path),
    }
}

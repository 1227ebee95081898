use crate::errors::{AppError, AppResult};
use crate::models::collection::WorkoutCollection;
use crate::storage::persistence;
use crate::storage::record::StoredWorkout;
use crate::ui::messages::warning;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Write workouts as pretty-printed JSON, same record shape as the store.
pub fn write_json(path: &Path, workouts: &WorkoutCollection) -> AppResult<()> {
    let records: Vec<StoredWorkout> = workouts.iter().map(StoredWorkout::from).collect();
    let json = serde_json::to_string_pretty(&records)?;
    fs::write(path, json)?;
    Ok(())
}

/// Read a JSON array of workout records (our own export, or a browser
/// `localStorage` dump of the web app). Malformed elements are skipped
/// with a warning; a file that is not a JSON array is an error.
pub fn read_json(path: &Path) -> AppResult<Vec<StoredWorkout>> {
    let raw = fs::read_to_string(path)?;
    let values: Vec<Value> = serde_json::from_str(&raw)
        .map_err(|e| AppError::Import(format!("{}: {}", path.display(), e)))?;

    let (records, skipped) = persistence::parse_records(values);
    if skipped > 0 {
        warning(format!(
            "Skipped {} malformed record(s) in {}.",
            skipped,
            path.display()
        ));
    }
    Ok(records)
}

use super::{ExportFormat, csv, fs_utils, json, notify_export_success};
use crate::errors::{AppError, AppResult};
use crate::models::collection::WorkoutCollection;
use crate::storage::record::StoredWorkout;
use crate::utils::path::expand_tilde;
use std::fs;
use std::path::PathBuf;

pub struct ExportLogic;

impl ExportLogic {
    /// Write `workouts` to `file` in `format`. Returns the resolved path.
    pub fn export(
        workouts: &WorkoutCollection,
        file: &str,
        format: ExportFormat,
        force: bool,
    ) -> AppResult<PathBuf> {
        let path = expand_tilde(file);

        if path.is_dir() {
            return Err(AppError::Export(format!(
                "'{}' is a directory",
                path.display()
            )));
        }

        fs_utils::ensure_writable(&path, force)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        match format {
            ExportFormat::Json => json::write_json(&path, workouts)?,
            ExportFormat::Csv => csv::write_csv(&path, workouts)?,
        }

        notify_export_success(&format.as_str().to_uppercase(), &path);
        Ok(path)
    }

    /// Read the records of a JSON file for import.
    pub fn read_import(file: &str) -> AppResult<Vec<StoredWorkout>> {
        let path = expand_tilde(file);
        if !path.is_file() {
            return Err(AppError::Import(format!(
                "file not found: {}",
                path.display()
            )));
        }
        json::read_json(&path)
    }
}

//! Unified application error type.
//! All modules (storage, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Input errors
    // ---------------------------
    #[error("{0}")]
    InvalidInput(String),

    #[error("Invalid workout type: {0}")]
    InvalidWorkoutType(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("No map location selected: click on the map before submitting a workout")]
    NoPendingLocation,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export / import errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("Import error: {0}")]
    Import(String),
}

pub type AppResult<T> = Result<T, AppError>;

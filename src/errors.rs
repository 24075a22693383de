//! Unified application error type.
//! All modules (store, db, export, validate) return AppError to keep the
//! error handling consistent and easy to manage.

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
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Event title must not be empty")]
    MissingTitle,

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid time range: {start} is not before {end}")]
    InvalidTimeRange { start: String, end: String },

    // ---------------------------
    // Store errors
    // ---------------------------
    #[error("No event with id {0}")]
    UnknownEvent(String),

    // ---------------------------
    // Interchange errors
    // ---------------------------
    #[error("CSV import failed: {0}")]
    ImportParse(String),

    #[error("CSV export failed: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;

//! Unified application error type.
//! All modules (db, store, core, cli) return AppError so that the binary has a
//! single place where failures are reported.

use std::io;
use thiserror::Error;

use crate::models::allocation::AllocationId;
use crate::models::time_log::LogId;

/// Write-time rejections produced by the time-log ledger.
///
/// These are recoverable: the ledger is left untouched and the caller decides
/// how to present the rejection.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Daily total for this collaborator cannot exceed 24h")]
    DailyCapExceeded,

    #[error("An entry already exists for this collaborator, date, project and activity")]
    DuplicateEntry,
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Corrupted '{name}' collection: {source}")]
    Snapshot {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Collection '{name}' has schema version {found}, this build understands up to {supported}")]
    SchemaVersion {
        name: String,
        found: u32,
        supported: u32,
    },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid hours: {0}")]
    InvalidHours(String),

    #[error("Invalid project phase: {0}")]
    InvalidPhase(String),

    #[error("Invalid demand type: {0}")]
    InvalidDemandType(String),

    // ---------------------------
    // Planner errors
    // ---------------------------
    #[error("Unknown resource: {0}")]
    UnknownResource(String),

    #[error("Day {day} is outside the visible window (0..{visible_days})")]
    DayOutOfRange { day: u32, visible_days: u32 },

    #[error("Allocation #{0} not found")]
    UnknownAllocation(AllocationId),

    #[error("Time log #{0} not found")]
    UnknownLog(LogId),

    #[error("No capacity available for {hours}h in the visible window")]
    NoCapacityAvailable { hours: f64 },

    #[error("Rejected: {0}")]
    Validation(#[from] ValidationError),

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
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;

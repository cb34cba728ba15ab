//! Core error types for reveille-core.
//!
//! All failures are surfaced to the caller; none aborts the process. There
//! is no retry policy: every operation is synchronous and either succeeds
//! or rejects, so callers re-issue with corrected input.

use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

/// Core error type for reveille-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Malformed alarm definition, rejected at creation time
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Unknown alarm id passed to toggle/delete
    #[error("No alarm with id {0}")]
    AlarmNotFound(Uuid),

    /// Stop requested while nothing is ringing
    #[error("No ringing session to stop")]
    NoActiveSession,

    /// Alarm definition file errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Validation errors raised when creating an alarm.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Time of day is not a valid HH:MM
    #[error("Invalid time of day '{value}': expected HH:MM")]
    InvalidTimeOfDay { value: String },

    /// Weekday token outside mon..sun
    #[error("Unknown weekday token '{token}'")]
    UnknownWeekday { token: String },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the alarm definitions file
    #[error("Failed to load alarms from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to parse the alarm definitions file
    #[error("Failed to parse alarms file: {0}")]
    ParseFailed(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

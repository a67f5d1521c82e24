//! Unified application error type.
//! All modules (db, core, cli, ai) return AppError to keep the error
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
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid quarter tag: {0} (expected e.g. 'Q1-2026' or 'Top Priority')")]
    InvalidQuarter(String),

    #[error("Invalid project status: {0} (expected Active, Completed or OnHold)")]
    InvalidStatus(String),

    #[error("Invalid focus score: {0} (must be between 1 and 5)")]
    InvalidFocusScore(i32),

    #[error("Invalid budget: {0} (must be greater than 0)")]
    InvalidBudget(f64),

    #[error("Invalid hours: {0} (must be greater than 0)")]
    InvalidHours(f64),

    // ---------------------------
    // Session lifecycle
    // ---------------------------
    #[error("A session is already in progress for '{0}' - stop or discard it first")]
    SessionAlreadyActive(String),

    #[error("No active session")]
    NoActiveSession,

    #[error("Session is not running (already stopped?)")]
    SessionNotRunning,

    #[error("No session awaiting review - use 'session stop' first")]
    SessionNotReviewing,

    // ---------------------------
    // Registry errors
    // ---------------------------
    #[error("Project not found: {0}")]
    ProjectNotFound(i64),

    #[error("Pillar already exists: {0}")]
    PillarExists(String),

    // ---------------------------
    // Advisory (Gemini) errors
    // ---------------------------
    #[error("Missing Gemini API key - set 'api_key' in the config file or GEMINI_API_KEY")]
    MissingApiKey,

    #[error("Advisor request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Advisor returned an invalid reply: {0}")]
    Advisor(String),

    #[error("Project rejected by audit: {0}")]
    AuditRejected(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;

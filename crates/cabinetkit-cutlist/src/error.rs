//! Error types for the cut-list crate.
//!
//! Only construction can fail. Panel generation and yield estimation are
//! total functions over an accepted cabinet; advisory problems are reported
//! through [`crate::cabinet::ValidationIssue`] instead.

use cabinetkit_settings::SettingsError;
use thiserror::Error;

/// Errors that can occur while building cabinets or a cut list.
#[derive(Error, Debug)]
pub enum CutlistError {
    /// An option combination that cannot be built.
    #[error("Construction conflict in cabinet '{id}': {reason}")]
    ConstructionConflict { id: String, reason: String },

    /// Invalid parameters were provided.
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// The supplied settings or materials were rejected.
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),
}

/// Result type alias for cut-list operations.
pub type CutlistResult<T> = Result<T, CutlistError>;

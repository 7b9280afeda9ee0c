//! Error types for settings store operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Primary error type for settings backends.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend could not be reached at all.
    #[error("settings store unavailable")]
    Unavailable {
        /// Backend identifier.
        backend: &'static str,
        /// Human-readable reason reported by the backend.
        reason: String,
    },
    /// Reading or writing the backing file failed.
    #[error("settings store io failed")]
    Io {
        /// Operation identifier.
        operation: &'static str,
        /// Path involved in the failure.
        path: PathBuf,
        /// Source IO error.
        source: io::Error,
    },
    /// Encoding or decoding the settings document failed.
    #[error("settings document serialization failed")]
    Serialize {
        /// Operation identifier.
        operation: &'static str,
        /// Source serde error.
        source: serde_json::Error,
    },
    /// The settings document parsed but had an unexpected shape.
    #[error("settings document is corrupt")]
    Corrupt {
        /// Path of the offending document.
        path: PathBuf,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
}

/// Convenience alias for settings store results.
pub type StoreResult<T> = Result<T, StoreError>;

//! # Design
//!
//! - Centralize application-level errors for bootstrap and settings writes.
//! - Keep error messages constant while carrying context fields for debugging.
//! - Preserve source errors without re-logging at call sites.

use thiserror::Error;

/// Result alias for application operations.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration operations failed.
    #[error("configuration operation failed")]
    Config {
        /// Operation identifier.
        operation: &'static str,
        /// Source configuration error.
        source: relabeler_config::ConfigError,
    },
    /// Settings store operations failed.
    #[error("settings store operation failed")]
    Store {
        /// Operation identifier.
        operation: &'static str,
        /// Source store error.
        source: relabeler_store::StoreError,
    },
    /// Telemetry operations failed.
    #[error("telemetry operation failed")]
    Telemetry {
        /// Operation identifier.
        operation: &'static str,
        /// Source telemetry error.
        source: relabeler_telemetry::TelemetryError,
    },
}

impl AppError {
    pub(crate) const fn config(
        operation: &'static str,
        source: relabeler_config::ConfigError,
    ) -> Self {
        Self::Config { operation, source }
    }

    pub(crate) const fn store(
        operation: &'static str,
        source: relabeler_store::StoreError,
    ) -> Self {
        Self::Store { operation, source }
    }

    pub(crate) const fn telemetry(
        operation: &'static str,
        source: relabeler_telemetry::TelemetryError,
    ) -> Self {
        Self::Telemetry { operation, source }
    }
}

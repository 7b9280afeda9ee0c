//! Fallback values applied when the environment is silent.

/// Log level used when neither `RELABELER_LOG_LEVEL` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Extension root holding the template override directory.
pub const DEFAULT_TEMPLATE_DIR: &str = ".";
/// Host plugin the extension depends on.
pub const REQUIRED_HOST: &str = "the-events-calendar";
/// Oldest host release the extension runs against.
pub const REQUIRED_HOST_VERSION: &str = "6.0.0";

/// Environment variable names read by the loader.
pub mod env {
    /// Plugin identifier used to derive the options prefix.
    pub const BASE_ID: &str = "RELABELER_BASE_ID";
    /// Path of the JSON settings document; unset selects the in-memory store.
    pub const STORE_PATH: &str = "RELABELER_STORE_PATH";
    /// Whether the companion views plugin is active.
    pub const PRO_VIEWS: &str = "RELABELER_PRO_VIEWS";
    /// Priority of the template origin contribution.
    pub const TEMPLATE_PRIORITY: &str = "RELABELER_TEMPLATE_PRIORITY";
    /// Extension root for template overrides.
    pub const TEMPLATE_DIR: &str = "RELABELER_TEMPLATE_DIR";
    /// Default log level directive.
    pub const LOG_LEVEL: &str = "RELABELER_LOG_LEVEL";
    /// Log output format (`json` or `pretty`).
    pub const LOG_FORMAT: &str = "RELABELER_LOG_FORMAT";
    /// Installed host version, if any.
    pub const HOST_VERSION: &str = "RELABELER_HOST_VERSION";
    /// Installed companion views version, if any.
    pub const PRO_VERSION: &str = "RELABELER_PRO_VERSION";
}

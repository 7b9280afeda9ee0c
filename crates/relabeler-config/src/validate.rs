//! Parsing helpers for raw environment values.

use crate::error::{ConfigError, ConfigResult};

const LOG_FORMATS: [&str; 2] = ["json", "pretty"];

/// Parse a boolean toggle (`1/0`, `true/false`, `yes/no`, `on/off`).
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] for any other value.
pub fn parse_bool(field: &'static str, raw: &str) -> ConfigResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(invalid(field, raw, "expected a boolean")),
    }
}

/// Parse a hook priority.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] when `raw` is not a signed integer.
pub fn parse_priority(field: &'static str, raw: &str) -> ConfigResult<i32> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| invalid(field, raw, "expected an integer priority"))
}

/// Validate a log format name, normalised to lowercase.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] unless `raw` is `json` or `pretty`.
pub fn parse_log_format(field: &'static str, raw: &str) -> ConfigResult<String> {
    let normalized = raw.trim().to_ascii_lowercase();
    if LOG_FORMATS.contains(&normalized.as_str()) {
        Ok(normalized)
    } else {
        Err(invalid(field, raw, "expected 'json' or 'pretty'"))
    }
}

/// Reject blank log level directives.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] for an all-whitespace value.
pub fn parse_log_level(field: &'static str, raw: &str) -> ConfigResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(invalid(field, raw, "must not be blank"));
    }
    Ok(trimmed.to_string())
}

fn invalid(field: &'static str, raw: &str, reason: &'static str) -> ConfigError {
    ConfigError::InvalidField {
        field,
        value: raw.to_string(),
        reason,
    }
}

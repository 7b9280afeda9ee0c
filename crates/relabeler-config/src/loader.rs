//! Environment-driven configuration loading.
//!
//! # Design
//! - Every variable is optional; unset or blank values take the defaults.
//! - Loading takes a lookup function so tests never touch the process environment.

use std::env;
use std::path::PathBuf;

use relabeler_labels::{Capabilities, TEMPLATE_PRIORITY};
use relabeler_store::DEFAULT_BASE_ID;
use tracing::debug;

use crate::defaults::{self, DEFAULT_LOG_LEVEL, DEFAULT_TEMPLATE_DIR};
use crate::error::ConfigResult;
use crate::manifest::HostEnvironment;
use crate::model::{LogSettings, RelabelerConfig, StoreLocation};
use crate::validate::{parse_bool, parse_log_format, parse_log_level, parse_priority};

impl RelabelerConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is set to an invalid value.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let base_id = read(defaults::env::BASE_ID)
            .map_or_else(|| DEFAULT_BASE_ID.to_string(), |value| value.trim().to_string());
        let store = read(defaults::env::STORE_PATH)
            .map_or(StoreLocation::Memory, |path| StoreLocation::JsonFile(PathBuf::from(path)));
        let pro_views = read(defaults::env::PRO_VIEWS)
            .map(|raw| parse_bool(defaults::env::PRO_VIEWS, &raw))
            .transpose()?
            .unwrap_or(false);
        let template_priority = read(defaults::env::TEMPLATE_PRIORITY)
            .map(|raw| parse_priority(defaults::env::TEMPLATE_PRIORITY, &raw))
            .transpose()?
            .unwrap_or(TEMPLATE_PRIORITY);
        let template_dir = PathBuf::from(
            read(defaults::env::TEMPLATE_DIR).unwrap_or_else(|| DEFAULT_TEMPLATE_DIR.to_string()),
        );
        let level = read(defaults::env::LOG_LEVEL)
            .map(|raw| parse_log_level(defaults::env::LOG_LEVEL, &raw))
            .transpose()?
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        let format = read(defaults::env::LOG_FORMAT)
            .map(|raw| parse_log_format(defaults::env::LOG_FORMAT, &raw))
            .transpose()?;

        let config = Self {
            base_id,
            store,
            capabilities: Capabilities { pro_views },
            template_priority,
            template_dir,
            logging: LogSettings { level, format },
        };
        debug!(base_id = %config.base_id, store = ?config.store, "configuration loaded");
        Ok(config)
    }
}

impl HostEnvironment {
    /// Installed plugin versions from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Installed plugin versions through `lookup`; blank values mean not installed.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        Self {
            host_version: read(defaults::env::HOST_VERSION),
            pro_version: read(defaults::env::PRO_VERSION),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() -> ConfigResult<()> {
        let config = RelabelerConfig::from_lookup(lookup(&[]))?;
        assert_eq!(config.base_id, DEFAULT_BASE_ID);
        assert_eq!(config.store, StoreLocation::Memory);
        assert!(!config.capabilities.pro_views);
        assert_eq!(config.template_priority, 17);
        assert_eq!(config.template_dir, PathBuf::from("."));
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, None);
        Ok(())
    }

    #[test]
    fn variables_override_defaults() -> ConfigResult<()> {
        let config = RelabelerConfig::from_lookup(lookup(&[
            ("RELABELER_BASE_ID", " tec-labels "),
            ("RELABELER_STORE_PATH", "/var/lib/relabeler/options.json"),
            ("RELABELER_PRO_VIEWS", "yes"),
            ("RELABELER_TEMPLATE_PRIORITY", "3"),
            ("RELABELER_LOG_FORMAT", "Pretty"),
        ]))?;
        assert_eq!(config.base_id, "tec-labels");
        assert_eq!(config.prefix().as_str(), "tec_labels_");
        assert_eq!(
            config.store,
            StoreLocation::JsonFile(PathBuf::from("/var/lib/relabeler/options.json"))
        );
        assert!(config.capabilities.pro_views);
        assert_eq!(config.template_override().priority(), 3);
        assert_eq!(config.logging.format.as_deref(), Some("pretty"));
        Ok(())
    }

    #[test]
    fn blank_base_id_falls_back_to_default() -> ConfigResult<()> {
        let config = RelabelerConfig::from_lookup(lookup(&[("RELABELER_BASE_ID", "   ")]))?;
        assert_eq!(config.base_id, DEFAULT_BASE_ID);
        Ok(())
    }

    #[test]
    fn invalid_value_reports_field() {
        let err = RelabelerConfig::from_lookup(lookup(&[("RELABELER_TEMPLATE_PRIORITY", "soon")]));
        assert!(matches!(
            err,
            Err(ConfigError::InvalidField { field: "RELABELER_TEMPLATE_PRIORITY", .. })
        ));
    }

    #[test]
    fn host_environment_treats_blank_as_missing() {
        let env = HostEnvironment::from_lookup(lookup(&[
            ("RELABELER_HOST_VERSION", "6.2.1"),
            ("RELABELER_PRO_VERSION", " "),
        ]));
        assert_eq!(env.host_version.as_deref(), Some("6.2.1"));
        assert_eq!(env.pro_version, None);
    }
}

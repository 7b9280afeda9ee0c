//! Typed configuration models.

use std::path::PathBuf;

use relabeler_labels::{Capabilities, TemplateOverride};
use relabeler_store::OptionsPrefix;
use serde::{Deserialize, Serialize};

/// Where settings are persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "path", rename_all = "snake_case")]
pub enum StoreLocation {
    /// Process-local store; nothing survives a restart.
    #[default]
    Memory,
    /// JSON document on disk.
    JsonFile(PathBuf),
}

/// Logging options; turned into a subscriber by the telemetry crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSettings {
    /// Default level directive.
    pub level: String,
    /// Requested output format; `None` lets the build profile decide.
    pub format: Option<String>,
}

/// Fully resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelabelerConfig {
    /// Plugin identifier the options prefix derives from.
    pub base_id: String,
    /// Settings persistence.
    pub store: StoreLocation,
    /// Optional host features.
    pub capabilities: Capabilities,
    /// Priority of the template origin contribution.
    pub template_priority: i32,
    /// Extension root holding `src/views`.
    pub template_dir: PathBuf,
    /// Logging options.
    pub logging: LogSettings,
}

impl RelabelerConfig {
    /// Options prefix derived from [`Self::base_id`].
    #[must_use]
    pub fn prefix(&self) -> OptionsPrefix {
        OptionsPrefix::new(&self.base_id)
    }

    /// Template origin this configuration contributes.
    #[must_use]
    pub fn template_override(&self) -> TemplateOverride {
        TemplateOverride::with_priority(self.template_dir.clone(), self.template_priority)
    }
}

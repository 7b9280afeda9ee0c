//! Host dependency manifest.
//!
//! The extension only activates when a recent enough host is installed. The
//! check runs once at bootstrap; nothing is retried.

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};

use relabeler_labels::Capabilities;
use serde::{Deserialize, Serialize};

use crate::defaults::{REQUIRED_HOST, REQUIRED_HOST_VERSION};

/// Installed plugin versions reported by the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostEnvironment {
    /// Host plugin version, if installed.
    pub host_version: Option<String>,
    /// Companion views plugin version, if installed.
    pub pro_version: Option<String>,
}

impl HostEnvironment {
    /// Environment with the host installed at `version`.
    #[must_use]
    pub fn with_host(version: impl Into<String>) -> Self {
        Self {
            host_version: Some(version.into()),
            pro_version: None,
        }
    }

    /// Capabilities implied by installed plugins.
    #[must_use]
    pub const fn capabilities(&self) -> Capabilities {
        Capabilities {
            pro_views: self.pro_version.is_some(),
        }
    }
}

/// Outcome of a dependency check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencyStatus {
    /// The host is installed at a supported version.
    Satisfied,
    /// The host is not installed.
    Missing {
        /// Required host plugin.
        host: &'static str,
    },
    /// The installed host is older than required.
    Outdated {
        /// Required host plugin.
        host: &'static str,
        /// Installed version.
        found: String,
        /// Minimum supported version.
        required: &'static str,
    },
}

impl DependencyStatus {
    /// Whether the extension may activate.
    #[must_use]
    pub const fn is_satisfied(&self) -> bool {
        matches!(self, Self::Satisfied)
    }
}

impl Display for DependencyStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Satisfied => f.write_str("dependencies satisfied"),
            Self::Missing { host } => write!(f, "required plugin {host} is not installed"),
            Self::Outdated {
                host,
                found,
                required,
            } => write!(f, "{host} {found} is older than the required {required}"),
        }
    }
}

/// Declares which host plugin, at which minimum version, must be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencyManifest {
    /// Host plugin identifier.
    pub host: &'static str,
    /// Minimum supported version.
    pub min_version: &'static str,
}

impl Default for DependencyManifest {
    fn default() -> Self {
        Self {
            host: REQUIRED_HOST,
            min_version: REQUIRED_HOST_VERSION,
        }
    }
}

impl DependencyManifest {
    /// Check `env` against the manifest.
    #[must_use]
    pub fn check(&self, env: &HostEnvironment) -> DependencyStatus {
        match env.host_version.as_deref() {
            None => DependencyStatus::Missing { host: self.host },
            Some(found) if compare_versions(found, self.min_version) == Ordering::Less => {
                DependencyStatus::Outdated {
                    host: self.host,
                    found: found.to_string(),
                    required: self.min_version,
                }
            }
            Some(_) => DependencyStatus::Satisfied,
        }
    }
}

/// Compare dotted versions segment by segment as numbers.
///
/// Missing segments count as zero and each segment is read up to its first
/// non-digit, so `6.0` equals `6.0.0` and `6.1.0-beta` equals `6.1.0`.
#[must_use]
pub fn compare_versions(left: &str, right: &str) -> Ordering {
    let left = segments(left);
    let right = segments(right);
    let len = left.len().max(right.len());
    (0..len)
        .map(|idx| {
            let a = left.get(idx).copied().unwrap_or(0);
            let b = right.get(idx).copied().unwrap_or(0);
            a.cmp(&b)
        })
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

fn segments(version: &str) -> Vec<u64> {
    version
        .trim()
        .trim_start_matches(['v', 'V'])
        .split('.')
        .map(|segment| {
            let digits: String = segment.chars().take_while(char::is_ascii_digit).collect();
            digits.parse().unwrap_or(0)
        })
        .collect()
}

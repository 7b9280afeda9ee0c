//! Values passed through host filters.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Payload carried by a filter invocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FilterValue {
    /// A single rendered term.
    Text(String),
    /// The view selector entries shown in the events bar.
    Views(Vec<ViewDescriptor>),
    /// Directories searched for template overrides.
    TemplatePaths(Vec<TemplateOrigin>),
    /// A boolean toggle.
    Flag(bool),
}

impl FilterValue {
    /// Machine-friendly discriminator for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Views(_) => "views",
            Self::TemplatePaths(_) => "template_paths",
            Self::Flag(_) => "flag",
        }
    }

    /// Borrow the text payload, if this is one.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Take the text payload, if this is one.
    #[must_use]
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// One entry of the host's view selector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewDescriptor {
    /// View slug the entry switches to (`list`, `month`, ...).
    pub displaying: String,
    /// Visible caption; canonical names are `List`, `Month`, ...
    pub anchor: String,
    /// Link target for the entry.
    #[serde(default)]
    pub url: String,
    /// Any further host fields, carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ViewDescriptor {
    /// Construct an entry with no extra fields.
    #[must_use]
    pub fn new(
        displaying: impl Into<String>,
        anchor: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            displaying: displaying.into(),
            anchor: anchor.into(),
            url: url.into(),
            extra: Map::new(),
        }
    }
}

/// A contributor to the template lookup path list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TemplateOrigin {
    /// Stable key identifying the contributor.
    pub id: String,
    /// Ordering weight relative to other contributors.
    pub priority: i32,
    /// Directory segments searched for templates.
    pub path: Vec<PathBuf>,
}

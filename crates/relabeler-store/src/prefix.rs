//! Options prefix derived from the plugin identifier.

use std::fmt::{self, Display, Formatter};

/// Plugin slug used when no identifier is supplied.
pub const DEFAULT_BASE_ID: &str = "tec-labs-relabeler";

/// Namespace prepended to every option this extension stores.
///
/// Always ends in exactly one underscore and never contains `__`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OptionsPrefix(String);

impl OptionsPrefix {
    /// Derive the prefix from a plugin identifier such as `tec-labs-relabeler`.
    #[must_use]
    pub fn new(base_id: &str) -> Self {
        Self(normalize_prefix(base_id))
    }

    /// The prefix text, trailing underscore included.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Storage key for `key`, always `prefix ++ key`.
    #[must_use]
    pub fn join(&self, key: &str) -> String {
        format!("{}{key}", self.0)
    }

    /// Storage key for `key`; keys that already carry the prefix are left alone.
    #[must_use]
    pub fn key(&self, key: &str) -> String {
        if key.starts_with(&self.0) {
            key.to_string()
        } else {
            format!("{}{key}", self.0)
        }
    }

    /// Strip the prefix from a storage key, if it carries it.
    #[must_use]
    pub fn strip<'a>(&self, key: &'a str) -> Option<&'a str> {
        key.strip_prefix(self.0.as_str())
    }
}

impl Default for OptionsPrefix {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_ID)
    }
}

impl Display for OptionsPrefix {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl AsRef<str> for OptionsPrefix {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Normalise a plugin identifier into an options prefix.
///
/// Hyphens become underscores, a trailing underscore is forced, and runs of
/// underscores collapse to one. Blank identifiers fall back to
/// [`DEFAULT_BASE_ID`].
#[must_use]
pub fn normalize_prefix(base_id: &str) -> String {
    let trimmed = base_id.trim();
    let source = if trimmed.is_empty() {
        DEFAULT_BASE_ID
    } else {
        trimmed
    };

    let mut prefix = String::with_capacity(source.len() + 1);
    for ch in source.chars().chain(std::iter::once('_')) {
        let ch = if ch == '-' { '_' } else { ch };
        if ch == '_' && prefix.ends_with('_') {
            continue;
        }
        prefix.push(ch);
    }
    prefix
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plugin_slug_becomes_underscored_prefix() {
        assert_eq!(normalize_prefix("tec-labs-relabeler"), "tec_labs_relabeler_");
        assert_eq!(OptionsPrefix::default().as_str(), "tec_labs_relabeler_");
    }

    #[test]
    fn existing_trailing_separator_is_not_doubled() {
        assert_eq!(normalize_prefix("tec-labels-"), "tec_labels_");
        assert_eq!(normalize_prefix("tec_labels__"), "tec_labels_");
        assert_eq!(normalize_prefix("tec--labels"), "tec_labels_");
    }

    #[test]
    fn blank_identifier_falls_back_to_plugin_slug() {
        assert_eq!(normalize_prefix(""), "tec_labs_relabeler_");
        assert_eq!(normalize_prefix("   "), "tec_labs_relabeler_");
    }

    #[test]
    fn supplied_identifier_wins_over_default() {
        assert_eq!(OptionsPrefix::new("my-calendar").as_str(), "my_calendar_");
    }

    #[test]
    fn key_is_prefixed_once() {
        let prefix = OptionsPrefix::new("tec-labels");
        assert_eq!(prefix.key("label_event_single"), "tec_labels_label_event_single");
        assert_eq!(
            prefix.key("tec_labels_label_event_single"),
            "tec_labels_label_event_single"
        );
        assert_eq!(prefix.strip("tec_labels_a"), Some("a"));
        assert_eq!(prefix.strip("other_b"), None);
    }

    #[test]
    fn join_prefixes_even_when_key_shares_the_prefix() {
        let prefix = OptionsPrefix::new("label");
        assert_eq!(prefix.join("label_event_single"), "label_label_event_single");
        assert_eq!(prefix.key("label_event_single"), "label_event_single");
    }
}

//! Shared command context and error types for the CLI.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::sync::Arc;

use relabeler_app::{AnyBackend, open_backend};
use relabeler_config::RelabelerConfig;
use relabeler_labels::{Capabilities, LabelKey, LabelResolver, REWRITE_VIEW_SLUGS};
use relabeler_store::OptionsStore;

/// CLI-level error type to distinguish validation from operational failures.
#[derive(Debug)]
pub(crate) enum CliError {
    Validation(String),
    Failure(anyhow::Error),
}

/// Convenience alias for functions returning a `CliError`.
pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}

impl Display for CliError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("cli error")
    }
}

impl std::error::Error for CliError {}

/// Option addressed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SettingKey {
    Label(LabelKey),
    RewriteViewSlugs,
}

impl SettingKey {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Label(key) => key.as_str(),
            Self::RewriteViewSlugs => REWRITE_VIEW_SLUGS,
        }
    }
}

impl FromStr for SettingKey {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == REWRITE_VIEW_SLUGS {
            return Ok(Self::RewriteViewSlugs);
        }
        value
            .parse::<LabelKey>()
            .map(Self::Label)
            .map_err(|_| format!("unknown setting '{value}'"))
    }
}

/// Opened store and resolver shared by every command.
pub(crate) struct CliContext {
    pub(crate) resolver: Arc<LabelResolver<AnyBackend>>,
    pub(crate) capabilities: Capabilities,
}

impl CliContext {
    pub(crate) fn open(config: &RelabelerConfig) -> Self {
        let options = OptionsStore::new(open_backend(&config.store), config.prefix());
        Self {
            resolver: Arc::new(LabelResolver::new(options)),
            capabilities: config.capabilities,
        }
    }

    pub(crate) fn options(&self) -> &OptionsStore<AnyBackend> {
        self.resolver.options()
    }

    /// Reject keys whose fields are hidden under the current capabilities.
    pub(crate) fn ensure_available(&self, key: SettingKey) -> CliResult<()> {
        match key {
            SettingKey::Label(label) if !label.is_available(self.capabilities) => {
                Err(CliError::validation(format!(
                    "{} is only available with --pro-views",
                    label.as_str()
                )))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_distinguish_validation_from_failure() {
        let validation = CliError::validation("bad key");
        assert_eq!(validation.exit_code(), 2);
        assert_eq!(validation.display_message(), "bad key");

        let failure = CliError::failure(anyhow::anyhow!("disk full"));
        assert_eq!(failure.exit_code(), 3);
        assert_eq!(failure.display_message(), "disk full");
        assert_eq!(failure.to_string(), "cli error");
    }

    #[test]
    fn setting_key_parses_labels_and_toggle() {
        assert_eq!(
            "label_event_single".parse::<SettingKey>(),
            Ok(SettingKey::Label(LabelKey::EventSingle))
        );
        assert_eq!(
            "rewrite_view_slugs".parse::<SettingKey>(),
            Ok(SettingKey::RewriteViewSlugs)
        );
        assert!("label_unknown".parse::<SettingKey>().is_err());
        assert_eq!(SettingKey::RewriteViewSlugs.as_str(), "rewrite_view_slugs");
    }
}

//! Template-path contribution for the extension's override directory.

use std::path::PathBuf;

use relabeler_hooks::TemplateOrigin;

/// Namespace under which the override directory is contributed.
pub const TEMPLATE_NAMESPACE: &str = "relabeler";

/// Priority of the contribution relative to other template origins.
pub const TEMPLATE_PRIORITY: i32 = 17;

/// Directory, relative to the extension root, holding template overrides.
pub const TEMPLATE_SUBDIR: &str = "src/views";

/// The single template origin this extension adds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateOverride {
    namespace: String,
    priority: i32,
    path: Vec<PathBuf>,
}

impl TemplateOverride {
    /// Contribute `<root>/src/views` under the default namespace and priority.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_priority(root, TEMPLATE_PRIORITY)
    }

    /// Contribute `<root>/src/views` at `priority`.
    #[must_use]
    pub fn with_priority(root: impl Into<PathBuf>, priority: i32) -> Self {
        Self {
            namespace: TEMPLATE_NAMESPACE.to_string(),
            priority,
            path: vec![root.into(), PathBuf::from(TEMPLATE_SUBDIR)],
        }
    }

    /// Namespace key of the contribution.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Priority of the contribution.
    #[must_use]
    pub const fn priority(&self) -> i32 {
        self.priority
    }

    /// The origin entry handed to the host.
    #[must_use]
    pub fn origin(&self) -> TemplateOrigin {
        TemplateOrigin {
            id: self.namespace.clone(),
            priority: self.priority,
            path: self.path.clone(),
        }
    }

    /// Add this contribution to the host's origins.
    ///
    /// Other entries are left as they are; an entry already keyed by this
    /// namespace is replaced in place rather than duplicated.
    #[must_use]
    pub fn augment(&self, mut origins: Vec<TemplateOrigin>) -> Vec<TemplateOrigin> {
        let origin = self.origin();
        match origins.iter_mut().find(|entry| entry.id == origin.id) {
            Some(existing) => *existing = origin,
            None => origins.push(origin),
        }
        origins
    }
}

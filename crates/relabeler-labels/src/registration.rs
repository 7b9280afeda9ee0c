//! Binding resolver accessors to host hooks.
//!
//! Registration happens once at initialisation and is never changed at runtime.

use std::sync::Arc;

use relabeler_hooks::{
    DEFAULT_ACCEPTED_ARGS, DEFAULT_PRIORITY, FilterHandler, FilterValue, HookRegistry,
};
use relabeler_store::SettingsBackend;
use tracing::{info, warn};

use crate::keys::{Capabilities, LabelKey};
use crate::resolver::LabelResolver;
use crate::templates::TemplateOverride;

/// Hook fired with the events-bar view selector entries.
pub const VIEW_SELECTOR_HOOK: &str = "tribe-events-bar-views";

/// Priority of the view selector handler; late, so host views are already listed.
pub const VIEW_SELECTOR_PRIORITY: i32 = 100;

/// Hook fired with the template origin list.
pub const TEMPLATE_PATH_HOOK: &str = "tribe_template_path_list";

/// Priority of the template path handler.
pub const TEMPLATE_PATH_PRIORITY: i32 = 15;

/// Arguments accepted by the template path handler (origins + template).
pub const TEMPLATE_PATH_ACCEPTED_ARGS: usize = 2;

/// Record of the hooks bound during registration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registration {
    labels: Vec<LabelKey>,
    hooks: Vec<&'static str>,
}

impl Registration {
    /// Label keys bound to their hooks, in registration order.
    #[must_use]
    pub fn labels(&self) -> &[LabelKey] {
        &self.labels
    }

    /// Every hook name bound, in registration order.
    #[must_use]
    pub fn hooks(&self) -> &[&'static str] {
        &self.hooks
    }

    /// Whether `hook` was bound.
    #[must_use]
    pub fn contains(&self, hook: &str) -> bool {
        self.hooks.contains(&hook)
    }
}

/// Bind one handler per available label key, the view selector handler, and
/// (when given) the template path handler.
pub fn register_hooks<B, R>(
    resolver: &Arc<LabelResolver<B>>,
    registry: &mut R,
    capabilities: Capabilities,
    templates: Option<TemplateOverride>,
) -> Registration
where
    B: SettingsBackend + 'static,
    R: HookRegistry + ?Sized,
{
    let mut registration = Registration::default();

    for key in LabelKey::available(capabilities) {
        registry.add_filter(
            key.hook_name(),
            label_handler(Arc::clone(resolver), key),
            DEFAULT_PRIORITY,
            DEFAULT_ACCEPTED_ARGS,
        );
        registration.labels.push(key);
        registration.hooks.push(key.hook_name());
    }

    registry.add_filter(
        VIEW_SELECTOR_HOOK,
        view_selector_handler(Arc::clone(resolver), capabilities),
        VIEW_SELECTOR_PRIORITY,
        DEFAULT_ACCEPTED_ARGS,
    );
    registration.hooks.push(VIEW_SELECTOR_HOOK);

    if let Some(templates) = templates {
        registry.add_filter(
            TEMPLATE_PATH_HOOK,
            template_path_handler(templates),
            TEMPLATE_PATH_PRIORITY,
            TEMPLATE_PATH_ACCEPTED_ARGS,
        );
        registration.hooks.push(TEMPLATE_PATH_HOOK);
    }

    info!(
        labels = registration.labels.len(),
        hooks = registration.hooks.len(),
        pro_views = capabilities.pro_views,
        "label hooks registered"
    );
    registration
}

fn label_handler<B>(resolver: Arc<LabelResolver<B>>, key: LabelKey) -> FilterHandler
where
    B: SettingsBackend + 'static,
{
    Arc::new(move |value: FilterValue, _extra: &[FilterValue]| match value {
        FilterValue::Text(default) => FilterValue::Text(resolver.resolve(key, &default)),
        other => {
            warn!(
                hook = key.hook_name(),
                kind = other.kind(),
                "label hook received non-text value"
            );
            other
        }
    })
}

fn view_selector_handler<B>(
    resolver: Arc<LabelResolver<B>>,
    capabilities: Capabilities,
) -> FilterHandler
where
    B: SettingsBackend + 'static,
{
    Arc::new(move |value: FilterValue, _extra: &[FilterValue]| match value {
        FilterValue::Views(views) => {
            FilterValue::Views(resolver.relabel_views(views, capabilities))
        }
        other => {
            warn!(
                hook = VIEW_SELECTOR_HOOK,
                kind = other.kind(),
                "view selector received unexpected value"
            );
            other
        }
    })
}

fn template_path_handler(templates: TemplateOverride) -> FilterHandler {
    Arc::new(move |value: FilterValue, _extra: &[FilterValue]| match value {
        FilterValue::TemplatePaths(origins) => {
            FilterValue::TemplatePaths(templates.augment(origins))
        }
        other => {
            warn!(
                hook = TEMPLATE_PATH_HOOK,
                kind = other.kind(),
                "template path hook received unexpected value"
            );
            other
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use relabeler_hooks::FilterBus;
    use relabeler_store::{MemoryBackend, OptionsPrefix, OptionsStore};
    use serde_json::json;

    fn resolver() -> Arc<LabelResolver<MemoryBackend>> {
        Arc::new(LabelResolver::new(OptionsStore::new(
            MemoryBackend::with_entries([("tec_labels_label_event_single", json!("Session"))]),
            OptionsPrefix::new("tec-labels"),
        )))
    }

    #[test]
    fn one_handler_per_available_label_plus_views() {
        let mut bus = FilterBus::new();
        let registration = register_hooks(&resolver(), &mut bus, Capabilities::default(), None);

        assert_eq!(registration.labels().len(), 15);
        assert_eq!(registration.hooks().len(), 16);
        assert!(registration.contains(VIEW_SELECTOR_HOOK));
        assert!(!registration.contains(TEMPLATE_PATH_HOOK));
        assert!(!bus.has_filter(LabelKey::WeekView.hook_name()));
        for key in LabelKey::available(Capabilities::default()) {
            assert_eq!(bus.subscriptions(key.hook_name()).len(), 1);
        }
    }

    #[test]
    fn pro_views_and_templates_extend_registration() {
        let mut bus = FilterBus::new();
        let registration = register_hooks(
            &resolver(),
            &mut bus,
            Capabilities::with_pro_views(),
            Some(TemplateOverride::new("/plugins/relabeler")),
        );

        assert_eq!(registration.labels().len(), 19);
        assert!(registration.contains(TEMPLATE_PATH_HOOK));
        assert_eq!(
            bus.subscriptions(TEMPLATE_PATH_HOOK)[0].accepted_args,
            TEMPLATE_PATH_ACCEPTED_ARGS
        );
    }

    #[test]
    fn label_hook_returns_override_and_ignores_other_payloads() {
        let mut bus = FilterBus::new();
        let _ = register_hooks(&resolver(), &mut bus, Capabilities::default(), None);

        assert_eq!(bus.apply_text("tribe_event_label_singular", "Event"), "Session");
        assert_eq!(bus.apply_text("tribe_venue_label_singular", "Venue"), "Venue");
        assert_eq!(
            bus.apply_filters("tribe_event_label_singular", FilterValue::Flag(true), &[]),
            FilterValue::Flag(true)
        );
    }
}

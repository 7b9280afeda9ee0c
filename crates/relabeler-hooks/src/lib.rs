//! Host extension points for the relabeler.
//!
//! The host renders a term by firing a named filter with its built-in value;
//! every subscribed handler may replace that value. [`HookRegistry`] is the
//! subscription seam the resolver binds against, and [`FilterBus`] is an
//! in-process implementation that dispatches in ascending priority, keeping
//! registration order among handlers of equal priority.

use std::collections::BTreeMap;
use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

use tracing::trace;

pub mod payloads;

pub use payloads::{FilterValue, TemplateOrigin, ViewDescriptor};

/// Priority used when a subscriber does not ask for one.
pub const DEFAULT_PRIORITY: i32 = 10;

/// Argument count used when a subscriber does not ask for one.
pub const DEFAULT_ACCEPTED_ARGS: usize = 1;

/// Callback invoked with the current value and any extra host arguments.
pub type FilterHandler = Arc<dyn Fn(FilterValue, &[FilterValue]) -> FilterValue + Send + Sync>;

/// Subscription side of the host's extension-point system.
pub trait HookRegistry {
    /// Subscribe `handler` to `hook`.
    ///
    /// `accepted_args` counts the filtered value itself, so `1` means the
    /// handler receives no extra arguments.
    fn add_filter(&mut self, hook: &str, handler: FilterHandler, priority: i32, accepted_args: usize);
}

/// Public view of one subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionInfo {
    /// Ordering weight; lower runs first.
    pub priority: i32,
    /// Number of arguments the handler accepts, value included.
    pub accepted_args: usize,
}

#[derive(Clone)]
struct Subscription {
    info: SubscriptionInfo,
    handler: FilterHandler,
}

/// In-process filter dispatcher.
#[derive(Clone, Default)]
pub struct FilterBus {
    hooks: BTreeMap<String, Vec<Subscription>>,
}

impl FilterBus {
    /// Construct an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `value` through every handler subscribed to `hook`.
    ///
    /// Handlers see at most `accepted_args - 1` entries of `extra`. A hook
    /// with no subscribers returns `value` unchanged.
    #[must_use]
    pub fn apply_filters(&self, hook: &str, value: FilterValue, extra: &[FilterValue]) -> FilterValue {
        let Some(subscriptions) = self.hooks.get(hook) else {
            return value;
        };

        subscriptions.iter().fold(value, |current, subscription| {
            let extra_count = subscription.info.accepted_args.saturating_sub(1).min(extra.len());
            trace!(
                hook,
                priority = subscription.info.priority,
                kind = current.kind(),
                "applying filter"
            );
            (subscription.handler)(current, &extra[..extra_count])
        })
    }

    /// Convenience wrapper for text filters; non-text results fall back to `default`.
    #[must_use]
    pub fn apply_text(&self, hook: &str, default: &str) -> String {
        self.apply_filters(hook, FilterValue::from(default), &[])
            .into_text()
            .unwrap_or_else(|| default.to_string())
    }

    /// Whether any handler is subscribed to `hook`.
    #[must_use]
    pub fn has_filter(&self, hook: &str) -> bool {
        self.hooks.get(hook).is_some_and(|subs| !subs.is_empty())
    }

    /// Subscriptions for `hook` in dispatch order.
    #[must_use]
    pub fn subscriptions(&self, hook: &str) -> Vec<SubscriptionInfo> {
        self.hooks
            .get(hook)
            .map(|subs| subs.iter().map(|sub| sub.info).collect())
            .unwrap_or_default()
    }

    /// Names of every hook with at least one subscriber.
    pub fn hook_names(&self) -> impl Iterator<Item = &str> {
        self.hooks.keys().map(String::as_str)
    }

    /// Total number of subscriptions across all hooks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hooks.values().map(Vec::len).sum()
    }

    /// Whether the bus has no subscriptions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl HookRegistry for FilterBus {
    fn add_filter(&mut self, hook: &str, handler: FilterHandler, priority: i32, accepted_args: usize) {
        let subscriptions = self.hooks.entry(hook.to_string()).or_default();
        subscriptions.push(Subscription {
            info: SubscriptionInfo {
                priority,
                accepted_args: accepted_args.max(1),
            },
            handler,
        });
        // Stable sort keeps registration order within a priority.
        subscriptions.sort_by_key(|sub| sub.info.priority);
    }
}

impl Debug for FilterBus {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter
            .debug_map()
            .entries(
                self.hooks
                    .iter()
                    .map(|(hook, subs)| (hook, subs.iter().map(|sub| sub.info).collect::<Vec<_>>())),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suffix(tag: &'static str) -> FilterHandler {
        Arc::new(move |value: FilterValue, _extra: &[FilterValue]| match value {
            FilterValue::Text(text) => FilterValue::Text(format!("{text}{tag}")),
            other => other,
        })
    }

    #[test]
    fn unsubscribed_hook_returns_value_unchanged() {
        let bus = FilterBus::new();
        assert_eq!(bus.apply_text("tribe_event_label_singular", "Event"), "Event");
        assert!(!bus.has_filter("tribe_event_label_singular"));
        assert!(bus.is_empty());
    }

    #[test]
    fn handlers_run_by_priority_then_registration_order() {
        let mut bus = FilterBus::new();
        bus.add_filter("label", suffix("-late"), 20, 1);
        bus.add_filter("label", suffix("-a"), DEFAULT_PRIORITY, 1);
        bus.add_filter("label", suffix("-b"), DEFAULT_PRIORITY, 1);

        assert_eq!(bus.apply_text("label", "x"), "x-a-b-late");
        assert_eq!(
            bus.subscriptions("label")
                .iter()
                .map(|info| info.priority)
                .collect::<Vec<_>>(),
            vec![10, 10, 20]
        );
        assert_eq!(bus.len(), 3);
    }

    #[test]
    fn extra_arguments_are_limited_by_accepted_args() {
        let mut bus = FilterBus::new();
        let counter: FilterHandler = Arc::new(|_value: FilterValue, extra: &[FilterValue]| {
            FilterValue::Text(extra.len().to_string())
        });
        bus.add_filter("one", Arc::clone(&counter), DEFAULT_PRIORITY, DEFAULT_ACCEPTED_ARGS);
        bus.add_filter("two", counter, DEFAULT_PRIORITY, 2);

        let extra = [FilterValue::from("a"), FilterValue::from("b")];
        assert_eq!(
            bus.apply_filters("one", FilterValue::from(""), &extra),
            FilterValue::from("0")
        );
        assert_eq!(
            bus.apply_filters("two", FilterValue::from(""), &extra),
            FilterValue::from("1")
        );
    }

    #[test]
    fn apply_text_falls_back_when_handler_changes_kind() {
        let mut bus = FilterBus::new();
        bus.add_filter(
            "label",
            Arc::new(|_value: FilterValue, _extra: &[FilterValue]| FilterValue::Flag(true)),
            DEFAULT_PRIORITY,
            1,
        );
        assert_eq!(bus.apply_text("label", "Event"), "Event");
        assert_eq!(bus.hook_names().collect::<Vec<_>>(), vec!["label"]);
    }
}

//! The fixed set of overridable terms.
//!
//! # Design
//! - One static table row per key: storage name, host hook, built-in default, field copy.
//! - View keys past list/month/day only exist when the companion views are active.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Optional host features supplied by the environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// Week, map, photo, and summary views are installed.
    pub pro_views: bool,
}

impl Capabilities {
    /// Capabilities with the companion views enabled.
    #[must_use]
    pub const fn with_pro_views() -> Self {
        Self { pro_views: true }
    }
}

/// Which group a key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelGroup {
    /// Event, venue, and organizer nouns.
    Core,
    /// Calendar view names.
    View,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Availability {
    Always,
    ProViews,
}

/// Semantic identifier for one overridable term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum LabelKey {
    /// `Event`
    EventSingle,
    /// `event`
    EventSingleLowercase,
    /// `Events`
    EventPlural,
    /// `events`
    EventPluralLowercase,
    /// `Venue`
    VenueSingle,
    /// `venue`
    VenueSingleLowercase,
    /// `Venues`
    VenuePlural,
    /// `venues`
    VenuePluralLowercase,
    /// `Organizer`
    OrganizerSingle,
    /// `organizer`
    OrganizerSingleLowercase,
    /// `Organizers`
    OrganizerPlural,
    /// `organizers`
    OrganizerPluralLowercase,
    /// `List`
    ListView,
    /// `Month`
    MonthView,
    /// `Day`
    DayView,
    /// `Week`
    WeekView,
    /// `Map`
    MapView,
    /// `Photo`
    PhotoView,
    /// `Summary`
    SummaryView,
}

struct LabelRow {
    option: &'static str,
    hook: &'static str,
    default: &'static str,
    field_label: &'static str,
    tooltip: &'static str,
    group: LabelGroup,
    availability: Availability,
}

const fn core(
    option: &'static str,
    hook: &'static str,
    default: &'static str,
    tooltip: &'static str,
) -> LabelRow {
    LabelRow {
        option,
        hook,
        default,
        field_label: default,
        tooltip,
        group: LabelGroup::Core,
        availability: Availability::Always,
    }
}

const fn view(
    option: &'static str,
    hook: &'static str,
    default: &'static str,
    field_label: &'static str,
    tooltip: &'static str,
    availability: Availability,
) -> LabelRow {
    LabelRow {
        option,
        hook,
        default,
        field_label,
        tooltip,
        group: LabelGroup::View,
        availability,
    }
}

// Rows are indexed by `LabelKey as usize`; keep both in the same order.
static LABELS: [LabelRow; 19] = [
    core(
        "label_event_single",
        "tribe_event_label_singular",
        "Event",
        "Singular label for Events.",
    ),
    core(
        "label_event_single_lowercase",
        "tribe_event_label_singular_lowercase",
        "event",
        "Lowercase singular label for Events. You might wish to also modify the \"Events URL Slug\" found in the General events settings tab.",
    ),
    core(
        "label_event_plural",
        "tribe_event_label_plural",
        "Events",
        "Plural label for Events.",
    ),
    core(
        "label_event_plural_lowercase",
        "tribe_event_label_plural_lowercase",
        "events",
        "Lowercase plural label for Events. You might wish to also modify the \"Single Event URL Slug\" found in the General events settings tab.",
    ),
    core(
        "label_venue_single",
        "tribe_venue_label_singular",
        "Venue",
        "Singular label for Venues.",
    ),
    core(
        "label_venue_single_lowercase",
        "tribe_venue_label_singular_lowercase",
        "venue",
        "Lowercase singular label for Venues.",
    ),
    core(
        "label_venue_plural",
        "tribe_venue_label_plural",
        "Venues",
        "Plural label for Venues.",
    ),
    core(
        "label_venue_plural_lowercase",
        "tribe_venue_label_plural_lowercase",
        "venues",
        "Lowercase plural label for Venues.",
    ),
    core(
        "label_organizer_single",
        "tribe_organizer_label_singular",
        "Organizer",
        "Singular label for Organizers.",
    ),
    core(
        "label_organizer_single_lowercase",
        "tribe_organizer_label_singular_lowercase",
        "organizer",
        "Lowercase singular label for Organizers.",
    ),
    core(
        "label_organizer_plural",
        "tribe_organizer_label_plural",
        "Organizers",
        "Plural label for Organizers.",
    ),
    core(
        "label_organizer_plural_lowercase",
        "tribe_organizer_label_plural_lowercase",
        "organizers",
        "Lowercase plural label for Organizers.",
    ),
    view(
        "label_list_view",
        "tribe_events_views_v2_view_list_label",
        "List",
        "List view",
        "Label for list view.",
        Availability::Always,
    ),
    view(
        "label_month_view",
        "tribe_events_views_v2_view_month_label",
        "Month",
        "Month view",
        "Label for month view.",
        Availability::Always,
    ),
    view(
        "label_day_view",
        "tribe_events_views_v2_view_day_label",
        "Day",
        "Day view",
        "Label for day view.",
        Availability::Always,
    ),
    view(
        "label_week_view",
        "tribe_events_views_v2_view_week_label",
        "Week",
        "Week view",
        "Label for week view.",
        Availability::ProViews,
    ),
    view(
        "label_map_view",
        "tribe_events_views_v2_view_map_label",
        "Map",
        "Map view",
        "Label for map view.",
        Availability::ProViews,
    ),
    view(
        "label_photo_view",
        "tribe_events_views_v2_view_photo_label",
        "Photo",
        "Photo view",
        "Label for photo view.",
        Availability::ProViews,
    ),
    view(
        "label_summary_view",
        "tribe_events_views_v2_view_summary_label",
        "Summary",
        "Summary view",
        "Label for summary view.",
        Availability::ProViews,
    ),
];

impl LabelKey {
    /// Every key in settings-field order.
    pub const ALL: [Self; 19] = [
        Self::EventSingle,
        Self::EventSingleLowercase,
        Self::EventPlural,
        Self::EventPluralLowercase,
        Self::VenueSingle,
        Self::VenueSingleLowercase,
        Self::VenuePlural,
        Self::VenuePluralLowercase,
        Self::OrganizerSingle,
        Self::OrganizerSingleLowercase,
        Self::OrganizerPlural,
        Self::OrganizerPluralLowercase,
        Self::ListView,
        Self::MonthView,
        Self::DayView,
        Self::WeekView,
        Self::MapView,
        Self::PhotoView,
        Self::SummaryView,
    ];

    fn row(self) -> &'static LabelRow {
        &LABELS[self as usize]
    }

    /// Unprefixed option name, e.g. `label_event_single`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.row().option
    }

    /// Host filter fired when the term is rendered.
    #[must_use]
    pub fn hook_name(self) -> &'static str {
        self.row().hook
    }

    /// Text the host renders when nothing is overridden.
    #[must_use]
    pub fn default_text(self) -> &'static str {
        self.row().default
    }

    /// Caption of the settings field.
    #[must_use]
    pub fn field_label(self) -> &'static str {
        self.row().field_label
    }

    /// Help text of the settings field.
    #[must_use]
    pub fn tooltip(self) -> &'static str {
        self.row().tooltip
    }

    /// Group the key belongs to.
    #[must_use]
    pub fn group(self) -> LabelGroup {
        self.row().group
    }

    /// Canonical view-selector caption for view keys.
    #[must_use]
    pub fn view_anchor(self) -> Option<&'static str> {
        match self.row().group {
            LabelGroup::View => Some(self.row().default),
            LabelGroup::Core => None,
        }
    }

    /// Whether the key exists under `capabilities`.
    #[must_use]
    pub fn is_available(self, capabilities: Capabilities) -> bool {
        match self.row().availability {
            Availability::Always => true,
            Availability::ProViews => capabilities.pro_views,
        }
    }

    /// Available keys in settings-field order.
    pub fn available(capabilities: Capabilities) -> impl Iterator<Item = Self> {
        Self::ALL
            .into_iter()
            .filter(move |key| key.is_available(capabilities))
    }

    /// Available view key whose canonical caption is exactly `anchor`.
    #[must_use]
    pub fn from_view_anchor(anchor: &str, capabilities: Capabilities) -> Option<Self> {
        Self::available(capabilities).find(|key| key.view_anchor() == Some(anchor))
    }
}

impl Display for LabelKey {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl From<LabelKey> for &'static str {
    fn from(key: LabelKey) -> Self {
        key.as_str()
    }
}

/// Error returned when parsing an unknown label key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown label key")]
pub struct UnknownLabelKey {
    /// Input that failed to parse.
    pub value: String,
}

impl FromStr for LabelKey {
    type Err = UnknownLabelKey;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == value)
            .ok_or_else(|| UnknownLabelKey {
                value: value.to_string(),
            })
    }
}

impl TryFrom<String> for LabelKey {
    type Error = UnknownLabelKey;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_rows_line_up_with_variants() {
        for (index, key) in LabelKey::ALL.into_iter().enumerate() {
            assert_eq!(key as usize, index);
        }
        assert_eq!(LABELS.len(), LabelKey::ALL.len());
    }

    #[test]
    fn option_and_hook_names_are_distinct() {
        let options: HashSet<_> = LabelKey::ALL.iter().map(|key| key.as_str()).collect();
        let hooks: HashSet<_> = LabelKey::ALL.iter().map(|key| key.hook_name()).collect();
        assert_eq!(options.len(), LabelKey::ALL.len());
        assert_eq!(hooks.len(), LabelKey::ALL.len());
    }

    #[test]
    fn core_group_has_twelve_keys() {
        let core = LabelKey::ALL
            .iter()
            .filter(|key| key.group() == LabelGroup::Core)
            .count();
        assert_eq!(core, 12);
    }

    #[test]
    fn pro_views_gate_four_view_keys() {
        assert_eq!(LabelKey::available(Capabilities::default()).count(), 15);
        assert_eq!(LabelKey::available(Capabilities::with_pro_views()).count(), 19);
        assert!(!LabelKey::WeekView.is_available(Capabilities::default()));
        assert!(LabelKey::DayView.is_available(Capabilities::default()));
    }

    #[test]
    fn view_anchor_lookup_respects_capabilities() {
        let base = Capabilities::default();
        assert_eq!(LabelKey::from_view_anchor("List", base), Some(LabelKey::ListView));
        assert_eq!(LabelKey::from_view_anchor("Week", base), None);
        assert_eq!(
            LabelKey::from_view_anchor("Week", Capabilities::with_pro_views()),
            Some(LabelKey::WeekView)
        );
        assert_eq!(LabelKey::from_view_anchor("Event", base), None);
        assert_eq!(LabelKey::from_view_anchor("list", base), None);
    }

    #[test]
    fn parses_known_keys_and_rejects_others() {
        assert_eq!("label_event_single".parse::<LabelKey>(), Ok(LabelKey::EventSingle));
        assert_eq!(
            "label_nope".parse::<LabelKey>(),
            Err(UnknownLabelKey {
                value: "label_nope".to_string()
            })
        );
        assert_eq!(
            LabelKey::OrganizerPluralLowercase.to_string(),
            "label_organizer_plural_lowercase"
        );
    }
}

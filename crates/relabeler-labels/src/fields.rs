//! Shape of the administrative option set.
//!
//! The settings screen itself lives in the host; this module only describes
//! which fields exist, their kinds, and the defaults the resolver falls back on.

use relabeler_store::OptionsPrefix;
use serde::Serialize;

use crate::keys::{Capabilities, LabelGroup, LabelKey};

/// Option toggling view slug rewriting.
pub const REWRITE_VIEW_SLUGS: &str = "rewrite_view_slugs";

/// Input kind rendered for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Single-line text input.
    Text,
    /// Boolean checkbox.
    CheckboxBool,
    /// Static markup (headings, helper copy).
    Html,
}

/// Validation applied by the host when the form is saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationType {
    /// Sanitised markup.
    Html,
    /// Boolean coercion.
    Boolean,
}

/// Default value of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldDefault {
    /// Display-only field.
    None,
    /// Default text.
    Text(&'static str),
    /// Default toggle state.
    Flag(bool),
}

/// One entry of the option set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDefinition {
    /// Option name; unprefixed unless passed through [`prefixed_fields`].
    pub name: String,
    /// Input kind.
    pub kind: FieldKind,
    /// Field caption.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
    /// Help text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<&'static str>,
    /// Markup for display-only fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<&'static str>,
    /// Default value.
    pub default: FieldDefault,
    /// Validation rule applied on save.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationType>,
}

impl FieldDefinition {
    fn label(key: LabelKey) -> Self {
        Self {
            name: key.as_str().to_string(),
            kind: FieldKind::Text,
            label: Some(key.field_label()),
            tooltip: Some(key.tooltip()),
            html: None,
            default: FieldDefault::Text(key.default_text()),
            validation: Some(ValidationType::Html),
        }
    }

    fn markup(name: &str, html: &'static str) -> Self {
        Self {
            name: name.to_string(),
            kind: FieldKind::Html,
            label: None,
            tooltip: None,
            html: Some(html),
            default: FieldDefault::None,
            validation: None,
        }
    }

    fn rewrite_toggle() -> Self {
        Self {
            name: REWRITE_VIEW_SLUGS.to_string(),
            kind: FieldKind::CheckboxBool,
            label: Some("Re-write view slugs"),
            tooltip: Some(
                "When enabled the slugs of the views will be also changed (with the exception of Map view). You will need to flush permalinks after changing this setting.",
            ),
            html: None,
            default: FieldDefault::Flag(false),
            validation: Some(ValidationType::Boolean),
        }
    }

    /// Label key this field overrides, if it is a label field.
    ///
    /// Reads the unprefixed name; use [`Self::label_key_under`] for fields
    /// returned by [`prefixed_fields`].
    #[must_use]
    pub fn label_key(&self) -> Option<LabelKey> {
        self.label_key_named(&self.name)
    }

    /// Label key of a field re-keyed under `prefix`.
    #[must_use]
    pub fn label_key_under(&self, prefix: &OptionsPrefix) -> Option<LabelKey> {
        prefix
            .strip(&self.name)
            .and_then(|name| self.label_key_named(name))
    }

    fn label_key_named(&self, name: &str) -> Option<LabelKey> {
        if self.kind != FieldKind::Text {
            return None;
        }
        name.parse().ok()
    }
}

/// Option set in display order for the given capabilities.
#[must_use]
pub fn settings_fields(capabilities: Capabilities) -> Vec<FieldDefinition> {
    let mut fields = vec![
        FieldDefinition::markup("views_heading", "<h3>Views</h3>"),
        FieldDefinition::markup(
            "views_helper_text",
            "<p>The following fields allow you to change the default names of the views. Inputting something other than the default will change that word everywhere it appears.</p>",
        ),
    ];
    fields.extend(
        LabelKey::available(capabilities)
            .filter(|key| key.group() == LabelGroup::View)
            .map(FieldDefinition::label),
    );
    fields.push(FieldDefinition::rewrite_toggle());
    fields.push(FieldDefinition::markup("labels_heading", "<h3>Labels</h3>"));
    fields.push(FieldDefinition::markup(
        "labels_helper_text",
        "<p>The following fields allow you to change the default labels. Inputting something other than the default will change that word everywhere it appears.</p>",
    ));
    fields.extend(
        LabelKey::available(capabilities)
            .filter(|key| key.group() == LabelGroup::Core)
            .map(FieldDefinition::label),
    );
    fields
}

/// Re-key every field with the options prefix, as the host stores them.
#[must_use]
pub fn prefixed_fields(
    prefix: &OptionsPrefix,
    fields: Vec<FieldDefinition>,
) -> Vec<FieldDefinition> {
    fields
        .into_iter()
        .map(|mut field| {
            field.name = prefix.join(&field.name);
            field
        })
        .collect()
}

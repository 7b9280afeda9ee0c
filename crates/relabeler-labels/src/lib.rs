#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls
)]
#![warn(missing_docs, unreachable_pub, clippy::all, clippy::pedantic)]

//! Label resolution for host-rendered vocabulary.
//!
//! Layout: `keys.rs` (`LabelKey` table and capabilities), `fields.rs` (option
//! set shape), `resolver.rs` (`LabelResolver` and its cache), `views.rs`
//! (view-selector relabeling), `templates.rs` (template origin contribution),
//! `registration.rs` (hook binding).

pub mod fields;
pub mod keys;
pub mod registration;
pub mod resolver;
pub mod templates;
pub mod views;

pub use fields::{
    FieldDefault, FieldDefinition, FieldKind, REWRITE_VIEW_SLUGS, ValidationType, prefixed_fields,
    settings_fields,
};
pub use keys::{Capabilities, LabelGroup, LabelKey, UnknownLabelKey};
pub use registration::{
    Registration, TEMPLATE_PATH_HOOK, VIEW_SELECTOR_HOOK, register_hooks,
};
pub use resolver::LabelResolver;
pub use templates::{TEMPLATE_NAMESPACE, TEMPLATE_PRIORITY, TemplateOverride};
pub use views::relabel_views;

#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls
)]
#![warn(missing_docs, unreachable_pub, clippy::all, clippy::pedantic)]

//! Settings store adapter for label overrides.
//!
//! Layout: `backend.rs` (the `SettingsBackend` seam plus the in-memory
//! backend), `file.rs` (JSON document backend), `prefix.rs` (`OptionsPrefix`
//! normalisation), `options.rs` (`OptionsStore`, the prefix-scoped adapter).

pub mod backend;
pub mod error;
pub mod file;
pub mod options;
pub mod prefix;

pub use backend::{MemoryBackend, SettingsBackend};
pub use error::{StoreError, StoreResult};
pub use file::JsonFileBackend;
pub use options::OptionsStore;
pub use prefix::{DEFAULT_BASE_ID, OptionsPrefix, normalize_prefix};

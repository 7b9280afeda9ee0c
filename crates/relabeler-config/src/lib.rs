#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls
)]
#![warn(missing_docs, unreachable_pub, clippy::all, clippy::pedantic)]

//! Runtime configuration for the relabeler.
//!
//! Layout: `model.rs` (typed configuration), `loader.rs` (environment
//! loading), `validate.rs` (value parsing), `manifest.rs` (host dependency
//! check), `defaults.rs` (fallback values).

pub mod defaults;
pub mod error;
pub mod loader;
pub mod manifest;
pub mod model;
pub mod validate;

pub use error::{ConfigError, ConfigResult};
pub use manifest::{DependencyManifest, DependencyStatus, HostEnvironment, compare_versions};
pub use model::{LogSettings, RelabelerConfig, StoreLocation};

#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls
)]
#![warn(missing_docs, unreachable_pub, clippy::all, clippy::pedantic)]

//! Relabeler bootstrap and shared application wiring.
//!
//! Layout: `bootstrap.rs` (dependency check, resolver construction, hook
//! registration), `backend.rs` (configured store selection), `error.rs`
//! (`AppError`).

pub mod backend;
pub mod bootstrap;
pub mod error;

pub use backend::{AnyBackend, open_backend};
pub use bootstrap::{Bootstrap, Relabeler, init_logging, run_from_env, start};
pub use error::{AppError, AppResult};

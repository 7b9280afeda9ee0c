#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls
)]
#![warn(missing_docs, unreachable_pub, clippy::all, clippy::pedantic)]

//! Shared test helpers used across integration suites.
//! Layout: fixtures.rs (seeded stores), mocks.rs (fake backends).

pub mod fixtures;
pub mod mocks;

pub use fixtures::{TEST_BASE_ID, seeded_backend, seeded_options};
pub use mocks::{CountingBackend, UnavailableBackend};

//! earthling - Fetch, filter, and serve Rick and Morty character rosters
//!
//! This library walks the paginated character API to completion, keeps the
//! living humans from Earth, and exposes the result through HTTP-agnostic
//! handlers, CSV export, and a health probe of upstream latency.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod api;
pub mod config;
pub mod export;
pub mod models;
pub mod output;
pub mod upstream;

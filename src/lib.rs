//! archcheck - Static architecture-conformance checks for a multi-process
//! trading-signal system
//!
//! This library reads a fixed set of source artifacts and a deployment
//! descriptor as plain text and evaluates an ordered list of architectural
//! rules against them, stopping at the first violation. Nothing inspected is
//! ever imported or executed.

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

pub mod adapters;
pub mod config;
pub mod core;
pub mod exit;
pub mod output;
pub mod paths;

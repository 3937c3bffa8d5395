//! Core domain logic for archcheck
//!
//! This module contains pure evaluation logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Artifact, Rule, Predicate, RunOutcome)
//! - `services/` - Evaluators and the conformance engine
//! - `ports/` - Trait definitions for artifact sources and reporters
//! - `policy` - The fixed contract set, in evaluation order

pub mod models;
pub mod policy;
pub mod ports;
pub mod services;

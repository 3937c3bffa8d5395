//! Adapter implementations for port traits
//!
//! This module contains concrete artifact sources:
//!
//! - `file/` - Reads artifacts from a project root on disk
//! - `memory` - Holds artifact text in memory

pub mod file;
pub mod memory;

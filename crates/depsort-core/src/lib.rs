//! # depsort-core
//!
//! Core types and utilities shared across all depsort crates.
//!
//! This crate provides:
//! - `Service`, the named entity with its declared dependencies
//! - `TieBreak`, the rule for ordering simultaneously ready services
//! - `DepsortError` enum for unified error handling
//! - Helpers for rendering dependency cycles
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `types`: Core data types (Service, TieBreak)
//! - `error`: Error types and result aliases
//! - `utils`: Utility functions and helpers

pub mod error;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use error::{DepsortError, DepsortResult};
pub use types::{Service, TieBreak};
pub use utils::format_cycle;

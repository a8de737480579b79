//! Utility functions and helpers.
//!
//! Common functionality used across multiple depsort crates.

pub mod cycle;

// Re-export commonly used utilities
pub use cycle::{format_cycle, is_valid_service_name};

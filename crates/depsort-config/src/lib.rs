//! Service manifest parsing for depsort
//!
//! This crate reads service manifests (`depsort.toml` or `depsort.json`),
//! validates them, and layers their settings with environment and
//! command-line overrides.

pub mod manifest;
pub mod merge;
pub mod parse;

// Re-export main types
pub use manifest::{DetailedService, ServiceManifest, ServiceSpec, Settings};
pub use merge::{ConfigLayering, ConfigLoader, ConfigSource};
pub use parse::{load_from_file, parse_json_manifest, parse_toml_manifest};

use depsort_core::error::DepsortError;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, DepsortError>;

//! Manifest discovery and settings layering with environment overrides

use std::collections::HashMap;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

use depsort_core::error::DepsortError;
use depsort_core::types::TieBreak;

use crate::manifest::{ServiceManifest, Settings};
use crate::ConfigResult;

/// Manifest file names searched for, in priority order
pub const MANIFEST_FILE_NAMES: &[&str] = &["depsort.toml", "depsort.json"];

/// Environment variable overriding the tie-break rule
pub const ENV_TIE_BREAK: &str = "DEPSORT_TIE_BREAK";

/// Environment variable naming the last directory searched for a manifest
pub const ENV_CEILING_DIR: &str = "DEPSORT_CEILING_DIR";

/// Main manifest loading interface
pub struct ConfigLoader {
    /// Current working directory
    cwd: Utf8PathBuf,
    /// Last directory searched for a manifest (filesystem root when unset)
    ceiling: Option<Utf8PathBuf>,
}

/// Settings layering: manifest, then environment, then command line
#[derive(Debug, Clone, Default)]
pub struct ConfigLayering {
    /// Environment overrides
    env_overrides: HashMap<String, String>,
    /// CLI flag overrides
    cli_overrides: HashMap<String, String>,
}

/// Where a setting value came from
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    /// Manifest file
    Manifest(Utf8PathBuf),
    /// Environment variable
    Environment(String),
    /// CLI flag
    CommandLine,
    /// Built-in default
    Default,
}

impl ConfigLoader {
    /// Create a new manifest loader
    pub fn new(cwd: Utf8PathBuf) -> Self {
        Self { cwd, ceiling: None }
    }

    /// Stop the upward search at `ceiling`
    pub fn with_ceiling(mut self, ceiling: Option<Utf8PathBuf>) -> Self {
        self.ceiling = ceiling;
        self
    }

    /// Load a manifest from an explicit path or by searching upwards
    pub fn load_manifest(
        &self,
        explicit: Option<&Utf8Path>,
    ) -> ConfigResult<(ServiceManifest, Utf8PathBuf)> {
        let path = match explicit {
            Some(path) => self.cwd.join(path),
            None => self.find_manifest()?,
        };

        let manifest = crate::parse::load_from_file(&path)?;
        debug!(path = %path, services = manifest.len(), "Manifest loaded");
        Ok((manifest, path))
    }

    /// Find a manifest file in the working directory or its parents
    pub fn find_manifest(&self) -> ConfigResult<Utf8PathBuf> {
        let mut current = Some(self.cwd.as_path());

        while let Some(dir) = current {
            for name in MANIFEST_FILE_NAMES {
                let candidate = dir.join(name);
                if candidate.exists() {
                    return Ok(candidate);
                }
            }
            if self.ceiling.as_deref() == Some(dir) {
                break;
            }
            current = dir.parent();
        }

        Err(DepsortError::config(
            "manifest",
            format!(
                "No {} found in {} or parent directories",
                MANIFEST_FILE_NAMES.join(" or "),
                self.cwd
            ),
        ))
    }
}

impl ConfigLayering {
    /// Create a layering with no overrides
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect `DEPSORT_*` variables from the process environment
    pub fn from_env() -> Self {
        Self::new().with_env(
            std::env::vars()
                .filter(|(key, _)| key.starts_with("DEPSORT_"))
                .collect(),
        )
    }

    /// Set environment overrides
    pub fn with_env(mut self, overrides: HashMap<String, String>) -> Self {
        self.env_overrides = overrides;
        self
    }

    /// Set a command-line override
    pub fn with_cli(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.cli_overrides.insert(key.into(), value.into());
        self
    }

    /// Merge manifest settings with the override layers
    pub fn merge_settings(&self, manifest: Settings) -> ConfigResult<Settings> {
        let mut merged = manifest;

        Self::apply_env_overrides(&mut merged, &self.env_overrides)?;

        // CLI flags have the highest priority
        Self::apply_cli_overrides(&mut merged, &self.cli_overrides)?;

        Ok(merged)
    }

    /// Report which layer decides the tie-break rule
    pub fn tie_break_source(&self, manifest_path: Option<&Utf8Path>) -> ConfigSource {
        if self.cli_overrides.contains_key("tie-break") {
            ConfigSource::CommandLine
        } else if self.env_overrides.contains_key(ENV_TIE_BREAK) {
            ConfigSource::Environment(ENV_TIE_BREAK.to_string())
        } else if let Some(path) = manifest_path {
            ConfigSource::Manifest(path.to_path_buf())
        } else {
            ConfigSource::Default
        }
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(
        settings: &mut Settings,
        overrides: &HashMap<String, String>,
    ) -> ConfigResult<()> {
        for (key, value) in overrides {
            match key.as_str() {
                ENV_TIE_BREAK => {
                    settings.tie_break = parse_tie_break(ENV_TIE_BREAK, value)?;
                },
                _ => {
                    // Unknown environment variable, ignore
                },
            }
        }

        Ok(())
    }

    /// Apply CLI flag overrides
    fn apply_cli_overrides(
        settings: &mut Settings,
        overrides: &HashMap<String, String>,
    ) -> ConfigResult<()> {
        for (key, value) in overrides {
            match key.as_str() {
                "tie-break" => {
                    settings.tie_break = parse_tie_break("--tie-break", value)?;
                },
                other => {
                    return Err(DepsortError::config(other, "Unknown command-line override"));
                },
            }
        }

        Ok(())
    }
}

fn parse_tie_break(field: &str, value: &str) -> ConfigResult<TieBreak> {
    value.parse::<TieBreak>().map_err(|e| match e {
        DepsortError::ConfigValidation { reason, .. } => DepsortError::config(field, reason),
        other => other,
    })
}

//! Command implementations and dispatch logic.
//!
//! Each command is a function that takes its arguments, the settings layers
//! and a CommandContext, and returns what it printed for testing.

use camino::{Utf8Path, Utf8PathBuf};
use tracing::info;

use depsort_config::merge::ENV_CEILING_DIR;
use depsort_config::{ConfigLayering, ConfigLoader, ServiceManifest};
use depsort_core::error::{DepsortError, DepsortResult};

pub mod check;
pub mod order;


use crate::{output::OutputHandler, Commands};

/// Shared context for all commands
pub struct CommandContext {
    pub cwd: Utf8PathBuf,
    /// Directory where manifest discovery stops
    pub ceiling: Option<Utf8PathBuf>,
    pub output: OutputHandler,
}

impl CommandContext {
    /// Create a new command context
    pub fn new() -> DepsortResult<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| DepsortError::io("Failed to get current directory".to_string(), e))?;
        let cwd = Utf8PathBuf::try_from(cwd).map_err(|e| {
            DepsortError::config("cwd", format!("Working directory is not valid UTF-8: {}", e))
        })?;

        let ceiling = std::env::var(ENV_CEILING_DIR)
            .ok()
            .filter(|dir| !dir.is_empty())
            .map(|dir| cwd.join(dir));

        Ok(Self {
            cwd,
            ceiling,
            output: OutputHandler::new(),
        })
    }

    /// Load the manifest named on the command line, or discover one
    pub fn load_manifest(
        &self,
        explicit: Option<&Utf8Path>,
    ) -> DepsortResult<(ServiceManifest, Utf8PathBuf)> {
        ConfigLoader::new(self.cwd.clone())
            .with_ceiling(self.ceiling.clone())
            .load_manifest(explicit)
    }
}

/// Dispatch a command to its handler
pub fn dispatch_command(command: Commands, ctx: &CommandContext) -> DepsortResult<()> {
    match command {
        Commands::Order {
            manifest,
            tie_break,
            json,
        } => {
            info!(
                "Ordering services (tie_break: {:?}, json: {})",
                tie_break, json
            );
            let mut layering = ConfigLayering::from_env();
            if let Some(tie_break) = tie_break {
                layering = layering.with_cli("tie-break", tie_break);
            }
            order::execute(manifest.as_deref(), json, &layering, ctx).map(|_| ())
        },
        Commands::Check { manifest } => {
            info!("Checking dependency graph");
            check::execute(manifest.as_deref(), ctx).map(|_| ())
        },
    }
}

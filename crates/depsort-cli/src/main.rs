//! # depsort
//!
//! Orders services so every service starts after its dependencies, and
//! checks service dependency graphs for cycles.
//!
//! This is the main entry point for the depsort CLI tool. It handles command
//! parsing, sets up logging and error reporting, and dispatches to the
//! appropriate command handlers.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use tracing::{error, info};

mod commands;
mod output;

use commands::CommandContext;
use output::errors::{exit_code, ErrorFormatter};

/// Order services by their dependencies
#[derive(Parser)]
#[command(name = "depsort", version, about = "Order services by their dependencies")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print services in dependency order
    Order {
        /// Manifest file (searched for upwards when omitted)
        manifest: Option<Utf8PathBuf>,
        /// Rule for services that become ready at the same time
        #[arg(long, value_parser = ["registration", "lexical"])]
        tie_break: Option<String>,
        /// Print the ordering as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Check that the dependency graph has no cycles
    Check {
        /// Manifest file (searched for upwards when omitted)
        manifest: Option<Utf8PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);
    setup_panic_handler();

    info!("Starting depsort v{}", env!("CARGO_PKG_VERSION"));

    let result =
        CommandContext::new().and_then(|ctx| commands::dispatch_command(cli.command, &ctx));
    if let Err(e) = result {
        eprint!("{}", ErrorFormatter::new().format_error(&e));
        std::process::exit(exit_code(&e));
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "depsort={level},depsort_graph={level},depsort_config={level}"
        ))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        error!("depsort encountered an unexpected error: {}", panic_info);
        eprintln!("depsort crashed! This is a bug.");
        eprintln!("Error: {}", panic_info);
    }));
}

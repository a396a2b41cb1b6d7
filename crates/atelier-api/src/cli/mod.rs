//! CLI command definitions for the `atelier` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod options;
pub mod recommend;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use atelier_infra::config::DEFAULT_CONFIG_FILE;

/// Capsule wardrobe stylist: form, pipeline and closet preview.
#[derive(Parser)]
#[command(name = "atelier", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export spans to stdout through OpenTelemetry.
    #[arg(long, global = true, env = "ATELIER_OTEL")]
    pub otel: bool,

    /// Configuration file (models, image settings, API base URL).
    #[arg(long, global = true, env = "ATELIER_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web form and JSON API server.
    Serve {
        /// Port to listen on.
        #[arg(short, long, default_value = "3000", env = "ATELIER_PORT")]
        port: u16,

        /// Host to bind to.
        #[arg(long, default_value = "127.0.0.1", env = "ATELIER_HOST")]
        host: String,
    },

    /// Run one recommendation for a profile file (.toml or .json).
    Recommend {
        /// Path to the profile file.
        profile: PathBuf,
    },

    /// Show the form choices and slider bounds.
    Options,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

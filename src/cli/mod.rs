//! Command-line interface.

pub mod check;
pub mod completions;
pub mod output;
pub mod plan;
pub mod resolve;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::core::config::ProjectConfig;
use crate::core::signing::ResolveMode;

/// keyprops - Release signing config resolver for Android builds.
#[derive(Parser)]
#[command(
    name = "keyprops",
    about = "Resolve and check release signing config for Android builds",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root containing key.properties
    #[arg(long, global = true, default_value = ".", env = "KEYPROPS_ROOT")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the resolved release signing config (passwords redacted)
    Resolve {
        #[command(flatten)]
        mode: ModeArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the release build plan
    Plan {
        #[command(flatten)]
        mode: ModeArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Verify the release build can be signed
    Check {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Resolution mode overrides.
#[derive(Args, Debug, Clone, Copy)]
#[group(multiple = false)]
pub struct ModeArgs {
    /// Fail on missing signing properties
    #[arg(long)]
    pub strict: bool,
    /// Default missing signing properties to none
    #[arg(long)]
    pub lenient: bool,
}

impl ModeArgs {
    /// The requested mode, falling back to the project config.
    pub fn resolve(self, config: &ProjectConfig) -> ResolveMode {
        if self.strict {
            ResolveMode::Strict
        } else if self.lenient {
            ResolveMode::Lenient
        } else {
            config.signing.mode
        }
    }
}

/// Execute a command.
pub fn execute(command: Command, root: PathBuf) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Resolve { mode, json } => resolve::execute(&root, mode, json),
        Plan { mode, json } => plan::execute(&root, mode, json),
        Check { json } => check::execute(&root, json),
        Completions { shell } => completions::execute(shell),
    }
}

//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see the `commands` modules).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "aptadmin-env")]
#[command(
    about = "AptAdmin environment tooling - validate and generate deployment configuration",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "Examples:\n  aptadmin-env validate\n  APTADMIN_ENV=production aptadmin-env validate --output json\n  aptadmin-env generate --out build/env.js\n  aptadmin-env inject build/env.js --out dist/env.js\n"
)]
pub struct Cli {
    /// Deployment environment (development, production, test)
    #[arg(short, long, global = true, env = "APTADMIN_ENV")]
    pub environment: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check that required and recommended variables are set (the default
    /// command)
    Validate {
        /// Output format for the validation report
        #[arg(short, long, value_enum, default_value = "text")]
        output: OutputFormat,
    },
    /// Emit the runtime script asset with placeholder tokens
    Generate {
        /// Write the asset to a file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Substitute placeholder tokens in an asset from the environment
    Inject {
        /// Asset file containing %NAME% placeholder tokens
        file: PathBuf,

        /// Write the substituted asset to a file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

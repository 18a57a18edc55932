//! aptadmin-env - operator CLI for AptAdmin deployment configuration.
//!
//! Responsibilities:
//! - Pre-flight validation of required/recommended variables before a
//!   build or deploy (`validate`, also the bare default).
//! - Emitting and substituting the runtime placeholder script asset
//!   (`generate`, `inject`).
//!
//! Invariants:
//! - `load_dotenv()` runs BEFORE CLI parsing so `.env` values can feed
//!   clap env defaults and the build-time snapshot.
//! - Validation failures exit 1; operational errors exit 2.

mod args;
mod commands;
mod error;

use args::{Cli, Commands, OutputFormat};
use clap::Parser;
use error::ExitCode;

use aptadmin_config::{load_dotenv, BuildEnv, Environment};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    // Load .env before parsing so clap env defaults see its values.
    if let Err(e) = load_dotenv() {
        eprintln!("Failed to load environment: {e}");
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let environment = match cli.environment.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => match name.parse::<Environment>() {
            Ok(environment) => environment,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(ExitCode::GeneralError.as_i32());
            }
        },
        _ => Environment::Development,
    };
    let build = BuildEnv::capture();

    let result = match cli.command {
        None => commands::validate::run(environment, &build, OutputFormat::Text),
        Some(Commands::Validate { output }) => commands::validate::run(environment, &build, output),
        Some(Commands::Generate { ref out }) => commands::generate::run(out.as_deref()),
        Some(Commands::Inject { ref file, ref out }) => {
            commands::inject::run(file, out.as_deref(), &build)
        }
    };

    match result {
        Ok(code) => std::process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("error: {e:#}");
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    }
}

//! The `validate` command: pre-flight environment check.
//!
//! Per-variable diagnostics and warnings go to stderr; the report (json
//! mode) and the success message go to stdout. A missing required
//! variable fails the command without touching anything else.

use anyhow::Result;
use aptadmin_config::{validate, BuildEnv, Environment};

use crate::args::OutputFormat;
use crate::error::ExitCode;

pub fn run(environment: Environment, build: &BuildEnv, output: OutputFormat) -> Result<ExitCode> {
    let report = validate(environment, build);
    tracing::debug!(
        environment = %environment,
        missing_required = report.missing_required.len(),
        missing_recommended = report.missing_recommended.len(),
        "validation complete"
    );

    if output == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(if report.passed() {
            ExitCode::Success
        } else {
            ExitCode::ValidationFailed
        });
    }

    for var in &report.satisfied {
        eprintln!("      ok  {var}");
    }
    for var in &report.missing_recommended {
        eprintln!("warning: recommended variable {var} is not set");
    }

    if !report.passed() {
        eprintln!("error: missing required configuration for {environment}:");
        for var in &report.missing_required {
            eprintln!("  - {var}");
        }
        return Ok(ExitCode::ValidationFailed);
    }

    println!("Environment configuration for {environment} is complete.");
    Ok(ExitCode::Success)
}

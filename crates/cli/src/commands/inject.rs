//! The `inject` command: the deployment-pipeline substitution step.
//!
//! Reads an asset containing `%NAME%` tokens and substitutes each from
//! the `APTADMIN_`-prefixed environment. Tokens with no matching variable
//! are left intact for the runtime scrub.

use anyhow::{Context, Result};
use aptadmin_config::{asset, BuildEnv};
use std::path::Path;

use crate::error::ExitCode;

pub fn run(file: &Path, out: Option<&Path>, build: &BuildEnv) -> Result<ExitCode> {
    let template = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read asset {}", file.display()))?;
    let substituted = asset::substitute(&template, build);

    match out {
        Some(path) => {
            std::fs::write(path, substituted)
                .with_context(|| format!("failed to write asset to {}", path.display()))?;
            eprintln!("wrote substituted asset to {}", path.display());
        }
        None => print!("{substituted}"),
    }
    Ok(ExitCode::Success)
}

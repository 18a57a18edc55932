//! The `generate` command: emit the placeholder script asset.

use anyhow::{Context, Result};
use aptadmin_config::asset;
use std::path::Path;

use crate::error::ExitCode;

pub fn run(out: Option<&Path>) -> Result<ExitCode> {
    let rendered = asset::render_asset();
    match out {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("failed to write asset to {}", path.display()))?;
            eprintln!("wrote runtime asset to {}", path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(ExitCode::Success)
}

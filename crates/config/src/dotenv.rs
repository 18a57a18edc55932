//! Optional `.env` loading for local development.
//!
//! Responsibilities:
//! - Load a `.env` file into the process environment before the build-time
//!   snapshot is captured.
//! - Honor the `DOTENV_DISABLED` gate so tests and CI never pick up a
//!   stray `.env`.
//!
//! Invariants:
//! - A missing `.env` file is not an error.
//! - Error mapping never carries raw `.env` line contents.

use crate::error::ConfigError;

/// Environment variable that disables `.env` loading entirely.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

/// Load `.env` from the working directory into the process environment.
///
/// Skipped when `DOTENV_DISABLED` is set to a non-empty value. Call this
/// before `BuildEnv::capture` or CLI parsing so the snapshot sees the
/// file's values.
pub fn load_dotenv() -> Result<(), ConfigError> {
    let disabled = std::env::var(DOTENV_DISABLED_VAR)
        .map(|v| !v.trim().is_empty())
        .unwrap_or(false);
    if disabled {
        tracing::debug!("dotenv loading disabled via {DOTENV_DISABLED_VAR}");
        return Ok(());
    }

    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "loaded .env file");
            Ok(())
        }
        Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(dotenvy::Error::Io(e)) => Err(ConfigError::DotenvIo { kind: e.kind() }),
        // Only the parse position is propagated, never the line itself.
        Err(dotenvy::Error::LineParse(_, error_index)) => {
            Err(ConfigError::DotenvParse { error_index })
        }
        Err(_) => Err(ConfigError::DotenvUnknown),
    }
}

//! Error types for configuration resolution.
//!
//! Responsibilities:
//! - Define error variants for every configuration failure mode.
//!
//! Invariants:
//! - All variants include the variable or environment name for debugging.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret
//!   leakage.
//! - Missing a required variable outside production is not an error; it
//!   falls through to the setting default and never reaches this type.

use std::io::ErrorKind;
use thiserror::Error;

/// Errors that can occur during configuration resolution.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A production-required setting is absent from both the runtime bag
    /// and the build-time environment. Raised only in production; intended
    /// to abort application bootstrap.
    #[error("missing required configuration variable: {var} (no runtime or build-time value)")]
    MissingRequired { var: String },

    #[error("unknown deployment environment: '{0}' (expected development, production, or test)")]
    UnknownEnvironment(String),

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from the dotenvy crate).
    ///
    /// SAFETY: This error does not include any raw dotenv content.
    #[error("failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

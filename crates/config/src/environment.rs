//! Deployment environment identification.
//!
//! Responsibilities:
//! - Define the closed set of deployment environments.
//! - Parse the environment name from `APTADMIN_ENV`.
//!
//! Invariants:
//! - An unset or empty `APTADMIN_ENV` means development.
//! - An unrecognized environment name is an error, never a silent fallback.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::constants::ENV_NAME_VAR;
use crate::error::ConfigError;

/// The deployment environment the application is running in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
    Test,
}

impl Environment {
    /// The canonical lowercase name of this environment.
    pub const fn as_str(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
            Environment::Test => "test",
        }
    }

    /// Determine the active environment from `APTADMIN_ENV`.
    ///
    /// Unset, empty, or whitespace-only values default to development.
    pub fn detect() -> Result<Self, ConfigError> {
        match std::env::var(ENV_NAME_VAR) {
            Ok(name) if !name.trim().is_empty() => name.trim().parse(),
            _ => Ok(Environment::Development),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Environment::Development),
            "production" => Ok(Environment::Production),
            "test" => Ok(Environment::Test),
            other => Err(ConfigError::UnknownEnvironment(other.to_string())),
        }
    }
}

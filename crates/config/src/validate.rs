//! Pre-flight validation of the build-time environment.
//!
//! Responsibilities:
//! - Check the presence of required and recommended variables for a given
//!   deployment environment, driven by the settings table.
//!
//! Does NOT handle:
//! - Printing or process exit (see the `aptadmin-env` CLI).
//! - Value resolution (see resolver.rs).
//!
//! Invariants:
//! - The required/recommended sets come from the same table the resolver
//!   uses; the two components cannot diverge.
//! - A single linear pass; the report is computed once and owned by the
//!   caller.

use serde::Serialize;

use crate::build_env::BuildEnv;
use crate::environment::Environment;
use crate::settings::SETTINGS;

/// Result of a pre-flight environment check. Variable names are the full
/// prefixed forms operators export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub environment: Environment,
    pub missing_required: Vec<String>,
    pub missing_recommended: Vec<String>,
    pub satisfied: Vec<String>,
}

impl ValidationReport {
    /// True when no required variable is missing. Missing recommended
    /// variables are warnings and do not fail the check.
    pub fn passed(&self) -> bool {
        self.missing_required.is_empty()
    }
}

/// Check the build-time environment against the settings table for the
/// given deployment environment.
pub fn validate(environment: Environment, build: &BuildEnv) -> ValidationReport {
    let mut report = ValidationReport {
        environment,
        missing_required: Vec::new(),
        missing_recommended: Vec::new(),
        satisfied: Vec::new(),
    };

    for setting in SETTINGS {
        let required = setting.is_required_in(environment);
        let recommended = setting.is_recommended_in(environment);
        if !required && !recommended {
            continue;
        }
        let var = setting.env_var();
        if build.get(&var).is_some() {
            report.satisfied.push(var);
        } else if required {
            report.missing_required.push(var);
        } else {
            report.missing_recommended.push(var);
        }
    }

    report
}

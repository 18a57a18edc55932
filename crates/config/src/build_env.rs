//! Build-time environment snapshot.
//!
//! Responsibilities:
//! - Capture the `APTADMIN_`-prefixed process environment once, at
//!   bootstrap, into an explicit value the resolver and validator receive
//!   by reference.
//!
//! Does NOT handle:
//! - Runtime-injected values (see runtime.rs).
//! - Precedence between layers (see resolver.rs).
//!
//! Invariants:
//! - Empty or whitespace-only variables are treated as unset.
//! - Stored values are trimmed.
//! - The snapshot is never mutated after construction; code that holds one
//!   never re-reads the ambient process environment.

use std::collections::BTreeMap;

use crate::constants::ENV_PREFIX;

/// An immutable snapshot of the prefixed build-time environment variables.
#[derive(Debug, Clone, Default)]
pub struct BuildEnv {
    values: BTreeMap<String, String>,
}

impl BuildEnv {
    /// Capture every `APTADMIN_`-prefixed variable from the process
    /// environment.
    pub fn capture() -> Self {
        Self::from_vars(std::env::vars())
    }

    /// Build a snapshot from explicit pairs. Non-prefixed keys and blank
    /// values are dropped, mirroring `capture`.
    pub fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Self {
        let values = vars
            .into_iter()
            .filter(|(key, _)| key.starts_with(ENV_PREFIX))
            .filter_map(|(key, value)| {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some((key, trimmed.to_string()))
                }
            })
            .collect();
        Self { values }
    }

    /// Look up a variable by its full prefixed name.
    pub fn get(&self, var: &str) -> Option<&str> {
        self.values.get(var).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

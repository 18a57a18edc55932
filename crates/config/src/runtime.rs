//! The runtime-injected configuration bag.
//!
//! Responsibilities:
//! - Hold the values the deployment pipeline substituted into the generated
//!   script asset, populated once at bootstrap.
//! - Scrub unsubstituted placeholder tokens so they never reach application
//!   logic as literal `%NAME%` text.
//! - Emit one redacted diagnostic snapshot of the bag.
//!
//! Does NOT handle:
//! - Build-time environment variables (see build_env.rs).
//! - Asset generation or token substitution (see asset.rs).
//!
//! Invariants:
//! - Population never fails; a missing substitution yields the empty string.
//! - Stored values are trimmed; whitespace-only values read as absent.
//! - After construction the bag is read-only.
//! - Values whose key name contains a sensitive marker are never logged.

use std::collections::BTreeMap;

use crate::constants::{
    PLACEHOLDER_DELIMITER, REDACTED_MARKER, SENSITIVE_MARKERS, UNSET_MARKER,
};

/// Returns true if `value` is still a placeholder token the pipeline
/// failed to substitute (`%NAME%`).
pub(crate) fn is_unresolved_placeholder(value: &str) -> bool {
    value.len() >= 2
        && value.starts_with(PLACEHOLDER_DELIMITER)
        && value.ends_with(PLACEHOLDER_DELIMITER)
}

fn is_sensitive(key: &str) -> bool {
    SENSITIVE_MARKERS.iter().any(|marker| key.contains(marker))
}

/// Runtime configuration injected at page-load time, keyed by short
/// (unprefixed) setting name.
#[derive(Debug, Clone, Default)]
pub struct RuntimeBag {
    values: BTreeMap<String, String>,
}

impl RuntimeBag {
    /// An empty bag, for contexts with no runtime injection (tests, the
    /// validator CLI).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Populate the bag from substituted key/value pairs.
    ///
    /// Values are trimmed, so whitespace-only injections read as absent.
    /// Any trimmed value still wrapped in the placeholder delimiter is
    /// coerced to the empty string before anything else can observe it.
    pub fn from_injected(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let values = pairs
            .into_iter()
            .map(|(key, value)| {
                let trimmed = value.trim();
                if is_unresolved_placeholder(trimmed) {
                    (key, String::new())
                } else if trimmed.len() == value.len() {
                    (key, value)
                } else {
                    (key, trimmed.to_string())
                }
            })
            .collect();
        Self { values }
    }

    /// Look up a key, treating empty values as absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Render the redacted one-line snapshot of every key in the bag.
    ///
    /// Sensitive keys show a redaction marker, empty values show as unset.
    fn render_snapshot(&self) -> String {
        let mut parts = Vec::with_capacity(self.values.len());
        for (key, value) in &self.values {
            let shown = if value.is_empty() {
                UNSET_MARKER
            } else if is_sensitive(key) {
                REDACTED_MARKER
            } else {
                value.as_str()
            };
            parts.push(format!("{key}={shown}"));
        }
        parts.join(" ")
    }

    /// Emit the diagnostic snapshot log line. Never fails.
    pub fn log_snapshot(&self) {
        tracing::info!(snapshot = %self.render_snapshot(), "runtime configuration injected");
    }
}

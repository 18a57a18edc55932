//! Centralized constants for the AptAdmin configuration subsystem.
//!
//! This module contains the fixed names, markers, and default values used
//! across the resolver, injector, and validator to avoid duplication.

// =============================================================================
// Variable Naming
// =============================================================================

/// Prefix applied to every build-time environment variable.
pub const ENV_PREFIX: &str = "APTADMIN_";

/// Environment variable holding the active deployment environment name.
pub const ENV_NAME_VAR: &str = "APTADMIN_ENV";

/// JavaScript global the generated script asset assigns into.
pub const RUNTIME_GLOBAL: &str = "window.__ENV";

// =============================================================================
// Placeholder Handling
// =============================================================================

/// Delimiter wrapping placeholder tokens in the generated asset (`%NAME%`).
pub const PLACEHOLDER_DELIMITER: char = '%';

// =============================================================================
// Value Parsing
// =============================================================================

/// The fixed set of strings a boolean setting accepts as true.
/// Matching is ASCII case-insensitive; everything else is false.
pub const TRUTHY_VALUES: &[&str] = &["true", "1", "yes"];

// =============================================================================
// Log Redaction
// =============================================================================

/// A key whose name contains any of these substrings never has its value
/// logged.
pub const SENSITIVE_MARKERS: &[&str] = &["KEY", "SECRET", "TOKEN", "PASSWORD"];

/// Marker logged in place of a sensitive value.
pub const REDACTED_MARKER: &str = "[REDACTED]";

/// Marker logged for a key whose resolved value is empty.
pub const UNSET_MARKER: &str = "<unset>";

// =============================================================================
// Setting Defaults
// =============================================================================

/// Default backend API base URL (local development server).
pub const DEFAULT_API_URL: &str = "http://localhost:5050/api";

/// Default websocket endpoint (local development server).
pub const DEFAULT_SOCKET_URL: &str = "http://localhost:5050";

/// Default frontend origin (local development server).
pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";

/// Default auth-token refresh interval in milliseconds (15 minutes).
pub const DEFAULT_TOKEN_REFRESH_INTERVAL_MS: u64 = 900_000;

/// Default prefix for browser storage keys.
pub const DEFAULT_STORAGE_PREFIX: &str = "aa_";

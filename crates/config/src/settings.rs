//! The declarative settings table.
//!
//! Responsibilities:
//! - Enumerate every configuration setting the application exposes, with
//!   its kind, default value, and per-environment requirement level.
//! - Serve as the single source of truth for both the resolver and the
//!   pre-flight validator, so their required/recommended sets cannot drift.
//!
//! Does NOT handle:
//! - Value lookup or precedence (see resolver.rs).
//! - Presence checking (see validate.rs).

use crate::constants::{
    DEFAULT_API_URL, DEFAULT_FRONTEND_URL, DEFAULT_SOCKET_URL, DEFAULT_STORAGE_PREFIX,
    DEFAULT_TOKEN_REFRESH_INTERVAL_MS, ENV_PREFIX,
};
use crate::environment::Environment;
use crate::environment::Environment::{Development, Production, Test};

/// The value shape a setting resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    Str,
    Bool,
    Number,
}

/// How a setting's default value is determined.
#[derive(Debug, Clone, Copy)]
pub enum SettingDefault {
    /// A fixed literal default.
    Fixed(&'static str),
    /// Defaults to the active environment's name (e.g. monitoring
    /// environment tags).
    EnvironmentName,
    /// One default in production, another everywhere else.
    ProductionOr {
        production: &'static str,
        other: &'static str,
    },
}

impl SettingDefault {
    /// The default value for the given environment.
    pub fn for_environment(self, environment: Environment) -> &'static str {
        match self {
            SettingDefault::Fixed(value) => value,
            SettingDefault::EnvironmentName => environment.as_str(),
            SettingDefault::ProductionOr { production, other } => match environment {
                Production => production,
                _ => other,
            },
        }
    }
}

/// A logical configuration setting.
#[derive(Debug, Clone, Copy)]
pub struct Setting {
    /// Short key, without the `APTADMIN_` prefix.
    pub name: &'static str,
    pub kind: SettingKind,
    pub default: SettingDefault,
    /// Environments where absence of this variable is fatal.
    pub required_in: &'static [Environment],
    /// Environments where absence is a warning only.
    pub recommended_in: &'static [Environment],
    /// Whether this key is populated at page load through the generated
    /// script asset (as opposed to build-time only).
    pub runtime_injected: bool,
}

impl Setting {
    /// The prefixed build-time environment variable name for this setting.
    pub fn env_var(&self) -> String {
        format!("{ENV_PREFIX}{}", self.name)
    }

    pub fn is_required_in(&self, environment: Environment) -> bool {
        self.required_in.contains(&environment)
    }

    pub fn is_recommended_in(&self, environment: Environment) -> bool {
        self.recommended_in.contains(&environment)
    }
}

pub static API_URL: Setting = Setting {
    name: "API_URL",
    kind: SettingKind::Str,
    default: SettingDefault::Fixed(DEFAULT_API_URL),
    required_in: &[Development, Production],
    recommended_in: &[],
    runtime_injected: true,
};

pub static SOCKET_URL: Setting = Setting {
    name: "SOCKET_URL",
    kind: SettingKind::Str,
    default: SettingDefault::Fixed(DEFAULT_SOCKET_URL),
    required_in: &[Development, Production],
    recommended_in: &[],
    runtime_injected: true,
};

pub static FRONTEND_URL: Setting = Setting {
    name: "FRONTEND_URL",
    kind: SettingKind::Str,
    default: SettingDefault::Fixed(DEFAULT_FRONTEND_URL),
    required_in: &[Production],
    recommended_in: &[],
    runtime_injected: false,
};

pub static FEATURE_NOTIFICATIONS: Setting = Setting {
    name: "FEATURE_NOTIFICATIONS",
    kind: SettingKind::Bool,
    default: SettingDefault::Fixed("false"),
    required_in: &[],
    recommended_in: &[],
    runtime_injected: false,
};

pub static FEATURE_CHAT: Setting = Setting {
    name: "FEATURE_CHAT",
    kind: SettingKind::Bool,
    default: SettingDefault::Fixed("false"),
    required_in: &[],
    recommended_in: &[],
    runtime_injected: false,
};

pub static FEATURE_PAYMENTS: Setting = Setting {
    name: "FEATURE_PAYMENTS",
    kind: SettingKind::Bool,
    default: SettingDefault::Fixed("true"),
    required_in: &[],
    recommended_in: &[],
    runtime_injected: false,
};

pub static SENTRY_DSN: Setting = Setting {
    name: "SENTRY_DSN",
    kind: SettingKind::Str,
    default: SettingDefault::Fixed(""),
    required_in: &[],
    recommended_in: &[Production],
    runtime_injected: true,
};

pub static SENTRY_ENVIRONMENT: Setting = Setting {
    name: "SENTRY_ENVIRONMENT",
    kind: SettingKind::Str,
    default: SettingDefault::EnvironmentName,
    required_in: &[],
    recommended_in: &[],
    runtime_injected: true,
};

pub static SENTRY_RELEASE: Setting = Setting {
    name: "SENTRY_RELEASE",
    kind: SettingKind::Str,
    default: SettingDefault::Fixed(""),
    required_in: &[],
    recommended_in: &[],
    runtime_injected: true,
};

pub static ANALYTICS_ID: Setting = Setting {
    name: "ANALYTICS_ID",
    kind: SettingKind::Str,
    default: SettingDefault::Fixed(""),
    required_in: &[],
    recommended_in: &[Production],
    runtime_injected: true,
};

pub static TOKEN_REFRESH_INTERVAL: Setting = Setting {
    name: "TOKEN_REFRESH_INTERVAL",
    kind: SettingKind::Number,
    default: SettingDefault::Fixed("900000"),
    required_in: &[],
    recommended_in: &[],
    runtime_injected: false,
};

pub static STORAGE_PREFIX: Setting = Setting {
    name: "STORAGE_PREFIX",
    kind: SettingKind::Str,
    default: SettingDefault::Fixed(DEFAULT_STORAGE_PREFIX),
    required_in: &[],
    recommended_in: &[],
    runtime_injected: false,
};

pub static LOG_LEVEL: Setting = Setting {
    name: "LOG_LEVEL",
    kind: SettingKind::Str,
    default: SettingDefault::ProductionOr {
        production: "error",
        other: "debug",
    },
    required_in: &[],
    recommended_in: &[Development, Production, Test],
    runtime_injected: false,
};

/// Every setting the application exposes, in a fixed order.
pub static SETTINGS: &[&Setting] = &[
    &API_URL,
    &SOCKET_URL,
    &FRONTEND_URL,
    &FEATURE_NOTIFICATIONS,
    &FEATURE_CHAT,
    &FEATURE_PAYMENTS,
    &SENTRY_DSN,
    &SENTRY_ENVIRONMENT,
    &SENTRY_RELEASE,
    &ANALYTICS_ID,
    &TOKEN_REFRESH_INTERVAL,
    &STORAGE_PREFIX,
    &LOG_LEVEL,
];

/// Look up a setting by its short key.
pub fn lookup(name: &str) -> Option<&'static Setting> {
    SETTINGS.iter().copied().find(|s| s.name == name)
}

/// Settings populated through the generated runtime script asset.
pub fn runtime_injected() -> impl Iterator<Item = &'static Setting> {
    SETTINGS.iter().copied().filter(|s| s.runtime_injected)
}

//! Configuration resolution with a fixed precedence chain.
//!
//! Responsibilities:
//! - Resolve each setting by precedence: runtime bag, then build-time
//!   environment, then the setting default.
//! - Enforce the production required-variable policy (the only throwing
//!   path in this crate's hot path).
//! - Provide typed boolean/numeric wrappers and a named accessor per
//!   setting.
//!
//! Does NOT handle:
//! - Populating the runtime bag (see runtime.rs).
//! - Pre-flight presence reporting (see validate.rs).
//!
//! Invariants:
//! - Resolution is synchronous, performs no I/O, and is idempotent for an
//!   unchanged bag/snapshot.
//! - A malformed boolean or number falls back to the default; no caller
//!   ever observes NaN-like artifacts or literal placeholder tokens.

use serde::Serialize;

use crate::build_env::BuildEnv;
use crate::constants::{ENV_PREFIX, TRUTHY_VALUES};
use crate::environment::Environment;
use crate::error::ConfigError;
use crate::runtime::RuntimeBag;
use crate::settings::{self, Setting};

/// Returns true iff `value` is in the fixed truthy set (`true`, `1`,
/// `yes`), compared ASCII case-insensitively.
fn is_truthy(value: &str) -> bool {
    TRUTHY_VALUES
        .iter()
        .any(|truthy| value.eq_ignore_ascii_case(truthy))
}

/// The single configuration access point handed to application code at
/// bootstrap. Owns the active environment, the runtime bag, and the
/// build-time snapshot; performs no ambient environment reads.
#[derive(Debug, Clone)]
pub struct Resolver {
    environment: Environment,
    bag: RuntimeBag,
    build: BuildEnv,
}

impl Resolver {
    pub fn new(environment: Environment, bag: RuntimeBag, build: BuildEnv) -> Self {
        Self {
            environment,
            bag,
            build,
        }
    }

    /// The active deployment environment.
    pub fn mode(&self) -> Environment {
        self.environment
    }

    /// Resolve `key` through the precedence chain, returning `default`
    /// when neither the runtime bag nor the build-time environment has a
    /// non-empty value.
    ///
    /// Errors only when the environment is production and `key` is in the
    /// required-in-production set; that error is meant to abort bootstrap.
    pub fn resolve(&self, key: &str, default: &str) -> Result<String, ConfigError> {
        if let Some(value) = self.bag.get(key) {
            return Ok(value.to_string());
        }
        if let Some(value) = self.build.get(&format!("{ENV_PREFIX}{key}")) {
            return Ok(value.to_string());
        }
        let required_in_production = settings::lookup(key)
            .is_some_and(|setting| setting.is_required_in(Environment::Production));
        if self.environment == Environment::Production && required_in_production {
            return Err(ConfigError::MissingRequired {
                var: key.to_string(),
            });
        }
        tracing::debug!(key, default, "configuration fell through to default");
        Ok(default.to_string())
    }

    /// Boolean wrapper: resolves the raw string, then matches it against
    /// the fixed truthy set. Anything else, including empty, is false.
    pub fn resolve_bool(&self, key: &str, default: &str) -> Result<bool, ConfigError> {
        Ok(is_truthy(&self.resolve(key, default)?))
    }

    /// Numeric wrapper: resolves the raw string and parses it; a value
    /// that does not parse yields `default` rather than an error.
    pub fn resolve_number(&self, key: &str, default: u64) -> Result<u64, ConfigError> {
        let raw = self.resolve(key, "")?;
        if raw.is_empty() {
            return Ok(default);
        }
        Ok(raw.trim().parse().unwrap_or(default))
    }

    fn resolve_setting(&self, setting: &Setting) -> Result<String, ConfigError> {
        self.resolve(setting.name, setting.default.for_environment(self.environment))
    }

    fn resolve_setting_bool(&self, setting: &Setting) -> Result<bool, ConfigError> {
        Ok(is_truthy(&self.resolve_setting(setting)?))
    }

    pub fn api_url(&self) -> Result<String, ConfigError> {
        self.resolve_setting(&settings::API_URL)
    }

    pub fn socket_url(&self) -> Result<String, ConfigError> {
        self.resolve_setting(&settings::SOCKET_URL)
    }

    pub fn frontend_url(&self) -> Result<String, ConfigError> {
        self.resolve_setting(&settings::FRONTEND_URL)
    }

    pub fn feature_notifications(&self) -> Result<bool, ConfigError> {
        self.resolve_setting_bool(&settings::FEATURE_NOTIFICATIONS)
    }

    pub fn feature_chat(&self) -> Result<bool, ConfigError> {
        self.resolve_setting_bool(&settings::FEATURE_CHAT)
    }

    pub fn feature_payments(&self) -> Result<bool, ConfigError> {
        self.resolve_setting_bool(&settings::FEATURE_PAYMENTS)
    }

    pub fn sentry_dsn(&self) -> Result<String, ConfigError> {
        self.resolve_setting(&settings::SENTRY_DSN)
    }

    pub fn sentry_environment(&self) -> Result<String, ConfigError> {
        self.resolve_setting(&settings::SENTRY_ENVIRONMENT)
    }

    pub fn sentry_release(&self) -> Result<String, ConfigError> {
        self.resolve_setting(&settings::SENTRY_RELEASE)
    }

    pub fn analytics_id(&self) -> Result<String, ConfigError> {
        self.resolve_setting(&settings::ANALYTICS_ID)
    }

    /// Auth-token refresh interval in milliseconds.
    pub fn token_refresh_interval_ms(&self) -> Result<u64, ConfigError> {
        self.resolve_number(
            settings::TOKEN_REFRESH_INTERVAL.name,
            crate::constants::DEFAULT_TOKEN_REFRESH_INTERVAL_MS,
        )
    }

    pub fn storage_prefix(&self) -> Result<String, ConfigError> {
        self.resolve_setting(&settings::STORAGE_PREFIX)
    }

    pub fn log_level(&self) -> Result<String, ConfigError> {
        self.resolve_setting(&settings::LOG_LEVEL)
    }

    /// Compute the full resolved snapshot. Derived on demand, never
    /// cached; two calls with an unchanged bag/snapshot are identical.
    pub fn snapshot(&self) -> Result<ResolvedConfig, ConfigError> {
        Ok(ResolvedConfig {
            mode: self.environment,
            api_url: self.api_url()?,
            socket_url: self.socket_url()?,
            frontend_url: self.frontend_url()?,
            feature_notifications: self.feature_notifications()?,
            feature_chat: self.feature_chat()?,
            feature_payments: self.feature_payments()?,
            sentry_dsn: self.sentry_dsn()?,
            sentry_environment: self.sentry_environment()?,
            sentry_release: self.sentry_release()?,
            analytics_id: self.analytics_id()?,
            token_refresh_interval_ms: self.token_refresh_interval_ms()?,
            storage_prefix: self.storage_prefix()?,
            log_level: self.log_level()?,
        })
    }
}

/// Every setting paired with its resolved, typed value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedConfig {
    pub mode: Environment,
    pub api_url: String,
    pub socket_url: String,
    pub frontend_url: String,
    pub feature_notifications: bool,
    pub feature_chat: bool,
    pub feature_payments: bool,
    pub sentry_dsn: String,
    pub sentry_environment: String,
    pub sentry_release: String,
    pub analytics_id: String,
    pub token_refresh_interval_ms: u64,
    pub storage_prefix: String,
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bag(entries: &[(&str, &str)]) -> RuntimeBag {
        RuntimeBag::from_injected(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        )
    }

    fn build(entries: &[(&str, &str)]) -> BuildEnv {
        BuildEnv::from_vars(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        )
    }

    fn resolver(
        environment: Environment,
        bag_entries: &[(&str, &str)],
        build_entries: &[(&str, &str)],
    ) -> Resolver {
        Resolver::new(environment, bag(bag_entries), build(build_entries))
    }

    #[test]
    fn runtime_bag_wins_over_build_env_and_default() {
        let r = resolver(
            Environment::Development,
            &[("API_URL", "https://bag.example.com")],
            &[("APTADMIN_API_URL", "https://build.example.com")],
        );
        assert_eq!(
            r.resolve("API_URL", "https://default.example.com").unwrap(),
            "https://bag.example.com"
        );
    }

    #[test]
    fn build_env_wins_when_bag_is_absent_or_empty() {
        let r = resolver(
            Environment::Development,
            &[("API_URL", "%API_URL%")],
            &[("APTADMIN_API_URL", "https://build.example.com")],
        );
        assert_eq!(
            r.resolve("API_URL", "fallback").unwrap(),
            "https://build.example.com"
        );
    }

    #[test]
    fn whitespace_only_bag_value_falls_through_the_chain() {
        let r = resolver(
            Environment::Development,
            &[("API_URL", "   ")],
            &[("APTADMIN_API_URL", "https://build.example.com")],
        );
        assert_eq!(r.api_url().unwrap(), "https://build.example.com");

        let r = resolver(Environment::Development, &[("API_URL", "   ")], &[]);
        assert_eq!(r.api_url().unwrap(), "http://localhost:5050/api");
    }

    #[test]
    fn padded_placeholder_never_leaks_into_a_resolved_value() {
        let r = resolver(Environment::Development, &[("API_URL", " %API_URL% ")], &[]);
        let resolved = r.api_url().unwrap();
        assert!(!resolved.contains('%'), "leaked token: {resolved}");
        assert_eq!(resolved, "http://localhost:5050/api");
    }

    #[test]
    fn default_used_outside_production_when_both_layers_miss() {
        let r = resolver(Environment::Development, &[], &[]);
        assert_eq!(r.api_url().unwrap(), "http://localhost:5050/api");
        assert_eq!(r.socket_url().unwrap(), "http://localhost:5050");
    }

    #[test]
    fn production_missing_required_is_fatal_and_names_the_key() {
        let r = resolver(Environment::Production, &[], &[]);
        let err = r.api_url().unwrap_err();
        match err {
            ConfigError::MissingRequired { var } => assert_eq!(var, "API_URL"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn production_optional_settings_still_fall_back() {
        let r = resolver(
            Environment::Production,
            &[],
            &[
                ("APTADMIN_API_URL", "https://api.example.com"),
                ("APTADMIN_SOCKET_URL", "wss://api.example.com"),
                ("APTADMIN_FRONTEND_URL", "https://app.example.com"),
            ],
        );
        assert_eq!(r.sentry_dsn().unwrap(), "");
        assert_eq!(r.log_level().unwrap(), "error");
        assert_eq!(r.sentry_environment().unwrap(), "production");
    }

    #[test]
    fn resolution_is_idempotent() {
        let r = resolver(
            Environment::Development,
            &[("SENTRY_RELEASE", "1.4.2")],
            &[("APTADMIN_API_URL", "https://api.example.com")],
        );
        assert_eq!(r.snapshot().unwrap(), r.snapshot().unwrap());
    }

    #[test]
    fn boolean_wrapper_accepts_the_fixed_truthy_set() {
        for value in ["true", "TRUE", "True", "1", "yes", "YES"] {
            let r = resolver(Environment::Development, &[("FEATURE_CHAT", value)], &[]);
            assert!(r.feature_chat().unwrap(), "{value} should parse as true");
        }
        for value in ["false", "0", "no", "enabled", "on"] {
            let r = resolver(Environment::Development, &[("FEATURE_CHAT", value)], &[]);
            assert!(!r.feature_chat().unwrap(), "{value} should parse as false");
        }
    }

    #[test]
    fn boolean_wrapper_uses_setting_defaults_when_unset() {
        let r = resolver(Environment::Development, &[], &[]);
        assert!(!r.feature_notifications().unwrap());
        assert!(!r.feature_chat().unwrap());
        assert!(r.feature_payments().unwrap());
    }

    #[test]
    fn numeric_wrapper_parses_and_falls_back() {
        let r = resolver(
            Environment::Development,
            &[("TOKEN_REFRESH_INTERVAL", "15000")],
            &[],
        );
        assert_eq!(r.token_refresh_interval_ms().unwrap(), 15_000);

        let r = resolver(
            Environment::Development,
            &[("TOKEN_REFRESH_INTERVAL", "not-a-number")],
            &[],
        );
        assert_eq!(r.token_refresh_interval_ms().unwrap(), 900_000);

        let r = resolver(Environment::Development, &[], &[]);
        assert_eq!(r.token_refresh_interval_ms().unwrap(), 900_000);
    }

    #[test]
    fn resolve_number_falls_back_for_unlisted_keys() {
        let r = resolver(Environment::Development, &[("RETRY_LIMIT", "oops")], &[]);
        assert_eq!(r.resolve_number("RETRY_LIMIT", 3).unwrap(), 3);
        let r = resolver(Environment::Development, &[("RETRY_LIMIT", "7")], &[]);
        assert_eq!(r.resolve_number("RETRY_LIMIT", 3).unwrap(), 7);
    }

    #[test]
    fn log_level_defaults_follow_the_environment() {
        let prod = resolver(
            Environment::Production,
            &[],
            &[
                ("APTADMIN_API_URL", "https://api.example.com"),
                ("APTADMIN_SOCKET_URL", "wss://api.example.com"),
                ("APTADMIN_FRONTEND_URL", "https://app.example.com"),
            ],
        );
        assert_eq!(prod.log_level().unwrap(), "error");
        let dev = resolver(Environment::Development, &[], &[]);
        assert_eq!(dev.log_level().unwrap(), "debug");
    }

    #[test]
    fn storage_prefix_defaults_to_aa() {
        let r = resolver(Environment::Test, &[], &[]);
        assert_eq!(r.storage_prefix().unwrap(), "aa_");
    }
}

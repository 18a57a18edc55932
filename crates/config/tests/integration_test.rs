//! End-to-end configuration scenarios across the injector, resolver, and
//! validator.
//!
//! These tests exercise the full path an operator deployment takes: asset
//! generation, pipeline substitution, runtime bag population, and
//! resolution against a build-time snapshot.

use aptadmin_config::{
    asset, validate, BuildEnv, ConfigError, Environment, Resolver, RuntimeBag,
};

fn build(entries: &[(&str, &str)]) -> BuildEnv {
    BuildEnv::from_vars(
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string())),
    )
}

fn bag(entries: &[(&str, &str)]) -> RuntimeBag {
    RuntimeBag::from_injected(
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string())),
    )
}

#[test]
fn production_without_api_url_aborts_bootstrap() {
    let resolver = Resolver::new(Environment::Production, RuntimeBag::empty(), build(&[]));
    let err = resolver.api_url().unwrap_err();
    assert!(matches!(err, ConfigError::MissingRequired { ref var } if var == "API_URL"));
    assert!(err.to_string().contains("API_URL"));
}

#[test]
fn development_with_unsubstituted_placeholder_falls_through_to_default() {
    // The pipeline never ran, so the bag still carries the literal token.
    let resolver = Resolver::new(
        Environment::Development,
        bag(&[("API_URL", "%API_URL%")]),
        build(&[]),
    );
    assert_eq!(resolver.api_url().unwrap(), "http://localhost:5050/api");
}

#[test]
fn runtime_injection_beats_build_time_values() {
    let resolver = Resolver::new(
        Environment::Production,
        bag(&[
            ("API_URL", "https://runtime.example.com/api"),
            ("SENTRY_DSN", "https://dsn.example.com/7"),
        ]),
        build(&[
            ("APTADMIN_API_URL", "https://build.example.com/api"),
            ("APTADMIN_SOCKET_URL", "wss://build.example.com"),
            ("APTADMIN_FRONTEND_URL", "https://app.example.com"),
        ]),
    );
    let config = resolver.snapshot().unwrap();
    assert_eq!(config.api_url, "https://runtime.example.com/api");
    assert_eq!(config.socket_url, "wss://build.example.com");
    assert_eq!(config.sentry_dsn, "https://dsn.example.com/7");
    assert_eq!(config.sentry_environment, "production");
    assert!(config.feature_payments);
    assert!(!config.feature_chat);
    assert_eq!(config.token_refresh_interval_ms, 900_000);
    assert_eq!(config.storage_prefix, "aa_");
    assert_eq!(config.log_level, "error");
}

#[test]
fn generated_asset_substituted_and_loaded_resolves_pipeline_values() {
    let deployment = build(&[
        ("APTADMIN_API_URL", "https://prod.example.com/api"),
        ("APTADMIN_SOCKET_URL", "wss://prod.example.com"),
        ("APTADMIN_FRONTEND_URL", "https://app.example.com"),
    ]);
    let substituted = asset::substitute(&asset::render_asset(), &deployment);

    // Simulate the browser loading the substituted asset: pull out the
    // assigned values, placeholders included for keys the pipeline missed.
    let pairs = substituted.lines().filter_map(|line| {
        let rest = line.strip_prefix("window.__ENV.")?;
        let (name, value) = rest.split_once(" = ")?;
        let value = value.trim_end_matches(';').trim_matches('"');
        Some((name.to_string(), value.to_string()))
    });
    let resolver = Resolver::new(
        Environment::Production,
        RuntimeBag::from_injected(pairs),
        deployment,
    );

    let config = resolver.snapshot().unwrap();
    assert_eq!(config.api_url, "https://prod.example.com/api");
    // SENTRY_DSN had no deployment value: its token survived substitution,
    // was scrubbed at load, and resolution fell through to the default.
    assert_eq!(config.sentry_dsn, "");
}

#[test]
fn validator_flags_missing_production_variables() {
    let report = validate(
        Environment::Production,
        &build(&[("APTADMIN_API_URL", "https://api.example.com")]),
    );
    assert!(!report.passed());
    assert_eq!(
        report.missing_required,
        vec!["APTADMIN_SOCKET_URL", "APTADMIN_FRONTEND_URL"]
    );
}

#[test]
fn validator_passes_test_environment_with_nothing_set() {
    let report = validate(Environment::Test, &build(&[]));
    assert!(report.passed());
}

#[test]
fn validation_report_serializes_for_machine_consumption() {
    let report = validate(Environment::Production, &build(&[]));
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["environment"], "production");
    assert!(json["missing_required"]
        .as_array()
        .unwrap()
        .contains(&serde_json::json!("APTADMIN_FRONTEND_URL")));
}

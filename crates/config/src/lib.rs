//! Runtime configuration for the AptAdmin property-management application.
//!
//! This crate provides the settings table, runtime-injected configuration
//! bag, resolver, and pre-flight validator shared by the application
//! bootstrap and the `aptadmin-env` operator CLI.

pub mod asset;
mod build_env;
pub mod constants;
mod dotenv;
mod environment;
mod error;
mod resolver;
mod runtime;
pub mod settings;
mod validate;

pub use build_env::BuildEnv;
pub use dotenv::load_dotenv;
pub use environment::Environment;
pub use error::ConfigError;
pub use resolver::{ResolvedConfig, Resolver};
pub use runtime::RuntimeBag;
pub use settings::{Setting, SettingDefault, SettingKind, SETTINGS};
pub use validate::{validate, ValidationReport};

//! Command implementations for the `aptadmin-env` binary.

pub mod generate;
pub mod inject;
pub mod validate;

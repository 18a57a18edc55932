//! CLI exit codes for scripting and CI pipelines.
//!
//! Responsibilities:
//! - Define structured exit codes so pipelines can distinguish a failed
//!   validation from an operational error.
//!
//! Invariants:
//! - Exit code 1 is reserved for missing required configuration, matching
//!   the contract CI scripts key off.

/// Structured exit codes for aptadmin-env.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Command completed; required configuration is satisfied.
    Success = 0,

    /// One or more required variables are missing for the target
    /// environment. Pipelines must not proceed to build or deploy.
    ValidationFailed = 1,

    /// Operational failure - unreadable file, bad environment name, etc.
    GeneralError = 2,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

//! The generated runtime script asset and its placeholder tokens.
//!
//! Responsibilities:
//! - Render the browser script that defines the runtime global with one
//!   `%NAME%` placeholder per runtime-injected setting.
//! - Substitute placeholder tokens with deployment values, the step the
//!   deployment pipeline runs against the built asset.
//!
//! Does NOT handle:
//! - Scrubbing tokens the pipeline left behind (see runtime.rs; the loaded
//!   asset performs the same scrub in the browser).
//!
//! Invariants:
//! - A token with no matching deployment variable is left intact, never
//!   replaced with the empty string; the runtime scrub owns that coercion.
//! - Token names are uppercase ASCII, digits, and underscores; anything
//!   else between delimiters is treated as literal text.

use crate::build_env::BuildEnv;
use crate::constants::{ENV_PREFIX, PLACEHOLDER_DELIMITER, RUNTIME_GLOBAL};
use crate::settings;

/// Render the script asset the deployment pipeline substitutes before
/// serving. Each runtime-injected setting gets a `%NAME%` token.
pub fn render_asset() -> String {
    let mut out = String::new();
    out.push_str("// Generated by aptadmin-env. Placeholder tokens are substituted\n");
    out.push_str("// by the deployment pipeline; unsubstituted tokens are scrubbed\n");
    out.push_str("// to the empty string at load time.\n");
    out.push_str(&format!("{RUNTIME_GLOBAL} = {RUNTIME_GLOBAL} || {{}};\n"));
    for setting in settings::runtime_injected() {
        let d = PLACEHOLDER_DELIMITER;
        out.push_str(&format!(
            "{RUNTIME_GLOBAL}.{name} = \"{d}{name}{d}\";\n",
            name = setting.name
        ));
    }
    out
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_'
}

/// Substitute `%NAME%` tokens in `template` with values from the
/// deployment environment (`APTADMIN_NAME`).
///
/// Tokens with no matching variable are left intact. Malformed token
/// spans (unterminated, empty, or containing non-token characters) pass
/// through as literal text.
pub fn substitute(template: &str, env: &BuildEnv) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(PLACEHOLDER_DELIMITER) {
        result.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find(|c: char| !is_token_char(c)) {
            // Well-formed token: non-empty run of token chars closed by
            // another delimiter.
            Some(end) if end > 0 && after[end..].starts_with(PLACEHOLDER_DELIMITER) => {
                let name = &after[..end];
                match env.get(&format!("{ENV_PREFIX}{name}")) {
                    Some(value) => result.push_str(value),
                    None => {
                        result.push(PLACEHOLDER_DELIMITER);
                        result.push_str(name);
                        result.push(PLACEHOLDER_DELIMITER);
                    }
                }
                rest = &after[end + 1..];
            }
            _ => {
                result.push(PLACEHOLDER_DELIMITER);
                rest = after;
            }
        }
    }
    result.push_str(rest);
    result
}

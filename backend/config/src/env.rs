//! Environment variable substitution for config files.
//!
//! Supports `${VAR_NAME}` syntax in the raw YAML text, resolved at load
//! time. Only uppercase `[A-Z_][A-Z0-9_]*` names are matched; `$${}`
//! escapes to a literal `${}`.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static ENV_VAR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap());

static ESCAPED_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\$\{([A-Z_][A-Z0-9_]*)\}").unwrap());

/// Error returned for unset or empty env vars referenced by the config.
#[derive(Debug, thiserror::Error)]
#[error("Missing env var \"{var_name}\" referenced in config")]
pub struct MissingEnvVarError {
    pub var_name: String,
}

/// Substitute `${VAR}` references in raw config text from the process env.
pub fn substitute_env_vars(raw: &str) -> Result<String, MissingEnvVarError> {
    substitute_env_vars_with(raw, &std::env::vars().collect())
}

/// Substitute using a provided map (useful for testing).
pub fn substitute_env_vars_with(
    raw: &str,
    env: &HashMap<String, String>,
) -> Result<String, MissingEnvVarError> {
    if !raw.contains('$') {
        return Ok(raw.to_string());
    }

    let mut error: Option<MissingEnvVarError> = None;
    let substituted = ENV_VAR_PATTERN.replace_all(raw, |caps: &regex::Captures| {
        if error.is_some() {
            return String::new();
        }
        // Escaped refs keep their `$${...}` form for the restore pass.
        if let Some(m) = caps.get(0) {
            let bytes = raw.as_bytes();
            if m.start() > 0 && bytes.get(m.start() - 1) == Some(&b'$') {
                return caps[0].to_string();
            }
        }
        let var_name = &caps[1];
        match env.get(var_name) {
            Some(val) if !val.is_empty() => val.clone(),
            _ => {
                error = Some(MissingEnvVarError {
                    var_name: var_name.to_string(),
                });
                String::new()
            }
        }
    });

    if let Some(err) = error {
        return Err(err);
    }

    // Restore escaped refs: $${ → ${
    let restored = ESCAPED_PATTERN
        .replace_all(&substituted, |caps: &regex::Captures| {
            format!("${{{}}}", &caps[1])
        })
        .to_string();

    Ok(restored)
}

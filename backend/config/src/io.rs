//! Config file loading.
//!
//! Absent file is not an error: the service boots on defaults the same way
//! the original ran straight off environment variables.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::env::{substitute_env_vars_with, MissingEnvVarError};
use crate::schema::{DatabaseSettings, GatewaySettings, LendForgeConfig, OcrSettings};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error(transparent)]
    MissingEnvVar(#[from] MissingEnvVarError),
}

/// Default location: `~/.lendforge/lendforge.yaml`.
pub fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".lendforge")
        .join("lendforge.yaml")
}

/// Load config from `path` (or the default location), substituting
/// `${VAR}` references and applying well-known env overrides.
pub fn load(path: Option<&Path>) -> Result<LendForgeConfig, ConfigError> {
    load_with_env(path, &std::env::vars().collect())
}

/// Same as [`load`] but with an explicit env map, for tests.
pub fn load_with_env(
    path: Option<&Path>,
    env: &HashMap<String, String>,
) -> Result<LendForgeConfig, ConfigError> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);

    let mut config = if path.is_file() {
        let raw = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let substituted = substitute_env_vars_with(&raw, env)?;
        let config: LendForgeConfig =
            serde_yaml::from_str(&substituted).map_err(|source| ConfigError::Parse {
                path: path.clone(),
                source,
            })?;
        info!(path = %path.display(), "Loaded config file");
        config
    } else {
        debug!(path = %path.display(), "No config file, using defaults");
        LendForgeConfig::default()
    };

    apply_env_overrides(&mut config, env);
    Ok(config)
}

/// Well-known overrides, matching the names the original service honored.
fn apply_env_overrides(config: &mut LendForgeConfig, env: &HashMap<String, String>) {
    if let Some(port) = env.get("PORT").and_then(|p| p.parse::<u16>().ok()) {
        config.gateway.get_or_insert_with(GatewaySettings::default).port = Some(port);
    }
    if let Some(url) = env.get("DATABASE_URL").filter(|v| !v.is_empty()) {
        config.database.get_or_insert_with(DatabaseSettings::default).url = Some(url.clone());
    }
    if let Some(key) = env.get("OCR_API_KEY").filter(|v| !v.is_empty()) {
        config.ocr.get_or_insert_with(OcrSettings::default).api_key = Some(key.clone());
    }
    if let Some(engine) = env.get("LENDFORGE_OCR_ENGINE").filter(|v| !v.is_empty()) {
        config.ocr.get_or_insert_with(OcrSettings::default).engine = Some(engine.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn absent_file_yields_defaults() {
        let cfg = load_with_env(Some(Path::new("/nonexistent/lendforge.yaml")), &env(&[]))
            .unwrap();
        assert_eq!(cfg.port(), 5000);
    }

    #[test]
    fn file_values_and_env_substitution() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "gateway:\n  port: 9000\nocr:\n  apiKey: ${{OCR_KEY_VAR}}\n"
        )
        .unwrap();

        let cfg = load_with_env(Some(file.path()), &env(&[("OCR_KEY_VAR", "sekrit")]))
            .unwrap();
        assert_eq!(cfg.port(), 9000);
        assert_eq!(cfg.ocr_api_key(), "sekrit");
    }

    #[test]
    fn well_known_overrides_win_over_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "gateway:\n  port: 9000\n").unwrap();

        let cfg = load_with_env(
            Some(file.path()),
            &env(&[("PORT", "7777"), ("DATABASE_URL", "postgres://db/loans")]),
        )
        .unwrap();
        assert_eq!(cfg.port(), 7777);
        assert_eq!(cfg.database_url(), "postgres://db/loans");
    }

    #[test]
    fn missing_referenced_var_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "ocr:\n  apiKey: ${{UNSET_OCR_KEY}}\n").unwrap();

        let err = load_with_env(Some(file.path()), &env(&[])).unwrap_err();
        assert!(err.to_string().contains("UNSET_OCR_KEY"));
    }
}

//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.passfinder/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use clap::ValueEnum;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::StartMode;
use crate::core::state::{DEFAULT_CURRENCY_SYMBOL, DEFAULT_MAX_AUTO_ATTRACTIONS};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PassfinderConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub start_mode: Option<StartMode>,
    pub max_auto_attractions: Option<usize>,
    pub currency_symbol: Option<String>,
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Custom catalog file. Relative paths resolve against `~/.passfinder/`.
    pub path: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_FILE: &str = "passfinder.log";

// ============================================================================
// Resolved Config (concrete values, no Options except the catalog path)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub start_mode: StartMode,
    pub max_auto_attractions: usize,
    pub currency_symbol: String,
    pub log_level: String,
    pub log_file: String,
    /// None = built-in catalog.
    pub catalog_path: Option<PathBuf>,
}

/// Values given on the command line. `None` = not specified.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub start_mode: Option<StartMode>,
    pub catalog: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.passfinder/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".passfinder"))
}

/// Returns the path to `~/.passfinder/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.passfinder/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `PassfinderConfig::default()`.
pub fn load_config() -> Result<PassfinderConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(PassfinderConfig::default())
        }
    }
}

/// Load config from an explicit path, generating a default file if missing.
/// A malformed file returns `ConfigError::Parse`.
pub fn load_config_from(path: &Path) -> Result<PassfinderConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(PassfinderConfig::default());
    }

    let contents = fs::read_to_string(path)?;
    let config: PassfinderConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Pass Finder Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_mode = "choose"              # "choose", "quiz" or "detailed"
# max_auto_attractions = 5           # attractions picked when the quiz ends
# currency_symbol = "$"
# log_level = "info"                 # "error", "warn", "info", "debug", "trace"
# log_file = "passfinder.log"

# [catalog]
# path = "catalog.toml"              # Relative to ~/.passfinder/, or set PASSFINDER_CATALOG
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &PassfinderConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with(config, cli, |key| std::env::var(key).ok())
}

/// `resolve` with the environment lookup supplied by the caller.
pub fn resolve_with(
    config: &PassfinderConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Start mode: CLI → env → config → default
    let start_mode = cli
        .start_mode
        .or_else(|| env("PASSFINDER_START_MODE").and_then(|s| parse_start_mode(&s)))
        .or(config.general.start_mode)
        .unwrap_or_default();

    // Catalog: CLI → env → config (relative to ~/.passfinder/) → built-in
    let catalog_path = cli
        .catalog
        .clone()
        .or_else(|| env("PASSFINDER_CATALOG").map(PathBuf::from))
        .or_else(|| config.catalog.path.as_deref().map(resolve_catalog_path));

    // Log level: env → config → default
    let log_level = env("PASSFINDER_LOG_LEVEL")
        .or_else(|| config.general.log_level.clone())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    ResolvedConfig {
        start_mode,
        max_auto_attractions: config
            .general
            .max_auto_attractions
            .unwrap_or(DEFAULT_MAX_AUTO_ATTRACTIONS),
        currency_symbol: config
            .general
            .currency_symbol
            .clone()
            .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string()),
        log_level,
        log_file: config
            .general
            .log_file
            .clone()
            .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string()),
        catalog_path,
    }
}

fn parse_start_mode(value: &str) -> Option<StartMode> {
    match <StartMode as ValueEnum>::from_str(value.trim(), false) {
        Ok(mode) => Some(mode),
        Err(_) => {
            warn!("Ignoring unknown PASSFINDER_START_MODE: {}", value);
            None
        }
    }
}

fn resolve_catalog_path(path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        return path;
    }
    match config_dir() {
        Some(dir) => dir.join(path),
        None => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn env_of(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config_parses() {
        let config = PassfinderConfig::default();
        assert!(config.general.start_mode.is_none());
        assert!(config.catalog.path.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved =
            resolve_with(&PassfinderConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.max_auto_attractions, DEFAULT_MAX_AUTO_ATTRACTIONS);
        assert_eq!(resolved.currency_symbol, "$");
        assert_eq!(resolved.log_file, DEFAULT_LOG_FILE);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = PassfinderConfig {
            general: GeneralConfig {
                start_mode: Some(StartMode::Detailed),
                max_auto_attractions: Some(3),
                currency_symbol: Some("€".to_string()),
                log_level: None,
                log_file: Some("/tmp/pf.log".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve_with(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.max_auto_attractions, 3);
        assert_eq!(resolved.currency_symbol, "€");
        assert_eq!(resolved.log_file, "/tmp/pf.log");
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = PassfinderConfig {
            general: GeneralConfig {
                start_mode: Some(StartMode::Detailed),
                ..Default::default()
            },
            catalog: CatalogConfig {
                path: Some("/etc/passfinder/nyc.toml".to_string()),
            },
        };
        let cli = CliOverrides {
            start_mode: Some(StartMode::Quiz),
            catalog: Some(PathBuf::from("/tmp/paris.toml")),
        };
        let resolved = resolve_with(&config, &cli, no_env);
        assert_eq!(resolved.start_mode, StartMode::Quiz);
        assert_eq!(resolved.catalog_path, Some(PathBuf::from("/tmp/paris.toml")));
    }

    #[test]
    fn test_resolve_env_beats_file() {
        let config = PassfinderConfig {
            general: GeneralConfig {
                start_mode: Some(StartMode::Detailed),
                log_level: Some("warn".to_string()),
                ..Default::default()
            },
            catalog: CatalogConfig {
                path: Some("/etc/passfinder/nyc.toml".to_string()),
            },
        };
        let env = env_of(&[
            ("PASSFINDER_START_MODE", "quiz"),
            ("PASSFINDER_CATALOG", "/tmp/env.toml"),
            ("PASSFINDER_LOG_LEVEL", "debug"),
        ]);
        let resolved = resolve_with(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.start_mode, StartMode::Quiz);
        assert_eq!(resolved.catalog_path, Some(PathBuf::from("/tmp/env.toml")));
        assert_eq!(resolved.log_level, "debug");
    }

    #[test]
    fn test_resolve_cli_beats_env() {
        let env = env_of(&[
            ("PASSFINDER_START_MODE", "quiz"),
            ("PASSFINDER_CATALOG", "/tmp/env.toml"),
        ]);
        let cli = CliOverrides {
            start_mode: Some(StartMode::Detailed),
            catalog: Some(PathBuf::from("/tmp/cli.toml")),
        };
        let resolved = resolve_with(&PassfinderConfig::default(), &cli, env);
        assert_eq!(resolved.start_mode, StartMode::Detailed);
        assert_eq!(resolved.catalog_path, Some(PathBuf::from("/tmp/cli.toml")));
    }

    #[test]
    fn test_resolve_unknown_env_start_mode_falls_through() {
        let config = PassfinderConfig {
            general: GeneralConfig {
                start_mode: Some(StartMode::Detailed),
                ..Default::default()
            },
            ..Default::default()
        };
        let env = env_of(&[("PASSFINDER_START_MODE", "results")]);
        let resolved = resolve_with(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.start_mode, StartMode::Detailed);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_absolute_catalog_path_kept() {
        assert_eq!(
            resolve_catalog_path("/srv/catalog.toml"),
            PathBuf::from("/srv/catalog.toml")
        );
    }

    #[test]
    fn test_parse_start_mode() {
        assert_eq!(parse_start_mode(" quiz "), Some(StartMode::Quiz));
        assert_eq!(parse_start_mode("detailed"), Some(StartMode::Detailed));
        assert_eq!(parse_start_mode("results"), None);
    }

    #[test]
    fn test_toml_parses() {
        let toml_str = r#"
[general]
start_mode = "quiz"
max_auto_attractions = 4
currency_symbol = "£"
log_level = "debug"

[catalog]
path = "london.toml"
"#;
        let config: PassfinderConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.start_mode, Some(StartMode::Quiz));
        assert_eq!(config.general.max_auto_attractions, Some(4));
        assert_eq!(config.general.log_level.as_deref(), Some("debug"));
        assert_eq!(config.catalog.path.as_deref(), Some("london.toml"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing; everything else stays default
        let toml_str = r#"
[general]
currency_symbol = "¥"
"#;
        let config: PassfinderConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.currency_symbol.as_deref(), Some("¥"));
        assert!(config.general.start_mode.is_none());
        assert!(config.catalog.path.is_none());
    }

    #[test]
    fn test_missing_file_generates_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = load_config_from(&path).unwrap();
        assert!(config.general.start_mode.is_none());

        let generated = fs::read_to_string(&path).unwrap();
        assert!(generated.starts_with("# Pass Finder Configuration"));
        // Everything is commented out, so it parses back to defaults
        let reparsed = load_config_from(&path).unwrap();
        assert!(reparsed.general.currency_symbol.is_none());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[general\nstart_mode = ").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
    }
}

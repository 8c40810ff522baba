//! Shared configuration for the rolodex CLI and TUI.
//!
//! TOML profiles, environment overrides, and translation to
//! `rolodex_core::DirectoryConfig`. Both binaries depend on this crate;
//! the CLI layers its `GlobalOpts` flags on top.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use rolodex_core::{DEFAULT_BASE_URL, DirectoryConfig, ThemeMode};

/// Prefix for environment overrides, e.g. `ROLODEX_DEFAULTS__TIMEOUT=5`.
pub const ENV_PREFIX: &str = "ROLODEX_";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("unknown profile '{name}'")]
    UnknownProfile { name: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration shared by CLI and TUI.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named directory profiles.
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default = "default_timeout")]
    pub timeout: u64,

    #[serde(default)]
    pub theme: ThemeMode,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            timeout: default_timeout(),
            theme: ThemeMode::default(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_timeout() -> u64 {
    30
}

/// A named directory profile.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Profile {
    /// Base URL of the people API.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Override timeout (seconds).
    pub timeout: Option<u64>,

    /// Override initial theme.
    pub theme: Option<ThemeMode>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout: None,
            theme: None,
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_BASE_URL.into()
}

impl Config {
    /// Name of the profile to use: explicit request, else `default_profile`,
    /// else `"default"`.
    pub fn profile_name<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        requested
            .or(self.default_profile.as_deref())
            .unwrap_or("default")
    }

    /// Look up a profile. An explicitly requested profile must exist; the
    /// default one falls back to built-in settings when absent.
    pub fn resolve_profile(&self, requested: Option<&str>) -> Result<Profile, ConfigError> {
        let name = self.profile_name(requested);
        match self.profiles.get(name) {
            Some(profile) => Ok(profile.clone()),
            None if requested.is_some() => Err(ConfigError::UnknownProfile { name: name.into() }),
            None => Ok(Profile::default()),
        }
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("rs", "rolodex", "rolodex").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("rolodex");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from an explicit file path + environment. A missing file is not
/// an error; defaults and env still apply.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if loading fails.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(cfg, &path)?;
    Ok(path)
}

/// Serialize config to TOML and write it to `path`, creating parents.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Translation to core config ──────────────────────────────────────

/// Build a `DirectoryConfig` from a profile and global defaults. CLI flag
/// overrides are applied by the caller beforehand.
pub fn profile_to_directory_config(
    profile: &Profile,
    defaults: &Defaults,
) -> Result<DirectoryConfig, ConfigError> {
    let url: url::Url = profile
        .api_url
        .parse()
        .map_err(|_| ConfigError::Validation {
            field: "api_url".into(),
            reason: format!("invalid URL: {}", profile.api_url),
        })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::Validation {
            field: "api_url".into(),
            reason: format!("expected an http(s) URL, got '{}'", profile.api_url),
        });
    }

    let timeout = Duration::from_secs(profile.timeout.unwrap_or(defaults.timeout));
    let theme = profile.theme.unwrap_or(defaults.theme);

    Ok(DirectoryConfig::new(url)
        .with_timeout(timeout)
        .with_theme(theme))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg.defaults.output, "table");
        assert_eq!(cfg.defaults.timeout, 30);
        assert_eq!(cfg.profile_name(None), "default");
    }

    #[test]
    fn loads_profiles_from_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
default_profile = "local"

[defaults]
theme = "dark"
timeout = 12

[profiles.local]
api_url = "http://localhost:3000"
timeout = 5
"#,
        )
        .unwrap();

        let cfg = load_config_from(&path).unwrap();
        assert_eq!(cfg.profile_name(None), "local");
        assert_eq!(cfg.defaults.theme, ThemeMode::Dark);

        let profile = cfg.resolve_profile(None).unwrap();
        assert_eq!(profile.api_url, "http://localhost:3000");

        let dc = profile_to_directory_config(&profile, &cfg.defaults).unwrap();
        assert_eq!(dc.timeout, Duration::from_secs(5));
        assert_eq!(dc.theme, ThemeMode::Dark);
        assert_eq!(dc.base_url.as_str(), "http://localhost:3000/");
    }

    #[test]
    fn explicit_unknown_profile_is_an_error() {
        let cfg = Config::default();
        let err = cfg.resolve_profile(Some("nope")).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownProfile { name } if name == "nope"));
    }

    #[test]
    fn absent_default_profile_uses_public_directory() {
        let cfg = Config::default();
        let profile = cfg.resolve_profile(None).unwrap();
        assert_eq!(profile.api_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn rejects_invalid_urls() {
        let defaults = Defaults::default();
        let bad = Profile {
            api_url: "not a url".into(),
            ..Profile::default()
        };
        assert!(profile_to_directory_config(&bad, &defaults).is_err());

        let ftp = Profile {
            api_url: "ftp://example.com".into(),
            ..Profile::default()
        };
        assert!(profile_to_directory_config(&ftp, &defaults).is_err());
    }

    #[test]
    fn save_then_load_preserves_profiles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config::default();
        cfg.profiles.insert(
            "default".into(),
            Profile {
                api_url: "https://people.example.com/api".into(),
                timeout: Some(10),
                theme: Some(ThemeMode::Light),
            },
        );
        save_config_to(&cfg, &path).unwrap();

        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded.profiles, cfg.profiles);
    }
}

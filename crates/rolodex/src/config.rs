//! CLI configuration: a thin wrapper around `rolodex_config` shared types.
//!
//! Re-exports the shared types and adds CLI-specific resolution that
//! respects `GlobalOpts` flag overrides (--api-url, --timeout, etc.).

use clap::ValueEnum;

use rolodex_config::ConfigError;
use rolodex_core::DirectoryConfig;

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use rolodex_config::{Config, Profile, config_path, load_config_or_default, save_config};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    config.profile_name(global.profile.as_deref()).to_owned()
}

/// Fill unset output/color flags from the config file's `[defaults]`.
///
/// Unparseable values in the file are ignored rather than fatal.
pub fn apply_defaults(global: &mut GlobalOpts, config: &Config) {
    if global.output.is_none() {
        global.output = OutputFormat::from_str(&config.defaults.output, true).ok();
    }
    if global.color.is_none() {
        global.color = ColorMode::from_str(&config.defaults.color, true).ok();
    }
}

/// Build a `DirectoryConfig`: flag > env > profile > defaults.
pub fn resolve_directory_config(
    global: &GlobalOpts,
    config: &Config,
) -> Result<DirectoryConfig, CliError> {
    let mut profile = config
        .resolve_profile(global.profile.as_deref())
        .map_err(|e| match e {
            ConfigError::UnknownProfile { name } => CliError::ProfileNotFound {
                name,
                available: available_profiles(config),
            },
            other => CliError::Config(other),
        })?;

    if let Some(ref url) = global.api_url {
        profile.api_url.clone_from(url);
    }
    if let Some(timeout) = global.timeout {
        profile.timeout = Some(timeout);
    }

    rolodex_config::profile_to_directory_config(&profile, &config.defaults).map_err(|e| match e {
        ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
        other => CliError::Config(other),
    })
}

fn available_profiles(config: &Config) -> String {
    if config.profiles.is_empty() {
        "(none)".into()
    } else {
        config
            .profiles
            .keys()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use clap::Parser;

    use super::*;
    use crate::cli::Cli;

    fn global(args: &[&str]) -> GlobalOpts {
        let mut argv = vec!["rolodex"];
        argv.extend_from_slice(args);
        argv.push("list");
        Cli::try_parse_from(argv).unwrap().global
    }

    fn config_with_profile() -> Config {
        let mut cfg = Config::default();
        cfg.profiles.insert(
            "default".into(),
            Profile {
                api_url: "http://profile.example.com".into(),
                timeout: Some(12),
                theme: None,
            },
        );
        cfg
    }

    #[test]
    fn flag_overrides_profile_url() {
        let cfg = config_with_profile();
        let dc = resolve_directory_config(&global(&["--api-url", "http://flag.example.com"]), &cfg)
            .unwrap();
        assert_eq!(dc.base_url.as_str(), "http://flag.example.com/");
        assert_eq!(dc.timeout, Duration::from_secs(12));
    }

    #[test]
    fn timeout_flag_beats_profile() {
        let cfg = config_with_profile();
        let dc = resolve_directory_config(&global(&["--timeout", "3"]), &cfg).unwrap();
        assert_eq!(dc.timeout, Duration::from_secs(3));
    }

    #[test]
    fn unknown_profile_lists_available() {
        let cfg = config_with_profile();
        let err = resolve_directory_config(&global(&["--profile", "work"]), &cfg).unwrap_err();
        match err {
            CliError::ProfileNotFound { name, available } => {
                assert_eq!(name, "work");
                assert_eq!(available, "default");
            }
            other => panic!("expected ProfileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn invalid_url_is_a_usage_error() {
        let cfg = Config::default();
        let err = resolve_directory_config(&global(&["--api-url", "nope"]), &cfg).unwrap_err();
        assert!(matches!(err, CliError::Validation { .. }));
    }

    #[test]
    fn defaults_fill_unset_flags() {
        let mut cfg = Config::default();
        cfg.defaults.output = "yaml".into();
        let mut opts = global(&["--color", "never"]);
        apply_defaults(&mut opts, &cfg);
        assert_eq!(opts.output, Some(OutputFormat::Yaml));
        assert_eq!(opts.color, Some(ColorMode::Never));
    }
}

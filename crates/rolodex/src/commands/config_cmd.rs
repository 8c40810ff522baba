//! Config subcommand handlers.

use dialoguer::{Input, Select};

use rolodex_core::{DEFAULT_BASE_URL, ThemeMode};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config, Profile};
use crate::error::CliError;
use crate::output;

// ── Helpers ─────────────────────────────────────────────────────────

/// Format config as TOML-like text for the table view.
fn format_config(cfg: &Config) -> String {
    use std::fmt::Write;
    let mut out = String::new();

    if let Some(ref default) = cfg.default_profile {
        let _ = writeln!(out, "default_profile = \"{default}\"");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "[defaults]");
    let _ = writeln!(out, "output = \"{}\"", cfg.defaults.output);
    let _ = writeln!(out, "color = \"{}\"", cfg.defaults.color);
    let _ = writeln!(out, "timeout = {}", cfg.defaults.timeout);
    let _ = writeln!(out, "theme = \"{}\"", cfg.defaults.theme);

    for (name, p) in &cfg.profiles {
        let _ = writeln!(out);
        let _ = writeln!(out, "[profiles.{name}]");
        let _ = writeln!(out, "api_url = \"{}\"", p.api_url);
        if let Some(timeout) = p.timeout {
            let _ = writeln!(out, "timeout = {timeout}");
        }
        if let Some(theme) = p.theme {
            let _ = writeln!(out, "theme = \"{theme}\"");
        }
    }

    out.trim_end().to_owned()
}

/// Map a dialoguer / interactive I/O failure into CliError.
fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

/// Add or replace `name` and make it the default profile.
fn merge_profile(cfg: &mut Config, name: &str, profile: Profile) {
    cfg.profiles.insert(name.to_owned(), profile);
    cfg.default_profile = Some(name.to_owned());
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        // ── Init: interactive wizard ────────────────────────────────
        ConfigCommand::Init => {
            let config_path = config::config_path();
            eprintln!("rolodex configuration wizard");
            eprintln!("   Config path: {}\n", config_path.display());

            let mut cfg = config::load_config_or_default();
            let suggested = config::active_profile_name(global, &cfg);

            // 1. Profile name
            let profile_name: String = Input::new()
                .with_prompt("Profile name")
                .default(suggested)
                .interact_text()
                .map_err(prompt_err)?;

            // 2. API URL
            let api_url: String = Input::new()
                .with_prompt("Directory API URL")
                .default(DEFAULT_BASE_URL.into())
                .interact_text()
                .map_err(prompt_err)?;

            // 3. Theme
            let themes = [ThemeMode::Light, ThemeMode::Dark];
            let theme_idx = Select::new()
                .with_prompt("Initial TUI theme")
                .items(&["Light", "Dark"])
                .default(0)
                .interact()
                .map_err(prompt_err)?;

            // 4. Timeout
            let timeout: u64 = Input::new()
                .with_prompt("Request timeout (seconds)")
                .default(cfg.defaults.timeout)
                .interact_text()
                .map_err(prompt_err)?;

            let profile = Profile {
                api_url,
                timeout: Some(timeout),
                theme: themes.get(theme_idx).copied(),
            };

            // Reject bad URLs before anything touches disk.
            rolodex_config::profile_to_directory_config(&profile, &cfg.defaults).map_err(
                |e| match e {
                    rolodex_config::ConfigError::Validation { field, reason } => {
                        CliError::Validation { field, reason }
                    }
                    other => CliError::Config(other),
                },
            )?;

            merge_profile(&mut cfg, &profile_name, profile);
            let written = config::save_config(&cfg)?;

            eprintln!("\n✓ Configuration written to {}", written.display());
            eprintln!("  Active profile: {profile_name}");
            eprintln!("\n  Test it: rolodex list");
            Ok(())
        }

        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let cfg = config::load_config_or_default();
            let out = output::render_single(&global.output_format(), &cfg, format_config, |c| {
                config::active_profile_name(global, c)
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        // ── Path ────────────────────────────────────────────────────
        ConfigCommand::Path => {
            println!("{}", config::config_path().display());
            Ok(())
        }
    }
}

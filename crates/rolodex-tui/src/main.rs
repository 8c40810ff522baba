//! `rolodex-tui`: interactive terminal browser for the people directory.
//!
//! Built on [ratatui](https://ratatui.rs) with reactive data from
//! `rolodex-core`'s stores. The directory screen shows a searchable,
//! sortable card grid six people per page; Enter opens a person's detail
//! screen.
//!
//! Logs are written to a file (default `/tmp/rolodex-tui.log`) to avoid
//! corrupting the terminal UI.

mod action;
mod app;
mod component;
mod data_bridge;
mod event;
mod screen;
mod screens;
mod theme;
mod tui;
mod widgets;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use rolodex_core::{Directory, DirectoryConfig, ThemeMode};

use crate::app::App;

/// Browse the people directory in your terminal.
#[derive(Parser, Debug)]
#[command(name = "rolodex-tui", version, about)]
struct Cli {
    /// People API base URL (overrides the profile)
    #[arg(short = 'u', long, env = "ROLODEX_API_URL")]
    api_url: Option<String>,

    /// Config profile to use
    #[arg(short = 'p', long, env = "ROLODEX_PROFILE")]
    profile: Option<String>,

    /// Start in dark mode
    #[arg(long, conflicts_with = "light")]
    dark: bool,

    /// Start in light mode
    #[arg(long)]
    light: bool,

    /// Log file path (defaults to /tmp/rolodex-tui.log)
    #[arg(long, default_value = "/tmp/rolodex-tui.log")]
    log_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn theme_override(&self) -> Option<ThemeMode> {
        match (self.dark, self.light) {
            (true, _) => Some(ThemeMode::Dark),
            (_, true) => Some(ThemeMode::Light),
            _ => None,
        }
    }
}

/// File-based tracing; stdout/stderr belong to the terminal UI. Hold the
/// returned guard for the lifetime of the app so logs flush.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "rolodex_tui={log_level},rolodex_core={log_level},rolodex_api={log_level}"
        ))
    });

    let log_dir = cli
        .log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(std::path::Path::new("/tmp"));
    let log_filename = cli
        .log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("rolodex-tui.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true),
        )
        .init();

    guard
}

/// Resolve the directory settings: flags > env > config profile > defaults.
fn build_config(cli: &Cli) -> Result<DirectoryConfig> {
    let cfg = rolodex_config::load_config_or_default();
    let mut profile = cfg.resolve_profile(cli.profile.as_deref())?;

    if let Some(ref url) = cli.api_url {
        profile.api_url.clone_from(url);
    }
    if let Some(theme) = cli.theme_override() {
        profile.theme = Some(theme);
    }

    Ok(rolodex_config::profile_to_directory_config(
        &profile,
        &cfg.defaults,
    )?)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Hooks go in before the terminal enters raw mode
    tui::install_hooks()?;

    let _log_guard = setup_tracing(&cli);

    let config = build_config(&cli)?;
    info!(url = %config.base_url, theme = %config.theme, "starting rolodex-tui");

    let directory = Directory::new(config)?;
    let mut app = App::new(directory);
    app.run().await?;

    Ok(())
}

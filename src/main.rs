mod app;
mod cli;
mod event;
mod tui;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use keyhue::config::{self, Settings};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli_opts = cli::Cli::parse();
    let config_path = cli_opts
        .config
        .unwrap_or_else(config::default_config_path);

    if let Some(command) = cli_opts.command {
        // The preview owns the terminal, so only plain commands log to stderr.
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_writer(std::io::stderr)
            .init();
        let settings = load_settings(&config_path)?;
        return cli::run(command, &settings, &mut std::io::stdout().lock());
    }

    let settings = load_settings(&config_path)?;
    let mut app = app::App::new(settings, Vec::new())?;
    let mut terminal = tui::init()?;
    let result = event::run(&mut app, &mut terminal);

    tui::restore()?;

    result
}

fn load_settings(path: &std::path::Path) -> Result<Settings> {
    Settings::load(path).with_context(|| format!("loading config from {}", path.display()))
}

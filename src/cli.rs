/// CLI argument parsing and command handling.
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use keyhue::config::Settings;

#[derive(Parser)]
#[command(
    name = "keyhue",
    version,
    about = "keyhue - Deterministic per-key colors for avatars and labels"
)]
pub struct Cli {
    /// Config file (defaults to <config dir>/keyhue/config.toml)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the color assigned to each key
    Pick {
        #[arg(required = true)]
        keys: Vec<String>,
        #[arg(short = 'p', long = "palette")]
        palette: Option<String>,
    },
    /// Print random colors from a palette
    Random {
        #[arg(short = 'p', long = "palette")]
        palette: Option<String>,
        #[arg(short = 'n', long = "count", default_value_t = 1)]
        count: usize,
    },
    /// List the colors of a palette
    Palette { name: Option<String> },
    /// List available palettes
    List,
}

/// Execute a CLI command, writing results to `out`.
pub fn run(command: Command, settings: &Settings, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Pick { keys, palette } => handle_pick(&keys, palette.as_deref(), settings, out)?,
        Command::Random { palette, count } => {
            handle_random(palette.as_deref(), count, settings, out)?
        }
        Command::Palette { name } => handle_palette(name.as_deref(), settings, out)?,
        Command::List => handle_list(settings, out)?,
    }
    Ok(())
}

fn handle_pick(
    keys: &[String],
    palette: Option<&str>,
    settings: &Settings,
    out: &mut impl Write,
) -> Result<()> {
    let generator = settings.generator(palette)?;
    for key in keys {
        writeln!(out, "{key}\t{}", generator.get_color(key.as_str()))?;
    }
    Ok(())
}

fn handle_random(
    palette: Option<&str>,
    count: usize,
    settings: &Settings,
    out: &mut impl Write,
) -> Result<()> {
    let generator = settings.generator(palette)?;
    for _ in 0..count {
        writeln!(out, "{}", generator.random_color())?;
    }
    Ok(())
}

fn handle_palette(name: Option<&str>, settings: &Settings, out: &mut impl Write) -> Result<()> {
    let generator = settings.generator(name)?;
    for (index, color) in generator.colors().iter().enumerate() {
        writeln!(out, "{index:>2}  {color}")?;
    }
    Ok(())
}

fn handle_list(settings: &Settings, out: &mut impl Write) -> Result<()> {
    for name in settings.palette_names() {
        let generator = settings
            .generator(Some(name.as_str()))
            .with_context(|| format!("loading palette '{name}'"))?;
        let marker = if name == settings.palette { "*" } else { " " };
        writeln!(out, "{marker} {name} ({} colors)", generator.len())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyhue::ColorGenerator;

    fn run_to_string(args: &[&str], settings: &Settings) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("keyhue").chain(args.iter().copied()))?;
        let mut out = Vec::new();
        run(cli.command.context("missing subcommand")?, settings, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn pick_prints_one_line_per_key() {
        let output = run_to_string(&["pick", "alice", "bob", "-p", "material"], &Settings::default())
            .unwrap();
        let material = ColorGenerator::material();
        assert_eq!(
            output,
            format!(
                "alice\t{}\nbob\t{}\n",
                material.get_color("alice"),
                material.get_color("bob")
            )
        );
    }

    #[test]
    fn random_respects_count_and_palette() {
        let output = run_to_string(&["random", "-n", "5"], &Settings::default()).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 5);
        let palette: Vec<_> = ColorGenerator::default_palette()
            .colors()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert!(lines.iter().all(|line| palette.iter().any(|c| c == line)));
    }

    #[test]
    fn palette_lists_indexed_colors() {
        let output = run_to_string(&["palette"], &Settings::default()).unwrap();
        assert_eq!(output.lines().count(), 9);
        assert!(output.starts_with(" 0  #F16364\n"));
    }

    #[test]
    fn list_marks_configured_palette() {
        let settings = Settings {
            palette: "material".to_string(),
            ..Settings::default()
        };
        let output = run_to_string(&["list"], &settings).unwrap();
        assert_eq!(output, "  default (9 colors)\n* material (17 colors)\n");
    }

    #[test]
    fn unknown_palette_is_reported() {
        let err = run_to_string(&["pick", "x", "-p", "neon"], &Settings::default()).unwrap_err();
        assert_eq!(err.to_string(), "unknown palette 'neon'");
    }

    #[test]
    fn pick_requires_a_key() {
        assert!(Cli::try_parse_from(["keyhue", "pick"]).is_err());
    }
}

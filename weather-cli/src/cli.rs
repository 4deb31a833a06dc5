use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use weather_core::{Config, ThemeMode};

use crate::{logging, show, tui};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather for any city")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// City to look up right away when the interactive view opens.
    pub city: Option<String>,

    /// Start in light mode instead of the configured theme.
    #[arg(long, global = true)]
    pub light: bool,

    /// Write logs to this file (the interactive view logs nowhere otherwise).
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print current weather for a city and exit.
    Show {
        /// City name; prompts for one when omitted.
        city: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let interactive = self.command.is_none();
        let target = match (&self.log_file, interactive) {
            (Some(path), _) => logging::LogTarget::File(path.clone()),
            (None, true) => logging::LogTarget::Off,
            (None, false) => logging::LogTarget::Stderr,
        };
        logging::init(target, self.verbose).context("Failed to initialize logging")?;

        let mut config = Config::load()?;
        if self.light {
            config.theme = ThemeMode::Light;
        }
        tracing::debug!(?config, "configuration loaded");

        match self.command {
            Some(Command::Show { city }) => show::run(&config, city).await,
            None => tui::run(&config, self.city).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_invocation_is_interactive() {
        let cli = Cli::try_parse_from(["weather"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.city.is_none());
        assert!(!cli.light);
    }

    #[test]
    fn positional_city_prefills_interactive_view() {
        let cli = Cli::try_parse_from(["weather", "--light", "Tokyo"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.city.as_deref(), Some("Tokyo"));
        assert!(cli.light);
    }

    #[test]
    fn show_takes_optional_city_and_global_flags() {
        let cli = Cli::try_parse_from(["weather", "show", "Paris", "-vv"]).unwrap();
        match cli.command {
            Some(Command::Show { city }) => assert_eq!(city.as_deref(), Some("Paris")),
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.verbose, 2);

        let cli = Cli::try_parse_from(["weather", "show"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Show { city: None })));
    }
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "welearn", about = "Learning-group feed client (TUI)")]
pub struct Cli {
    /// Path to config file (default: ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Start the group feed TUI
    Run,
}

impl Cli {
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Run)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Command};

    #[test]
    fn defaults_to_run_when_command_is_missing() {
        let cli = Cli::parse_from(["welearn"]);

        assert!(matches!(cli.command_or_default(), Command::Run));
        assert!(cli.config.is_none());
    }

    #[test]
    fn parses_global_config_after_subcommand() {
        let cli = Cli::parse_from(["welearn", "run", "--config", "groups.toml"]);

        assert!(matches!(cli.command_or_default(), Command::Run));
        assert_eq!(
            cli.config
                .as_deref()
                .map(|p| p.to_string_lossy().to_string()),
            Some("groups.toml".to_owned())
        );
    }

    #[test]
    fn rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["welearn", "logout"]).is_err());
    }
}

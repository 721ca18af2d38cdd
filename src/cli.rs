use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "chatpane", about = "Terminal chat widget for a REST message backend")]
pub struct Cli {
    /// Path to config file (default: ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend base URL, overrides `[backend] base_url`
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Start the chat TUI
    Run,
    /// Print the current messages and exit
    Fetch,
    /// Post one message and print the backend's reply
    Send {
        /// Message text
        text: String,
    },
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
        let cli = Cli::parse_from(["chatpane"]);

        assert_eq!(cli.command_or_default(), Command::Run);
    }

    #[test]
    fn parses_explicit_run_command_with_global_flags() {
        let cli = Cli::parse_from([
            "chatpane",
            "run",
            "--config",
            "custom.toml",
            "--base-url",
            "http://chat.local:9000",
        ]);

        assert_eq!(cli.command_or_default(), Command::Run);
        assert_eq!(
            cli.config
                .as_deref()
                .map(|p| p.to_string_lossy().to_string()),
            Some("custom.toml".to_owned())
        );
        assert_eq!(cli.base_url.as_deref(), Some("http://chat.local:9000"));
    }

    #[test]
    fn parses_send_with_text() {
        let cli = Cli::parse_from(["chatpane", "send", "hello there"]);

        assert_eq!(
            cli.command_or_default(),
            Command::Send {
                text: "hello there".to_owned()
            }
        );
    }

    #[test]
    fn send_requires_text() {
        assert!(Cli::try_parse_from(["chatpane", "send"]).is_err());
    }

    #[test]
    fn parses_fetch() {
        let cli = Cli::parse_from(["chatpane", "fetch"]);

        assert_eq!(cli.command_or_default(), Command::Fetch);
    }
}

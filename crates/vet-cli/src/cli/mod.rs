use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `vet` binary.
#[derive(Debug, Parser)]
#[command(name = "vet", version, about = "vet - review console for generated ideas and videos")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (errors only in logs)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Color status cells in table output
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Use the in-memory mock backend instead of HTTP
    #[arg(long, global = true)]
    pub mock: bool,

    /// Display language: fr, en
    #[arg(long, global = true)]
    pub locale: Option<String>,

    /// Backend root URL (overrides config)
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            color: self.color,
            mock: self.mock,
            locale: self.locale.clone(),
            base_url: self.base_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::subcommands::{IdeaCommands, VideoCommands};
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "vet", "--format", "json", "--mock", "--locale", "en", "ideas", "list",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.mock);
        assert_eq!(cli.locale.as_deref(), Some("en"));
        assert!(matches!(
            cli.command,
            Commands::Ideas {
                action: IdeaCommands::List
            }
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["vet", "videos", "approve", "3", "--format", "raw", "-q"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::Videos {
                action: VideoCommands::Approve { ref id }
            } if id == "3"
        ));
    }

    #[test]
    fn schedule_requires_at() {
        assert!(Cli::try_parse_from(["vet", "videos", "schedule", "2"]).is_err());
        let cli = Cli::try_parse_from(["vet", "videos", "schedule", "2", "--at", "2030-01-01T10:00"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Videos {
                action: VideoCommands::Schedule { .. }
            }
        ));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["vet", "--format", "xml", "ideas", "list"]).is_err());
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["vet", "--base-url", "http://api:8080", "ideas", "generate"])
            .expect("cli should parse");
        let flags = cli.global_flags();
        assert_eq!(flags.base_url.as_deref(), Some("http://api:8080"));
        assert!(!flags.mock);
    }
}

use clap::Subcommand;

use crate::cli::subcommands::{IdeaCommands, VideoCommands};

/// Top-level command tree: one subcommand per review panel.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Idea review panel.
    Ideas {
        #[command(subcommand)]
        action: IdeaCommands,
    },
    /// Video review panel.
    Videos {
        #[command(subcommand)]
        action: VideoCommands,
    },
}

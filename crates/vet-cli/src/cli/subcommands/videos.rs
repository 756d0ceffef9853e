use clap::Subcommand;

/// Video panel commands.
#[derive(Clone, Debug, Subcommand)]
pub enum VideoCommands {
    /// List videos.
    List,
    /// Approve a pending video.
    Approve { id: String },
    /// Reject a pending video.
    Reject { id: String },
    /// Schedule publication of an approved video.
    Schedule {
        id: String,
        /// Publication time: RFC 3339, or `YYYY-MM-DDTHH:MM` in the display offset.
        #[arg(long)]
        at: String,
    },
}

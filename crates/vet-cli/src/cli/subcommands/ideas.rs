use clap::Subcommand;

/// Idea panel commands.
#[derive(Clone, Debug, Subcommand)]
pub enum IdeaCommands {
    /// List ideas.
    List,
    /// Add an idea by hand.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
    },
    /// Ask the backend to generate new ideas.
    Generate,
    /// Approve a pending idea.
    Approve { id: String },
    /// Reject a pending idea.
    Reject { id: String },
}

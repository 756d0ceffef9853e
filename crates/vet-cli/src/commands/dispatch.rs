use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;
use crate::output::output_report;

/// Dispatch a parsed command to its panel handler, print the resulting
/// panel, and fail when the panel ends in an error.
pub async fn dispatch(
    command: &Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let report = match command {
        Commands::Ideas { action } => commands::ideas::handle(action, ctx).await?,
        Commands::Videos { action } => commands::videos::handle(action, ctx).await?,
    };

    output_report(&report, flags.format)?;

    if let Some(error) = &report.panel.error {
        anyhow::bail!("{error}");
    }
    Ok(())
}

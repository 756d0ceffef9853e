use vet_core::entities::Video;
use vet_core::ids::RecordId;

use crate::cli::subcommands::VideoCommands;
use crate::commands::PanelReport;
use crate::commands::shared::parse::parse_schedule_time;
use crate::context::AppContext;

/// Handle `vet videos`: mount-time load, the requested action, then the panel.
pub async fn handle(action: &VideoCommands, ctx: &AppContext) -> anyhow::Result<PanelReport> {
    // Reject a malformed --at before touching the backend.
    let schedule_at = match action {
        VideoCommands::Schedule { at, .. } => Some(parse_schedule_time(
            at,
            ctx.config.display.utc_offset_minutes,
        )?),
        _ => None,
    };

    let controller = ctx.controller::<Video>();

    let notice = if controller.load().await.is_ok() {
        let outcome = match action {
            VideoCommands::List => None,
            VideoCommands::Approve { id } => {
                Some(controller.approve(&RecordId::from(id.as_str())).await)
            }
            VideoCommands::Reject { id } => {
                Some(controller.reject(&RecordId::from(id.as_str())).await)
            }
            VideoCommands::Schedule { id, .. } => match schedule_at {
                Some(when) => Some(controller.schedule(&RecordId::from(id.as_str()), when).await),
                None => None,
            },
        };
        outcome
            .and_then(Result::ok)
            .map(|video| format!("video {} {}", video.id, video.status))
    } else {
        None
    };

    Ok(PanelReport {
        notice,
        panel: controller.view(&ctx.projection_options()).await,
    })
}

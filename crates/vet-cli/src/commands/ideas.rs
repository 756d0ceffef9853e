use vet_core::entities::Idea;
use vet_core::ids::RecordId;

use crate::cli::subcommands::IdeaCommands;
use crate::commands::PanelReport;
use crate::context::AppContext;

/// Handle `vet ideas`: mount-time load, the requested action, then the panel.
pub async fn handle(action: &IdeaCommands, ctx: &AppContext) -> anyhow::Result<PanelReport> {
    let controller = ctx.controller::<Idea>();

    let notice = if controller.load().await.is_ok() {
        match action {
            IdeaCommands::List => None,
            IdeaCommands::Create { title, description } => controller
                .create(title, description)
                .await
                .ok()
                .map(|idea| format!("idea {} created", idea.id)),
            IdeaCommands::Generate => controller
                .generate()
                .await
                .ok()
                .map(|ideas| format!("ideas refreshed after generation ({} total)", ideas.len())),
            IdeaCommands::Approve { id } => controller
                .approve(&RecordId::from(id.as_str()))
                .await
                .ok()
                .map(|idea| format!("idea {} {}", idea.id, idea.status)),
            IdeaCommands::Reject { id } => controller
                .reject(&RecordId::from(id.as_str()))
                .await
                .ok()
                .map(|idea| format!("idea {} {}", idea.id, idea.status)),
        }
    } else {
        None
    };

    Ok(PanelReport {
        notice,
        panel: controller.view(&ctx.projection_options()).await,
    })
}

#[cfg(test)]
mod tests {
    use vet_config::{BackendMode, VetConfig};

    use super::*;

    fn mock_ctx() -> AppContext {
        let mut config = VetConfig::default();
        config.backend.mode = BackendMode::Mock;
        config.backend.mock_latency_ms = 0;
        AppContext::init(config).unwrap()
    }

    #[tokio::test]
    async fn approve_reports_new_status() {
        let ctx = mock_ctx();
        let report = handle(&IdeaCommands::Approve { id: "1".into() }, &ctx)
            .await
            .unwrap();
        assert_eq!(report.notice.as_deref(), Some("idea 1 approved"));
        assert_eq!(report.panel.error, None);
        assert_eq!(report.panel.items[0].status, "approved");
    }

    #[tokio::test]
    async fn blank_create_ends_with_error() {
        let ctx = mock_ctx();
        let action = IdeaCommands::Create {
            title: "  ".into(),
            description: "x".into(),
        };
        let report = handle(&action, &ctx).await.unwrap();
        assert_eq!(report.notice, None);
        assert!(report.panel.error_detail.unwrap().starts_with("Validation error"));
        assert_eq!(report.panel.count, 3);
    }

    #[tokio::test]
    async fn generate_adds_three() {
        let ctx = mock_ctx();
        let report = handle(&IdeaCommands::Generate, &ctx).await.unwrap();
        assert_eq!(report.panel.count, 6);
    }
}

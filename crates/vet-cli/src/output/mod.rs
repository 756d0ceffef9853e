use serde::Serialize;
use vet_core::enums::Locale;
use vet_core::projection::ViewModel;

use crate::cli::OutputFormat;
use crate::commands::PanelReport;
use crate::ui;

pub mod table;

use table::{Row, TableOptions, Tone};

/// Render a serializable value as pretty or single-line JSON.
pub fn render_json<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Json | OutputFormat::Table => Ok(serde_json::to_string_pretty(value)?),
    }
}

/// Render a panel report in the requested format.
pub fn render_report(report: &PanelReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => Ok(render_panel_text(report, ui::table_options())),
        OutputFormat::Json | OutputFormat::Raw => render_json(report, format),
    }
}

/// Print a panel report in the requested format.
pub fn output_report(report: &PanelReport, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render_report(report, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_panel_text(report: &PanelReport, options: TableOptions) -> String {
    let panel = &report.panel;
    let mut out = vec![panel.heading.clone(), panel.subheading.clone(), String::new()];
    out.push(panel.list_heading.clone());

    if let Some(message) = panel.loading_message.as_ref().or(panel.empty_message.as_ref()) {
        out.push(message.clone());
    } else {
        let headers = ["id", "status", "title", "created", "scheduled", "actions"];
        let rows: Vec<Row> = panel
            .items
            .iter()
            .map(|item| item_row(item, panel.locale))
            .collect();
        out.push(table::render_entity_table(&headers, &rows, options));
    }

    if let Some(notice) = &report.notice {
        out.push(String::new());
        out.push(format!("> {notice}"));
    }
    if let Some(error) = &panel.error {
        out.push(String::new());
        out.push(format!("! {error}"));
        if let Some(detail) = &panel.error_detail {
            out.push(format!("  {detail}"));
        }
    }
    out.join("\n")
}

fn item_row(item: &ViewModel, locale: Locale) -> Row {
    let actions = item
        .available_actions
        .iter()
        .map(|action| action.label(locale))
        .collect::<Vec<_>>()
        .join(", ");
    Row {
        cells: vec![
            item.id.to_string(),
            item.badge_label.clone(),
            item.title.clone(),
            item.formatted_created_at.clone(),
            item.formatted_scheduled_for
                .clone()
                .unwrap_or_else(|| "-".to_string()),
            if actions.is_empty() { "-".to_string() } else { actions },
        ],
        tone: tone_for(&item.status),
    }
}

fn tone_for(status: &str) -> Tone {
    match status {
        "pending" => Tone::Yellow,
        "approved" => Tone::Green,
        "rejected" => Tone::Red,
        "scheduled" => Tone::Blue,
        "published" => Tone::Magenta,
        _ => Tone::Plain,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use vet_core::entities::Idea;
    use vet_core::enums::IdeaStatus;
    use vet_core::errors::ReviewError;
    use vet_core::ids::RecordId;
    use vet_core::projection::ProjectionOptions;
    use vet_workflow::{WorkflowStore, panel_view};

    use super::*;

    fn report(locale: Locale) -> PanelReport {
        let mut store = WorkflowStore::new();
        store.on_list_success(vec![Idea {
            id: RecordId::from("1"),
            title: "Recettes de saison".into(),
            description: "Légumes du mois".into(),
            status: IdeaStatus::Pending,
            created_at: Utc.with_ymd_and_hms(2025, 7, 4, 8, 0, 0).unwrap(),
        }]);
        let options = ProjectionOptions {
            locale,
            utc_offset_minutes: 0,
        };
        PanelReport {
            notice: Some("idea 1 pending".into()),
            panel: panel_view(&store, &options),
        }
    }

    #[test]
    fn json_report_is_valid_json() {
        let out = render_report(&report(Locale::Fr), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["panel"]["count"], 1);
        assert_eq!(parsed["panel"]["items"][0]["badge_label"], "En attente");
    }

    #[test]
    fn raw_report_is_single_line() {
        let out = render_report(&report(Locale::En), OutputFormat::Raw).unwrap();
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_report_shows_panel_and_actions() {
        let text = render_panel_text(
            &report(Locale::Fr),
            TableOptions {
                max_width: None,
                color: false,
                tone_column: Some(1),
            },
        );
        assert!(text.starts_with("Gestionnaire d'Idées"));
        assert!(text.contains("Liste des idées (1)"));
        assert!(text.contains("Approuver, Rejeter"));
        assert!(text.contains("04/07/2025"));
        assert!(text.ends_with("> idea 1 pending"));
    }

    #[test]
    fn table_report_shows_localized_error_then_detail() {
        let mut store = WorkflowStore::<Idea>::new();
        store.on_failure(&ReviewError::network("reject idea", "HTTP 500"));
        let report = PanelReport {
            notice: None,
            panel: panel_view(&store, &ProjectionOptions::default()),
        };
        let text = render_panel_text(
            &report,
            TableOptions {
                max_width: None,
                color: false,
                tone_column: None,
            },
        );
        assert!(text.ends_with(
            "! Erreur lors du rejet\n  Network error during reject idea: HTTP 500"
        ));
    }

    #[test]
    fn status_tones() {
        assert_eq!(tone_for("scheduled"), Tone::Blue);
        assert_eq!(tone_for("unknown"), Tone::Plain);
    }
}

//! Panel-level projection: headings, state messages and the projected items.

use serde::Serialize;
use vet_core::enums::{Locale, RecordKind};
use vet_core::errors::ReviewError;
use vet_core::projection::{ProjectionOptions, ViewModel, project};
use vet_core::record::Reviewable;

use crate::store::WorkflowStore;

/// Everything one panel renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelView {
    pub kind: RecordKind,
    pub locale: Locale,
    pub heading: String,
    pub subheading: String,
    /// List heading with the record count, e.g. `Liste des idées (3)`.
    pub list_heading: String,
    pub count: usize,
    pub busy: bool,
    /// Localized summary of the last failure, e.g. `Erreur lors du rejet`.
    pub error: Option<String>,
    /// Full message of the last failure.
    pub error_detail: Option<String>,
    /// Shown while the first load is in flight.
    pub loading_message: Option<String>,
    /// Shown when a settled store holds no records.
    pub empty_message: Option<String>,
    pub items: Vec<ViewModel>,
}

struct PanelText {
    heading: &'static str,
    subheading: &'static str,
    list_heading: &'static str,
    loading: &'static str,
    empty: &'static str,
}

const fn panel_text(kind: RecordKind, locale: Locale) -> PanelText {
    match (kind, locale) {
        (RecordKind::Idea, Locale::Fr) => PanelText {
            heading: "Gestionnaire d'Idées",
            subheading: "Ajoutez, générez et validez vos idées de contenu",
            list_heading: "Liste des idées",
            loading: "Chargement des idées...",
            empty: "Aucune idée pour le moment. Ajoutez-en une ou générez-en automatiquement !",
        },
        (RecordKind::Idea, Locale::En) => PanelText {
            heading: "Idea Manager",
            subheading: "Add, generate and review your content ideas",
            list_heading: "Ideas",
            loading: "Loading ideas...",
            empty: "No ideas yet. Add one or generate some automatically!",
        },
        (RecordKind::Video, Locale::Fr) => PanelText {
            heading: "Gestion des Vidéos",
            subheading: "Gérez vos vidéos générées : approuvez, rejetez ou programmez leur publication",
            list_heading: "Liste des vidéos",
            loading: "Chargement des vidéos...",
            empty: "Aucune vidéo trouvée. Les vidéos générées apparaîtront ici pour validation",
        },
        (RecordKind::Video, Locale::En) => PanelText {
            heading: "Video Management",
            subheading: "Manage your generated videos: approve, reject or schedule publication",
            list_heading: "Videos",
            loading: "Loading videos...",
            empty: "No videos found. Generated videos will appear here for review",
        },
    }
}

fn error_summary(err: &ReviewError, kind: RecordKind, locale: Locale) -> String {
    match err {
        ReviewError::Validation(_) => match locale {
            Locale::Fr => "Saisie invalide".to_string(),
            Locale::En => "Invalid input".to_string(),
        },
        ReviewError::NotFound { kind, id } => match (kind, locale) {
            (RecordKind::Idea, Locale::Fr) => format!("Idée {id} introuvable"),
            (RecordKind::Video, Locale::Fr) => format!("Vidéo {id} introuvable"),
            (RecordKind::Idea, Locale::En) => format!("Idea {id} not found"),
            (RecordKind::Video, Locale::En) => format!("Video {id} not found"),
        },
        ReviewError::InvalidTransition { action, .. } => match locale {
            Locale::Fr => format!("Action « {} » impossible pour ce statut", action.label(locale)),
            Locale::En => format!("Action \"{}\" is not allowed for this status", action.label(locale)),
        },
        ReviewError::Network { operation, .. } => network_summary(operation, kind, locale).to_string(),
    }
}

/// Gateway operations are named `{verb} {kind}`; the verb picks the message.
fn network_summary(operation: &str, kind: RecordKind, locale: Locale) -> &'static str {
    let verb = operation.split_whitespace().next().unwrap_or_default();
    match (verb, kind, locale) {
        ("list", RecordKind::Idea, Locale::Fr) => "Erreur lors de la récupération des idées",
        ("list", RecordKind::Video, Locale::Fr) => "Erreur lors du chargement des vidéos",
        ("create", _, Locale::Fr) => "Erreur lors de l'ajout de l'idée",
        ("generate", _, Locale::Fr) => "Erreur lors de la génération des idées",
        ("approve", _, Locale::Fr) => "Erreur lors de l'approbation",
        ("reject", _, Locale::Fr) => "Erreur lors du rejet",
        ("schedule", _, Locale::Fr) => "Erreur lors de la programmation",
        (_, _, Locale::Fr) => "Erreur réseau",
        ("list", RecordKind::Idea, Locale::En) => "Could not load ideas",
        ("list", RecordKind::Video, Locale::En) => "Could not load videos",
        ("create", _, Locale::En) => "Could not add the idea",
        ("generate", _, Locale::En) => "Could not generate ideas",
        ("approve", _, Locale::En) => "Could not approve",
        ("reject", _, Locale::En) => "Could not reject",
        ("schedule", _, Locale::En) => "Could not schedule publication",
        (_, _, Locale::En) => "Network error",
    }
}

/// Project a whole store. Pure: equal stores give equal views.
#[must_use]
pub fn panel_view<R: Reviewable>(store: &WorkflowStore<R>, options: &ProjectionOptions) -> PanelView {
    let text = panel_text(R::KIND, options.locale);
    let count = store.records().len();
    let empty = count == 0;

    PanelView {
        kind: R::KIND,
        locale: options.locale,
        heading: text.heading.to_string(),
        subheading: text.subheading.to_string(),
        list_heading: format!("{} ({count})", text.list_heading),
        count,
        busy: store.busy(),
        error: store
            .failure()
            .map(|err| error_summary(err, R::KIND, options.locale)),
        error_detail: store.error(),
        loading_message: (empty && store.busy()).then(|| text.loading.to_string()),
        empty_message: (empty && !store.busy()).then(|| text.empty.to_string()),
        items: store
            .records()
            .iter()
            .map(|record| project(record, options))
            .collect(),
    }
}

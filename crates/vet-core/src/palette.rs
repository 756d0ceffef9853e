//! Status badge descriptors.
//!
//! One immutable descriptor per status value. Both panels share the table;
//! idea statuses simply never reach the scheduled/published rows.

use crate::enums::Locale;

/// Presentation descriptor for a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    pub label_fr: &'static str,
    pub label_en: &'static str,
    /// Utility-class string for class-based renderers.
    pub class: &'static str,
    /// Foreground color for inline-style renderers.
    pub color: &'static str,
    pub background: &'static str,
    /// Icon name; drawing it is up to the renderer.
    pub icon: &'static str,
}

impl StatusBadge {
    #[must_use]
    pub const fn label(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Fr => self.label_fr,
            Locale::En => self.label_en,
        }
    }
}

pub const PENDING: StatusBadge = StatusBadge {
    label_fr: "En attente",
    label_en: "Pending",
    class: "bg-yellow-100 text-yellow-800 border-yellow-300",
    color: "#92400e",
    background: "#fef3c7",
    icon: "clock",
};

pub const APPROVED: StatusBadge = StatusBadge {
    label_fr: "Approuvée",
    label_en: "Approved",
    class: "bg-green-100 text-green-800 border-green-300",
    color: "#065f46",
    background: "#d1fae5",
    icon: "check-circle",
};

pub const REJECTED: StatusBadge = StatusBadge {
    label_fr: "Rejetée",
    label_en: "Rejected",
    class: "bg-red-100 text-red-800 border-red-300",
    color: "#991b1b",
    background: "#fee2e2",
    icon: "x-circle",
};

pub const SCHEDULED: StatusBadge = StatusBadge {
    label_fr: "Programmée",
    label_en: "Scheduled",
    class: "bg-blue-100 text-blue-800 border-blue-300",
    color: "#1e40af",
    background: "#dbeafe",
    icon: "calendar",
};

pub const PUBLISHED: StatusBadge = StatusBadge {
    label_fr: "Publiée",
    label_en: "Published",
    class: "bg-purple-100 text-purple-800 border-purple-300",
    color: "#6b21a8",
    background: "#f3e8ff",
    icon: "play",
};

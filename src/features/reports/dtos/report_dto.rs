use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::features::categories::models::{Category, CategoryStyle};
use crate::features::reports::models::{Report, ReportStatus};

/// Badge rendering for a status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    pub label: &'static str,
    pub variant: &'static str,
    pub icon: &'static str,
}

impl ReportStatus {
    pub fn badge(&self) -> StatusBadge {
        match self {
            ReportStatus::Pending => StatusBadge {
                label: "En attente",
                variant: "warning",
                icon: "Clock",
            },
            ReportStatus::Transmitted => StatusBadge {
                label: "Transmis",
                variant: "info",
                icon: "Send",
            },
            ReportStatus::Resolved => StatusBadge {
                label: "Résolu",
                variant: "success",
                icon: "CheckCircle",
            },
        }
    }
}

/// Everything a list card or map marker popup needs for one report
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportCardDto {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub category_style: CategoryStyle,
    pub status: ReportStatus,
    pub status_badge: StatusBadge,
    pub location: Option<String>,
    pub coordinates: Option<(f64, f64)>,
    pub image_url: Option<String>,
    pub anonymous: bool,
    pub created_at: DateTime<Utc>,
}

impl ReportCardDto {
    pub fn new(report: &Report, categories: &[Category]) -> Self {
        Self {
            id: report.id,
            title: report.title.clone(),
            description: report.description.clone(),
            category: report.category.clone(),
            category_style: CategoryStyle::lookup(categories, &report.category),
            status: report.status,
            status_badge: report.status.badge(),
            location: report.location_label(),
            coordinates: report.coordinates(),
            image_url: report.image_url.clone(),
            anonymous: report.anonymous,
            created_at: report.created_at,
        }
    }
}

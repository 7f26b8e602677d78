use serde::{Deserialize, Serialize};

use crate::features::categories::models::Category;
use crate::features::reports::dtos::ReportCardDto;
use crate::features::reports::models::{Report, ReportStatus};

// ============================================================================
// Query
// ============================================================================

/// Which report fields the free-text search looks at
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchScope {
    /// Title, description and the report number (admin table)
    #[default]
    TitleDescriptionId,
    /// Title and description only (a citizen's own reports)
    TitleDescription,
}

/// Search text, category and status predicates, combined with AND.
/// Empty values impose no restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: Option<ReportStatus>,
    #[serde(default)]
    pub scope: SearchScope,
}

impl ReportQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    pub fn category(mut self, name: impl Into<String>) -> Self {
        self.category = Some(name.into());
        self
    }

    pub fn status(mut self, status: ReportStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn scope(mut self, scope: SearchScope) -> Self {
        self.scope = scope;
        self
    }

    /// Category filter, ignoring an empty selection
    pub fn category_filter(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    /// Whether any predicate restricts the result
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.category_filter().is_some() || self.status.is_some()
    }

    /// Resets every predicate, keeping the search scope
    pub fn clear(&mut self) {
        self.search.clear();
        self.category = None;
        self.status = None;
    }
}

// ============================================================================
// Aggregates
// ============================================================================

/// Status counters shown above every report list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportStatsDto {
    pub total: usize,
    pub pending: usize,
    pub transmitted: usize,
    pub resolved: usize,
    pub today_reports: usize,
}

/// Category with report count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryReportSummary {
    pub name: String,
    pub icon: String,
    pub color: String,
    pub report_count: usize,
}

// ============================================================================
// Views
// ============================================================================

/// Landing page: latest reports and global counters
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeOverviewDto {
    pub recent: Vec<ReportCardDto>,
    pub stats: ReportStatsDto,
    pub categories: Vec<Category>,
}

/// Map page: only reports that can be placed on the map
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapViewDto {
    pub reports: Vec<ReportCardDto>,
    /// Counters over every locatable report, before the filters
    pub stats: ReportStatsDto,
    pub center: (f64, f64),
    pub categories: Vec<Category>,
}

/// Admin table: filtered reports plus global counters
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminOverviewDto {
    pub stats: ReportStatsDto,
    pub reports: Vec<Report>,
    pub categories: Vec<Category>,
    pub category_summaries: Vec<CategoryReportSummary>,
    pub filters_active: bool,
}

/// A citizen's own reports
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserReportsDto {
    pub user_id: u32,
    pub reports: Vec<Report>,
    pub stats: ReportStatsDto,
    pub filters_active: bool,
}

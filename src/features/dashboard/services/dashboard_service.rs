use std::sync::Arc;

use chrono::Utc;

use crate::core::config::AppConfig;
use crate::core::error::{AppError, Result};
use crate::features::categories::services::CategoryService;
use crate::features::dashboard::dtos::*;
use crate::features::dashboard::engine;
use crate::features::reports::dtos::ReportCardDto;
use crate::features::reports::services::ReportService;
use crate::modules::notifications::Notifier;

/// Read-only views assembled from the report and category services.
/// A failed load is reported to the notifier before it is returned.
pub struct DashboardService {
    reports: Arc<ReportService>,
    categories: Arc<CategoryService>,
    notifier: Arc<dyn Notifier>,
    config: AppConfig,
}

impl DashboardService {
    pub fn new(
        reports: Arc<ReportService>,
        categories: Arc<CategoryService>,
        notifier: Arc<dyn Notifier>,
        config: AppConfig,
    ) -> Self {
        Self {
            reports,
            categories,
            notifier,
            config,
        }
    }

    fn load_failed(&self, view: &str, e: AppError) -> AppError {
        tracing::error!("Failed to load {} view: {:?}", view, e);
        self.notifier.error(&e.user_message());
        e
    }

    // ========================================================================
    // Home
    // ========================================================================

    /// Latest reports and global counters
    pub async fn home(&self) -> Result<HomeOverviewDto> {
        let (reports, stats, categories) = tokio::try_join!(
            self.reports.list(),
            self.reports.statistics(),
            self.categories.list()
        )
        .map_err(|e| self.load_failed("home", e))?;

        let recent = engine::recent(&reports, self.config.recent_reports_limit)
            .iter()
            .map(|report| ReportCardDto::new(report, &categories))
            .collect();

        Ok(HomeOverviewDto {
            recent,
            stats,
            categories,
        })
    }

    // ========================================================================
    // Map
    // ========================================================================

    /// Locatable reports matching `query`, centered on their mean position
    pub async fn map_view(&self, query: &ReportQuery) -> Result<MapViewDto> {
        let (reports, categories) =
            tokio::try_join!(self.reports.list(), self.categories.list())
                .map_err(|e| self.load_failed("map", e))?;

        let locatable = engine::with_coordinates(&reports);
        let stats = engine::summarize(&locatable, Utc::now().date_naive());
        let visible = engine::filter_reports(&locatable, query);
        let center = engine::map_center(&visible);

        tracing::debug!(
            "Map view: {} of {} locatable reports shown",
            visible.len(),
            locatable.len()
        );

        Ok(MapViewDto {
            reports: visible
                .iter()
                .map(|report| ReportCardDto::new(report, &categories))
                .collect(),
            stats,
            center,
            categories,
        })
    }

    // ========================================================================
    // Admin
    // ========================================================================

    /// Filtered report table with global counters and per-category totals
    pub async fn admin_overview(&self, query: &ReportQuery) -> Result<AdminOverviewDto> {
        let (reports, stats, categories) = tokio::try_join!(
            self.reports.list(),
            self.reports.statistics(),
            self.categories.list()
        )
        .map_err(|e| self.load_failed("admin", e))?;

        let category_summaries = engine::count_by_category(&reports, &categories);
        let filtered = engine::filter_reports(&reports, query);

        Ok(AdminOverviewDto {
            stats,
            reports: filtered,
            categories,
            category_summaries,
            filters_active: query.is_active(),
        })
    }

    // ========================================================================
    // Profile
    // ========================================================================

    /// One citizen's reports. The search never matches report numbers here.
    pub async fn user_reports(&self, user_id: u32, query: &ReportQuery) -> Result<UserReportsDto> {
        let own = self
            .reports
            .list_by_user(user_id)
            .await
            .map_err(|e| self.load_failed("profile", e))?;
        let stats = engine::summarize(&own, Utc::now().date_naive());

        let query = query.clone().scope(SearchScope::TitleDescription);
        let reports = engine::filter_reports(&own, &query);

        Ok(UserReportsDto {
            user_id,
            reports,
            stats,
            filters_active: query.is_active(),
        })
    }

    /// Reports of the configured current user
    pub async fn my_reports(&self, query: &ReportQuery) -> Result<UserReportsDto> {
        self.user_reports(self.config.current_user_id, query).await
    }
}

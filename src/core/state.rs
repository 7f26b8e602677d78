use std::sync::Arc;

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::latency::Latency;
use crate::features::admin::AdminService;
use crate::features::categories::models::Category;
use crate::features::categories::{CategoryRepository, CategoryService, InMemoryCategoryRepository};
use crate::features::dashboard::dtos::ReportStatsDto;
use crate::features::dashboard::DashboardService;
use crate::features::reports::models::Report;
use crate::features::reports::{InMemoryReportRepository, ReportRepository, ReportService};
use crate::features::submission::{ShareLinks, SubmissionService};
use crate::modules::notifications::Notifier;

/// Initial data every page needs
#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    pub reports: Vec<Report>,
    pub categories: Vec<Category>,
    pub stats: ReportStatsDto,
}

/// Wired services shared by every view
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub notifier: Arc<dyn Notifier>,
    pub reports: Arc<ReportService>,
    pub categories: Arc<CategoryService>,
    pub dashboard: Arc<DashboardService>,
    pub admin: Arc<AdminService>,
    pub submission: Arc<SubmissionService>,
}

impl AppState {
    /// Seed the in-memory stores from the bundled fixtures and wire the
    /// services on top of them
    pub fn bootstrap(config: &Config, notifier: Arc<dyn Notifier>) -> Result<Self> {
        let latency = Latency::new(config.store.clone());
        let report_repo = Arc::new(InMemoryReportRepository::seeded(latency.clone())?);
        let category_repo = Arc::new(InMemoryCategoryRepository::seeded(latency)?);

        Ok(Self::with_repositories(
            config,
            report_repo,
            category_repo,
            notifier,
        ))
    }

    pub fn with_repositories(
        config: &Config,
        report_repo: Arc<dyn ReportRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let reports = Arc::new(ReportService::new(report_repo));
        let categories = Arc::new(CategoryService::new(category_repo));

        let dashboard = Arc::new(DashboardService::new(
            Arc::clone(&reports),
            Arc::clone(&categories),
            Arc::clone(&notifier),
            config.app.clone(),
        ));
        let admin = Arc::new(AdminService::new(
            Arc::clone(&reports),
            Arc::clone(&notifier),
        ));
        let submission = Arc::new(SubmissionService::new(
            Arc::clone(&reports),
            Arc::clone(&categories),
            Arc::clone(&notifier),
            ShareLinks::new(config.app.public_base_url.clone()),
            config.app.current_user_id,
        ));

        Self {
            config: config.clone(),
            notifier,
            reports,
            categories,
            dashboard,
            admin,
            submission,
        }
    }

    /// Reports, categories and counters loaded concurrently
    pub async fn load_dashboard(&self) -> Result<DashboardSnapshot> {
        let (reports, categories, stats) = tokio::try_join!(
            self.reports.list(),
            self.categories.list(),
            self.reports.statistics()
        )?;

        Ok(DashboardSnapshot {
            reports,
            categories,
            stats,
        })
    }
}

use std::sync::Arc;

use crate::core::error::Result;
use crate::features::dashboard::dtos::ReportStatsDto;
use crate::features::reports::models::{CreateReport, Report, ReportStatus, UpdateReport};
use crate::features::reports::repository::ReportRepository;

/// Service for report operations
pub struct ReportService {
    repo: Arc<dyn ReportRepository>,
}

impl ReportService {
    pub fn new(repo: Arc<dyn ReportRepository>) -> Self {
        Self { repo }
    }

    /// All reports, newest first
    pub async fn list(&self) -> Result<Vec<Report>> {
        self.repo.get_all().await.map_err(|e| {
            tracing::error!("Failed to list reports: {:?}", e);
            e
        })
    }

    /// Get report by ID
    pub async fn get(&self, id: u32) -> Result<Report> {
        self.repo.get_by_id(id).await
    }

    pub async fn create(&self, data: CreateReport) -> Result<Report> {
        self.repo.create(data).await.map_err(|e| {
            tracing::error!("Failed to create report: {:?}", e);
            e
        })
    }

    pub async fn update(&self, id: u32, data: UpdateReport) -> Result<Report> {
        self.repo.update(id, data).await.map_err(|e| {
            tracing::error!("Failed to update report {}: {:?}", id, e);
            e
        })
    }

    pub async fn change_status(&self, id: u32, status: ReportStatus) -> Result<Report> {
        self.update(id, UpdateReport::status(status)).await
    }

    /// Apply `status` to every id, or fail without touching any report
    pub async fn change_status_many(&self, ids: &[u32], status: ReportStatus) -> Result<Vec<Report>> {
        self.repo
            .update_status_many(ids, status)
            .await
            .map_err(|e| {
                tracing::error!("Failed bulk status change to '{}': {:?}", status, e);
                e
            })
    }

    pub async fn delete(&self, id: u32) -> Result<bool> {
        self.repo.delete(id).await.map_err(|e| {
            tracing::error!("Failed to delete report {}: {:?}", id, e);
            e
        })
    }

    pub async fn list_by_status(&self, status: ReportStatus) -> Result<Vec<Report>> {
        self.repo.get_by_status(status).await
    }

    pub async fn list_by_category(&self, category: &str) -> Result<Vec<Report>> {
        self.repo.get_by_category(category).await
    }

    pub async fn list_by_user(&self, user_id: u32) -> Result<Vec<Report>> {
        self.repo.get_by_user(user_id).await
    }

    pub async fn statistics(&self) -> Result<ReportStatsDto> {
        self.repo.get_statistics().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::core::latency::Latency;
    use crate::features::reports::repository::InMemoryReportRepository;
    use crate::shared::test_helpers::{new_report, FlakyReportRepository, ReportBuilder};

    fn service(reports: Vec<Report>) -> ReportService {
        ReportService::new(Arc::new(InMemoryReportRepository::new(
            reports,
            Latency::instant(),
        )))
    }

    #[tokio::test]
    async fn test_change_status() {
        let service = service(vec![ReportBuilder::new(1).build()]);
        let report = service
            .change_status(1, ReportStatus::Transmitted)
            .await
            .unwrap();
        assert_eq!(report.status, ReportStatus::Transmitted);
        assert_eq!(
            service.list_by_status(ReportStatus::Transmitted).await.unwrap().len(),
            1
        );
    }

    #[tokio::test]
    async fn test_create_then_list_shows_new_report_first() {
        let service = service(vec![ReportBuilder::new(4).build()]);
        let created = service.create(new_report("Fuite d'eau")).await.unwrap();
        let listed = service.list().await.unwrap();
        assert_eq!(listed[0].id, created.id);
        assert_eq!(created.id, 5);
    }

    #[tokio::test]
    async fn test_transient_failure_propagates() {
        let inner = Arc::new(InMemoryReportRepository::new(
            vec![ReportBuilder::new(1).build()],
            Latency::instant(),
        ));
        let flaky = Arc::new(FlakyReportRepository::new(inner.clone()));
        flaky.fail_next();
        let service = ReportService::new(flaky);

        let err = service.delete(1).await.unwrap_err();
        assert!(err.is_retryable());
        assert_eq!(inner.get_all().await.unwrap().len(), 1);

        assert!(service.delete(1).await.unwrap());
        assert!(matches!(
            service.get(1).await,
            Err(AppError::NotFound(_))
        ));
    }
}

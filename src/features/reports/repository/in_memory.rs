use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::core::error::{AppError, Result};
use crate::core::fixtures;
use crate::core::latency::Latency;
use crate::features::dashboard::dtos::ReportStatsDto;
use crate::features::dashboard::engine;
use crate::features::reports::models::{CreateReport, Report, ReportStatus, UpdateReport};
use crate::shared::constants::{
    REPORT_CREATE_LATENCY, REPORT_DELETE_LATENCY, REPORT_READ_LATENCY, REPORT_STATISTICS_LATENCY,
    REPORT_UPDATE_LATENCY,
};

use super::ReportRepository;

/// Process-local report store. State lives only as long as the instance.
pub struct InMemoryReportRepository {
    reports: RwLock<Vec<Report>>,
    latency: Latency,
}

impl InMemoryReportRepository {
    pub fn new(reports: Vec<Report>, latency: Latency) -> Self {
        Self {
            reports: RwLock::new(reports),
            latency,
        }
    }

    /// Store pre-filled with the bundled fixtures
    pub fn seeded(latency: Latency) -> Result<Self> {
        Ok(Self::new(fixtures::seed_reports()?, latency))
    }

    async fn select<F>(&self, predicate: F) -> Vec<Report>
    where
        F: Fn(&Report) -> bool,
    {
        self.reports
            .read()
            .await
            .iter()
            .filter(|r| predicate(r))
            .cloned()
            .collect()
    }
}

fn not_found(id: u32) -> AppError {
    AppError::NotFound(format!("Report {} not found", id))
}

#[async_trait]
impl ReportRepository for InMemoryReportRepository {
    async fn get_all(&self) -> Result<Vec<Report>> {
        self.latency.wait(REPORT_READ_LATENCY).await;

        let mut reports = self.reports.read().await.clone();
        engine::sort_newest_first(&mut reports);
        Ok(reports)
    }

    async fn get_by_id(&self, id: u32) -> Result<Report> {
        self.latency.wait(REPORT_READ_LATENCY).await;

        self.reports
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn create(&self, data: CreateReport) -> Result<Report> {
        self.latency.wait(REPORT_CREATE_LATENCY).await;

        let mut reports = self.reports.write().await;
        let highest_id = reports.iter().map(|r| r.id).max().unwrap_or(0);
        let id = highest_id
            .checked_add(1)
            .ok_or_else(|| AppError::Internal("Report id space exhausted".to_string()))?;

        let report = data.into_report(id, Utc::now());
        reports.insert(0, report.clone());

        tracing::info!("Created report: {} in category '{}'", report.id, report.category);
        Ok(report)
    }

    async fn update(&self, id: u32, data: UpdateReport) -> Result<Report> {
        self.latency.wait(REPORT_UPDATE_LATENCY).await;

        let mut reports = self.reports.write().await;
        let report = reports
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| not_found(id))?;

        let previous = report.updated_at;
        data.apply_to(report);
        // Wall clock may step backwards; updated_at must not
        report.updated_at = Utc::now().max(previous);

        tracing::info!("Updated report: {}", id);
        Ok(report.clone())
    }

    async fn delete(&self, id: u32) -> Result<bool> {
        self.latency.wait(REPORT_DELETE_LATENCY).await;

        let mut reports = self.reports.write().await;
        let index = reports
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| not_found(id))?;
        reports.remove(index);

        tracing::info!("Deleted report: {}", id);
        Ok(true)
    }

    async fn get_by_status(&self, status: ReportStatus) -> Result<Vec<Report>> {
        self.latency.wait(REPORT_READ_LATENCY).await;
        Ok(self.select(|r| r.status == status).await)
    }

    async fn get_by_category(&self, category: &str) -> Result<Vec<Report>> {
        self.latency.wait(REPORT_READ_LATENCY).await;
        Ok(self.select(|r| r.category == category).await)
    }

    async fn get_by_user(&self, user_id: u32) -> Result<Vec<Report>> {
        self.latency.wait(REPORT_READ_LATENCY).await;
        Ok(self.select(|r| r.user_id == Some(user_id)).await)
    }

    async fn get_statistics(&self) -> Result<ReportStatsDto> {
        self.latency.wait(REPORT_STATISTICS_LATENCY).await;

        let reports = self.reports.read().await;
        Ok(engine::summarize(&reports, Utc::now().date_naive()))
    }

    async fn update_status_many(&self, ids: &[u32], status: ReportStatus) -> Result<Vec<Report>> {
        self.latency.wait(REPORT_UPDATE_LATENCY).await;

        let mut reports = self.reports.write().await;
        if let Some(missing) = ids.iter().find(|id| !reports.iter().any(|r| r.id == **id)) {
            return Err(not_found(*missing));
        }

        let now = Utc::now();
        let mut updated = Vec::with_capacity(ids.len());
        for report in reports.iter_mut().filter(|r| ids.contains(&r.id)) {
            report.status = status;
            report.updated_at = now.max(report.updated_at);
            updated.push(report.clone());
        }

        tracing::info!("Set status '{}' on {} report(s)", status, updated.len());
        Ok(updated)
    }
}

mod in_memory;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::dashboard::dtos::ReportStatsDto;
use crate::features::reports::models::{CreateReport, Report, ReportStatus, UpdateReport};

pub use in_memory::InMemoryReportRepository;

/// Data access for reports. Every call is fallible even when the backing
/// store never fails, and every returned record is an owned copy.
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// All reports, newest `created_at` first
    async fn get_all(&self) -> Result<Vec<Report>>;

    async fn get_by_id(&self, id: u32) -> Result<Report>;

    async fn create(&self, data: CreateReport) -> Result<Report>;

    async fn update(&self, id: u32, data: UpdateReport) -> Result<Report>;

    async fn delete(&self, id: u32) -> Result<bool>;

    async fn get_by_status(&self, status: ReportStatus) -> Result<Vec<Report>>;

    async fn get_by_category(&self, category: &str) -> Result<Vec<Report>>;

    async fn get_by_user(&self, user_id: u32) -> Result<Vec<Report>>;

    async fn get_statistics(&self) -> Result<ReportStatsDto>;

    /// Sets `status` on every listed report, or on none of them when any id
    /// is unknown
    async fn update_status_many(&self, ids: &[u32], status: ReportStatus) -> Result<Vec<Report>>;
}

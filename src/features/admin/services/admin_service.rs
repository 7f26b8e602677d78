use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::admin::dtos::BulkStatusResultDto;
use crate::features::admin::models::ReportSelection;
use crate::features::reports::models::{Report, ReportStatus};
use crate::features::reports::services::ReportService;
use crate::modules::notifications::Notifier;

/// Moderation actions on reports
pub struct AdminService {
    reports: Arc<ReportService>,
    notifier: Arc<dyn Notifier>,
}

impl AdminService {
    pub fn new(reports: Arc<ReportService>, notifier: Arc<dyn Notifier>) -> Self {
        Self { reports, notifier }
    }

    pub async fn change_status(&self, id: u32, status: ReportStatus) -> Result<Report> {
        match self.reports.change_status(id, status).await {
            Ok(report) => {
                tracing::info!("Report {} moved to '{}'", id, status);
                self.notifier
                    .success(&format!("Report #{} marked as {}", id, status.badge().label));
                Ok(report)
            }
            Err(e) => {
                self.notifier.error(&e.user_message());
                Err(e)
            }
        }
    }

    /// Apply `status` to every selected report.
    ///
    /// Nothing is sent when the status or the selection is missing. The
    /// selection is cleared only when the change succeeds.
    pub async fn apply_bulk_status(
        &self,
        selection: &mut ReportSelection,
        status: Option<ReportStatus>,
    ) -> Result<BulkStatusResultDto> {
        let Some(status) = status else {
            self.notifier.warning("Please select a status");
            return Err(AppError::BadRequest("No status selected".to_string()));
        };
        if selection.is_empty() {
            self.notifier.warning("Please select at least one report");
            return Err(AppError::BadRequest("No report selected".to_string()));
        }

        let ids = selection.ids();
        let updated = self
            .reports
            .change_status_many(&ids, status)
            .await
            .map_err(|e| {
                self.notifier.error(&e.user_message());
                e
            })?;

        let result = BulkStatusResultDto::new(status, updated);
        tracing::info!("Bulk status change to '{}': {}", status, result.message);
        self.notifier.success(&result.message);
        selection.clear();
        Ok(result)
    }

    /// Delete a report and drop it from the selection
    pub async fn delete(&self, id: u32, selection: &mut ReportSelection) -> Result<()> {
        self.reports.delete(id).await.map_err(|e| {
            self.notifier.error(&e.user_message());
            e
        })?;

        if selection.contains(id) {
            selection.toggle(id);
        }
        self.notifier.success("Report deleted");
        Ok(())
    }
}

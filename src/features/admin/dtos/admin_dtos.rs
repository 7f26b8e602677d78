use serde::Serialize;

use crate::features::reports::models::{Report, ReportStatus};

/// Outcome of a bulk status change
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkStatusResultDto {
    pub status: ReportStatus,
    pub updated: Vec<Report>,
    pub message: String,
}

impl BulkStatusResultDto {
    pub fn new(status: ReportStatus, updated: Vec<Report>) -> Self {
        let message = format!("{} report(s) updated", updated.len());
        Self {
            status,
            updated,
            message,
        }
    }
}

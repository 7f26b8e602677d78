mod report_wizard;
mod share_links;
mod submission_service;

pub use report_wizard::ReportWizard;
pub use share_links::{SharePlatform, ShareLinks};
pub use submission_service::{SubmissionOutcome, SubmissionService};

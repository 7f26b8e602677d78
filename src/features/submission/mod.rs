pub mod dtos;
pub mod models;
pub mod services;

pub use models::{ReportForm, WizardStep};
pub use services::{ReportWizard, SharePlatform, ShareLinks, SubmissionOutcome, SubmissionService};

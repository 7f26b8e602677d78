mod step_dto;

pub use step_dto::{DetailsStepDto, LocationStepDto, ReportSummaryDto};

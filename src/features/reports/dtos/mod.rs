mod report_dto;

pub use report_dto::{ReportCardDto, StatusBadge};

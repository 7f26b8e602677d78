pub mod dtos;
pub mod models;
pub mod repository;
pub mod services;

pub use repository::{InMemoryReportRepository, ReportRepository};
pub use services::ReportService;

pub mod dtos;
pub mod models;
pub mod services;

pub use models::ReportSelection;
pub use services::AdminService;

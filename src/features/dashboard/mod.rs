pub mod dtos;
pub mod engine;
pub mod services;

pub use services::DashboardService;

pub mod dtos;
pub mod models;
pub mod repository;
pub mod services;

pub use repository::{CategoryRepository, InMemoryCategoryRepository};
pub use services::CategoryService;

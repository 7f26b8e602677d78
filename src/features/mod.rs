pub mod admin;
pub mod categories;
pub mod dashboard;
pub mod reports;
pub mod submission;

pub mod config;
pub mod error;
pub mod fixtures;
pub mod latency;
pub mod state;

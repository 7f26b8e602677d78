//! Citizen incident reporting core: in-memory report and category stores,
//! the filter/aggregation engine behind the list, map and admin views, and
//! the three-step report submission wizard.

pub mod core;
pub mod features;
pub mod modules;
pub mod shared;

pub use crate::core::config::Config;
pub use crate::core::error::{AppError, Result};
pub use crate::core::state::AppState;
